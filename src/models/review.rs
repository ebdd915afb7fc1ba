use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Public shape of a review. `reviewer_name` is resolved from the `users`
/// table at query time, not stored on the review row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub reviewer_name: String,
    pub rating: i16,
    pub comment: String,
    pub helpful_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    pub content: Vec<Review>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpfulVoteResponse {
    pub review_id: Uuid,
    pub helpful_count: i64,
    pub helpful_by_me: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSortField {
    CreatedAt,
    Rating,
    HelpfulCount,
}

impl ReviewSortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "createdAt" => Some(Self::CreatedAt),
            "rating" => Some(Self::Rating),
            "helpfulCount" => Some(Self::HelpfulCount),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "r.created_at",
            Self::Rating => "r.rating",
            Self::HelpfulCount => "r.helpful_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// ORDER BY clause for the review listing. Helpfulness ties break on recency
/// so pagination order stays deterministic across pages.
pub fn order_by_clause(field: ReviewSortField, direction: SortDirection) -> String {
    let primary = format!("{} {}", field.column(), direction.keyword());
    if field == ReviewSortField::HelpfulCount {
        format!("{}, r.created_at DESC", primary)
    } else {
        primary
    }
}

/// One-decimal rounding (half-up) applied to the product average rating.
pub fn round_average(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
