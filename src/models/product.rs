use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// `average_rating` and `review_count` are derived from the live review set
/// and rewritten on every review mutation; they are never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: Option<String>,
    pub average_rating: f64,
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
}
