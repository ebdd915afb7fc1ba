use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::review::{
        delete::delete_review, get::get_reviews_by_product, helpful::toggle_helpful,
        post::create_review, put::update_review,
    },
    models::review::{HelpfulVoteResponse, Review, ReviewPage, ReviewSortField, SortDirection},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewPayload {
    pub product_id: Uuid,
    pub rating: i16,
    pub comment: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewPayload {
    pub rating: i16,
    pub comment: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub min_rating: Option<i16>,
}

pub async fn create_review_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<(StatusCode, Json<Review>), (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match create_review(
        payload.product_id,
        user_id,
        payload.rating,
        payload.comment,
        state.postgres.clone(),
    )
    .await
    {
        Ok(review) => {
            tracing::info!("Review {} created for product {}", review.id, review.product_id);
            Ok((StatusCode::CREATED, Json(review)))
        }
        Err(err) => {
            tracing::error!("Error creating review: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn update_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    claims: AuthClaims,
    Json(payload): Json<UpdateReviewPayload>,
) -> Result<Json<Review>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match update_review(
        review_id,
        user_id,
        payload.rating,
        payload.comment,
        state.postgres.clone(),
    )
    .await
    {
        Ok(review) => {
            tracing::info!("Review {} updated", review.id);
            Ok(Json(review))
        }
        Err(err) => {
            tracing::error!("Error updating review: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    claims: AuthClaims,
) -> Result<StatusCode, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match delete_review(review_id, user_id, state.postgres.clone()).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => {
            tracing::error!("Error deleting review: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_product_reviews_handler(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Query(query): Query<ReviewListQuery>,
) -> Result<Json<ReviewPage>, (StatusCode, String)> {
    let sort_field = match query.sort_by.as_deref() {
        None => ReviewSortField::CreatedAt,
        Some(raw) => ReviewSortField::parse(raw)
            .ok_or_else(|| (StatusCode::BAD_REQUEST, format!("Unknown sort field: {}", raw)))?,
    };

    // Anything that isn't ASC sorts descending
    let sort_dir = query
        .sort_dir
        .as_deref()
        .and_then(SortDirection::parse)
        .unwrap_or(SortDirection::Desc);

    match get_reviews_by_product(
        product_id,
        query.page.unwrap_or(0),
        query.size.unwrap_or(10),
        sort_field,
        sort_dir,
        query.min_rating,
        state.postgres.clone(),
    )
    .await
    {
        Ok(page) => Ok(Json(page)),
        Err(err) => {
            tracing::error!("Error fetching reviews: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn toggle_helpful_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    claims: AuthClaims,
) -> Result<Json<HelpfulVoteResponse>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match toggle_helpful(review_id, user_id, state.postgres.clone()).await {
        Ok(response) => {
            tracing::info!(
                "Review {} helpful toggled to {} by {}",
                review_id,
                response.helpful_by_me,
                user_id
            );
            Ok(Json(response))
        }
        Err(err) => {
            tracing::error!("Error toggling helpful vote: {}", err);
            Err(err.to_response())
        }
    }
}
