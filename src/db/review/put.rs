use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::review::aggregate::recalculate_aggregates,
    errors::AppError,
    models::review::Review,
    validation::{
        COMMENT_MAX_LEN, COMMENT_MIN_LEN, validate_comment, validate_ownership, validate_rating,
    },
};

/// Only the comment and rating are mutable; `created_at` and `helpful_count`
/// survive the update untouched.
pub async fn update_review(
    review_id: Uuid,
    user_id: Uuid,
    rating: i16,
    comment: String,
    postgres: PgPool,
) -> Result<Review, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let row = sqlx::query_as::<_, (Uuid, Uuid)>(
        "SELECT product_id, user_id FROM reviews WHERE id = $1 FOR UPDATE",
    )
    .bind(review_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch review: {}", e)))?;

    let Some((product_id, owner_id)) = row else {
        return Err(AppError::NotFound(format!(
            "Review not found with id: {}",
            review_id
        )));
    };

    validate_ownership(owner_id, user_id)?;
    validate_rating(rating)?;
    let comment = validate_comment(&comment, COMMENT_MIN_LEN, COMMENT_MAX_LEN)?;

    let review = sqlx::query_as::<_, Review>(
        "WITH updated AS (
            UPDATE reviews SET rating = $1, comment = $2 WHERE id = $3
            RETURNING id, product_id, user_id, rating, comment, helpful_count, created_at
        )
        SELECT r.id, r.product_id, r.user_id,
               COALESCE(u.display_name, u.email) AS reviewer_name,
               r.rating, r.comment, r.helpful_count, r.created_at
        FROM updated r
        JOIN users u ON u.id = r.user_id",
    )
    .bind(rating)
    .bind(&comment)
    .bind(review_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update review: {}", e)))?;

    recalculate_aggregates(product_id, &mut *tx).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit review update: {}", e)))?;

    Ok(review)
}
