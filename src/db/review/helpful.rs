use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::review::HelpfulVoteResponse};

/// Alternates between voted and unvoted for the acting user. The row lock on
/// the review serializes concurrent toggles per (review, voter); the unique
/// constraint on (review_id, user_id) backstops the insert.
pub async fn toggle_helpful(
    review_id: Uuid,
    user_id: Uuid,
    postgres: PgPool,
) -> Result<HelpfulVoteResponse, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let helpful_count: Option<i64> =
        sqlx::query_scalar("SELECT helpful_count FROM reviews WHERE id = $1 FOR UPDATE")
            .bind(review_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to fetch review: {}", e)))?;

    let Some(helpful_count) = helpful_count else {
        return Err(AppError::NotFound(format!(
            "Review not found with id: {}",
            review_id
        )));
    };

    let removed: Option<Uuid> = sqlx::query_scalar(
        "DELETE FROM review_helpful_votes WHERE review_id = $1 AND user_id = $2 RETURNING id",
    )
    .bind(review_id)
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to remove helpful vote: {}", e)))?;

    let (new_count, helpful_by_me) = if removed.is_some() {
        // Floored at 0 so a racing double-unvote can never go negative
        ((helpful_count - 1).max(0), false)
    } else {
        sqlx::query("INSERT INTO review_helpful_votes (id, review_id, user_id) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(review_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => {
                    AppError::Conflict("You have already marked this review helpful".into())
                }
                _ => AppError::DatabaseError(format!("Failed to record helpful vote: {}", e)),
            })?;
        (helpful_count + 1, true)
    };

    sqlx::query("UPDATE reviews SET helpful_count = $1 WHERE id = $2")
        .bind(new_count)
        .bind(review_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update helpful count: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit helpful vote: {}", e)))?;

    Ok(HelpfulVoteResponse {
        review_id,
        helpful_count: new_count,
        helpful_by_me,
    })
}
