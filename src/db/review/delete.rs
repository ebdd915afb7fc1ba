use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::review::aggregate::recalculate_aggregates, errors::AppError,
    validation::validate_ownership,
};

pub async fn delete_review(
    review_id: Uuid,
    user_id: Uuid,
    postgres: PgPool,
) -> Result<(), AppError> {
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

    // Helpful votes go with the review via ON DELETE CASCADE
    sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(review_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete review: {}", e)))?;

    recalculate_aggregates(product_id, &mut *tx).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit review deletion: {}", e)))?;

    tracing::info!("Deleted review {} from product {}", review_id, product_id);

    Ok(())
}
