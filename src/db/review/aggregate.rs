use sqlx::PgConnection;
use uuid::Uuid;

use crate::{errors::AppError, models::review::round_average};

/// Full recompute of a product's denormalized rating fields from the live
/// review set. Must run inside the same transaction as the review mutation
/// that triggered it.
pub async fn recalculate_aggregates(
    product_id: Uuid,
    conn: &mut PgConnection,
) -> Result<(), AppError> {
    let (avg_rating, review_count): (Option<f64>, i64) =
        sqlx::query_as("SELECT AVG(rating)::FLOAT8, COUNT(*) FROM reviews WHERE product_id = $1")
            .bind(product_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to compute rating aggregate: {}", e))
            })?;

    let average_rating = avg_rating.map(round_average).unwrap_or(0.0);

    sqlx::query("UPDATE products SET average_rating = $1, review_count = $2 WHERE id = $3")
        .bind(average_rating)
        .bind(review_count)
        .bind(product_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to update product aggregate: {}", e))
        })?;

    Ok(())
}
