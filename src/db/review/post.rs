use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::review::aggregate::recalculate_aggregates,
    errors::AppError,
    models::review::Review,
    validation::{
        COMMENT_MAX_LEN, COMMENT_MIN_LEN, validate_comment, validate_no_duplicate_review,
        validate_product_exists, validate_rating,
    },
};

pub async fn create_review(
    product_id: Uuid,
    user_id: Uuid,
    rating: i16,
    comment: String,
    postgres: PgPool,
) -> Result<Review, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    validate_product_exists(product_id, &mut *tx).await?;
    validate_rating(rating)?;
    let comment = validate_comment(&comment, COMMENT_MIN_LEN, COMMENT_MAX_LEN)?;
    validate_no_duplicate_review(product_id, user_id, &mut *tx).await?;

    let review = sqlx::query_as::<_, Review>(
        "WITH inserted AS (
            INSERT INTO reviews (id, product_id, user_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_id, user_id, rating, comment, helpful_count, created_at
        )
        SELECT i.id, i.product_id, i.user_id,
               COALESCE(u.display_name, u.email) AS reviewer_name,
               i.rating, i.comment, i.helpful_count, i.created_at
        FROM inserted i
        JOIN users u ON u.id = i.user_id",
    )
    .bind(Uuid::new_v4())
    .bind(product_id)
    .bind(user_id)
    .bind(rating)
    .bind(&comment)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| match e.as_database_error() {
        // Two concurrent creates for the same (product, reviewer) pair: the
        // loser of the unique-constraint race surfaces as Conflict.
        Some(db) if db.is_unique_violation() => {
            AppError::Conflict("You have already reviewed this product".into())
        }
        _ => AppError::DatabaseError(format!("Failed to create review: {}", e)),
    })?;

    recalculate_aggregates(product_id, &mut *tx).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit review: {}", e)))?;

    Ok(review)
}
