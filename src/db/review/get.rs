use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::review::{Review, ReviewPage, ReviewSortField, SortDirection, order_by_clause},
    validation::validate_product_exists,
};

const MAX_PAGE_SIZE: i64 = 100;

pub async fn get_reviews_by_product(
    product_id: Uuid,
    page: i64,
    size: i64,
    sort_field: ReviewSortField,
    sort_dir: SortDirection,
    min_rating: Option<i16>,
    postgres: PgPool,
) -> Result<ReviewPage, AppError> {
    let mut conn = postgres
        .acquire()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to acquire connection: {}", e)))?;

    validate_product_exists(product_id, &mut *conn).await?;

    let page = page.max(0);
    let size = size.clamp(1, MAX_PAGE_SIZE);

    let total_elements: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM reviews r
        WHERE r.product_id = $1 AND ($2::SMALLINT IS NULL OR r.rating >= $2)",
    )
    .bind(product_id)
    .bind(min_rating)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to count reviews: {}", e)))?;

    // Sort columns come from the ReviewSortField whitelist, never raw input
    let query = format!(
        "SELECT r.id, r.product_id, r.user_id,
                COALESCE(u.display_name, u.email) AS reviewer_name,
                r.rating, r.comment, r.helpful_count, r.created_at
        FROM reviews r
        JOIN users u ON u.id = r.user_id
        WHERE r.product_id = $1 AND ($2::SMALLINT IS NULL OR r.rating >= $2)
        ORDER BY {}
        LIMIT $3 OFFSET $4",
        order_by_clause(sort_field, sort_dir)
    );

    let content = sqlx::query_as::<_, Review>(&query)
        .bind(product_id)
        .bind(min_rating)
        .bind(size)
        .bind(page * size)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch reviews: {}", e)))?;

    let total_pages = (total_elements + size - 1) / size;

    Ok(ReviewPage {
        content,
        page,
        size,
        total_elements,
        total_pages,
    })
}
