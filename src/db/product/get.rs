use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::product::Product};

pub async fn get_all_products(postgres: PgPool) -> Result<Vec<Product>, AppError> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, price, category, description, average_rating, review_count, created_at
        FROM products
        ORDER BY created_at DESC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch products: {}", e)))
}

pub async fn get_product_by_id(product_id: Uuid, postgres: PgPool) -> Result<Product, AppError> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, category, description, average_rating, review_count, created_at
        FROM products
        WHERE id = $1",
    )
    .bind(product_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch product: {}", e)))?;

    product.ok_or_else(|| {
        AppError::NotFound(format!("Product not found with id: {}", product_id))
    })
}
