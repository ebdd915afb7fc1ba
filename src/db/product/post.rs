use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::product::Product};

pub async fn create_product(
    name: String,
    price: f64,
    category: String,
    description: Option<String>,
    postgres: PgPool,
) -> Result<Product, AppError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Product name cannot be empty".into()));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest("Price must be non-negative".into()));
    }

    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (id, name, price, category, description)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, price, category, description, average_rating, review_count, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&name)
    .bind(price)
    .bind(category.trim())
    .bind(&description)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create product: {}", e)))?;

    tracing::info!("Created product: {} (ID: {})", product.name, product.id);

    Ok(product)
}
