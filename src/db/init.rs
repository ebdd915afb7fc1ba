use sqlx::PgPool;

use crate::errors::AppError;

// The unique constraints on reviews (product_id, user_id) and
// review_helpful_votes (review_id, user_id) are the authoritative guards
// against the duplicate-review and double-vote races.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    display_name TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS products (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    price DOUBLE PRECISION NOT NULL,
    category TEXT NOT NULL,
    description TEXT,
    average_rating DOUBLE PRECISION NOT NULL DEFAULT 0,
    review_count BIGINT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS reviews (
    id UUID PRIMARY KEY,
    product_id UUID NOT NULL REFERENCES products(id) ON DELETE CASCADE,
    user_id UUID NOT NULL REFERENCES users(id),
    rating SMALLINT NOT NULL,
    comment TEXT NOT NULL,
    helpful_count BIGINT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_reviews_product_user UNIQUE (product_id, user_id)
);

CREATE INDEX IF NOT EXISTS idx_reviews_product_created ON reviews (product_id, created_at);
CREATE INDEX IF NOT EXISTS idx_reviews_product_rating ON reviews (product_id, rating);
CREATE INDEX IF NOT EXISTS idx_reviews_product_helpful ON reviews (product_id, helpful_count);

CREATE TABLE IF NOT EXISTS review_helpful_votes (
    id UUID PRIMARY KEY,
    review_id UUID NOT NULL REFERENCES reviews(id) ON DELETE CASCADE,
    user_id UUID NOT NULL REFERENCES users(id),
    CONSTRAINT uq_review_helpful_review_user UNIQUE (review_id, user_id)
);
"#;

pub async fn initialize_schema(postgres: PgPool) -> Result<(), AppError> {
    tracing::info!("Initializing database schema...");

    sqlx::raw_sql(SCHEMA)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to initialize schema: {}", e)))?;

    Ok(())
}
