use sqlx::PgConnection;
use uuid::Uuid;

use crate::errors::AppError;

pub const RATING_MIN: i16 = 1;
pub const RATING_MAX: i16 = 5;

pub const COMMENT_MIN_LEN: usize = 10;
pub const COMMENT_MAX_LEN: usize = 2000;

pub fn validate_rating(rating: i16) -> Result<(), AppError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between {} and {}",
            RATING_MIN, RATING_MAX
        )));
    }
    Ok(())
}

/// Trims the comment before checking bounds and returns the trimmed form for
/// storage. An all-whitespace comment counts as empty, not as a short one.
pub fn validate_comment(
    comment: &str,
    min_len: usize,
    max_len: usize,
) -> Result<String, AppError> {
    let trimmed = comment.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Comment cannot be empty".into()));
    }

    let length = trimmed.chars().count();
    if length < min_len {
        return Err(AppError::BadRequest(format!(
            "Comment must be at least {} characters long",
            min_len
        )));
    }
    if length > max_len {
        return Err(AppError::BadRequest(format!(
            "Comment must not exceed {} characters",
            max_len
        )));
    }

    Ok(trimmed.to_string())
}

pub async fn validate_product_exists(
    product_id: Uuid,
    conn: &mut PgConnection,
) -> Result<(), AppError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
        .bind(product_id)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to check product: {}", e)))?;

    if !exists {
        return Err(AppError::NotFound(format!(
            "Product not found with id: {}",
            product_id
        )));
    }
    Ok(())
}

/// Pre-check only; the unique constraint on (product_id, user_id) remains the
/// authoritative duplicate guard at insert time.
pub async fn validate_no_duplicate_review(
    product_id: Uuid,
    user_id: Uuid,
    conn: &mut PgConnection,
) -> Result<(), AppError> {
    let existing: Option<Uuid> =
        sqlx::query_scalar("SELECT id FROM reviews WHERE product_id = $1 AND user_id = $2")
            .bind(product_id)
            .bind(user_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to check existing review: {}", e))
            })?;

    if existing.is_some() {
        return Err(AppError::Conflict(
            "You have already reviewed this product".into(),
        ));
    }
    Ok(())
}

pub fn validate_ownership(owner_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
    if owner_id != user_id {
        return Err(AppError::Forbidden(
            "You can only modify your own reviews".into(),
        ));
    }
    Ok(())
}
