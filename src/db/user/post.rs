use sqlx::PgPool;
use uuid::Uuid;

use crate::{auth::generate_jwt, errors::AppError, models::User};

/// Creates the account on first sight of an email and returns a JWT either
/// way, so clients can treat registration and login as one call.
pub async fn create_user(
    email: String,
    display_name: Option<String>,
    postgres: PgPool,
) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".into()));
    }

    let existing = sqlx::query_as::<_, User>(
        "SELECT id, email, display_name, created_at FROM users WHERE email = $1",
    )
    .bind(&email)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query user: {}", e)))?;

    if let Some(user) = existing {
        let token = generate_jwt(&user)?;
        return Ok(token);
    }

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, email, display_name)
        VALUES ($1, $2, $3)
        RETURNING id, email, display_name, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&email)
    .bind(&display_name)
    .fetch_one(&postgres)
    .await
    .map_err(|e| match e.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            AppError::Conflict("Email is already in use".into())
        }
        _ => AppError::DatabaseError(format!("Failed to create user: {}", e)),
    })?;

    let token = generate_jwt(&user)?;
    Ok(token)
}
