use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::User};

pub async fn get_user_by_id(user_id: Uuid, postgres: PgPool) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, display_name, created_at FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?;

    user.ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", user_id)))
}
