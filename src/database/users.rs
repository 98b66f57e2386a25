use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{NewUser, User};
use crate::utils::error::AppError;

/// Inserts a user whose password has already been hashed.
/// A duplicate email surfaces as `AppError::Conflict` through the unique index.
pub async fn insert_user(pool: &PgPool, user: NewUser) -> Result<User, AppError> {
    let created = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, password, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.name)
    .bind(user.email)
    .bind(user.password)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
