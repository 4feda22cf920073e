use common::error::{AppError, Res};
use sqlx::{Executor, PgPool, Postgres};

use crate::{dtos::user::UserCreateRequest, models::user::User};

pub async fn get_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Creates the user if no row exists for this email, otherwise returns the
/// existing row untouched. The conditional insert is a single statement, so
/// concurrent signups for the same email can never create two users; role is
/// never updated on repeat signup (first signup wins).
pub async fn insert_user_if_absent(pool: &PgPool, data: UserCreateRequest) -> Res<User> {
    let inserted = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, role)
        VALUES ($1, $2)
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(&data.email)
    .bind(&data.role)
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some(user) => Ok(user),
        // Conflict: the row already existed (or a concurrent signup won).
        None => sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(&data.email)
            .fetch_one(pool)
            .await
            .map_err(AppError::from),
    }
}

/// Flips `verified` to true. No-op when the user is absent or already
/// verified; once set it is never reset.
pub async fn mark_verified<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<()> {
    sqlx::query("UPDATE users SET verified = TRUE WHERE email = $1")
        .bind(email)
        .execute(executor)
        .await?;
    Ok(())
}
