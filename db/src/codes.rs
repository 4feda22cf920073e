use chrono::{DateTime, Utc};
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::models::code::VerificationCode;

/// Stores a code for this email, replacing any prior one in the same
/// statement. Last write wins between concurrent issuances, which is the
/// intended behavior: only the most recently issued code should validate.
pub async fn upsert_code<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
    code: &str,
    expires_at: DateTime<Utc>,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO verification_codes (email, code, expires_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO UPDATE
        SET code = EXCLUDED.code, expires_at = EXCLUDED.expires_at
        "#,
    )
    .bind(email)
    .bind(code)
    .bind(expires_at)
    .execute(executor)
    .await?;
    Ok(())
}

/// Fetches the row for this email only while it is still live. Expired rows
/// are filtered out here, so they can never match a submitted code even when
/// nothing has deleted them yet.
pub async fn get_live_code<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<Option<VerificationCode>> {
    sqlx::query_as::<_, VerificationCode>(
        "SELECT * FROM verification_codes WHERE email = $1 AND expires_at > now()",
    )
    .bind(email)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

/// Idempotent delete. Called after a successful validation to enforce
/// single use.
pub async fn delete_code<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<()> {
    sqlx::query("DELETE FROM verification_codes WHERE email = $1")
        .bind(email)
        .execute(executor)
        .await?;
    Ok(())
}
