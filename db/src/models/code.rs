use chrono::{DateTime, Utc};
use serde::Serialize;

/// A pending verification code. The email is the key: issuing a new code for
/// the same address overwrites this row.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct VerificationCode {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}
