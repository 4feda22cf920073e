use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use common::error::{AppError, Res};
use db::dtos::user::UserCreateRequest;
use db::models::code::VerificationCode;
use mailer::Mailer;
use rand::{Rng, RngCore, rngs::OsRng};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::auth::{
    LoginRequest, LoginResponse, ResendCodeRequest, ResendCodeResponse, SignupRequest,
    SignupResponse, VerifyEmailRequest, VerifyEmailResponse,
};

const CODE_TTL_MINUTES: i64 = 10;

/// Registers (or re-registers) an account and sends a verification code.
///
/// Order matters: the user row and the code row are persisted before the
/// delivery attempt, so a failed send leaves a retryable code behind and
/// surfaces as a delivery error rather than losing state.
pub async fn signup(pool: &PgPool, mailer: &Mailer, req: SignupRequest) -> Res<SignupResponse> {
    let (Some(raw_email), Some(raw_role)) = (req.email, req.role) else {
        return Err(AppError::Validation(
            "Missing required fields: email or role".to_string(),
        ));
    };

    let email = normalize_email(&raw_email);
    if !is_valid_email(&email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    let role = raw_role.trim().to_lowercase();
    if role.is_empty() {
        return Err(AppError::Validation("Invalid role".to_string()));
    }

    // First signup wins: an existing user is returned unchanged, role and all.
    let user = db::users::insert_user_if_absent(
        pool,
        UserCreateRequest {
            email: email.clone(),
            role,
        },
    )
    .await?;

    let code = generate_code();
    db::codes::upsert_code(pool, &email, &code, code_expiry()).await?;

    mailer.send_verification_code(&email, &code).await?;

    log::info!("Signup for {} ({})", user.email, user.role);
    Ok(SignupResponse {
        ok: true,
        message: "Sign up success. Verification code sent.".to_string(),
        role: user.role,
        email: user.email,
    })
}

/// Issues a brand-new code for this email, superseding any prior one
/// immediately. Does not touch the user table: a resend for an address with
/// no account is allowed and simply parks a code nobody can consume.
pub async fn resend_code(
    pool: &PgPool,
    mailer: &Mailer,
    req: ResendCodeRequest,
) -> Res<ResendCodeResponse> {
    let Some(raw_email) = req.email else {
        return Err(AppError::Validation("Email is required".to_string()));
    };
    let email = normalize_email(&raw_email);

    let code = generate_code();
    db::codes::upsert_code(pool, &email, &code, code_expiry()).await?;

    mailer.resend_verification_code(&email, &code).await?;

    Ok(ResendCodeResponse {
        ok: true,
        message: "Verification code resent.".to_string(),
    })
}

/// Email-only login: a matching account is sufficient. The token is an
/// opaque placeholder credential; nothing in the system validates it.
pub async fn login(pool: &PgPool, req: LoginRequest) -> Res<LoginResponse> {
    let Some(raw_email) = req.email else {
        return Err(AppError::Validation("Email is required".to_string()));
    };
    let email = normalize_email(&raw_email);

    let Some(user) = db::users::get_user_by_email(pool, &email).await? else {
        return Err(AppError::InvalidCredentials(
            "Invalid login credentials".to_string(),
        ));
    };

    let token = mint_token(user.id);

    Ok(LoginResponse {
        ok: true,
        message: "Login success".to_string(),
        email: user.email,
        role: user.role,
        token,
    })
}

/// Consumes a live code and marks the user verified. The code row is deleted
/// on success, so the same code can never validate twice; an expired row is
/// never fetched in the first place.
pub async fn verify_email(pool: &PgPool, req: VerifyEmailRequest) -> Res<VerifyEmailResponse> {
    let (Some(raw_email), Some(code)) = (req.email, req.code) else {
        return Err(AppError::Validation(
            "Email and code are required".to_string(),
        ));
    };
    let email = normalize_email(&raw_email);

    let live = db::codes::get_live_code(pool, &email).await?;
    if !code_matches(live.as_ref(), &code) {
        return Err(AppError::InvalidCode(
            "Invalid or expired verification code".to_string(),
        ));
    }

    db::codes::delete_code(pool, &email).await?;
    db::users::mark_verified(pool, &email).await?;

    log::info!("Email verified for {}", email);
    Ok(VerifyEmailResponse {
        ok: true,
        message: "Email verified successfully.".to_string(),
        email,
    })
}

/// Decides whether a submitted code consumes the stored row. The row must
/// exist (the live lookup already filters out expired ones, and a consumed
/// row is deleted) and the comparison is exact string equality.
pub(crate) fn code_matches(live: Option<&VerificationCode>, submitted: &str) -> bool {
    live.is_some_and(|row| row.code == submitted)
}

pub(crate) fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Basic `local@domain.tld` shape: non-empty segments with no whitespace or
/// extra `@`, and at least one dot in the domain.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    clean(local) && clean(host) && clean(tld)
}

/// Uniform 6-digit code from the OS CSPRNG.
pub(crate) fn generate_code() -> String {
    OsRng.gen_range(100_000..=999_999u32).to_string()
}

pub(crate) fn code_expiry() -> DateTime<Utc> {
    Utc::now() + Duration::minutes(CODE_TTL_MINUTES)
}

/// Opaque bearer token: base64url of `user_id:millis:random`, with 16 CSPRNG
/// bytes of entropy. Display credential only, never checked server-side.
pub(crate) fn mint_token(user_id: Uuid) -> String {
    let mut random = [0u8; 16];
    OsRng.fill_bytes(&mut random);
    let random_hex: String = random.iter().map(|b| format!("{:02x}", b)).collect();

    let payload = format!(
        "{}:{}:{}",
        user_id,
        Utc::now().timestamp_millis(),
        random_hex
    );
    URL_SAFE_NO_PAD.encode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_email("  Test@Example.Com "), "test@example.com");
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name+tag@mail.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-symbol"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@exa@mple.com"));
    }

    #[test]
    fn codes_are_six_digits_in_range() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn token_decodes_and_carries_user_id() {
        let user_id = Uuid::new_v4();
        let token = mint_token(user_id);
        assert!(!token.is_empty());

        let decoded = URL_SAFE_NO_PAD.decode(&token).unwrap();
        let payload = String::from_utf8(decoded).unwrap();
        assert!(payload.starts_with(&user_id.to_string()));
    }

    #[test]
    fn tokens_are_unique_per_call() {
        let user_id = Uuid::new_v4();
        assert_ne!(mint_token(user_id), mint_token(user_id));
    }

    fn live_row(code: &str) -> VerificationCode {
        VerificationCode {
            email: "test@example.com".to_string(),
            code: code.to_string(),
            expires_at: code_expiry(),
        }
    }

    #[test]
    fn matching_live_code_validates() {
        assert!(code_matches(Some(&live_row("123456")), "123456"));
    }

    #[test]
    fn wrong_code_is_rejected() {
        assert!(!code_matches(Some(&live_row("123456")), "000000"));
        // exact equality, no trimming or normalization of the code
        assert!(!code_matches(Some(&live_row("123456")), "123456 "));
        assert!(!code_matches(Some(&live_row("123456")), "12345"));
    }

    #[test]
    fn absent_row_never_validates() {
        // expired rows are filtered out by the live lookup, and a consumed
        // row is deleted; both reach the decision as None
        assert!(!code_matches(None, "123456"));
        assert!(!code_matches(None, ""));
    }

    #[test]
    fn reissued_code_fully_supersedes_the_old_one() {
        // the upsert keeps one row per email; after a resend only the new
        // code is stored, so the old one stops validating immediately
        let old = generate_code();
        let new = loop {
            let candidate = generate_code();
            if candidate != old {
                break candidate;
            }
        };

        let row = live_row(&new);
        assert!(!code_matches(Some(&row), &old));
        assert!(code_matches(Some(&row), &new));
    }

    #[test]
    fn expiry_is_ten_minutes_out() {
        let expiry = code_expiry();
        let delta = expiry - Utc::now();
        assert!(delta > Duration::minutes(9) && delta <= Duration::minutes(10));
    }
}
