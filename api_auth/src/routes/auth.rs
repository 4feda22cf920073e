use std::sync::Arc;

use actix_web::{Responder, post, web};
use common::{error::Res, http::Success};
use mailer::Mailer;
use sqlx::PgPool;

use crate::dtos::auth::{LoginRequest, ResendCodeRequest, SignupRequest, VerifyEmailRequest};
use crate::services;

/// Registers a user and emails a 6-digit verification code.
///
/// # Input
/// - `req`: JSON payload with `email` and `role`
///
/// # Output
/// - Success: 201 with `{ok, message, role, email}` (the code itself is never returned)
/// - Error: 400 for missing/invalid fields, 500 when delivery fails
///   (user and code stay persisted, so resend can retry)
#[post("/signup")]
pub async fn post_signup(
    req: web::Json<SignupRequest>,
    pool: web::Data<Arc<PgPool>>,
    mailer: web::Data<Mailer>,
) -> Res<impl Responder> {
    let body = services::auth::signup(&pool, &mailer, req.into_inner()).await?;
    Success::created(body)
}

/// Issues a fresh verification code, invalidating the previous one, and
/// emails it.
///
/// # Input
/// - `req`: JSON payload with `email`
///
/// # Output
/// - Success: 200 `{ok, message}`
/// - Error: 400 for a missing email, 500 when delivery fails
#[post("/resend-code")]
pub async fn post_resend_code(
    req: web::Json<ResendCodeRequest>,
    pool: web::Data<Arc<PgPool>>,
    mailer: web::Data<Mailer>,
) -> Res<impl Responder> {
    let body = services::auth::resend_code(&pool, &mailer, req.into_inner()).await?;
    Success::ok(body)
}

/// Logs a user in by email and returns an opaque bearer token.
///
/// # Input
/// - `req`: JSON payload with `email`
///
/// # Output
/// - Success: 200 `{ok, message, email, role, token}`
/// - Error: 400 for a missing email, 401 for an unknown one
#[post("/login")]
pub async fn post_login(
    req: web::Json<LoginRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let body = services::auth::login(&pool, req.into_inner()).await?;
    Success::ok(body)
}

/// Verifies an email address with a previously issued code. The code is
/// single use: a successful verification deletes it.
///
/// # Input
/// - `req`: JSON payload with `email` and `code`
///
/// # Output
/// - Success: 200 `{ok, message, email}`
/// - Error: 400 for missing fields or an invalid/expired code
#[post("/verify")]
pub async fn post_verify(
    req: web::Json<VerifyEmailRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let body = services::auth::verify_email(&pool, req.into_inner()).await?;
    Success::ok(body)
}

// Kept for clients still posting to the old path.
#[post("/verify-email")]
pub async fn post_verify_email(
    req: web::Json<VerifyEmailRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let body = services::auth::verify_email(&pool, req.into_inner()).await?;
    Success::ok(body)
}
