use std::sync::Arc;

use actix_web::{App, test, web};
use common::env_config::EmailConfig;
use mailer::Mailer;
use sqlx::PgPool;

// A lazy pool never connects unless a query runs; the validation paths under
// test reject the request before any database access.
fn lazy_pool() -> Arc<PgPool> {
    Arc::new(
        PgPool::connect_lazy("postgresql://postgres@localhost:5432/spareparts_hub_test")
            .expect("lazy pool"),
    )
}

fn unreachable_mailer() -> Mailer {
    Mailer::new(&EmailConfig {
        api_base_url: "http://127.0.0.1:9".to_string(),
        api_token: String::new(),
        from_address: "no-reply@example.com".to_string(),
    })
}

macro_rules! auth_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(web::Data::new(unreachable_mailer()))
                .service(api_auth::mount_auth()),
        )
        .await
    };
}

#[actix_web::test]
async fn signup_rejects_missing_fields() {
    let app = auth_app!();

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(serde_json::json!({ "email": "test@example.com" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["ok"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Missing required fields")
    );
}

#[actix_web::test]
async fn signup_rejects_malformed_email() {
    let app = auth_app!();

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(serde_json::json!({ "email": "not-an-email", "role": "buyer" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Invalid email format");
}

#[actix_web::test]
async fn signup_rejects_blank_role() {
    let app = auth_app!();

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(serde_json::json!({ "email": "test@example.com", "role": "   " }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Invalid role");
}

#[actix_web::test]
async fn resend_code_requires_email() {
    let app = auth_app!();

    let req = test::TestRequest::post()
        .uri("/auth/resend-code")
        .set_json(serde_json::json!({}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Email is required");
}

#[actix_web::test]
async fn login_requires_email() {
    let app = auth_app!();

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);
}

#[actix_web::test]
async fn verify_requires_email_and_code_on_both_paths() {
    let app = auth_app!();

    for path in ["/auth/verify", "/auth/verify-email"] {
        let req = test::TestRequest::post()
            .uri(path)
            .set_json(serde_json::json!({ "email": "test@example.com" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 400, "path {}", path);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Email and code are required");
    }
}
