use actix_web::web;

pub mod routes {
    pub mod auth;
}
pub mod dtos {
    pub mod auth;
}
mod services {
    pub(crate) mod auth;
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_signup)
        .service(routes::auth::post_resend_code)
        .service(routes::auth::post_login)
        .service(routes::auth::post_verify)
        .service(routes::auth::post_verify_email)
}
