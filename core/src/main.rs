mod cors;

use actix_web::{
    App, HttpResponse, HttpServer, Responder, get,
    web::{self},
};
use common::env_config::Config;
use mailer::Mailer;

#[get("/health")]
async fn get_health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "service": "spareparts-hub" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    // init email client
    let mailer = Mailer::new(&config.email);

    log::info!(
        "SpareParts Hub API running on http://{}:{}",
        config.server_host,
        config.server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(web::Data::new(mailer.clone()))
            .wrap(logger::middleware())
            .wrap(cors::middleware(&origin))
            .service(get_health)
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(api_parts::mount_parts())
                    .service(api_orders::mount_orders()),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn health_reports_service_name() {
        let app = test::init_service(App::new().service(get_health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "spareparts-hub");
    }
}
