use actix_web::HttpResponse;
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    // === APPLICATION ERRORS ===
    /// Malformed or missing request input. Always client-caused.
    #[error("{0}")]
    Validation(String),

    /// Unknown account at login. Message stays generic on purpose.
    #[error("{0}")]
    InvalidCredentials(String),

    /// Wrong, expired or absent verification code.
    #[error("{0}")]
    InvalidCode(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The email provider rejected or failed the send. The user and code
    /// rows are already persisted, so the caller can retry via resend.
    #[error("{0}")]
    Delivery(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn to_http_response(&self) -> HttpResponse {
        let is_dev = cfg!(debug_assertions);

        let to_internal_json = |err_msg: &str| {
            if is_dev {
                serde_json::json!({ "ok": false, "message": err_msg })
            } else {
                serde_json::json!({ "ok": false, "message": "Internal server error" })
            }
        };

        let to_json = || serde_json::json!({ "ok": false, "message": self.to_string() });

        match self {
            // === CONVERSION ERRORS ===
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }

            // === APPLICATION ERRORS ===
            AppError::Validation(_) => HttpResponse::BadRequest().json(to_json()),
            AppError::InvalidCredentials(_) => HttpResponse::Unauthorized().json(to_json()),
            AppError::InvalidCode(_) => HttpResponse::BadRequest().json(to_json()),
            AppError::NotFound(_) => HttpResponse::NotFound().json(to_json()),
            // Already logged with its cause where the send failed.
            AppError::Delivery(_) => HttpResponse::InternalServerError().json(to_json()),
            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn validation_maps_to_400() {
        let res = AppError::Validation("Email is required".into()).to_http_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credentials_maps_to_401() {
        let res =
            AppError::InvalidCredentials("Invalid login credentials".into()).to_http_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_code_maps_to_400() {
        let res =
            AppError::InvalidCode("Invalid or expired verification code".into()).to_http_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn delivery_and_database_map_to_500() {
        let delivery = AppError::Delivery("provider returned 503".into()).to_http_response();
        assert_eq!(delivery.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let db = AppError::Database(sqlx::Error::PoolClosed).to_http_response();
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = AppError::NotFound("order".into()).to_http_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
