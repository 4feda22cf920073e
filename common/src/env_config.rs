use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// Holds everything needed to initialize and run the service: database
/// connection string, server bind address, worker count, CORS settings,
/// logging preferences and the email provider used to deliver verification
/// codes.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the database to connect to.
    pub database_url: String,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Configuration for the outbound email provider.
    pub email: EmailConfig,
}

#[derive(Clone, Debug)]
/// Settings for the HTTP email API that delivers verification codes.
pub struct EmailConfig {
    /// Base URL of the email provider's API.
    pub api_base_url: String,
    /// Server token used to authenticate against the provider.
    pub api_token: String,
    /// The address verification emails are sent from.
    pub from_address: String,
}

impl EmailConfig {
    /// Reads the email provider configuration from environment variables:
    /// - `EMAIL_API_BASE_URL`: Optional. Defaults to the Postmark API.
    /// - `EMAIL_API_TOKEN`: Required for real delivery; empty sends will fail
    ///   with a delivery error rather than at startup.
    /// - `SMTP_FROM`: Optional sender address.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        EmailConfig {
            api_base_url: env::var("EMAIL_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.postmarkapp.com".to_string()),
            api_token: env::var("EMAIL_API_TOKEN").unwrap_or_default(),
            from_address: env::var("SMTP_FROM")
                .unwrap_or_else(|_| "no-reply@example.com".to_string()),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `DATABASE_URL`: Connection string for the database
    /// - `ENVIRONMENT`: "development" or "production"
    ///
    /// Optional (with defaults):
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 4000)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - Email provider settings (see `EmailConfig::from_env`)
    ///
    /// # Panics
    ///
    /// This function will panic if required environment variables are missing
    /// or if numeric values cannot be parsed correctly.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .unwrap_or(4000),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
            email: EmailConfig::from_env(),
        })
    }
}
