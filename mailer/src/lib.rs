use std::time::Duration;

use common::{
    env_config::EmailConfig,
    error::{AppError, Res},
};
use reqwest::Client;

const AUTH_HEADER: &str = "X-Postmark-Server-Token";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the transactional email API that delivers verification
/// codes. Every failure (transport or non-2xx status) is reported as a
/// delivery error; the caller's database writes are already durable at that
/// point, so a resend can always retry.
#[derive(Clone)]
pub struct Mailer {
    http_client: Client,
    base_url: String,
    token: String,
    from_address: String,
}

impl Mailer {
    pub fn new(config: &EmailConfig) -> Self {
        let http_client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client for the mailer");

        Self {
            http_client,
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
            from_address: config.from_address.clone(),
        }
    }

    /// Emails a freshly issued signup code.
    pub async fn send_verification_code(&self, recipient: &str, code: &str) -> Res<()> {
        self.send(
            recipient,
            "Your SpareParts Hub verification code",
            &format!(
                "Your verification code is {}. It expires in 10 minutes.",
                code
            ),
            "Could not send verification email",
        )
        .await
    }

    /// Emails a reissued code. Same contract as
    /// [`Mailer::send_verification_code`], different wording.
    pub async fn resend_verification_code(&self, recipient: &str, code: &str) -> Res<()> {
        self.send(
            recipient,
            "Your SpareParts Hub verification code",
            &format!(
                "Your new verification code is {}. It expires in 10 minutes.",
                code
            ),
            "Could not resend verification email",
        )
        .await
    }

    // The provider failure is logged here with its cause; the caller only
    // sees `failure_msg`.
    async fn send(&self, recipient: &str, subject: &str, body: &str, failure_msg: &str) -> Res<()> {
        let url = format!("{}/email", self.base_url.trim_end_matches('/'));

        let request_body = SendEmailRequest {
            from: &self.from_address,
            to: recipient,
            subject,
            text_body: body,
        };

        let response = self
            .http_client
            .post(url)
            .header(AUTH_HEADER, &self.token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Email request to {} failed: {}", recipient, e);
                AppError::Delivery(failure_msg.to_string())
            })?;

        response.error_for_status().map_err(|e| {
            log::error!("Email provider rejected the send to {}: {}", recipient, e);
            AppError::Delivery(failure_msg.to_string())
        })?;

        log::debug!("Verification email dispatched to {}", recipient);
        Ok(())
    }
}

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_provider_field_names() {
        let body = SendEmailRequest {
            from: "no-reply@example.com",
            to: "test@example.com",
            subject: "Your SpareParts Hub verification code",
            text_body: "Your verification code is 123456. It expires in 10 minutes.",
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["From"], "no-reply@example.com");
        assert_eq!(json["To"], "test@example.com");
        assert!(json["TextBody"].as_str().unwrap().contains("123456"));
    }
}
