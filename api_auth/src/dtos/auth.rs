use serde::{Deserialize, Serialize};

// Request fields are optional so that presence is checked by the flow itself
// and reported with a descriptive message, not by the JSON deserializer.

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResendCodeRequest {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub ok: bool,
    pub message: String,
    pub role: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ResendCodeResponse {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub message: String,
    pub email: String,
    pub role: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyEmailResponse {
    pub ok: bool,
    pub message: String,
    pub email: String,
}
