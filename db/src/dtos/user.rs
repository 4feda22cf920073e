/// Insert request for the user directory. Email and role are expected to be
/// normalized (lower-cased, trimmed) by the caller before they get here.
#[derive(Debug, Clone)]
pub struct UserCreateRequest {
    pub email: String,
    pub role: String,
}
