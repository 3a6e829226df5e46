use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration. Absent fields deserialize as empty
/// strings so the validation rules report them instead of the extractor.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login. Absent fields deserialize as empty strings, same as
/// registration.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Confirmation body carrying no user data.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Successful login: the signed token plus the id it asserts.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}
