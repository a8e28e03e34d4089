use serde::{Deserialize, Serialize};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Confirmation body for write operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// User row as exposed by the listing endpoint. The hash field is part of
/// the published contract and is serialized as-is.
#[derive(Debug, Serialize)]
pub struct UserListItem {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
}
