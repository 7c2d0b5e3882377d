use serde::{Deserialize, Serialize};
use uuid::Uuid;

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

/// Returned by register: identity only, never the hash.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub id: Uuid,
    pub email: String,
}

/// Returned by login: identity plus the signed bearer token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub id: Uuid,
    pub email: String,
    pub token: String,
}
