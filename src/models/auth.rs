// src/models/auth.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Back office sign-in form
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
    pub email: String,
    /// Token to send as X-Admin-Token, present when the server enforces one
    pub token: Option<String>,
}
