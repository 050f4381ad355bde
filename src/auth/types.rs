use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `/signin` and `/signup`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 256, message = "password must not be empty"))]
    pub password: String,
}

/// Successful signin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    pub username: String,
    pub token: String,
}
