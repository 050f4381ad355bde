/*!
 * # Authentication Module
 *
 * Username/password accounts with HS256 bearer tokens.
 *
 * - `signup` stores an argon2 hash of the password
 * - `signin` checks the hash and issues a token carrying the username
 * - `auth_middleware` guards protected routes and exposes [`AuthUser`]
 *   to handlers
 */

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::AppConfig;
use crate::errors::is_unique_violation;

pub mod password;
pub mod user;
mod types;

pub use password::{hash_password, verify_missing_account, verify_password};
pub use types::*;

/// Claim structure for JWT tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub name: String, // Username
    pub jti: String,  // Token id
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Caller identity taken from a validated token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub token_id: String,
}

/// Authentication configuration
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_audience: String,
    pub jwt_issuer: String,
    pub token_lifetime: ChronoDuration,
}

impl AuthConfig {
    pub fn new(
        jwt_secret: String,
        jwt_audience: String,
        jwt_issuer: String,
        token_lifetime: ChronoDuration,
    ) -> Self {
        Self {
            jwt_secret,
            jwt_audience,
            jwt_issuer,
            token_lifetime,
        }
    }
}

impl From<&AppConfig> for AuthConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self::new(
            cfg.jwt_secret.clone(),
            cfg.jwt_audience.clone(),
            cfg.jwt_issuer.clone(),
            ChronoDuration::days(cfg.token_lifetime_days),
        )
    }
}

/// Authentication service that handles accounts and token issuance
#[derive(Debug, Clone)]
pub struct AuthService {
    pub config: AuthConfig,
    pub db: Arc<DatabaseConnection>,
}

impl AuthService {
    pub fn new(config: AuthConfig, db: Arc<DatabaseConnection>) -> Self {
        Self { config, db }
    }

    /// Issues a signed token for `username`
    pub fn issue_token(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            name: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.config.jwt_issuer.clone(),
            aud: self.config.jwt_audience.clone(),
            iat: now.timestamp(),
            exp: (now + self.config.token_lifetime).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Checks signature, issuer, audience and expiry
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.config.jwt_issuer.as_str()]);
        validation.set_audience(&[self.config.jwt_audience.as_str()]);

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?
        .claims;

        Ok(claims)
    }

    /// Verifies the credentials and returns a fresh token
    pub async fn signin(&self, credentials: Credentials) -> Result<SigninResponse, AuthError> {
        credentials
            .validate()
            .map_err(|e| AuthError::InvalidInput(e.to_string()))?;

        let account = user::Entity::find()
            .filter(user::Column::Username.eq(credentials.username.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        let verified = match &account {
            Some(account) => verify_password(&credentials.password, &account.password),
            None => verify_missing_account(&credentials.password),
        };

        let account = match account {
            Some(account) if verified => account,
            _ => {
                warn!(username = %credentials.username, "Signin rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.issue_token(&account.username)?;
        info!(username = %account.username, "User signed in");

        Ok(SigninResponse {
            username: account.username,
            token,
        })
    }

    /// Creates an account. A taken username is rejected by the unique index.
    pub async fn signup(&self, credentials: Credentials) -> Result<user::Model, AuthError> {
        credentials
            .validate()
            .map_err(|e| AuthError::InvalidInput(e.to_string()))?;

        let account = user::ActiveModel {
            username: Set(credentials.username.clone()),
            password: Set(hash_password(&credentials.password)?),
            create_time: Set(Utc::now()),
            creator: Set(None),
            ..Default::default()
        };

        let created = account.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::UsernameTaken
            } else {
                AuthError::DatabaseError(e.to_string())
            }
        })?;

        info!(user_id = created.id, username = %created.username, "User signed up");
        Ok(created)
    }
}

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token creation error: {0}")]
    TokenCreation(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::UsernameTaken | Self::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingToken | Self::InvalidToken | Self::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            Self::TokenCreation(_) | Self::Hash(_) | Self::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error_code, error_message): (&str, String) = match &self {
            Self::InvalidCredentials => (
                "AUTH_INVALID_CREDENTIALS",
                "Invalid username or password".to_string(),
            ),
            Self::UsernameTaken => ("AUTH_USERNAME_TAKEN", "Username already exists".to_string()),
            Self::InvalidInput(msg) => ("AUTH_INVALID_INPUT", msg.clone()),
            Self::MissingToken => (
                "AUTH_MISSING_TOKEN",
                "No authentication token provided".to_string(),
            ),
            Self::InvalidToken => (
                "AUTH_INVALID_TOKEN",
                "Invalid authentication token".to_string(),
            ),
            Self::TokenExpired => ("AUTH_TOKEN_EXPIRED", "Token has expired".to_string()),
            Self::TokenCreation(_) => (
                "AUTH_TOKEN_CREATION_FAILED",
                "Internal server error".to_string(),
            ),
            Self::Hash(_) => ("AUTH_HASH_FAILED", "Internal server error".to_string()),
            Self::DatabaseError(_) => ("AUTH_DATABASE_ERROR", "Database error".to_string()),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "authentication failure");
        }

        let body = Json(serde_json::json!({
            "error": {
                "code": error_code,
                "message": error_message,
            }
        }));

        (status, body).into_response()
    }
}

/// Authentication middleware that validates the bearer token
pub async fn auth_middleware(mut request: Request, next: Next) -> Response {
    let auth_service = match request.extensions().get::<Arc<AuthService>>() {
        Some(service) => service.clone(),
        None => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Authentication service not available",
            )
                .into_response();
        }
    };

    match extract_auth_from_headers(request.headers(), &auth_service) {
        Ok(user) => {
            debug!(username = %user.username, "Token accepted");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

fn extract_auth_from_headers(
    headers: &HeaderMap,
    auth_service: &AuthService,
) -> Result<AuthUser, AuthError> {
    let auth_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = auth_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = auth_service.validate_token(token)?;

    Ok(AuthUser {
        username: claims.name,
        token_id: claims.jti,
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}

/// Extension methods for Router to add auth middleware
pub trait AuthRouterExt {
    fn with_auth(self) -> Self;
}

impl<S> AuthRouterExt for axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_auth(self) -> Self {
        self.route_layer(axum::middleware::from_fn(auth_middleware))
    }
}
