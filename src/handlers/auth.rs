use crate::{
    auth::{AuthError, Credentials},
    handlers::{common::success_response, AppState},
};
use axum::{extract::State, response::Response, routing::post, Json, Router};

/// Public account routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signin", post(signin))
        .route("/signup", post(signup))
}

/// Exchanges a username and password for a bearer token
pub async fn signin(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Response, AuthError> {
    let session = state.auth.signin(credentials).await?;
    Ok(success_response(session))
}

/// Registers an account and returns it without the password hash
pub async fn signup(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Response, AuthError> {
    let user = state.auth.signup(credentials).await?;
    Ok(success_response(user))
}
