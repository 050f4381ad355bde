use crate::{
    errors::ServiceError,
    handlers::{
        common::{no_content_response, success_response},
        AppState,
    },
    services::users::UserUpdate,
};
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/user/:id",
        get(get_user).put(update_user).delete(delete_user),
    )
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let user = state.services.users.get(id).await?;
    Ok(success_response(user))
}

/// Renames an account or sets its password
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserUpdate>,
) -> Result<Response, ServiceError> {
    let user = state.services.users.update(id, payload).await?;
    Ok(success_response(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.users.delete(id).await?;
    Ok(no_content_response())
}
