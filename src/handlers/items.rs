use crate::{
    auth::AuthUser,
    db::SearchQuery,
    errors::ServiceError,
    handlers::{
        common::{created_response, no_content_response, success_response},
        AppState,
    },
    services::items::ItemInput,
};
use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Json, Router,
};

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/item", get(list_items).post(create_item))
        .route(
            "/item/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// One page of items, newest first
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, ServiceError> {
    let page = state.services.items.search(&query).await?;
    Ok(success_response(page))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let item = state.services.items.get(id).await?;
    Ok(success_response(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ItemInput>,
) -> Result<Response, ServiceError> {
    let item = state.services.items.create(payload, &user.username).await?;
    Ok(created_response(format!("/item/{}", item.id), item))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ItemInput>,
) -> Result<Response, ServiceError> {
    let item = state.services.items.update(id, payload).await?;
    Ok(success_response(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.items.delete(id).await?;
    Ok(no_content_response())
}
