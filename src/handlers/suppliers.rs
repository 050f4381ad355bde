use crate::{
    auth::AuthUser,
    db::SearchQuery,
    errors::ServiceError,
    handlers::{
        common::{created_response, no_content_response, success_response},
        AppState,
    },
    services::suppliers::SupplierInput,
};
use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Json, Router,
};

pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/supplier", get(list_suppliers).post(create_supplier))
        .route(
            "/supplier/:id",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}

pub async fn list_suppliers(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, ServiceError> {
    let page = state.services.suppliers.search(&query).await?;
    Ok(success_response(page))
}

pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let supplier = state.services.suppliers.get(id).await?;
    Ok(success_response(supplier))
}

pub async fn create_supplier(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SupplierInput>,
) -> Result<Response, ServiceError> {
    let supplier = state
        .services
        .suppliers
        .create(payload, &user.username)
        .await?;
    Ok(created_response(format!("/supplier/{}", supplier.id), supplier))
}

pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SupplierInput>,
) -> Result<Response, ServiceError> {
    let supplier = state.services.suppliers.update(id, payload).await?;
    Ok(success_response(supplier))
}

pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.suppliers.delete(id).await?;
    Ok(no_content_response())
}
