use crate::{
    auth::AuthUser,
    db::SearchQuery,
    errors::ServiceError,
    handlers::{
        common::{created_response, no_content_response, success_response},
        AppState,
    },
    services::supplier_items::SupplierItemInput,
};
use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Json, Router,
};

pub fn supplier_item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/supplieritem",
            get(list_supplier_items).post(create_supplier_item),
        )
        .route(
            "/supplieritem/:id",
            get(get_supplier_item)
                .put(update_supplier_item)
                .delete(delete_supplier_item),
        )
}

/// Supplier price list rows joined with their catalogue item
pub async fn list_supplier_items(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, ServiceError> {
    let page = state.services.supplier_items.search(&query).await?;
    Ok(success_response(page))
}

pub async fn get_supplier_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let row = state.services.supplier_items.get(id).await?;
    Ok(success_response(row))
}

pub async fn create_supplier_item(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SupplierItemInput>,
) -> Result<Response, ServiceError> {
    let row = state
        .services
        .supplier_items
        .create(payload, &user.username)
        .await?;
    Ok(created_response(format!("/supplieritem/{}", row.id), row))
}

pub async fn update_supplier_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SupplierItemInput>,
) -> Result<Response, ServiceError> {
    let row = state.services.supplier_items.update(id, payload).await?;
    Ok(success_response(row))
}

pub async fn delete_supplier_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    state.services.supplier_items.delete(id).await?;
    Ok(no_content_response())
}
