//! Inventory API library
//!
//! Item catalogue, suppliers and supplier price lists behind bearer-token
//! auth, with image uploads served back as static files.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod services;
pub mod tracing;

use axum::{http::HeaderValue, Extension, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
};

use crate::auth::{AuthConfig, AuthRouterExt, AuthService};
use crate::config::AppConfig;
use crate::handlers::upload::IMAGES_PREFIX;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
    pub auth: Arc<AuthService>,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: AppConfig) -> Self {
        let auth = Arc::new(AuthService::new(AuthConfig::from(&config), db.clone()));
        Self {
            services: handlers::AppServices::new(db.clone()),
            db,
            config: Arc::new(config),
            auth,
        }
    }
}

/// Every route the service exposes. Everything except signin, signup,
/// health and the image directory requires a bearer token.
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(handlers::items::item_routes())
        .merge(handlers::suppliers::supplier_routes())
        .merge(handlers::supplier_items::supplier_item_routes())
        .merge(handlers::users::user_routes())
        .merge(handlers::upload::upload_routes(
            state.config.max_upload_bytes,
        ))
        .with_auth();

    Router::new()
        .merge(handlers::auth::auth_routes())
        .merge(health::health_routes())
        .merge(protected)
        .nest_service(IMAGES_PREFIX, ServeDir::new(&state.config.upload_dir))
        // Inject AuthService into request extensions for auth middleware
        .layer(Extension(state.auth.clone()))
        .layer(cors_layer(&state.config))
        // HTTP tracing layer for consistent request/response telemetry
        .layer(tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}

/// Explicit origins win; otherwise permissive in development or on opt-in,
/// same-origin only in every other case.
pub fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let configured_origins: Option<Vec<HeaderValue>> = cfg
        .cors_allowed_origins
        .as_ref()
        .map(|raw| {
            raw.split(',')
                .filter_map(|origin| {
                    let trimmed = origin.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        HeaderValue::from_str(trimmed).ok()
                    }
                })
                .collect::<Vec<_>>()
        })
        .filter(|origins| !origins.is_empty());

    if let Some(origins) = configured_origins {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    } else if cfg.should_allow_permissive_cors() {
        ::tracing::info!(
            "Using permissive CORS because explicit origins were not configured ({})",
            if cfg.is_development() {
                "development environment"
            } else {
                "explicit override enabled"
            }
        );
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}
