#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use inventory_api::{config::AppConfig, db, AppState};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &str =
    "q8Zr2Lw7Vx4Nc1Tb6Hy9Kp3Mf5Jd0Gs8Ue2Ra7Wi4Oq1Yl6Xn3Cv9Bz5Ek0Ht2Pm7Sj4Df8Ag1Lu6Nw3Rx9";

const MULTIPART_BOUNDARY: &str = "----inventory-api-test-boundary";

/// Full application over a throwaway SQLite file and upload directory.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    token: String,
    _dir: TempDir,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let upload_dir = dir.path().join("images");
        std::fs::create_dir_all(&upload_dir).expect("create upload dir");

        let cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", dir.path().join("inventory.db").display()),
            TEST_SECRET.to_string(),
            upload_dir.display().to_string(),
        );

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let token = state.auth.issue_token("tester").expect("issue test token");
        let router = inventory_api::app_router(state.clone());

        Self {
            router,
            state,
            token,
            _dir: dir,
        }
    }

    /// Bearer token for the default test user.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Send a request against the router with an optional bearer token.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(tok) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", tok));
        }

        let body = if let Some(json) = body {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        self.send(builder.body(body).expect("failed to build request"))
            .await
    }

    /// Convenience helper for authenticated JSON requests.
    pub async fn request_authenticated(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Response {
        self.request(method, uri, body, Some(self.token())).await
    }

    /// Authenticated `POST /upload` with a single multipart field.
    pub async fn upload(&self, field: &str, file_name: &str, content: &[u8]) -> Response {
        let mut payload = Vec::new();
        payload.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                b = MULTIPART_BOUNDARY,
            )
            .as_bytes(),
        );
        payload.extend_from_slice(content);
        payload.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/upload")
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token()))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
            )
            .body(Body::from(payload))
            .expect("failed to build upload request");

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }
}

pub async fn response_bytes(response: Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes")
        .to_vec()
}

pub async fn response_json(response: Response) -> Value {
    serde_json::from_slice(&response_bytes(response).await).expect("json response")
}
