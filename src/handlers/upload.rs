use crate::{
    errors::ServiceError,
    handlers::{common::created_response, AppState},
};
use axum::{
    extract::{multipart::Field, DefaultBodyLimit, Multipart, State},
    response::Response,
    routing::post,
    Router,
};
use chrono::Utc;
use serde::Serialize;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::{fs, io::AsyncWriteExt};
use tracing::{info, instrument, warn};

/// Multipart field carrying the file
pub const UPLOAD_FIELD: &str = "fi";

/// URL prefix the upload directory is served under
pub const IMAGES_PREFIX: &str = "/images";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub path: String,
}

pub fn upload_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// Stores the `fi` field under the upload directory and returns its public path
#[instrument(skip_all)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ServiceError> {
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let client_name = field.file_name().map(str::to_owned);
        let (file_name, target, file) = create_unique(
            Path::new(&state.config.upload_dir),
            || stored_file_name(client_name.as_deref()),
        )
        .await?;
        let written = write_field(field, file, &target).await?;

        if written == 0 {
            fs::remove_file(&target).await?;
            return Err(ServiceError::BadRequest("Uploaded file is empty".to_string()));
        }

        info!(file = %file_name, bytes = written, "File uploaded");
        let path = format!("{}/{}", IMAGES_PREFIX, file_name);
        return Ok(created_response(path.clone(), UploadResponse { path }));
    }

    Err(ServiceError::BadRequest(format!(
        "Multipart field '{}' is required",
        UPLOAD_FIELD
    )))
}

/// Attempts at a fresh name before giving up on a busy upload directory
const NAME_ATTEMPTS: usize = 8;

/// Creates a file under `dir` named by `next_name`, drawing a new name while
/// the previous one already exists.
async fn create_unique(
    dir: &Path,
    mut next_name: impl FnMut() -> String,
) -> Result<(String, PathBuf, fs::File), ServiceError> {
    let mut last_err = None;
    for _ in 0..NAME_ATTEMPTS {
        let file_name = next_name();
        let target = dir.join(&file_name);
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
        {
            Ok(file) => return Ok((file_name, target, file)),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                warn!(file = %file_name, "Upload name taken, retrying");
                last_err = Some(err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(last_err
        .map(ServiceError::from)
        .unwrap_or_else(|| ServiceError::InternalError("No upload name available".to_string())))
}

/// Streams `field` into `file` at `target`. A partial file is removed on failure.
async fn write_field(
    mut field: Field<'_>,
    mut file: fs::File,
    target: &Path,
) -> Result<u64, ServiceError> {
    let mut written = 0u64;
    let result = async {
        while let Some(chunk) = field.chunk().await.map_err(bad_multipart)? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        Ok::<(), ServiceError>(())
    }
    .await;

    if let Err(err) = result {
        drop(file);
        if let Err(cleanup) = fs::remove_file(target).await {
            warn!(error = %cleanup, path = %target.display(), "Failed to remove partial upload");
        }
        return Err(err);
    }

    Ok(written)
}

/// `{unix nanos}{.ext}`; only an alphanumeric extension of the client name is kept
pub fn stored_file_name(client_name: Option<&str>) -> String {
    let stamp = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros().saturating_mul(1000));

    let extension = client_name
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    match extension {
        Some(ext) => format!("{}.{}", stamp, ext),
        None => stamp.to_string(),
    }
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> ServiceError {
    ServiceError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
}
