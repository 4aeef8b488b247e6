//! # scorebook-server
//!
//! HTTP API and static site host for the team statistics dataset.

mod config;
mod error;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use scorebook_core::{Dataset, DatasetStore};
use scorebook_sheet::parse_workbook_bytes;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::{ServerConfig, DEFAULT_LOG_FILTER};
pub use error::{AppError, AppResult};

/// File name suffixes accepted by the upload endpoint (compared lower-cased).
pub const WORKBOOK_EXTENSIONS: [&str; 4] = [".xlsx", ".xlsm", ".xltx", ".xltm"];

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DatasetStore>,
}

impl AppState {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }
}

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct Health {
    /// Server status ("ok" when healthy).
    pub status: String,
}

/// Successful upload response.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadSummary {
    pub message: String,
    pub matches: usize,
    pub players: usize,
}

/// Health check endpoint handler.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// Return the cached dataset.
pub async fn read_dataset(State(state): State<AppState>) -> AppResult<Response> {
    let dataset = state.store.get().ok_or(AppError::NotLoaded)?;
    Ok(Json(dataset.as_ref()).into_response())
}

fn is_workbook_name(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    WORKBOOK_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Replace the dataset with a freshly uploaded workbook.
///
/// The previous dataset stays in place unless the workbook parses,
/// validates and is written to disk. Parsing and the file write run on the
/// blocking pool.
pub async fn upload_workbook(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadSummary>> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        if !is_workbook_name(&file_name) {
            return Err(AppError::BadRequest(
                "Please upload an Excel .xlsx file.".to_string(),
            ));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((file_name, bytes));
        break;
    }

    let Some((file_name, bytes)) = upload else {
        return Err(AppError::BadRequest("No file uploaded.".to_string()));
    };

    let store = Arc::clone(&state.store);
    let source = file_name.clone();
    let dataset = tokio::task::spawn_blocking(move || -> AppResult<Arc<Dataset>> {
        let dataset = parse_workbook_bytes(&bytes).inspect_err(|err| {
            warn!(file = %source, error = %err, "Rejected workbook upload");
        })?;
        Ok(store.replace(dataset)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    info!(
        file = %file_name,
        matches = dataset.matches.len(),
        players = dataset.players.len(),
        "Dataset updated"
    );

    Ok(Json(UploadSummary {
        message: "Dataset updated successfully.".to_string(),
        matches: dataset.matches.len(),
        players: dataset.players.len(),
    }))
}

/// Create the application router.
///
/// This is separated from `main()` to allow testing.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/data", get(read_dataset))
        .route("/upload", post(upload_workbook))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes()))
        .with_state(state)
        .fallback_service(ServeDir::new(&config.site_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
