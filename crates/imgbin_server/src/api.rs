//! Routes and handlers for the image host.

use crate::ServerConfig;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use imgbin_core::Upload;
use imgbin_store::{AddOutcome, SharedStore, read_image};
use tower_http::trace::TraceLayer;

/// Multipart form field carrying the uploaded file.
const UPLOAD_FIELD: &str = "filename";

/// Largest request body the server will buffer, matching the original's
/// parse bound. Whole uploads are held in memory; this is the policy knob.
const MAX_UPLOAD_BYTES: usize = 1 << 29;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Single-writer record store
    pub store: SharedStore,
    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Creates new application state.
    pub fn new(store: SharedStore, config: ServerConfig) -> Self {
        Self { store, config }
    }
}

/// Creates the image host router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/upload", post(upload_image))
        .route("/img/:id", get(fetch_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the configured landing page.
///
/// Read failure is logged and degrades to an empty page.
async fn landing_page(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.config.landing_page).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!(
                path = %state.config.landing_page.display(),
                error = %e,
                "Failed to serve landing page"
            );
            Html(String::new()).into_response()
        }
    }
}

/// Accept a multipart upload and redirect to its content-id URL.
///
/// Both a fresh upload and a byte-identical duplicate end in the same
/// `303 See Other` to `/img/{id}`; the duplicate path simply skips the save.
async fn upload_image(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(UPLOAD_FIELD) => {
                let name = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => {
                        upload = Some(Upload::new(name, bytes.to_vec(), &state.config.image_dir));
                    }
                    Err(e) => tracing::warn!(error = %e, "Failed to read uploaded file"),
                }
                break;
            }
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse multipart form");
                break;
            }
        }
    }

    let Some(upload) = upload else {
        return "No file uploaded!".into_response();
    };

    let id = match state.store.add_upload(upload).await {
        AddOutcome::Added(record) => record.id,
        AddOutcome::Duplicate(id) => id,
    };
    Redirect::to(&format!("/img/{id}")).into_response()
}

/// Return stored image bytes by content id.
async fn fetch_image(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(record) = state.store.get(&id).await else {
        return (StatusCode::NOT_FOUND, "ID does not match any stored image").into_response();
    };

    match read_image(&record).await {
        Ok(bytes) => (
            [(
                header::CONTENT_TYPE,
                format!("image/{}; charset=utf-8", record.format),
            )],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, name = %record.name, "Failed to read image");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read file, check console.",
            )
                .into_response()
        }
    }
}
