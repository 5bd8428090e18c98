use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use log::error;
use serde::{Deserialize, Serialize};

use crate::service::{TranscriptError, TranscriptService};
use crate::{TranscriptRequest, TranscriptResult};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared application state; read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub service: TranscriptService,
    pub default_lang: Option<String>,
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/transcript", post(transcript))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Deserialize)]
struct TranscriptQuery {
    url: String,
    lang: Option<String>,
}

async fn transcript(
    State(state): State<AppState>,
    Json(query): Json<TranscriptQuery>,
) -> Result<Json<TranscriptResult>, TranscriptError> {
    let request = TranscriptRequest {
        raw_input: query.url,
        preferred_language: query.lang.or_else(|| state.default_lang.clone()),
    };
    let result = state.service.fetch(&request).await?;
    Ok(Json(result))
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for TranscriptError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TranscriptError::InvalidInput => (StatusCode::BAD_REQUEST, self.to_string()),
            TranscriptError::Unavailable => (StatusCode::NOT_FOUND, self.to_string()),
            // Detail is logged server-side, never sent to the client
            TranscriptError::Provider(report) => {
                error!("Transcript fetch failed: {report:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server error fetching transcript".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
