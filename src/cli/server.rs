//! HTTP server mode for REST access to pagination

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::session::Session;
use crate::types::{parse_int_arg, DEFAULT_INDEX, DEFAULT_PAGE};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Page size used when a request omits `page_size`
    pub default_page_size: i64,
}

/// App state shared across handlers
struct AppState {
    session: Arc<Session>,
    default_page_size: i64,
}

type Params = Query<HashMap<String, String>>;

/// Error wrapper mapping crate errors onto HTTP statuses
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_invalid_argument() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self.0, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Build the router over a session
pub fn router(session: Arc<Session>, default_page_size: i64) -> Router {
    let state = AppState {
        session,
        default_page_size,
    };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/pages", get(get_page))
        .route("/hyper", get(get_hyper))
        .route("/hyper_index", get(get_hyper_index))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, session: Session) -> Result<()> {
    // Load before accepting requests so handlers never block on file I/O
    let session = Arc::new(session);
    let records = session.dataset()?.len();
    session.indexed_dataset()?;

    let app = router(Arc::clone(&session), config.default_page_size);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| Error::config(format!("Invalid bind address: {e}")))?;
    tracing::info!(records, "Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Read an integer query parameter, falling back to a default when absent
fn int_param(params: &HashMap<String, String>, name: &str, default: i64) -> Result<i64> {
    params
        .get(name)
        .map_or(Ok(default), |text| parse_int_arg(name, text))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Offset page: `GET /pages?page=&page_size=`
async fn get_page(
    State(state): State<Arc<AppState>>,
    Query(params): Params,
) -> std::result::Result<Response, ApiError> {
    let page = int_param(&params, "page", DEFAULT_PAGE)?;
    let page_size = int_param(&params, "page_size", state.default_page_size)?;

    let records = state.session.get_page(page, page_size)?;
    Ok(Json(records).into_response())
}

/// Hypermedia page: `GET /hyper?page=&page_size=`
async fn get_hyper(
    State(state): State<Arc<AppState>>,
    Query(params): Params,
) -> std::result::Result<Response, ApiError> {
    let page = int_param(&params, "page", DEFAULT_PAGE)?;
    let page_size = int_param(&params, "page_size", state.default_page_size)?;

    let hyper = state.session.get_hyper(page, page_size)?;
    Ok(Json(hyper).into_response())
}

/// Deletion-resilient page: `GET /hyper_index?index=&page_size=`
async fn get_hyper_index(
    State(state): State<Arc<AppState>>,
    Query(params): Params,
) -> std::result::Result<Response, ApiError> {
    let index = int_param(&params, "index", DEFAULT_INDEX)?;
    let page_size = int_param(&params, "page_size", state.default_page_size)?;

    let hyper = state.session.get_hyper_index(index, page_size)?;
    Ok(Json(hyper).into_response())
}
