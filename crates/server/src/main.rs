use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use server_api::{get_current_position, set_position, ApiContext, PositionStore};
use shared::{
    domain::{PositionRecord, PositionUpdate},
    error::{ApiError, ErrorCode},
    protocol::{get_current_position_route, healthz_route, set_position_route, SetPositionResponse},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

const MAX_REQUEST_BYTES: usize = 4 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let addr = settings.bind_addr()?;

    let state = AppState {
        api: ApiContext::new(PositionStore::new()),
    };
    let app = build_router(Arc::new(state));

    info!(%addr, "position service listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(healthz_route(), get(healthz).fallback(method_not_allowed))
        .route(
            get_current_position_route(),
            get(http_get_current_position).fallback(method_not_allowed),
        )
        .route(
            set_position_route(),
            post(http_set_position).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_get_current_position(State(state): State<Arc<AppState>>) -> Json<PositionRecord> {
    Json(get_current_position(&state.api).await)
}

async fn http_set_position(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PositionUpdate>, JsonRejection>,
) -> Result<Json<SetPositionResponse>, (StatusCode, Json<ApiError>)> {
    let Json(update) = payload.map_err(reject_payload)?;
    Ok(Json(set_position(&state.api, update).await))
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(
            ErrorCode::NotFound,
            format!("no route for {}", uri.path()),
        )),
    )
}

async fn method_not_allowed(method: Method, uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiError::new(
            ErrorCode::MethodNotAllowed,
            format!("{method} is not supported on {}", uri.path()),
        )),
    )
}

fn reject_payload(rejection: JsonRejection) -> (StatusCode, Json<ApiError>) {
    let status = rejection.status();
    let message = rejection.body_text();
    warn!(%status, error = %message, "rejected set_position payload");
    let error = if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::new(ErrorCode::PayloadTooLarge, message)
    } else {
        ApiError::validation(message)
    };
    (status, Json(error))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
