use crate::{
    api::{
        error::ApiError,
        response::{with_total_count, ApiResponse},
    },
    state::AppState,
    validation::{normalize_address, validate_block, validate_page, validate_tx_hash},
};
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

// GET /txs query parameters
#[derive(Deserialize)]
pub struct TransactionsQuery {
    block: Option<String>,
    a: Option<String>,
    p: Option<String>,
}

// GET /txsPending query parameters
#[derive(Deserialize)]
pub struct PendingTransactionsQuery {
    a: Option<String>,
    p: Option<String>,
}

// Create router with all routes
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/txs", get(list_transactions))
        .route("/tx/{hash}", get(get_transaction))
        .route("/txsPending", get(list_pending_transactions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "page_size": state.config.page_size,
        "max_page": state.config.max_page,
    }))
}

// GET /txs handler
async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionsQuery>,
) -> Result<Response, ApiError> {
    let block = validate_block(params.block.as_deref())?;
    let page = validate_page(params.p.as_deref())?;
    let address = normalize_address(params.a.as_deref());

    let list = state.transactions.list(block, address, page).await?;
    info!(
        "Returning {} of {} transactions (page {}/{})",
        list.transactions.len(),
        list.total_count,
        list.current_page,
        list.total_pages
    );

    let total_count = list.total_count;
    Ok(with_total_count(list, total_count))
}

// GET /tx/{hash} handler
async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(hash): Path<String>,
) -> Result<Response, ApiError> {
    let hash = validate_tx_hash(&hash)?;
    let detail = state.unifier.get_by_hash(hash).await?;

    Ok(ApiResponse { data: detail }.into_response())
}

// GET /txsPending handler
async fn list_pending_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PendingTransactionsQuery>,
) -> Result<Response, ApiError> {
    let page = validate_page(params.p.as_deref())?;
    let address = normalize_address(params.a.as_deref());

    let list = state.pending.list_pending(address, page).await?;

    let total_count = list.total_count;
    Ok(with_total_count(list, total_count))
}
