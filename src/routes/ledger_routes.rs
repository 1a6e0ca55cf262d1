use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use crate::controllers::ledger_controller::LedgerController;
use crate::dto::common_dto::{ApiResponse, CreatedResponse};
use crate::dto::ledger_dto::{CreateLedgerEntryRequest, DashboardResponse, RecentLedgerQuery};
use crate::models::ledger::LedgerEntry;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_ledger_router() -> Router<AppState> {
    Router::new().route("/", get(list_recent_entries).post(create_entry))
}

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

async fn create_entry(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateLedgerEntryRequest>,
) -> Result<Json<ApiResponse<CreatedResponse>>, AppError> {
    let controller = LedgerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_recent_entries(
    State(state): State<AppState>,
    Query(query): Query<RecentLedgerQuery>,
) -> Result<Json<Vec<LedgerEntry>>, AppError> {
    let controller = LedgerController::new(state.pool.clone());
    let response = controller
        .recent(query, state.config.recent_ledger_limit)
        .await?;
    Ok(Json(response))
}

async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardResponse>>, AppError> {
    let controller = LedgerController::new(state.pool.clone());
    let response = controller.dashboard().await?;
    Ok(Json(response))
}
