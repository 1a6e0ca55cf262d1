use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use crate::controllers::service_order_controller::ServiceOrderController;
use crate::dto::common_dto::{ApiResponse, CreatedResponse};
use crate::dto::service_order_dto::{CreateServiceOrderRequest, ServiceOrderListItem};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

// POST abre una orden ("Ordem de Serviço"); GET es "Todas as Ordens"
pub fn create_service_order_router() -> Router<AppState> {
    Router::new().route("/", get(list_service_orders).post(create_service_order))
}

fn controller(state: &AppState) -> ServiceOrderController {
    ServiceOrderController::new(state.pool.clone(), &state.config.whatsapp_country_code)
}

async fn create_service_order(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateServiceOrderRequest>,
) -> Result<Json<ApiResponse<CreatedResponse>>, AppError> {
    let response = controller(&state).create(request).await?;
    Ok(Json(response))
}

async fn list_service_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceOrderListItem>>, AppError> {
    let response = controller(&state).list_all().await?;
    Ok(Json(response))
}
