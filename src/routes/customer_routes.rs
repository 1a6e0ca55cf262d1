use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use crate::controllers::customer_controller::CustomerController;
use crate::dto::common_dto::{ApiResponse, CreatedResponse};
use crate::dto::customer_dto::CreateCustomerRequest;
use crate::models::customer::{Customer, CustomerOption};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/options", get(list_customer_options))
}

async fn create_customer(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateCustomerRequest>,
) -> Result<Json<ApiResponse<CreatedResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_customer_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerOption>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.options().await?;
    Ok(Json(response))
}
