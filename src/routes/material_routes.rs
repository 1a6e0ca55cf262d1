use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use crate::controllers::material_controller::MaterialController;
use crate::dto::common_dto::{ApiResponse, CreatedResponse};
use crate::dto::material_dto::CreateMaterialRequest;
use crate::models::material::Material;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_material_router() -> Router<AppState> {
    Router::new().route("/", get(list_materials).post(create_material))
}

async fn create_material(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateMaterialRequest>,
) -> Result<Json<ApiResponse<CreatedResponse>>, AppError> {
    let controller = MaterialController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_materials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Material>>, AppError> {
    let controller = MaterialController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
