use crate::dto::common_dto::{ApiResponse, CreatedResponse};
use crate::dto::material_dto::CreateMaterialRequest;
use crate::models::material::Material;
use crate::repositories::material_repository::MaterialRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use validator::Validate;

pub struct MaterialController {
    repository: MaterialRepository,
}

impl MaterialController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: MaterialRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaterialRequest,
    ) -> Result<ApiResponse<CreatedResponse>, AppError> {
        request.validate()?;

        let id = self
            .repository
            .create(&request.name, request.quantity, &request.unit)
            .await?;

        Ok(ApiResponse::success_with_message(
            CreatedResponse { id },
            "Material adicionado!".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Material>, AppError> {
        self.repository.list().await
    }
}
