use crate::dto::common_dto::{ApiResponse, CreatedResponse};
use crate::dto::customer_dto::CreateCustomerRequest;
use crate::models::customer::{Customer, CustomerOption};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<ApiResponse<CreatedResponse>, AppError> {
        let id = self
            .repository
            .create(
                &request.name,
                &request.phone,
                &request.email,
                &request.vehicle,
                &request.plate,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CreatedResponse { id },
            "Cliente cadastrado com sucesso!".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.list().await
    }

    pub async fn options(&self) -> Result<Vec<CustomerOption>, AppError> {
        self.repository.picker_options().await
    }
}
