use crate::dto::common_dto::{ApiResponse, CreatedResponse};
use crate::dto::service_order_dto::{CreateServiceOrderRequest, ServiceOrderListItem};
use crate::repositories::service_order_repository::ServiceOrderRepository;
use crate::services::notification_service::NotificationService;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use validator::Validate;

pub struct ServiceOrderController {
    repository: ServiceOrderRepository,
    notifications: NotificationService,
}

impl ServiceOrderController {
    pub fn new(pool: SqlitePool, country_code: &str) -> Self {
        Self {
            repository: ServiceOrderRepository::new(pool),
            notifications: NotificationService::new(country_code),
        }
    }

    pub async fn create(
        &self,
        request: CreateServiceOrderRequest,
    ) -> Result<ApiResponse<CreatedResponse>, AppError> {
        request.validate()?;

        // el cliente no se verifica: se guarda el id tal como llega
        let id = self
            .repository
            .create(
                request.customer_id,
                &request.description,
                request.value,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CreatedResponse { id },
            "Ordem de serviço cadastrada!".to_string(),
        ))
    }

    pub async fn list_all(&self) -> Result<Vec<ServiceOrderListItem>, AppError> {
        let orders = self.repository.list_joined().await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let link = self.notifications.link_for(&order);
                ServiceOrderListItem::new(order, link)
            })
            .collect())
    }
}
