use crate::dto::common_dto::{ApiResponse, CreatedResponse};
use crate::dto::ledger_dto::{CreateLedgerEntryRequest, DashboardResponse, RecentLedgerQuery};
use crate::models::ledger::LedgerEntry;
use crate::repositories::ledger_repository::LedgerRepository;
use crate::services::reporting_service::ReportingService;
use crate::utils::errors::{bad_request_error, AppError};
use sqlx::SqlitePool;
use validator::Validate;

pub struct LedgerController {
    repository: LedgerRepository,
    reporting: ReportingService,
}

impl LedgerController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: LedgerRepository::new(pool.clone()),
            reporting: ReportingService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateLedgerEntryRequest,
    ) -> Result<ApiResponse<CreatedResponse>, AppError> {
        request.validate()?;

        let id = self
            .repository
            .create(request.entry_type, &request.description, request.value)
            .await?;

        Ok(ApiResponse::success_with_message(
            CreatedResponse { id },
            "Lançamento registrado!".to_string(),
        ))
    }

    pub async fn recent(
        &self,
        query: RecentLedgerQuery,
        default_limit: i64,
    ) -> Result<Vec<LedgerEntry>, AppError> {
        let limit = query.limit.unwrap_or(default_limit);
        if limit <= 0 {
            return Err(bad_request_error("limit must be a positive number"));
        }

        self.repository.list_recent(limit).await
    }

    pub async fn dashboard(&self) -> Result<ApiResponse<DashboardResponse>, AppError> {
        let summary = self.reporting.dashboard_summary().await?;
        Ok(ApiResponse::success(summary.into()))
    }
}
