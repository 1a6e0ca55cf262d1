//! Agregados del libro financiero
//!
//! Se recalculan en cada llamada; el volumen de una oficina no justifica cache.

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use crate::models::dashboard::DashboardSummary;
use crate::models::ledger::LedgerEntryType;
use crate::repositories::ledger_repository::LedgerRepository;
use crate::utils::errors::AppError;

pub struct ReportingService {
    ledger: LedgerRepository,
}

impl ReportingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            ledger: LedgerRepository::new(pool),
        }
    }

    pub async fn total_by_type(&self, entry_type: LedgerEntryType) -> Result<Decimal, AppError> {
        self.ledger.total_by_type(entry_type).await
    }

    /// Ingresos menos gastos
    pub async fn compute_profit(&self) -> Result<Decimal, AppError> {
        let revenue = self.total_by_type(LedgerEntryType::Revenue).await?;
        let expense = self.total_by_type(LedgerEntryType::Expense).await?;
        Ok(revenue - expense)
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, AppError> {
        let revenue = self.total_by_type(LedgerEntryType::Revenue).await?;
        let expense = self.total_by_type(LedgerEntryType::Expense).await?;
        Ok(DashboardSummary::new(revenue, expense))
    }
}
