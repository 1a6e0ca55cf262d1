use crate::models::dashboard::DashboardSummary;
use crate::models::ledger::LedgerEntryType;
use crate::utils::validation::validate_non_negative_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para lanzar un ingreso o gasto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLedgerEntryRequest {
    #[serde(rename = "type")]
    pub entry_type: LedgerEntryType,
    #[serde(default)]
    pub description: String,
    #[validate(custom = "validate_non_negative_money")]
    pub value: Decimal,
}

// Query de movimientos recientes
#[derive(Debug, Default, Deserialize)]
pub struct RecentLedgerQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MetricResponse {
    pub label: &'static str,
    pub value: String,
}

// Response del dashboard: valores crudos y ya formateados
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_revenue: Decimal,
    pub total_expense: Decimal,
    pub profit: Decimal,
    pub metrics: Vec<MetricResponse>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(summary: DashboardSummary) -> Self {
        let metrics = summary
            .formatted()
            .into_iter()
            .map(|(label, value)| MetricResponse { label, value })
            .collect();

        Self {
            total_revenue: summary.total_revenue,
            total_expense: summary.total_expense,
            profit: summary.profit,
            metrics,
        }
    }
}
