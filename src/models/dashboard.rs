//! Resumen para el dashboard
//!
//! Totales de ingresos, gastos y la ganancia calculada sobre el libro financiero.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::money;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_revenue: Decimal,
    pub total_expense: Decimal,
    pub profit: Decimal,
}

impl DashboardSummary {
    pub fn new(total_revenue: Decimal, total_expense: Decimal) -> Self {
        Self {
            total_revenue: money::normalize(total_revenue),
            total_expense: money::normalize(total_expense),
            profit: money::normalize(total_revenue - total_expense),
        }
    }

    /// Métricas formateadas como en la pantalla original
    pub fn formatted(&self) -> [(&'static str, String); 3] {
        [
            ("Total de Receitas", money::format_brl(self.total_revenue)),
            ("Total de Despesas", money::format_brl(self.total_expense)),
            ("Lucro", money::format_brl(self.profit)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_profit_can_be_negative() {
        let summary = DashboardSummary::new(dec!(50), dec!(80.5));
        assert_eq!(summary.profit, dec!(-30.50));
        assert_eq!(summary.formatted()[2].1, "R$ -30.50");
    }
}
