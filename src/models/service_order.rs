//! Modelo de ServiceOrder
//!
//! Mapea la tabla `ordens_servico`. El estado se fija al crear la orden y
//! no existe operación de actualización.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

use crate::utils::errors::AppError;
use crate::utils::money;

/// Estado de la orden - guardado con las etiquetas del sistema original
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum ServiceOrderStatus {
    #[sqlx(rename = "Aguardando")]
    Waiting,
    #[sqlx(rename = "Em andamento")]
    InProgress,
    #[sqlx(rename = "Finalizada")]
    Finished,
}

impl ServiceOrderStatus {
    /// Etiqueta mostrada al cliente
    pub fn label(&self) -> &'static str {
        match self {
            ServiceOrderStatus::Waiting => "Aguardando",
            ServiceOrderStatus::InProgress => "Em andamento",
            ServiceOrderStatus::Finished => "Finalizada",
        }
    }
}

/// Fila del listado "Todas as Ordens": orden unida a su cliente
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOrderDetails {
    pub order_id: i64,
    pub customer_name: String,
    pub phone: String,
    pub vehicle: String,
    pub plate: String,
    pub description: String,
    pub value: Decimal,
    pub status: ServiceOrderStatus,
    pub date: NaiveDate,
}

/// Fila tal como sale de SQLite, con el valor en REAL
#[derive(Debug, FromRow)]
pub struct ServiceOrderDetailsRow {
    pub order_id: i64,
    pub customer_name: String,
    pub phone: String,
    pub vehicle: String,
    pub plate: String,
    pub description: String,
    pub value: f64,
    pub status: ServiceOrderStatus,
    pub date: NaiveDate,
}

impl TryFrom<ServiceOrderDetailsRow> for ServiceOrderDetails {
    type Error = AppError;

    fn try_from(row: ServiceOrderDetailsRow) -> Result<Self, Self::Error> {
        Ok(Self {
            order_id: row.order_id,
            customer_name: row.customer_name,
            phone: row.phone,
            vehicle: row.vehicle,
            plate: row.plate,
            description: row.description,
            value: money::from_storage(row.value)?,
            status: row.status,
            date: row.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        let labels: Vec<&str> = [
            ServiceOrderStatus::Waiting,
            ServiceOrderStatus::InProgress,
            ServiceOrderStatus::Finished,
        ]
        .iter()
        .map(|s| s.label())
        .collect();
        assert_eq!(labels, vec!["Aguardando", "Em andamento", "Finalizada"]);
    }

    #[test]
    fn test_status_json_names() {
        let json = serde_json::to_string(&ServiceOrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let parsed: ServiceOrderStatus = serde_json::from_str("\"waiting\"").unwrap();
        assert_eq!(parsed, ServiceOrderStatus::Waiting);
    }
}
