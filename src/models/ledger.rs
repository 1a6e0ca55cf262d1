//! Modelo de LedgerEntry
//!
//! Mapea la tabla `financeiro`: ingresos y gastos, sólo inserción.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

use crate::utils::errors::AppError;
use crate::utils::money;

/// Tipo de movimiento - guardado con las etiquetas del sistema original
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum LedgerEntryType {
    #[sqlx(rename = "Receita")]
    Revenue,
    #[sqlx(rename = "Despesa")]
    Expense,
}

impl LedgerEntryType {
    pub fn label(&self) -> &'static str {
        match self {
            LedgerEntryType::Revenue => "Receita",
            LedgerEntryType::Expense => "Despesa",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub id: i64,
    pub entry_type: LedgerEntryType,
    pub description: String,
    pub value: Decimal,
    pub date: NaiveDate,
}

#[derive(Debug, FromRow)]
pub struct LedgerEntryRow {
    pub id: i64,
    pub entry_type: LedgerEntryType,
    pub description: String,
    pub value: f64,
    pub date: NaiveDate,
}

impl TryFrom<LedgerEntryRow> for LedgerEntry {
    type Error = AppError;

    fn try_from(row: LedgerEntryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            entry_type: row.entry_type,
            description: row.description,
            value: money::from_storage(row.value)?,
            date: row.date,
        })
    }
}
