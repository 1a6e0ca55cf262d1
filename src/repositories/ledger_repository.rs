use crate::models::ledger::{LedgerEntry, LedgerEntryRow, LedgerEntryType};
use crate::utils::errors::AppError;
use crate::utils::money;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use tracing::debug;

pub struct LedgerRepository {
    pool: SqlitePool,
}

impl LedgerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registrar un movimiento con la fecha local de hoy
    pub async fn create(
        &self,
        entry_type: LedgerEntryType,
        description: &str,
        value: Decimal,
    ) -> Result<i64, AppError> {
        self.create_on(entry_type, description, value, Local::now().date_naive())
            .await
    }

    pub(crate) async fn create_on(
        &self,
        entry_type: LedgerEntryType,
        description: &str,
        value: Decimal,
        date: NaiveDate,
    ) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO financeiro (tipo, descricao, valor, data) VALUES (?, ?, ?, ?)",
        )
        .bind(entry_type)
        .bind(description)
        .bind(money::to_storage(value)?)
        .bind(date)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Movimiento {} ({}) registrado: {}", id, entry_type.label(), value);
        Ok(id)
    }

    /// Últimos movimientos por fecha, como máximo `limit`
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<LedgerEntry>, AppError> {
        let rows = sqlx::query_as::<_, LedgerEntryRow>(
            r#"
            SELECT id, tipo AS entry_type, descricao AS description, valor AS value, data AS date
            FROM financeiro
            ORDER BY data DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(LedgerEntry::try_from).collect()
    }

    /// Suma de los valores de un tipo; 0 cuando no hay movimientos
    pub async fn total_by_type(&self, entry_type: LedgerEntryType) -> Result<Decimal, AppError> {
        // TOTAL devuelve 0.0 sin filas, a diferencia de SUM
        let total: f64 = sqlx::query_scalar("SELECT TOTAL(valor) FROM financeiro WHERE tipo = ?")
            .bind(entry_type)
            .fetch_one(&self.pool)
            .await?;

        money::from_storage(total)
    }
}
