use crate::models::material::Material;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::debug;

pub struct MaterialRepository {
    pool: SqlitePool,
}

impl MaterialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, quantity: i64, unit: &str) -> Result<i64, AppError> {
        let result =
            sqlx::query("INSERT INTO materiais (nome, quantidade, unidade) VALUES (?, ?, ?)")
                .bind(name)
                .bind(quantity)
                .bind(unit)
                .execute(&self.pool)
                .await?;

        let id = result.last_insert_rowid();
        debug!("Material {} agregado: {} {}", name, quantity, unit);
        Ok(id)
    }

    /// Estoque actual
    pub async fn list(&self) -> Result<Vec<Material>, AppError> {
        let materials = sqlx::query_as::<_, Material>(
            "SELECT id, nome AS name, quantidade AS quantity, unidade AS unit FROM materiais ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(materials)
    }
}
