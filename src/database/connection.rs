//! Conexión a SQLite
//!
//! Abre el pool una vez al arrancar, garantiza el esquema y lo cierra al apagar.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::schema;

/// Manejador de la base de datos que se inyecta en el estado de la aplicación
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Abrir el pool y crear las tablas que falten
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("🗄️ Abriendo base de datos {}", config.url);

        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("Error abriendo la base de datos {}", config.url))?;

        schema::ensure_schema(&pool)
            .await
            .context("Error creando el esquema de la base de datos")?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Cerrar todas las conexiones del pool
    pub async fn close(&self) {
        self.pool.close().await;
        info!("🗄️ Base de datos cerrada");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_runs_schema() {
        let db = DatabaseConnection::new(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        let tables = schema::table_names(db.pool()).await.unwrap();
        assert_eq!(tables.len(), 4);
        db.close().await;
        assert!(db.pool().is_closed());
    }
}
