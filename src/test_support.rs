#![cfg(test)]
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;
use crate::database::schema;

// Cada test recibe su propia base en memoria con el esquema creado
pub async fn memory_pool() -> SqlitePool {
    let pool = DatabaseConfig::in_memory()
        .create_pool()
        .await
        .expect("open in-memory database");
    schema::ensure_schema(&pool).await.expect("create schema");
    pool
}
