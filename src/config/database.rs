//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de SQLite con SQLx.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Archivo usado cuando no hay DATABASE_URL
pub const DEFAULT_DATABASE_URL: &str = "sqlite://oficina.db";

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    /// Leer DATABASE_URL y DATABASE_MAX_CONNECTIONS del entorno
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                anyhow::anyhow!("DATABASE_MAX_CONNECTIONS must be a number, got '{}': {}", raw, e)
            })?,
            Err(_) => defaults.max_connections,
        };

        Ok(Self {
            url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections,
            acquire_timeout: defaults.acquire_timeout,
        })
    }

    /// Base en memoria: una sola conexión para que todas las consultas vean los mismos datos
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    /// Opciones de conexión: crea el archivo si falta y no aplica claves foráneas
    pub fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        Ok(SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(false))
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            // en memoria la base vive mientras viva la conexión
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(self.connect_options()?)
            .await
    }
}
