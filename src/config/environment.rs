//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    /// Cantidad de movimientos en el listado financiero reciente
    pub recent_ledger_limit: i64,
    /// Prefijo internacional para los links de WhatsApp
    pub whatsapp_country_code: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
            recent_ledger_limit: 10,
            whatsapp_country_code: "55".to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| split_origins(&origins))
                .unwrap_or(defaults.cors_origins),
            log_level: parse_var("LOG_LEVEL", defaults.log_level)?,
            recent_ledger_limit: positive_limit(
                "RECENT_LEDGER_LIMIT",
                parse_var("RECENT_LEDGER_LIMIT", defaults.recent_ledger_limit)?,
            )?,
            whatsapp_country_code: env::var("WHATSAPP_COUNTRY_CODE")
                .unwrap_or(defaults.whatsapp_country_code),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

fn positive_limit(name: &str, value: i64) -> Result<i64> {
    if value <= 0 {
        bail!("{} must be greater than zero, got {}", name, value);
    }
    Ok(value)
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.recent_ledger_limit, 10);
        assert_eq!(config.whatsapp_country_code, "55");
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }

    #[test]
    fn test_split_origins() {
        let origins = split_origins("http://a.local, http://b.local,,");
        assert_eq!(origins, vec!["http://a.local", "http://b.local"]);
    }

    #[test]
    fn test_positive_limit() {
        assert_eq!(positive_limit("RECENT_LEDGER_LIMIT", 10).unwrap(), 10);
        assert!(positive_limit("RECENT_LEDGER_LIMIT", 0).is_err());
        assert!(positive_limit("RECENT_LEDGER_LIMIT", -5).is_err());
    }

    #[test]
    fn test_from_env_rejects_non_positive_ledger_limit() {
        env::set_var("RECENT_LEDGER_LIMIT", "0");
        let result = EnvironmentConfig::from_env();
        env::remove_var("RECENT_LEDGER_LIMIT");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("RECENT_LEDGER_LIMIT"));
    }

    #[test]
    fn test_parse_var_uses_default_when_missing() {
        let value: u16 = parse_var("BODY_SHOP_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
