//! Conversión de valores monetarios
//!
//! SQLite guarda los valores como REAL; dentro de la aplicación se manejan
//! como `Decimal` con dos decimales.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::utils::errors::{internal_error, AppError};

/// Escala usada para todos los valores monetarios
pub const MONEY_SCALE: u32 = 2;

/// Normalizar un decimal a dos casas
pub fn normalize(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(MONEY_SCALE);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Convertir el REAL almacenado a `Decimal`
pub fn from_storage(value: f64) -> Result<Decimal, AppError> {
    Decimal::from_f64_retain(value)
        .map(normalize)
        .ok_or_else(|| internal_error(&format!("Invalid stored money value: {}", value)))
}

/// Convertir un `Decimal` al REAL que se guarda en la base
pub fn to_storage(value: Decimal) -> Result<f64, AppError> {
    normalize(value)
        .to_f64()
        .ok_or_else(|| AppError::BadRequest(format!("Invalid money value: {}", value)))
}

/// Formato "R$ 150.00" usado en el dashboard y en los mensajes
pub fn format_brl(value: Decimal) -> String {
    format!("R$ {}", normalize(value))
}
