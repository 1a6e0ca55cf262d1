//! Utilidades de validación
//!
//! Las restricciones que los formularios de la oficina aplican antes de
//! llegar al núcleo: valores monetarios y cantidades no negativos.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validar que un valor monetario no sea negativo
pub fn validate_non_negative_money(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que una cantidad de estoque no sea negativa
///
/// Los campos numéricos `Copy` llegan por valor desde `#[validate(custom)]`.
pub fn validate_non_negative_quantity(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_non_negative_money() {
        assert!(validate_non_negative_money(&dec!(0)).is_ok());
        assert!(validate_non_negative_money(&dec!(150.00)).is_ok());
        assert!(validate_non_negative_money(&dec!(-0.01)).is_err());
    }

    #[test]
    fn test_validate_non_negative_quantity() {
        assert!(validate_non_negative_quantity(0).is_ok());
        assert!(validate_non_negative_quantity(12).is_ok());
        assert!(validate_non_negative_quantity(-1).is_err());
    }
}
