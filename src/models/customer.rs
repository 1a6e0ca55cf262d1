//! Modelo de Customer
//!
//! Mapea la tabla `clientes`. Los clientes nunca se actualizan ni se borran.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cliente de la oficina
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle: String,
    pub plate: String,
}

/// Opción del selector de clientes al abrir una orden de servicio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOption {
    pub id: i64,
    pub label: String,
}

impl CustomerOption {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            label: format!("{} (ID {})", name, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label() {
        let option = CustomerOption::new(7, "Ana");
        assert_eq!(option.label, "Ana (ID 7)");
    }
}
