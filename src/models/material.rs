//! Modelo de Material
//!
//! Mapea la tabla `materiais`. La cantidad se fija al cargar el material;
//! no hay descuento por consumo.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub unit: String,
}
