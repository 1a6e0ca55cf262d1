//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, extracción del
//! cuerpo JSON, validación y conversión de valores monetarios.

pub mod errors;
pub mod extractors;
pub mod money;
pub mod validation;
