//! Módulo de base de datos
//!
//! Maneja la conexión y el esquema de SQLite

pub mod connection;
pub mod schema;

pub use connection::DatabaseConnection;
