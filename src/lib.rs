//! Sistema de la oficina de lataria e pintura
//!
//! Registro de clientes, órdenes de servicio, materiales y movimientos
//! financieros sobre un archivo SQLite, expuesto como API JSON.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use routes::create_router;
pub use state::AppState;
