//! Services module
//!
//! Este módulo contiene la lógica de negocio que no es acceso directo a una tabla:
//! los agregados financieros y la composición de avisos al cliente.

pub mod notification_service;
pub mod reporting_service;

pub use notification_service::NotificationService;
pub use reporting_service::ReportingService;
