//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean las cuatro tablas
//! de la oficina y los resúmenes calculados sobre ellas.

pub mod customer;
pub mod dashboard;
pub mod ledger;
pub mod material;
pub mod service_order;

pub use customer::{Customer, CustomerOption};
pub use dashboard::DashboardSummary;
pub use ledger::{LedgerEntry, LedgerEntryType};
pub use material::Material;
pub use service_order::{ServiceOrderDetails, ServiceOrderStatus};
