pub mod customer_repository;
pub mod ledger_repository;
pub mod material_repository;
pub mod service_order_repository;

pub use customer_repository::CustomerRepository;
pub use ledger_repository::LedgerRepository;
pub use material_repository::MaterialRepository;
pub use service_order_repository::ServiceOrderRepository;
