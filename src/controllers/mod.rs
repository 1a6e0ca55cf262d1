pub mod customer_controller;
pub mod ledger_controller;
pub mod material_controller;
pub mod service_order_controller;
