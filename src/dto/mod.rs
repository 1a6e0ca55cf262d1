pub mod common_dto;
pub mod customer_dto;
pub mod ledger_dto;
pub mod material_dto;
pub mod service_order_dto;
