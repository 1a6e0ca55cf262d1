use crate::models::service_order::{ServiceOrderDetails, ServiceOrderStatus};
use crate::utils::validation::validate_non_negative_money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para abrir una orden de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceOrderRequest {
    pub customer_id: i64,
    #[serde(default)]
    pub description: String,
    #[validate(custom = "validate_non_negative_money")]
    pub value: Decimal,
    pub status: ServiceOrderStatus,
}

// Fila de "Todas as Ordens" con el link de aviso al cliente
#[derive(Debug, Serialize)]
pub struct ServiceOrderListItem {
    pub order_id: i64,
    pub customer_name: String,
    pub phone: String,
    pub vehicle: String,
    pub plate: String,
    pub description: String,
    pub value: Decimal,
    pub status: ServiceOrderStatus,
    pub status_label: &'static str,
    pub date: NaiveDate,
    pub notification_link: String,
}

impl ServiceOrderListItem {
    pub fn new(order: ServiceOrderDetails, notification_link: String) -> Self {
        Self {
            order_id: order.order_id,
            status_label: order.status.label(),
            customer_name: order.customer_name,
            phone: order.phone,
            vehicle: order.vehicle,
            plate: order.plate,
            description: order.description,
            value: order.value,
            status: order.status,
            date: order.date,
            notification_link,
        }
    }
}
