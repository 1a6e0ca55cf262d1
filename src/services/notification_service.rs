//! Mensajes de aviso al cliente
//!
//! Arma el texto que se envía por WhatsApp desde el listado de órdenes.
//! Los teléfonos se asumen sólo dígitos y sin código de país.

use crate::models::service_order::ServiceOrderDetails;
use crate::utils::money;

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

pub struct NotificationService {
    country_code: String,
}

impl NotificationService {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
        }
    }

    pub fn compose_message(&self, order: &ServiceOrderDetails) -> String {
        format!(
            "Olá {}! Atualização do seu veículo {} (placa {}).\n\
             Serviço: {}\n\
             Valor: {}\n\
             Status: {}\n\
             Data: {}",
            order.customer_name,
            order.vehicle,
            order.plate,
            order.description,
            money::format_brl(order.value),
            order.status.label(),
            order.date.format("%d/%m/%Y"),
        )
    }

    pub fn whatsapp_link(&self, phone: &str, message: &str) -> String {
        format!(
            "{}{}{}?text={}",
            WHATSAPP_BASE_URL,
            self.country_code,
            phone,
            urlencoding::encode(message)
        )
    }

    /// Link listo para abrir la conversación con el cliente de la orden
    pub fn link_for(&self, order: &ServiceOrderDetails) -> String {
        self.whatsapp_link(&order.phone, &self.compose_message(order))
    }
}
