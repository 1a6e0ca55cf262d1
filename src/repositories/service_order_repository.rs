use crate::models::service_order::{
    ServiceOrderDetails, ServiceOrderDetailsRow, ServiceOrderStatus,
};
use crate::utils::errors::AppError;
use crate::utils::money;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use tracing::debug;

pub struct ServiceOrderRepository {
    pool: SqlitePool,
}

impl ServiceOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registrar una orden con la fecha local de hoy.
    /// El cliente no se valida: una orden puede apuntar a un id inexistente.
    pub async fn create(
        &self,
        customer_id: i64,
        description: &str,
        value: Decimal,
        status: ServiceOrderStatus,
    ) -> Result<i64, AppError> {
        self.create_on(customer_id, description, value, status, Local::now().date_naive())
            .await
    }

    pub(crate) async fn create_on(
        &self,
        customer_id: i64,
        description: &str,
        value: Decimal,
        status: ServiceOrderStatus,
        date: NaiveDate,
    ) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO ordens_servico (cliente_id, servico, valor, status, data) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(customer_id)
        .bind(description)
        .bind(money::to_storage(value)?)
        .bind(status)
        .bind(date)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Orden de servicio {} registrada para cliente {}", id, customer_id);
        Ok(id)
    }

    /// Órdenes unidas a sus clientes, las más recientes primero
    pub async fn list_joined(&self) -> Result<Vec<ServiceOrderDetails>, AppError> {
        let rows = sqlx::query_as::<_, ServiceOrderDetailsRow>(
            r#"
            SELECT o.id AS order_id,
                   c.nome AS customer_name,
                   c.telefone AS phone,
                   c.veiculo AS vehicle,
                   c.placa AS plate,
                   o.servico AS description,
                   o.valor AS value,
                   o.status AS status,
                   o.data AS date
            FROM ordens_servico o
            INNER JOIN clientes c ON c.id = o.cliente_id
            ORDER BY o.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ServiceOrderDetails::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::customer_repository::CustomerRepository;
    use crate::test_support::memory_pool;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_order_for_ana_is_listed_with_customer_data() {
        let pool = memory_pool().await;
        let customers = CustomerRepository::new(pool.clone());
        let orders = ServiceOrderRepository::new(pool);

        let ana = customers
            .create("Ana", "5599999999", "a@x.com", "Civic", "ABC123")
            .await
            .unwrap();
        let order_id = orders
            .create(ana, "Pintura do para-choque", dec!(150.00), ServiceOrderStatus::Waiting)
            .await
            .unwrap();

        let listed = orders.list_joined().await.unwrap();
        assert_eq!(listed.len(), 1);

        let order = &listed[0];
        assert_eq!(order.order_id, order_id);
        assert_eq!(order.customer_name, "Ana");
        assert_eq!(order.phone, "5599999999");
        assert_eq!(order.vehicle, "Civic");
        assert_eq!(order.plate, "ABC123");
        assert_eq!(order.value, dec!(150.00));
        assert_eq!(order.value.to_string(), "150.00");
        assert_eq!(order.status, ServiceOrderStatus::Waiting);
        assert_eq!(order.date, Local::now().date_naive());
    }

    #[tokio::test]
    async fn test_list_joined_is_most_recent_first() {
        let pool = memory_pool().await;
        let customers = CustomerRepository::new(pool.clone());
        let orders = ServiceOrderRepository::new(pool);
        let ana = customers.create("Ana", "1", "", "Civic", "AAA").await.unwrap();

        let first = orders
            .create(ana, "Polimento", dec!(80), ServiceOrderStatus::Finished)
            .await
            .unwrap();
        let second = orders
            .create(ana, "Funilaria", dec!(420.5), ServiceOrderStatus::InProgress)
            .await
            .unwrap();

        let ids: Vec<i64> = orders
            .list_joined()
            .await
            .unwrap()
            .iter()
            .map(|o| o.order_id)
            .collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn test_order_for_missing_customer_is_accepted_but_not_joined() {
        let pool = memory_pool().await;
        let orders = ServiceOrderRepository::new(pool.clone());

        let id = orders
            .create(999, "Retoque", dec!(35), ServiceOrderStatus::Waiting)
            .await
            .unwrap();
        assert!(id > 0);

        let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ordens_servico")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, 1);
        assert!(orders.list_joined().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_is_stored_with_original_labels() {
        let pool = memory_pool().await;
        let orders = ServiceOrderRepository::new(pool.clone());
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        orders
            .create_on(1, "Lataria", dec!(10), ServiceOrderStatus::InProgress, date)
            .await
            .unwrap();

        let (status, stored_date): (String, String) =
            sqlx::query_as("SELECT status, data FROM ordens_servico")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(status, "Em andamento");
        assert_eq!(stored_date, "2024-03-09");
    }
}
