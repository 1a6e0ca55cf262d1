use crate::models::customer::{Customer, CustomerOption};
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::debug;

pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        phone: &str,
        email: &str,
        vehicle: &str,
        plate: &str,
    ) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO clientes (nome, telefone, email, veiculo, placa) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(phone)
        .bind(email)
        .bind(vehicle)
        .bind(plate)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Cliente {} cadastrado con id {}", name, id);
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, nome AS name, telefone AS phone, email, veiculo AS vehicle, placa AS plate
            FROM clientes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn picker_options(&self) -> Result<Vec<CustomerOption>, AppError> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, nome FROM clientes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| CustomerOption::new(id, &name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_pool;

    #[tokio::test]
    async fn test_create_then_list_returns_inputs() {
        let repository = CustomerRepository::new(memory_pool().await);

        let id = repository
            .create("Ana", "5599999999", "a@x.com", "Civic", "ABC123")
            .await
            .unwrap();

        let customers = repository.list().await.unwrap();
        assert_eq!(
            customers,
            vec![Customer {
                id,
                name: "Ana".to_string(),
                phone: "5599999999".to_string(),
                email: "a@x.com".to_string(),
                vehicle: "Civic".to_string(),
                plate: "ABC123".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let repository = CustomerRepository::new(memory_pool().await);

        let first = repository.create("Ana", "1", "", "Civic", "AAA").await.unwrap();
        let second = repository.create("Bruno", "2", "", "Gol", "BBB").await.unwrap();

        assert!(second > first);
        let ids: Vec<i64> = repository.list().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn test_picker_options_labels() {
        let repository = CustomerRepository::new(memory_pool().await);
        let id = repository.create("Ana", "1", "", "Civic", "AAA").await.unwrap();

        let options = repository.picker_options().await.unwrap();
        assert_eq!(options, vec![CustomerOption::new(id, "Ana")]);
        assert_eq!(options[0].label, format!("Ana (ID {})", id));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repository = CustomerRepository::new(memory_pool().await);
        assert!(repository.list().await.unwrap().is_empty());
    }
}
