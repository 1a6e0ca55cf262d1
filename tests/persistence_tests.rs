use body_shop::config::DatabaseConfig;
use body_shop::database::{schema, DatabaseConnection};
use body_shop::models::{LedgerEntryType, ServiceOrderStatus};
use body_shop::repositories::{CustomerRepository, LedgerRepository, ServiceOrderRepository};
use body_shop::services::ReportingService;
use rust_decimal_macros::dec;
use std::time::Duration;

fn file_config(dir: &tempfile::TempDir) -> DatabaseConfig {
    DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("oficina.db").display()),
        max_connections: 2,
        acquire_timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn test_database_file_is_created_and_reopened() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    let first = DatabaseConnection::new(&config).await.unwrap();
    let customers = CustomerRepository::new(first.pool().clone());
    let ana = customers
        .create("Ana", "5599999999", "a@x.com", "Civic", "ABC123")
        .await
        .unwrap();
    ServiceOrderRepository::new(first.pool().clone())
        .create(ana, "Funilaria", dec!(150.00), ServiceOrderStatus::Waiting)
        .await
        .unwrap();
    first.close().await;

    assert!(dir.path().join("oficina.db").exists());

    // segundo arranque sobre el mismo archivo: el esquema ya existe
    let second = DatabaseConnection::new(&config).await.unwrap();
    let tables = schema::table_names(second.pool()).await.unwrap();
    assert_eq!(tables.len(), 4);

    let orders = ServiceOrderRepository::new(second.pool().clone())
        .list_joined()
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].customer_name, "Ana");
    assert_eq!(orders[0].value, dec!(150.00));
    second.close().await;
}

#[tokio::test]
async fn test_rows_written_by_the_original_layout_are_readable() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    let db = DatabaseConnection::new(&config).await.unwrap();

    sqlx::query("INSERT INTO financeiro (tipo, descricao, valor, data) VALUES ('Receita', 'OS', 200.0, '2024-05-01')")
        .execute(db.pool())
        .await
        .unwrap();
    sqlx::query("INSERT INTO financeiro (tipo, descricao, valor, data) VALUES ('Despesa', 'Tinta', 50.0, '2024-05-02')")
        .execute(db.pool())
        .await
        .unwrap();

    let entries = LedgerRepository::new(db.pool().clone())
        .list_recent(10)
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].entry_type, LedgerEntryType::Expense);
    assert_eq!(entries[0].date.to_string(), "2024-05-02");

    let profit = ReportingService::new(db.pool().clone())
        .compute_profit()
        .await
        .unwrap();
    assert_eq!(profit, dec!(150.00));
    db.close().await;
}
