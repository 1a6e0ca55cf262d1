//! Esquema de la base de la oficina
//!
//! Las cuatro tablas conservan los nombres de columnas del archivo
//! `oficina.db` original. No hay migraciones: el conjunto de columnas es fijo.

use sqlx::SqlitePool;
use tracing::info;

pub const CUSTOMERS_TABLE: &str = "clientes";
pub const SERVICE_ORDERS_TABLE: &str = "ordens_servico";
pub const MATERIALS_TABLE: &str = "materiais";
pub const LEDGER_TABLE: &str = "financeiro";

const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS clientes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nome TEXT,
        telefone TEXT,
        email TEXT,
        veiculo TEXT,
        placa TEXT
    )
"#;

const CREATE_SERVICE_ORDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS ordens_servico (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        cliente_id INTEGER,
        servico TEXT,
        valor REAL,
        status TEXT,
        data TEXT,
        FOREIGN KEY(cliente_id) REFERENCES clientes(id)
    )
"#;

const CREATE_MATERIALS: &str = r#"
    CREATE TABLE IF NOT EXISTS materiais (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nome TEXT,
        quantidade INTEGER,
        unidade TEXT
    )
"#;

const CREATE_LEDGER: &str = r#"
    CREATE TABLE IF NOT EXISTS financeiro (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        tipo TEXT,
        descricao TEXT,
        valor REAL,
        data TEXT
    )
"#;

/// Crear las tablas que falten. Seguro de llamar en cada arranque.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [
        CREATE_CUSTOMERS,
        CREATE_SERVICE_ORDERS,
        CREATE_MATERIALS,
        CREATE_LEDGER,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("✅ Esquema verificado: {} tablas", expected_tables().len());
    Ok(())
}

/// Tablas de usuario presentes en la base, en orden alfabético
pub async fn table_names(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await
}

/// Tablas que `ensure_schema` garantiza
pub fn expected_tables() -> [&'static str; 4] {
    [
        CUSTOMERS_TABLE,
        SERVICE_ORDERS_TABLE,
        MATERIALS_TABLE,
        LEDGER_TABLE,
    ]
}
