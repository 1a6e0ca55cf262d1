use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use body_shop::config::{DatabaseConfig, EnvironmentConfig};
use body_shop::database::DatabaseConnection;
use body_shop::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🔧 Sistema da Oficina de Lataria e Pintura");
    info!("================================================");

    // Inicializar base de datos; sin esquema no hay arranque
    let database_config = DatabaseConfig::from_env()?;
    let db_connection = match DatabaseConnection::new(&database_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    let app_state = AppState::new(db_connection.pool().clone(), config.clone());
    let app = create_router(app_state);

    if config.is_development() && config.cors_origins.is_empty() {
        info!("⚠️ CORS permisivo: definir CORS_ORIGINS en producción");
    }

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("👤 Clientes:");
    info!("   POST /api/customers - Cadastrar cliente");
    info!("   GET  /api/customers - Listar clientes");
    info!("   GET  /api/customers/options - Opciones para el selector");
    info!("🧾 Ordens de Serviço:");
    info!("   POST /api/service-orders - Abrir orden");
    info!("   GET  /api/service-orders - Todas as ordens con link de aviso");
    info!("🎨 Materiais:");
    info!("   POST /api/materials - Agregar material");
    info!("   GET  /api/materials - Estoque actual");
    info!("💰 Financeiro:");
    info!("   POST /api/ledger - Lanzar ingreso o gasto");
    info!("   GET  /api/ledger?limit=N - Movimientos recientes");
    info!("   GET  /api/dashboard - Totales y ganancia");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = &served {
        error!("❌ Error del servidor: {}", e);
    }

    db_connection.close().await;
    info!("👋 Servidor terminado");
    served.map_err(Into::into)
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
