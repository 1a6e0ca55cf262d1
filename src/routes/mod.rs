//! Tabla de rutas
//!
//! Cada pantalla de la oficina es un router anidado: Clientes, Ordem de
//! Serviço, Todas as Ordens, Materiais, Financeiro y Dashboard.

pub mod customer_routes;
pub mod ledger_routes;
pub mod material_routes;
pub mod service_order_routes;

use axum::{
    extract::{OriginalUri, State},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::database::schema;
use crate::middleware::cors_layer;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

/// Router completo de la aplicación con su estado
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/customers", customer_routes::create_customer_router())
        .nest("/api/service-orders", service_order_routes::create_service_order_router())
        .nest("/api/materials", material_routes::create_material_router())
        .nest("/api/ledger", ledger_routes::create_ledger_router())
        .nest("/api/dashboard", ledger_routes::create_dashboard_router())
        .fallback(route_not_found)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check con las tablas presentes
async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let tables = schema::table_names(&state.pool).await?;
    Ok(Json(json!({
        "status": "ok",
        "environment": state.config.environment,
        "tables": tables,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}

async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    not_found_error("Route", uri.path())
}
