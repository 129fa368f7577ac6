use std::sync::Arc;

use dotenv::dotenv;

mod db;
mod error;
mod handlers;
mod query;
mod routes;
mod service;
mod types;
mod validation;

use crate::db::MemoryStore;
use crate::routes::create_routes;
use crate::service::CatalogService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let store = Arc::new(MemoryStore::new());
    let service = CatalogService::new(store);
    let app = create_routes(service);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("catalog service listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
