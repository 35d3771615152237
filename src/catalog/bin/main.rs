use std::net::SocketAddr;
use tracing::info;
use catalog_page::core::controller::{AppState, router};
use catalog_page::core::domain::Configuration;
use catalog_page::core::repository::RepositoryStore;
use catalog_page::utils::http::setup_tracing;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::from_env("Central Station Library");
    let store = RepositoryStore::from_env();
    let addr: SocketAddr = std::env::var("CATALOG_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;

    info!("serving catalog page on {} from {} store at {}", addr, store, config.api_base_url);
    let state = AppState::new(config, store)?;

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await?;
    Ok(())
}
