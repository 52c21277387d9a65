include!("../../lib.rs");

use std::net::SocketAddr;

use tracing::log::info;
use crate::catalog::controller::routes;
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::sqlite::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::new("dev");
    let catalog_svc = create_catalog_service(&config, RepositoryStore::Sqlite)?;
    let app = routes(AppState::new(catalog_svc));

    let addr: SocketAddr = format!("{}:{}", config.http_host, config.http_port).parse()?;
    info!("serving book catalog on {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
