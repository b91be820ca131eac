//! Forgegate API entry point

use std::net::SocketAddr;
use std::sync::Arc;

use forgegate_api::{router, AppState, Config};
use forgegate_auth_core::AuthService;
use forgegate_oauth_core::{HttpProviderResolver, OAuthBroker, ProviderResolver};
use forgegate_store::{MemoryPrincipalStore, MemoryVcsStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Forgegate API");

    let config = Config::from_env()?;

    let principals = Arc::new(MemoryPrincipalStore::new());
    let auth = AuthService::new(&config.auth, principals)?;

    let vcs_registry = MemoryVcsStore::new();
    for connection in &config.vcs_connections {
        vcs_registry.insert(connection.clone());
    }
    tracing::info!(
        connections = config.vcs_connections.len(),
        "VCS registry seeded"
    );

    let resolver: Arc<dyn ProviderResolver> = Arc::new(HttpProviderResolver::new());
    let broker = OAuthBroker::new(Arc::new(vcs_registry), resolver, config.broker.clone());

    let http_port = config.http_port;
    let state = AppState::new(auth, broker, config);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
