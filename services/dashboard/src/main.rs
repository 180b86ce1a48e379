use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use common::{
    KvStore,
    cache::{RedisConfig, RedisPool},
};
use dashboard::{
    AppState,
    config::{AppConfig, SessionBackend},
    login::MockDirectory,
    routes,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting dashboard service");

    let config = AppConfig::from_env()?;

    // Refuse to start with a policy table that routes nowhere
    navigation::validate_policy_table(navigation::NAVIGATION_TABLE)?;
    info!(
        "Navigation policy validated ({} entries)",
        navigation::NAVIGATION_TABLE.len()
    );

    let store = match config.session.backend {
        SessionBackend::Redis => {
            let redis_config = RedisConfig {
                url: config.redis.url.clone(),
            };
            KvStore::Redis(RedisPool::new(&redis_config).await?)
        }
        SessionBackend::Memory => KvStore::memory(),
    };

    if store.health_check().await? {
        info!("Session store ({}) reachable", store.backend_name());
    } else {
        anyhow::bail!("Session store ({}) unreachable", store.backend_name());
    }

    let directory = MockDirectory::with_demo_accounts();
    for email in directory.emails() {
        info!("Demo account available: {}", email);
    }

    let app_state = AppState::new(store, directory, config.session.clone());

    // Start the web server
    let app = routes::create_router(app_state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Dashboard service listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
