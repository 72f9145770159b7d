use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use podcast_catalog::shared::core::identity::UuidGenerator;
use podcast_catalog::shared::infrastructure::config::{Config, StorageBackend};
use podcast_catalog::shared::infrastructure::database;
use podcast_catalog::shared::infrastructure::in_memory::InMemoryDatabase;
use podcast_catalog::shell::http::router;
use podcast_catalog::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let state = match config.storage {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;
            let pool = database::connect(url, config.max_connections, config.acquire_timeout)
                .await
                .context("failed to connect to the database")?;
            database::migrate(&pool)
                .await
                .context("failed to run migrations")?;
            tracing::info!("database ready");
            AppState::postgres(pool)
        }
        StorageBackend::InMemory => {
            tracing::warn!("using in-memory storage, data is lost on shutdown");
            AppState::in_memory(Arc::new(InMemoryDatabase::new()), Arc::new(UuidGenerator))
        }
    };

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    tracing::info!("listening on http://{}", config.bind_address);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
