use tracing_subscriber::EnvFilter;

use pantry_api::api::{create_router, AppState};
use pantry_api::catalog::RecipeCatalog;
use pantry_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // The catalog is validated once here; queries never re-validate.
    let catalog = RecipeCatalog::builtin()?;
    tracing::info!(recipes = catalog.len(), "Recipe catalog loaded");

    let state = AppState::new(catalog);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
