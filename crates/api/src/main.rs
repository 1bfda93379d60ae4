use anyhow::Context;

use productos_api::{app, config::ApiConfig, shutdown};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    productos_observability::init(config.log_format);

    let service = app::build_service(&config.store)
        .await
        .context("failed to initialise product store")?;
    let router = app::build_app(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown::signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}
