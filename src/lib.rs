pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod upstream;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use logic::{FetchError, RepositoryOperations};

// Export all model types
pub use model::*;

// Export upstream types
pub use upstream::{GitHubClient, SourceHost, UpstreamError, UpstreamResponse};

use std::sync::Arc;

/// Build the application router over any [`SourceHost`]
pub fn app<S: SourceHost + 'static>(host: Arc<S>) -> axum::Router {
    routes::create_router().with_state(host)
}

/// Serve the application on `listener`, talking to the upstream described by `config`
pub async fn serve(
    listener: tokio::net::TcpListener,
    config: &crate::config::AppConfig,
) -> anyhow::Result<()> {
    let client = GitHubClient::new(&config.upstream)?;
    log::info!("Upstream API: {}", client.base_url());

    axum::serve(listener, app(Arc::new(client))).await?;

    Ok(())
}

/// Load configuration and run the server until it is stopped
pub async fn run_server() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    let config = crate::config::AppConfig::load()?;

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Repository API running on http://{}", bind_address);
    log::info!(
        "API documentation available at http://{}/docs",
        bind_address
    );

    serve(listener, &config).await
}
