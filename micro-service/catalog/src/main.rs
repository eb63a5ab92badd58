use anyhow::Context;
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use app_config::{AppConfig, Server};
use app_error::AppError;
use micro_catalog::{
    routes::create_routes,
    schema::{create_schema, schema_sdl},
    service::{CatalogService, CatalogServiceTrait},
    telemetry,
};

#[derive(Debug, Parser)]
#[command(name = "catalog-server", version, about = "GraphQL API over an in-memory book catalog")]
struct Cli {
    /// JSON configuration file; defaults to APP_CONFIG_PATH or the embedded configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the GraphQL schema in SDL form and exit
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", schema_sdl());
        return Ok(());
    }

    let config = AppConfig::resolve(cli.config.as_deref())
        .context("Failed to load application configuration")?;

    let _guard = telemetry::init(&config.monitoring)?;

    info!(
        "Starting catalog service in {} environment at {}",
        config.environment,
        chrono::Utc::now()
    );

    let catalog = Arc::new(CatalogService::seeded());
    let stats = catalog.stats();
    info!(authors = stats.authors, books = stats.books, "Catalog ready");

    let schema = create_schema(Arc::clone(&catalog), &config.graphql);
    let app = create_routes(schema, catalog, &config);

    let server = Server::from(&config);
    server.validate()?;
    let address = server.bind_address();
    let listener = bind_listener(&address).await?;

    info!("🚀 Server ready at http://{}/graphql", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn bind_listener(address: &str) -> anyhow::Result<TcpListener> {
    TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind to address: {}", address))
}

// Resolves on Ctrl-C or SIGTERM so in-flight requests can drain
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
