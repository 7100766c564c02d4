use std::convert::Infallible;
use std::sync::Arc;

use hyper::service::{make_service_fn, service_fn};
use hyper::Server;
use signdesk::handlers::{route, AppState};
use signdesk::infrastructure::database::{LibraryRepository, SignedDocumentRepository};
use signdesk::{Config, SqliteRepository};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "signdesk=info".into()))
        .with(fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(bind = %config.bind_addr, db = %config.db_path, "starting signdesk");

    // Persistent database in production, in-memory when the path is unusable
    let repository = SqliteRepository::open_or_in_memory(&config.db_path)?;
    tracing::info!(
        documents = repository.count_documents().unwrap_or(0),
        signed = repository.count_signed().unwrap_or(0),
        "database initialized"
    );

    let state = Arc::new(AppState::new(repository, &config));
    let make_svc = make_service_fn(move |_conn| {
        let state = state.clone();
        async move { Ok::<_, Infallible>(service_fn(move |req| route(req, state.clone()))) }
    });

    let server = Server::try_bind(&config.bind_addr)?.serve(make_svc);
    tracing::info!(addr = %server.local_addr(), "listening");

    server
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
