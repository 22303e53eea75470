//! Mock API for the parameter console.
//!
//! Serves the configuration endpoints from seeded in-memory tables, in both
//! their real form and the bodyless GET form the console uses when built
//! with the `mockserver` feature.

mod fixtures;
mod handlers;
mod resources;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "param-console-mock-server", version, about = "Mock API for the parameter console")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1")]
    bind_addr: String,

    /// Number of seeded individual parameters.
    #[arg(long, env = "MOCK_SEED_ROWS", default_value_t = 36)]
    seed_rows: usize,

    /// Deletes of this id answer with a server error.
    #[arg(long, env = "MOCK_FAIL_DELETE_ID")]
    fail_delete_id: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    tracing::info!("Starting parameter console mock server");

    let today = chrono::Local::now().date_naive();
    let store = fixtures::seed(args.seed_rows, today);
    tracing::info!(
        parameters = store.parameters.len(),
        attributes = store.attributes.len(),
        events = store.events.len(),
        "Seeded mock data"
    );
    if let Some(id) = args.fail_delete_id {
        tracing::info!("Deletes of id {} will fail", id);
    }

    let app = routes::create_router(state::AppState::new(store, args.fail_delete_id));

    let addr = format!("{}:{}", args.bind_addr, args.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("mock server stopped")?;

    Ok(())
}
