//! Airtime Gateway entry point
//!
//! ```text
//! airtime_gateway [--env <name>] [--port <port>]
//! ```
//!
//! Loads `config/<env>.yaml` (default `dev`), connects PostgreSQL, then
//! serves the gateway until the process is stopped.

use std::sync::Arc;

use anyhow::Context;

use airtime_gateway::config::AppConfig;
use airtime_gateway::db::Database;
use airtime_gateway::gateway::{self, state::AppState};
use airtime_gateway::logging::init_logging;
use airtime_gateway::{PgTransactionStore, ProviderClient};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = init_logging(&app_config);

    tracing::info!("Starting Airtime Gateway in {} mode", env);

    let port = get_port_override().unwrap_or(app_config.gateway.port);

    let postgres_url = app_config
        .postgres_url
        .as_deref()
        .context("postgres_url is not configured (set it in the config file or DATABASE_URL)")?;
    let db = Database::connect(postgres_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    db.init_schema()
        .await
        .context("Failed to initialize transaction schema")?;
    let store = Arc::new(PgTransactionStore::new(db.pool().clone()));

    let provider = ProviderClient::new(&app_config.provider)?;
    if !provider.has_credentials() {
        tracing::warn!("Provider credentials are empty; upstream calls will likely be rejected");
    }

    let state = Arc::new(AppState::new(Arc::new(provider), store));

    gateway::run_server(&app_config.gateway.host, port, state)
        .await
        .context("Gateway server error")?;

    Ok(())
}
