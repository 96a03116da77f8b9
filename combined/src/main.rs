//! Users API binary - runs the store, both services and the HTTP API in one process.

mod bootstrap;
mod config;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::Instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gateway_lib::AppState;
use storage::IndexedUserStore;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "users-api")]
#[command(about = "User directory HTTP API with basic authentication")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "PORT", default_value = "8888")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = AppConfig::from_env(host, port);

            // Initialize tracing
            tracing_subscriber::registry()
                .with(env_filter(&config.service.log_level))
                .with(tracing_subscriber::fmt::layer())
                .init();

            let span = tracing::info_span!("service", name = %config.service.service_name);

            async move {
                let store = Arc::new(IndexedUserStore::new());
                let state = AppState::from_store(store);

                bootstrap::create_base_admin(state.user_service.as_ref(), &config.base_admin).await?;

                gateway_lib::serve(&config.service, state).await
            }
            .instrument(span)
            .await?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured level, falling back to `info`
/// when that does not parse.
fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
