//! User Service - HTTP server for user management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::config::UserServiceConfig;
use user_service_lib::StoreKind;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User management service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address (defaults to USER_SERVICE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (defaults to USER_SERVICE_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Keep users in memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            in_memory,
        } => {
            let config = UserServiceConfig::from_env();
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            let store = if in_memory {
                StoreKind::InMemory
            } else {
                StoreKind::Database
            };
            user_service_lib::run(&host, port, store).await?;
        }
    }

    Ok(())
}
