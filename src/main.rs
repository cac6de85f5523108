use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloudcost::{api, config::ServerConfig};

#[derive(Parser)]
#[command(name = "cloudcostd")]
#[command(about = "Mock cloud-cost analytics backend with real-time update push")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the cloudcost server
    Serve {
        /// Port for HTTP API (overrides the PORT environment variable)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "cloudcost=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = ServerConfig::from_env();
    if let Some(Commands::Serve { port: Some(port) }) = cli.command {
        config.port = port;
    }

    let state = api::AppState::new();
    let app = api::create_router_with_origins(state, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("cloudcost server listening on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
