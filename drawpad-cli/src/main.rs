//! drawpad - persistence service for freehand drawings
//!
//! Starts the HTTP server: five JSON endpoints over one PostgreSQL
//! table. Configuration comes from flags and the environment, with
//! .env support for local development.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use drawpad_server::db::{create_pool, migrations};
use drawpad_server::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "drawpad",
    version,
    about = "Persistence service for freehand drawings"
)]
struct Cli {
    /// Host to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Enable debug logging (RUST_LOG takes precedence if set)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let pool = create_pool(&cli.database_url)
        .await
        .context("could not connect to database")?;
    migrations::run(&pool).await.context("schema setup failed")?;
    tracing::info!("Database ready");

    let bind_addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("invalid host/port")?;
    run_server(pool, ServerConfig { bind_addr }).await?;

    Ok(())
}
