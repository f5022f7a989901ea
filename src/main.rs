//! newsdesk server binary

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use newsdesk::{create_pool, run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "newsdesk",
    version,
    about = "News REST API - topics, articles, comments, and users over PostgreSQL"
)]
struct Cli {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:9090")]
    bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Enable debug logging (unless RUST_LOG is set explicitly)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.debug)?;

    let pool = create_pool(&cli.database_url)
        .await
        .context("failed to connect to the database")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
    };
    run_server(pool, config).await.context("server failed")?;

    Ok(())
}
