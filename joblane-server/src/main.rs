use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use joblane_core::postgres::{PostgresJobsRepository, PostgresUsersRepository, connect_pool};
use joblane_server::{AppState, Config, routes};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "joblane-server")]
#[command(about = "Job board HTTP server: employers post, admins review, candidates apply")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "joblane_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    let pool = connect_pool(&config.database.url, config.database.max_connections)
        .await
        .context("failed to connect to PostgreSQL")?;
    info!("database connected, schema up to date");

    let users = Arc::new(PostgresUsersRepository::new(pool.clone()));
    let jobs = Arc::new(PostgresJobsRepository::new(pool));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(users, jobs, config);
    let router = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received ctrl+c, shutting down");
    }
}
