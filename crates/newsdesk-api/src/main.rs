//! Newsdesk server entry point.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use newsdesk_api::{AppState, Config};

/// Newsdesk - article submission and moderation service
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(about = "Newsdesk article submission and moderation service", long_about = None)]
struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "NEWSDESK_ADDR", default_value = "0.0.0.0:5000")]
    addr: String,

    /// HS256 session-token signing secret
    #[arg(long, env = "JWT_SECRET")]
    jwt_secret: String,

    /// Shared credential for the admin surface
    #[arg(long, env = "ADMIN_TOKEN")]
    admin_token: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,newsdesk=debug".into()),
        )
        .init();

    let args = Args::parse();

    let state = AppState::new(Config {
        jwt_secret: args.jwt_secret,
        admin_token: args.admin_token,
    });
    let app = newsdesk_api::router(state);

    let listener = tokio::net::TcpListener::bind(&args.addr).await?;
    tracing::info!("Server running on {}", args.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
