//! The registration backend for enroll clients.

/// Request handlers
mod handlers;

/// Shared state
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use state::AppState;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{compression, limit, timeout, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Server configuration, from flags or the environment
#[derive(Debug, Parser)]
struct Config {
    /// Address to listen on
    #[clap(long, env, default_value = "127.0.0.1:3000")]
    address: String,

    /// Request body size limit, in bytes
    #[clap(long, env, default_value = "1048576")]
    body_limit: usize,

    /// Request timeout, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    request_timeout: Duration,

    /// Invite tokens to accept (repeat the flag, or comma-separate)
    #[clap(long, env, value_delimiter = ',')]
    invite_token: Vec<String>,
}

/// Parse a whole number of seconds
fn duration_parser(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_secs)
}

#[tokio::main]
async fn main() {
    let options = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    if options.invite_token.is_empty() {
        tracing::warn!("no invite tokens configured; every registration will be turned away");
    }

    let state = AppState::new(options.invite_token);

    let app = Router::new()
        // ROUTES
        .route("/health", get(handlers::health::handler))
        .route("/verify-token", post(handlers::verify_token::handler))
        .route("/api/userCreation", post(handlers::user_creation::handler))
        // LAYERS (wrap the routes above)
        .layer(trace::TraceLayer::new_for_http())
        .layer(compression::CompressionLayer::new())
        .layer(limit::RequestBodyLimitLayer::new(options.body_limit))
        .layer(timeout::TimeoutLayer::new(options.request_timeout))
        // STATE
        .with_state(state);

    let listener = TcpListener::bind(options.address).await.unwrap();
    tracing::info!(address = ?listener.local_addr(), "listening");

    axum::serve(listener, app).await.unwrap();
}
