use clap::Parser; // for cli
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use window_gate::config::Args;
use window_gate::error::ServerError;
use window_gate::sweeper::idle_sweeper;
use window_gate::{AppState, Clock, RateLimiter, SystemClock, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments
    let args = Args::parse();
    args.validate().map_err(ServerError::from)?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = AppState::new(RateLimiter::new(args.rate_limit, args.window()), clock.clone());

    if let Some(every) = args.sweep_interval() {
        tokio::spawn(idle_sweeper(Arc::clone(&state.limiter), clock, every));
    }

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    info!(port = args.port, "window-gate listening on http://localhost:{}", args.port);
    info!(
        limit = args.rate_limit,
        window_ms = args.rate_window_ms,
        "rate limit: {} requests per {} ms",
        args.rate_limit,
        args.rate_window_ms
    );

    axum::serve(
        listener,
        app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(ServerError::Serve)?;

    Ok(())
}
