pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod state;
pub mod sweeper;

use axum::{Router, routing::{any, get}};

pub use clock::{Clock, MockClock, SystemClock};
pub use models::Info;
pub use rate_limit::{Decision, RateLimiter};
pub use state::AppState;

// creating the router with routes
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::limited_handler)) // every method, 405 decided in handler
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
