use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

use crate::metrics::{METHOD_REJECTED, REQUEST_ALLOWED, REQUEST_LIMITED, REQUEST_TOTAL, TRACKED_CLIENTS};
use crate::models::Info;
use crate::state::AppState;

// Client key is the remote "ip:port"; no connection info means the empty key
fn client_key(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default()
}

// Retry-After is whole seconds, rounded up, never 0
fn retry_after_secs(wait: Duration) -> u64 {
    let secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
    secs.max(1)
}

pub async fn limited_handler(State(state): State<AppState>, req: Request) -> Response {
    REQUEST_TOTAL.inc();

    if req.method() != Method::GET {
        METHOD_REJECTED.inc();
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, HeaderValue::from_static("GET"))],
            "Method not allowed",
        )
            .into_response();
    }

    let key = client_key(&req);
    let decision = state.check(&key);
    TRACKED_CLIENTS.set(state.limiter.tracked_clients() as f64);

    if decision.allowed {
        REQUEST_ALLOWED.inc();
        return (StatusCode::OK, Json(Info::from(decision))).into_response();
    }

    REQUEST_LIMITED.inc();
    debug!(key = %key, retry_after = ?decision.retry_after, "rate limited");

    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(Info::from(decision))).into_response();
    if let Some(wait) = decision.retry_after {
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs(wait)));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_after_rounds_up_to_whole_seconds() {
        assert_eq!(retry_after_secs(Duration::from_millis(100)), 1);
        assert_eq!(retry_after_secs(Duration::from_secs(2)), 2);
        assert_eq!(retry_after_secs(Duration::from_millis(2001)), 3);
        assert_eq!(retry_after_secs(Duration::ZERO), 1);
    }
}
