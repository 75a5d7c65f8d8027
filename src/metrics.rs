use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, register_counter, register_gauge};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("window_gate_requests_total", "Total number of requests").unwrap();
    pub static ref REQUEST_ALLOWED: Counter =
        register_counter!("window_gate_requests_allowed_total", "Requests let through by the limiter").unwrap();
    pub static ref REQUEST_LIMITED: Counter =
        register_counter!("window_gate_requests_limited_total", "Requests rejected with 429").unwrap();
    pub static ref METHOD_REJECTED: Counter =
        register_counter!("window_gate_method_rejected_total", "Requests rejected with 405").unwrap();
    pub static ref TRACKED_CLIENTS: Gauge =
        register_gauge!("window_gate_tracked_clients", "Current number of clients with a window").unwrap();
}
