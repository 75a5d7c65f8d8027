use clap::Parser;
use std::time::Duration;

use crate::error::ConfigError;

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "window-gate")]
#[command(about = "HTTP endpoint guarded by a per-client sliding window rate limiter")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "WINDOW_GATE_PORT", default_value_t = 8080)]
    pub port: u16,

    // Rate limit max requests per window
    #[arg(long, env = "WINDOW_GATE_RATE_LIMIT", default_value_t = 3)]
    pub rate_limit: usize,

    // Rate limit window in milliseconds
    #[arg(long, env = "WINDOW_GATE_RATE_WINDOW_MS", default_value_t = 1000)]
    pub rate_window_ms: u64,

    // How often idle clients are evicted, in seconds (0 disables)
    #[arg(long, env = "WINDOW_GATE_SWEEP_INTERVAL", default_value_t = 60)]
    pub sweep_interval: u64,
}

impl Args {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rate_limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if self.rate_window_ms == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        Ok(())
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.rate_window_ms)
    }

    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval > 0).then(|| Duration::from_secs(self.sweep_interval))
    }
}
