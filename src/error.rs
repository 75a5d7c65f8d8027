use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rate limit must allow at least one request per window")]
    ZeroLimit,
    #[error("rate window must be longer than zero")]
    ZeroWindow,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}
