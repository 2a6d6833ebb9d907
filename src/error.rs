use thiserror::Error;

/// Errors surfaced by the documentation server.
///
/// Everything except [`DocsError::Serve`] aborts startup before the server
/// begins accepting connections. `Serve` is delivered once, after the serve
/// coroutine terminates.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("failed to load specification: {0}")]
    Load(String),

    #[error("reference expansion failed: {0}")]
    Expansion(String),

    #[error("failed to serialize specification: {0}")]
    Serialization(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("documentation server failed: {0}")]
    Serve(String),

    #[error("failed to open browser: {0}")]
    BrowserLaunch(String),
}

pub type Result<T> = std::result::Result<T, DocsError>;
