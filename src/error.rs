//! Application error type.

/// Errors that can stop the server from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Command line could not be parsed, or help/version was requested.
    /// [`clap::Error::exit`] prints it the way clap intends.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The listener could not be bound to the configured address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
