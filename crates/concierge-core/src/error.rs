use thiserror::Error;

/// Top-level error type for Concierge.
#[derive(Debug, Error)]
pub enum ConciergeError {
    /// Persona or override configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Error from an output surface.
    #[error("surface error: {0}")]
    Surface(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
