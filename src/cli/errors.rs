use crate::config::ConfigError;
use crate::format::FormatError;
use crate::krdict::KrdictError;

/// Anything that ends a command. Nothing is retried; the binary prints the
/// description and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Krdict(#[from] KrdictError),

    #[error("cannot render response: {0}")]
    Format(#[from] FormatError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
