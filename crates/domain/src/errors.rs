use thiserror::Error;

/// Type-erased transport failure kept as the cause of a [`ClientError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures of a single DNS-over-HTTPS client exchange. None of them are
/// retried.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("no server configured")]
    NoServer,

    #[error("https required")]
    HttpsRequired,

    #[error("server timeout: {source}")]
    Timeout { source: BoxError },

    #[error("{source}")]
    Transport { source: BoxError },

    #[error("HTTP Error {0}")]
    Http(u16),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn timeout(source: impl Into<BoxError>) -> Self {
        Self::Timeout {
            source: source.into(),
        }
    }

    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport {
            source: source.into(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Configuration problems, as opposed to failures of the exchange itself.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::NoServer | Self::HttpsRequired)
    }

    /// Root cause of a transport failure, if any.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Timeout { source } | Self::Transport { source } => Some(source.as_ref()),
            _ => None,
        }
    }
}
