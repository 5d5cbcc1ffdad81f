use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The write was acknowledged but the follow-up read failed.
    #[error("position was sent but refresh failed: {0}")]
    RefreshAfterWrite(Box<ClientError>),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::RefreshAfterWrite(inner) => inner.is_transport(),
            _ => false,
        }
    }

    /// True when the store accepted the write even though the overall call failed.
    pub fn write_landed(&self) -> bool {
        matches!(self, Self::RefreshAfterWrite(_))
    }
}
