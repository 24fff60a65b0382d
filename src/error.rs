use crate::{api::decode::DecodeError, config};

pub type CheckRedirectsResult<T = (), E = CheckRedirectsError> = Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum CheckRedirectsError {
    #[error("Failed to load config")]
    Config(#[from] config::ConfigError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Request to the redirect API failed")]
    Transport(#[from] TransportError),
    #[error("Failed to decode the redirect API response")]
    Decode(#[from] DecodeError),
}

/// Everything that can go wrong between encoding the request and holding
/// the full response body.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to encode request body")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl From<reqwest::Error> for CheckRedirectsError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(err))
    }
}
