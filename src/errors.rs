use thiserror::Error;

/// Failures surfaced to the user. The message is shown verbatim in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Local pre-flight check failed, or the backend rejected the input.
    #[error("{0}")]
    Validation(String),
    /// A remote call failed.
    #[error("{0}")]
    Network(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Network(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
