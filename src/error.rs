//! Error taxonomy for API calls.
//!
//! Every variant ends up as a static, feature-specific message in the UI; the
//! detail carried here is for logs only.

use crate::transport::TransportError;

/// Errors produced by [`crate::ApiClient`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// Login answered with a non-success status.
    #[error("login rejected: status {status}")]
    Auth { status: u16 },

    /// Login succeeded but the body carried no usable token.
    #[error("login response carried no token")]
    MissingToken,

    /// Registration answered HTTP 400.
    #[error("registration rejected: {body}")]
    Validation { body: String },

    /// Any other non-success status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// A success body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// A request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status attached to this error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status } | Self::Status { status, .. } => Some(*status),
            Self::Validation { .. } => Some(400),
            Self::Transport(_) | Self::MissingToken | Self::Decode(_) | Self::Encode(_) => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err.to_string())
    }
}
