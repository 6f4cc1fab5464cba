use thiserror::Error;

use crate::protocol::Endpoint;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid backend url '{url}': {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("invalid timing: {0}")]
    InvalidTiming(String),

    #[error("{endpoint} request failed: {message}")]
    Transport { endpoint: Endpoint, message: String },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("{endpoint} reply could not be decoded: {message}")]
    Decode { endpoint: Endpoint, message: String },

    #[error("{endpoint} rejected the request: {message}")]
    Rejected { endpoint: Endpoint, message: String },
}

pub type Result<T, E = ClientError> = core::result::Result<T, E>;
