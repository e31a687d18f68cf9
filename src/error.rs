//! Error types for the VoiceTask gateway

use thiserror::Error;

/// Result type alias for VoiceTask operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the VoiceTask gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed client request, rejected before any upstream call
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Completion upstream did not answer within the configured bound
    #[error("completion request timed out")]
    UpstreamTimeout,

    /// Completion upstream returned a non-success response
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Speech synthesis error
    #[error("TTS error: {0}")]
    Tts(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
