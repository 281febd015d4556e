//! API Errors

use thiserror::Error;

/// Failure talking to the workout collection endpoint.
///
/// Every kind is handled the same way by the UI: logged, no state change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request build error: {0}")]
    Encode(String),

    #[error("parse error: {0}")]
    Decode(String),
}
