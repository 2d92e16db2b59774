//! Request errors, normalized to a single human-readable message.

/// Message used when a failing response carries no usable `detail`.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Any failure while talking to the API: transport, non-2xx status or an
/// undecodable body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    /// Build an error and log it at `debug`.
    pub fn new(message: impl Into<String>) -> Self {
        let err = Self {
            message: message.into(),
        };
        tracing::debug!(message = %err.message, "request failed");
        err
    }

    /// Build an error from the body of a non-2xx response.
    ///
    /// The message is the string `detail` field of a JSON body, or
    /// [`FALLBACK_MESSAGE`] when there is none.
    pub fn from_error_body(body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail")?.as_str().map(str::to_owned));
        Self::new(detail.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()))
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
