use thiserror::Error;

/// Ways a movie listing fetch can fail. All of them end the activation's
/// fetch; none is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Error: {status} - {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
