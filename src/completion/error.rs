use thiserror::Error;

/// Errors that can occur while obtaining a completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The API key cannot be used to authorize requests.
    #[error("Invalid API key: {0}")]
    InvalidCredential(String),

    /// Connection, TLS or protocol failure.
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Error code: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The response carried no usable choice.
    #[error("The model returned an empty response")]
    EmptyResponse,

    /// The task performing the request died before producing a result.
    #[error("Request task failed: {0}")]
    TaskFailed(String),
}
