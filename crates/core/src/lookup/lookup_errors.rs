use thiserror::Error;

/// Reasons a request cannot be read.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Request is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request must be a JSON object")]
    NotAnObject,
}
