use thiserror::Error;

/// Failure of a single load operation.
///
/// None of these touch the table: the previous rows stay on screen.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid JSON response (HTTP {status}): {message}")]
    Decode { status: u16, message: String },

    #[error("Render error: {0}")]
    Render(String),
}

impl From<LoadError> for String {
    fn from(err: LoadError) -> Self {
        err.to_string()
    }
}
