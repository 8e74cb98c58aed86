use thiserror::Error;

/// Error type for the I/O surface of the form application.
///
/// Per-field validation failures are not represented here: they are ordinary
/// domain data (see [`crate::form::schema::ErrorSet`]) and never fatal.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
