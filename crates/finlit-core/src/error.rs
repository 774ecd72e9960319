use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinlitError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FinlitError {
    pub(crate) fn invalid(field: &str, reason: &str) -> Self {
        FinlitError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for FinlitError {
    fn from(e: serde_json::Error) -> Self {
        FinlitError::SerializationError(e.to_string())
    }
}
