use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrequencyError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl FrequencyError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
