//! Frontend Errors
//!
//! Every failure a screen can see, split by where it came from.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Caught before any request was sent
    #[error("{field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Server answered with `success: false`; message is shown verbatim
    #[error("{0}")]
    Business(String),

    /// Network failure or a response without a readable envelope
    #[error("Request failed: {0}")]
    Transport(String),
}

impl AppError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    pub fn transport(detail: impl std::fmt::Display) -> Self {
        Self::Transport(detail.to_string())
    }

    /// Text for the toast shown to the user
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_message_is_verbatim() {
        let err = AppError::Business("DB unavailable".to_string());
        assert_eq!(err.user_message(), "DB unavailable");
    }

    #[test]
    fn test_validation_names_field() {
        let err = AppError::validation("price", "must be greater than zero");
        assert_eq!(err.user_message(), "price: must be greater than zero");
    }

    #[test]
    fn test_transport_is_generic() {
        let err = AppError::transport("connection refused");
        assert_eq!(err.user_message(), "Request failed: connection refused");
    }
}
