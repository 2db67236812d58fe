//! Remote collaborator abstraction for pin persistence.

mod http;
mod memory;

pub use http::HttpBackend;
pub use memory::MemoryBackend;

use crate::pin::Pin;
use thiserror::Error;

/// Failures a collaborator call can produce.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The collaborator answered with a non-success status, optionally
    /// carrying a server-supplied message.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// Anything else. Coerced to a generic per-operation message before it
    /// reaches the user.
    #[error("{0}")]
    Other(String),
}

impl BackendError {
    /// The message shown to the user for this failure.
    ///
    /// Transport errors carry their own text; rejections show the server's
    /// message when it sent one; everything else falls back to the
    /// per-operation default.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            BackendError::Network(message) => message.clone(),
            BackendError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type for collaborator operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// A durable home for pins.
///
/// Calls block; the pin store runs them on its worker thread, one at a time,
/// in issuance order. Implementations exist for the HTTP collaborator and for
/// purely local in-memory persistence.
pub trait PinBackend: Send {
    /// Fetch every pin stored for the given page and identity.
    fn fetch_pins(&self, page: &str, owner: &str) -> BackendResult<Vec<Pin>>;

    /// Create or fully replace a pin. Upsert semantics keyed on `pin.id`;
    /// there are no partial updates.
    fn save_pin(&self, pin: &Pin) -> BackendResult<()>;

    /// Delete one pin by id.
    fn delete_pin(&self, id: &str) -> BackendResult<()>;

    /// Delete every pin for the given page and identity.
    fn delete_pins_by_page(&self, page: &str, owner: &str) -> BackendResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_network_shows_own_text() {
        let err = BackendError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Failed to add pin"), "connection refused");
    }

    #[test]
    fn test_user_message_rejection_prefers_server_message() {
        let err = BackendError::Rejected {
            status: 422,
            message: Some("pin limit reached".to_string()),
        };
        assert_eq!(err.user_message("Failed to add pin"), "pin limit reached");
    }

    #[test]
    fn test_user_message_rejection_without_body_uses_fallback() {
        let err = BackendError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed to add pin"), "Failed to add pin");
    }

    #[test]
    fn test_user_message_other_is_coerced_to_fallback() {
        let err = BackendError::Other("panicked downstream".to_string());
        assert_eq!(err.user_message("Failed to load pins"), "Failed to load pins");
    }
}
