//! Error types for the upload widget.
//!
//! - [`UploadError`] - everything that can end an upload session badly
//!
//! A rejected file is not an error: the gate reports it as a verdict
//! (see [`crate::gate::GateVerdict`]). The `Display` of each variant is
//! the exact text shown in the status line.

use thiserror::Error;

use crate::messages;

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors ending an upload session.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Submit was triggered without an accepted file, or while a session
    /// is still in flight.
    #[error("No CSV file ready to upload")]
    NotReady,

    /// The request never produced a response.
    #[error("{}", messages::UPLOAD_FAILED)]
    Network(String),

    /// The server answered with something other than 200.
    #[error("Error: {text}")]
    Status { code: u16, text: String },

    /// A 200 answer whose body could not be decoded.
    #[error("Error: invalid server response ({0})")]
    InvalidResponse(#[from] serde_json::Error),
}

impl UploadError {
    /// Build a status error, falling back to `HTTP <code>` when the
    /// transport gave no status description.
    pub fn status(code: u16, text: &str) -> Self {
        let text = if text.trim().is_empty() {
            format!("HTTP {}", code)
        } else {
            text.to_string()
        };
        UploadError::Status { code, text }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_uses_reason() {
        let err = UploadError::status(500, "Internal Server Error");
        assert_eq!(err.to_string(), "Error: Internal Server Error");
    }

    #[test]
    fn test_status_error_without_reason() {
        let err = UploadError::status(502, "");
        assert_eq!(err.to_string(), "Error: HTTP 502");
    }

    #[test]
    fn test_network_error_hides_reason() {
        let err = UploadError::Network("connection reset".into());
        assert_eq!(err.to_string(), "Upload failed. Please try again.");
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: UploadError = parse_err.into();
        assert!(err.to_string().starts_with("Error: invalid server response"));
    }
}
