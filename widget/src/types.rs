//! Request and response types shared by the controller and transports.
//!
//! # Categories
//!
//! - **Request Types** - what goes out to the upload endpoint
//! - **Response Types** - JSON bodies the endpoint answers with

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_COMPRESSION;

// =============================================================================
// Request Types
// =============================================================================

/// Compression mode selected on the page.
///
/// The set of valid values belongs to the page's selector, so the widget
/// carries the value through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompressionMode(String);

impl CompressionMode {
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CompressionMode {
    fn default() -> Self {
        Self(DEFAULT_COMPRESSION.to_string())
    }
}

impl From<&str> for CompressionMode {
    fn from(mode: &str) -> Self {
        Self::new(mode)
    }
}

impl From<String> for CompressionMode {
    fn from(mode: String) -> Self {
        Self(mode)
    }
}

impl fmt::Display for CompressionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One outgoing upload: a multipart body with the file under
/// [`crate::config::FILE_FIELD`] and the mode under
/// [`crate::config::COMPRESSION_FIELD`], posted to `endpoint`.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRequest<F> {
    pub endpoint: String,
    pub file: F,
    pub compression: CompressionMode,
}

// =============================================================================
// Response Types
// =============================================================================

/// Body of a 200 answer from the upload endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// "success" when present.
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable text from the downstream service, shown verbatim.
    pub go_backend_response: String,
    /// Status code the downstream service answered with.
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl UploadResponse {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Body the endpoint may send along with an error status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best-effort extraction of the server's message.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body).ok()?.message
    }
}
