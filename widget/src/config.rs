//! Widget configuration.
//!
//! Everything is fixed at compile time; the widget keeps no persisted
//! state and reads no environment.

/// Endpoint receiving the multipart upload.
pub const UPLOAD_ENDPOINT: &str = "/compress-and-forward/";

/// The only filename suffix the gate accepts (compared lowercase).
pub const ACCEPTED_SUFFIX: &str = ".csv";

/// Compression mode used when the page offers no explicit choice.
///
/// Matches what the server falls back to when the field is missing.
pub const DEFAULT_COMPRESSION: &str = "gzip";

/// Multipart field carrying the file.
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying the compression mode.
pub const COMPRESSION_FIELD: &str = "compression";

/// Per-instance settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Where uploads are posted.
    pub endpoint: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: UPLOAD_ENDPOINT.to_string(),
        }
    }
}
