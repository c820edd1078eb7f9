//! Application configuration.
//!
//! The upload endpoint and accepted suffix live in the widget core
//! (`csvdrop::config`); this module only holds what the page itself
//! decides.

/// Application name, shown in the hero and the console banner.
pub const APP_NAME: &str = "CSV Drop";

/// Compression modes offered by the selector.
///
/// The server compresses with gzip and falls back to it for any value it
/// does not know.
pub const COMPRESSION_MODES: &[&str] = &["gzip"];
