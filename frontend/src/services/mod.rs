//! Backend communication.
//!
//! # Services
//!
//! - [`upload`] - multipart upload to `/compress-and-forward/` with progress

pub mod upload;

pub use upload::*;
