//! UI Components for the upload page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - CSV upload widget with drag & drop
//! - [`ProgressSection`] - Progress bar and status line
//! - [`ResultPanel`] - Server response after a successful upload

mod hero;
mod upload;
mod progress;
mod result;
mod footer;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use result::*;
pub use footer::*;
