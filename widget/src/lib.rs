//! # csvdrop - CSV upload widget core
//!
//! Everything the upload widget does, without a DOM: drag handling, the
//! CSV gate, the upload session state machine and result rendering. The
//! page plugs in through two traits: [`WidgetView`] for the elements and
//! [`Transport`] for the request.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐
//! │ DragZone │──┐
//! └──────────┘  │   ┌──────────┐     ┌──────────────────┐     ┌────────────┐
//!               ├──▶│ FileGate │────▶│ UploadController │────▶│ ResultView │
//! ┌──────────┐  │   └──────────┘     └──────────────────┘     └────────────┘
//! │  picker  │──┘                             │
//! └──────────┘                                ▼
//!                                      Transport (events)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::cell::RefCell;
//! use csvdrop::{run_upload, CompressionMode, DragPhase, Widget};
//!
//! let widget = RefCell::new(Widget::new(my_view));
//! widget.borrow_mut().on_drag(DragPhase::Drop(vec![file]));
//! let outcome = run_upload(&widget, &my_transport, CompressionMode::default()).await?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Upload error type
//! - [`config`] - Endpoint and policy constants
//! - [`messages`] - User-facing texts
//! - [`file`] - Candidate file abstraction
//! - [`types`] - Request/response types
//! - [`view`] - UI surface trait
//! - [`drag`] - Drop surface
//! - [`gate`] - CSV gate
//! - [`session`] - Upload session state
//! - [`transport`] - Transport seam
//! - [`controller`] - Upload orchestration
//! - [`result`] - Terminal-state rendering
//! - [`widget`] - Widget context and upload driver

// Core modules
pub mod error;
pub mod config;
pub mod messages;
pub mod file;
pub mod types;
pub mod view;

// Components
pub mod drag;
pub mod gate;
pub mod session;
pub mod transport;
pub mod controller;
pub mod result;

// Context
pub mod widget;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{UploadError, UploadResult};
pub use config::{
    WidgetConfig,
    ACCEPTED_SUFFIX,
    COMPRESSION_FIELD,
    DEFAULT_COMPRESSION,
    FILE_FIELD,
    UPLOAD_ENDPOINT,
};
pub use file::{CandidateFile, LocalFile};
pub use types::{CompressionMode, ErrorBody, UploadRequest, UploadResponse};
pub use view::WidgetView;

pub use drag::{DragPhase, DragResponse, DragZone};
pub use gate::{is_accepted_name, FileGate, GateVerdict};
pub use session::{Outcome, UploadSession, UploadState};
pub use transport::{Transport, TransportEvent};
pub use controller::UploadController;
pub use result::ResultView;

pub use widget::{run_upload, Widget};
