//! Transport seam.
//!
//! An upload is a stream of events: zero or more progress notifications,
//! then exactly one terminal event. The widget stops reading at the first
//! terminal event; a stream that ends without one counts as a network
//! failure.

use futures::stream::LocalBoxStream;

use crate::file::CandidateFile;
use crate::types::UploadRequest;

/// Something that happened to an in-flight request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportEvent {
    /// Bytes sent so far; `total` is `None` when not computable.
    Progress { sent: u64, total: Option<u64> },
    /// The server answered.
    Completed {
        status: u16,
        status_text: String,
        body: String,
    },
    /// No response at all.
    Failed(String),
}

impl TransportEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransportEvent::Progress { .. })
    }
}

/// Issues uploads. Single-threaded: streams need not be `Send`.
pub trait Transport {
    type File: CandidateFile;

    fn send(&self, request: UploadRequest<Self::File>) -> LocalBoxStream<'static, TransportEvent>;
}
