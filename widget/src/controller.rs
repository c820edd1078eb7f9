//! Upload orchestration.
//!
//! # State machine
//!
//! ```text
//! IDLE ──start──▶ UPLOADING ──progress──▶ UPLOADING
//! UPLOADING ──200──▶ PROCESSING ──body ok──▶ DONE(success)
//!                               └─body bad─▶ DONE(failure)
//! UPLOADING ──non-200 / no response──▶ DONE(failure)
//! DONE ──start──▶ UPLOADING (fresh session)
//! ```
//!
//! The controller never touches the submit control: its enabled state is
//! derived by [`crate::widget::Widget`] from the gate and
//! [`UploadController::in_flight`].

use crate::error::UploadError;
use crate::file::CandidateFile;
use crate::result::ResultView;
use crate::session::{Outcome, UploadSession};
use crate::transport::TransportEvent;
use crate::types::{CompressionMode, ErrorBody, UploadRequest, UploadResponse};
use crate::view::WidgetView;

/// HTTP status treated as success.
const STATUS_OK: u16 = 200;

#[derive(Debug)]
pub struct UploadController {
    endpoint: String,
    session: Option<UploadSession>,
}

impl UploadController {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            session: None,
        }
    }

    pub fn session(&self) -> Option<&UploadSession> {
        self.session.as_ref()
    }

    pub fn in_flight(&self) -> bool {
        self.session.as_ref().is_some_and(UploadSession::is_in_flight)
    }

    /// Open a fresh session and build the request to send.
    ///
    /// Callers check the submit affordance first; this does not.
    pub fn start<F, V>(&mut self, file: &F, compression: CompressionMode, view: &mut V) -> UploadRequest<F>
    where
        F: CandidateFile + Clone,
        V: WidgetView,
    {
        log::info!(
            "📤 Uploading {} ({} bytes, compression: {})",
            file.name(),
            file.size(),
            compression
        );

        let session = UploadSession::start();
        view.set_progress_visible(true);
        view.set_progress_width(session.percent());
        view.set_status(session.status());
        ResultView::hide(view);
        self.session = Some(session);

        UploadRequest {
            endpoint: self.endpoint.clone(),
            file: file.clone(),
            compression,
        }
    }

    /// Apply one transport event. Returns the outcome when the event ends
    /// the session; events arriving with no session in flight are dropped.
    pub fn handle<V: WidgetView>(&mut self, event: TransportEvent, view: &mut V) -> Option<Outcome> {
        let session = match self.session.as_mut() {
            Some(session) if session.is_in_flight() => session,
            _ => {
                log::debug!("Dropping transport event outside a session: {:?}", event);
                return None;
            }
        };

        let outcome = match event {
            TransportEvent::Progress { sent, total } => {
                if let Some(percent) = session.record_progress(sent, total) {
                    view.set_progress_width(percent);
                    view.set_status(session.status());
                }
                return None;
            }
            TransportEvent::Completed {
                status,
                status_text,
                body,
            } if status == STATUS_OK => {
                session.begin_processing();
                view.set_status(session.status());
                view.set_progress_width(session.percent());

                match UploadResponse::parse(&body) {
                    Ok(response) => {
                        log::info!(
                            "✅ Upload processed (downstream status: {})",
                            response
                                .status_code
                                .map(|code| code.to_string())
                                .unwrap_or_else(|| "unknown".to_string())
                        );
                        ResultView::show_success(view, &response.go_backend_response);
                        Outcome::Success(response.go_backend_response)
                    }
                    Err(e) => {
                        log::error!("❌ Unreadable response body ({}): {}", status_text, e);
                        fail(view, UploadError::from(e))
                    }
                }
            }
            TransportEvent::Completed {
                status,
                status_text,
                body,
            } => {
                if let Some(message) = ErrorBody::message_from(&body) {
                    log::error!("❌ Server error {}: {}", status, message);
                } else {
                    log::error!("❌ Server error {} {}", status, status_text);
                }
                fail(view, UploadError::status(status, &status_text))
            }
            TransportEvent::Failed(reason) => {
                log::error!("❌ Upload failed: {}", reason);
                fail(view, UploadError::Network(reason))
            }
        };

        session.finish(outcome.clone());
        Some(outcome)
    }
}

fn fail<V: WidgetView>(view: &mut V, error: UploadError) -> Outcome {
    let message = error.to_string();
    ResultView::show_error(view, &message);
    Outcome::Failure(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::LocalFile;
    use crate::session::UploadState;
    use crate::view::RecordingView;

    fn started() -> (UploadController, RecordingView) {
        let mut controller = UploadController::new("/compress-and-forward/");
        let mut view = RecordingView::default();
        let file = LocalFile::new("report.csv", b"a,b\n".to_vec());
        controller.start(&file, CompressionMode::default(), &mut view);
        (controller, view)
    }

    fn completed(status: u16, status_text: &str, body: &str) -> TransportEvent {
        TransportEvent::Completed {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_start_builds_request_and_resets_ui() {
        let mut controller = UploadController::new("/compress-and-forward/");
        let mut view = RecordingView {
            result_visible: true,
            progress_width: 100.0,
            ..Default::default()
        };
        let file = LocalFile::new("report.csv", b"a,b\n".to_vec());

        let request = controller.start(&file, CompressionMode::from("gzip"), &mut view);

        assert_eq!(request.endpoint, "/compress-and-forward/");
        assert_eq!(request.file, file);
        assert_eq!(request.compression.as_str(), "gzip");
        assert!(controller.in_flight());
        assert!(view.progress_visible);
        assert!(!view.result_visible);
        assert_eq!(view.progress_width, 0.0);
        assert_eq!(view.status, "Uploading: 0%");
    }

    #[test]
    fn test_progress_updates_bar_and_status() {
        let (mut controller, mut view) = started();

        let outcome = controller.handle(TransportEvent::Progress { sent: 1, total: Some(3) }, &mut view);
        assert!(outcome.is_none());
        assert_eq!(view.status, "Uploading: 33%");
        assert!((view.progress_width - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_total_leaves_bar() {
        let (mut controller, mut view) = started();
        controller.handle(TransportEvent::Progress { sent: 40, total: Some(80) }, &mut view);
        controller.handle(TransportEvent::Progress { sent: 60, total: None }, &mut view);
        assert_eq!(view.progress_width, 50.0);
        assert_eq!(view.status, "Uploading: 50%");
    }

    #[test]
    fn test_success_shows_payload() {
        let (mut controller, mut view) = started();
        let outcome = controller.handle(
            completed(200, "OK", r#"{"status":"success","go_backend_response":"Compressed 1200 rows","status_code":200}"#),
            &mut view,
        );

        assert_eq!(outcome, Some(Outcome::Success("Compressed 1200 rows".into())));
        assert!(view.result_visible);
        assert_eq!(view.result_content, "Compressed 1200 rows");
        assert_eq!(view.status, "Processing CSV data...");
        assert_eq!(view.progress_width, 100.0);
        assert!(!controller.in_flight());
    }

    #[test]
    fn test_error_status_uses_reason() {
        let (mut controller, mut view) = started();
        let outcome = controller.handle(
            completed(500, "Internal Server Error", r#"{"status":"error","message":"boom"}"#),
            &mut view,
        );

        assert_eq!(outcome, Some(Outcome::Failure("Error: Internal Server Error".into())));
        assert!(view.status.contains("Internal Server Error"));
        assert!(!view.result_visible);
    }

    #[test]
    fn test_other_2xx_is_an_error() {
        let (mut controller, mut view) = started();
        let outcome = controller.handle(completed(204, "No Content", ""), &mut view);
        assert_eq!(outcome, Some(Outcome::Failure("Error: No Content".into())));
    }

    #[test]
    fn test_bad_body_after_200_is_a_failure() {
        let (mut controller, mut view) = started();
        let outcome = controller.handle(completed(200, "OK", "not json"), &mut view);

        match outcome {
            Some(Outcome::Failure(message)) => {
                assert!(message.starts_with("Error: invalid server response"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!view.result_visible);
        assert!(view.status.starts_with("Error: invalid server response"));
        assert!(!controller.in_flight());
    }

    #[test]
    fn test_network_failure_message() {
        let (mut controller, mut view) = started();
        let outcome = controller.handle(TransportEvent::Failed("offline".into()), &mut view);
        assert_eq!(outcome, Some(Outcome::Failure("Upload failed. Please try again.".into())));
        assert_eq!(view.status, "Upload failed. Please try again.");
    }

    #[test]
    fn test_events_after_terminal_are_dropped() {
        let (mut controller, mut view) = started();
        controller.handle(TransportEvent::Failed("offline".into()), &mut view);

        let late = controller.handle(completed(200, "OK", r#"{"go_backend_response":"late"}"#), &mut view);
        assert!(late.is_none());
        assert!(!view.result_visible);
        assert!(matches!(
            controller.session().map(|s| s.state()),
            Some(UploadState::Done(Outcome::Failure(_)))
        ));
    }

    #[test]
    fn test_events_without_session_are_dropped() {
        let mut controller = UploadController::new("/up");
        let mut view = RecordingView::default();
        assert!(controller.handle(TransportEvent::Failed("x".into()), &mut view).is_none());
        assert!(view.status.is_empty());
    }
}
