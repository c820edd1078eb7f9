//! State of one upload, from submit to its terminal outcome.

use crate::messages;

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show in the result panel.
    Success(String),
    /// Text shown in the status line.
    Failure(String),
}

/// Where a session stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadState {
    Uploading,
    /// Server answered 200, body not decoded yet.
    Processing,
    Done(Outcome),
}

/// One in-flight or finished upload.
#[derive(Clone, Debug)]
pub struct UploadSession {
    state: UploadState,
    /// 0.0 to 1.0, never decreasing.
    progress: f64,
    status: String,
}

impl UploadSession {
    pub fn start() -> Self {
        Self {
            state: UploadState::Uploading,
            progress: 0.0,
            status: messages::uploading(0.0),
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn percent(&self) -> f64 {
        self.progress * 100.0
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        !matches!(self.state, UploadState::Done(_))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            UploadState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Record a progress notification and return the percent to display.
    ///
    /// Returns `None` when the total is unknown or the session is past the
    /// uploading phase. Values are clamped to 0..=100 and never go down.
    pub fn record_progress(&mut self, sent: u64, total: Option<u64>) -> Option<f64> {
        if self.state != UploadState::Uploading {
            return None;
        }
        let total = total.filter(|t| *t > 0)?;

        let fraction = (sent as f64 / total as f64).clamp(0.0, 1.0);
        self.progress = self.progress.max(fraction);
        self.status = messages::uploading(self.percent());
        Some(self.percent())
    }

    /// Server accepted the upload; progress is forced to 100%.
    pub fn begin_processing(&mut self) {
        self.state = UploadState::Processing;
        self.progress = 1.0;
        self.status = messages::PROCESSING.to_string();
    }

    pub fn finish(&mut self, outcome: Outcome) {
        if let Outcome::Failure(message) = &outcome {
            self.status = message.clone();
        }
        self.state = UploadState::Done(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_uploading() {
        let session = UploadSession::start();
        assert_eq!(session.state(), &UploadState::Uploading);
        assert!(session.is_in_flight());
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.status(), "Uploading: 0%");
    }

    #[test]
    fn test_progress_needs_total() {
        let mut session = UploadSession::start();
        assert_eq!(session.record_progress(512, None), None);
        assert_eq!(session.record_progress(512, Some(0)), None);
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_progress_is_monotonic_and_clamped() {
        let mut session = UploadSession::start();
        assert_eq!(session.record_progress(50, Some(100)), Some(50.0));
        assert_eq!(session.record_progress(25, Some(100)), Some(50.0));
        assert_eq!(session.record_progress(300, Some(100)), Some(100.0));
        assert_eq!(session.status(), "Uploading: 100%");
    }

    #[test]
    fn test_processing_forces_full_progress() {
        let mut session = UploadSession::start();
        session.record_progress(10, Some(100));
        session.begin_processing();
        assert_eq!(session.percent(), 100.0);
        assert_eq!(session.status(), "Processing CSV data...");
        assert_eq!(session.record_progress(20, Some(100)), None);
    }

    #[test]
    fn test_finish_ends_flight() {
        let mut session = UploadSession::start();
        session.finish(Outcome::Failure("Upload failed. Please try again.".into()));
        assert!(!session.is_in_flight());
        assert_eq!(session.status(), "Upload failed. Please try again.");
        assert_eq!(
            session.outcome(),
            Some(&Outcome::Failure("Upload failed. Please try again.".into()))
        );
    }
}
