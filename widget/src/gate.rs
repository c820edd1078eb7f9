//! File type gate.
//!
//! Holds the active candidate and decides whether it may be uploaded.
//! Only the filename suffix is checked; content and MIME type are not.

use crate::config::ACCEPTED_SUFFIX;
use crate::file::CandidateFile;
use crate::messages;

/// Outcome of evaluating a candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateVerdict {
    pub accepted: bool,
    /// Filename when accepted, a fixed hint otherwise.
    pub label: String,
}

impl GateVerdict {
    fn empty() -> Self {
        Self {
            accepted: false,
            label: messages::NO_FILE_SELECTED.to_string(),
        }
    }
}

/// True iff the lowercase filename ends with `.csv`.
pub fn is_accepted_name(name: &str) -> bool {
    name.to_lowercase().ends_with(ACCEPTED_SUFFIX)
}

/// Accepted-type policy plus the single active candidate.
#[derive(Debug)]
pub struct FileGate<F> {
    candidate: Option<F>,
    verdict: GateVerdict,
}

impl<F> Default for FileGate<F> {
    fn default() -> Self {
        Self {
            candidate: None,
            verdict: GateVerdict::empty(),
        }
    }
}

impl<F: CandidateFile> FileGate<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a new selection.
    ///
    /// A file always replaces the previous candidate, valid or not. An
    /// empty selection keeps the current state.
    pub fn evaluate(&mut self, file: Option<F>) -> GateVerdict {
        let Some(file) = file else {
            return self.verdict.clone();
        };

        let name = file.name();
        self.verdict = if is_accepted_name(&name) {
            log::info!("📄 Accepted {} ({} bytes)", name, file.size());
            GateVerdict {
                accepted: true,
                label: name,
            }
        } else {
            log::warn!("⚠️  Rejected {}: not a CSV file", name);
            GateVerdict {
                accepted: false,
                label: messages::SELECT_CSV.to_string(),
            }
        };
        self.candidate = Some(file);

        self.verdict.clone()
    }

    pub fn verdict(&self) -> &GateVerdict {
        &self.verdict
    }

    /// The active candidate, if it passed the gate.
    pub fn accepted_file(&self) -> Option<&F> {
        if self.verdict.accepted {
            self.candidate.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::LocalFile;

    fn file(name: &str) -> LocalFile {
        LocalFile::new(name, Vec::new())
    }

    #[test]
    fn test_suffix_policy() {
        assert!(is_accepted_name("data.csv"));
        assert!(is_accepted_name("DATA.CSV"));
        assert!(is_accepted_name("report.Csv"));
        assert!(is_accepted_name(".csv"));
        assert!(!is_accepted_name("data.csv.gz"));
        assert!(!is_accepted_name("image.png"));
        assert!(!is_accepted_name("csv"));
        assert!(!is_accepted_name(""));
    }

    #[test]
    fn test_accepted_label_is_filename() {
        let mut gate = FileGate::new();
        let verdict = gate.evaluate(Some(file("report.CSV")));
        assert!(verdict.accepted);
        assert_eq!(verdict.label, "report.CSV");
        assert_eq!(gate.accepted_file(), Some(&file("report.CSV")));
    }

    #[test]
    fn test_rejected_label_is_hint() {
        let mut gate = FileGate::new();
        let verdict = gate.evaluate(Some(file("image.png")));
        assert!(!verdict.accepted);
        assert_eq!(verdict.label, "Please select a CSV file");
        assert!(gate.accepted_file().is_none());
    }

    #[test]
    fn test_new_file_replaces_previous() {
        let mut gate = FileGate::new();
        gate.evaluate(Some(file("good.csv")));
        gate.evaluate(Some(file("bad.txt")));
        assert!(gate.accepted_file().is_none());

        gate.evaluate(Some(file("other.csv")));
        assert_eq!(gate.accepted_file(), Some(&file("other.csv")));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut gate = FileGate::new();
        let first = gate.evaluate(Some(file("a.csv")));
        let second = gate.evaluate(Some(file("a.csv")));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_selection_keeps_state() {
        let mut gate = FileGate::new();
        assert_eq!(gate.evaluate(None).label, "No file selected");

        gate.evaluate(Some(file("keep.csv")));
        let verdict = gate.evaluate(None);
        assert!(verdict.accepted);
        assert_eq!(verdict.label, "keep.csv");
    }
}
