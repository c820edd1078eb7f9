//! Candidate files.
//!
//! The widget never looks inside a file. It only needs a name for the
//! gate and a size for logging, so the browser `File` and an in-memory
//! buffer can both stand in as a candidate.

/// A file picked or dropped by the user.
pub trait CandidateFile {
    /// Filename as reported by the source (no path).
    fn name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;
}

/// In-memory candidate, used by native callers and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalFile {
    name: String,
    bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl CandidateFile for LocalFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
