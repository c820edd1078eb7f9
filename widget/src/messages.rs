//! User-facing texts.

/// Label shown before any file was chosen.
pub const NO_FILE_SELECTED: &str = "No file selected";

/// Label shown when the chosen file is not a CSV.
pub const SELECT_CSV: &str = "Please select a CSV file";

/// Status shown once the upload is sent and the server is working.
pub const PROCESSING: &str = "Processing CSV data...";

/// Status shown when the request never got a response.
pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";

/// Status line while bytes are going out.
pub fn uploading(percent: f64) -> String {
    format!("Uploading: {}%", percent.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploading_rounds() {
        assert_eq!(uploading(0.0), "Uploading: 0%");
        assert_eq!(uploading(33.333), "Uploading: 33%");
        assert_eq!(uploading(66.6), "Uploading: 67%");
        assert_eq!(uploading(100.0), "Uploading: 100%");
    }
}
