//! The UI surface the widget drives.
//!
//! The page owns the actual elements (drop surface, file label, submit
//! button, progress bar, status line, result panel). The widget only
//! pushes state into them through this trait, so any rendering layer
//! (reactive signals, raw DOM, a test recorder) can sit behind it.

/// Setters for every element the widget touches.
pub trait WidgetView {
    /// Highlight style on the drop surface.
    fn set_highlighted(&mut self, highlighted: bool);

    /// Text of the filename label.
    fn set_file_label(&mut self, text: &str);

    /// Enabled state of the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Visibility of the progress container.
    fn set_progress_visible(&mut self, visible: bool);

    /// Width of the progress bar, in percent.
    fn set_progress_width(&mut self, percent: f64);

    /// Text of the status line.
    fn set_status(&mut self, text: &str);

    /// Visibility of the result panel.
    fn set_result_visible(&mut self, visible: bool);

    /// Plain-text content of the result panel.
    fn set_result_content(&mut self, text: &str);
}

/// Records the last value pushed to each element, plus every progress
/// width, for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub highlighted: bool,
    pub file_label: String,
    pub submit_enabled: bool,
    pub progress_visible: bool,
    pub progress_width: f64,
    pub widths: Vec<f64>,
    pub status: String,
    pub result_visible: bool,
    pub result_content: String,
}

#[cfg(test)]
impl WidgetView for RecordingView {
    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    fn set_file_label(&mut self, text: &str) {
        self.file_label = text.to_string();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_progress_visible(&mut self, visible: bool) {
        self.progress_visible = visible;
    }

    fn set_progress_width(&mut self, percent: f64) {
        self.progress_width = percent;
        self.widths.push(percent);
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible = visible;
    }

    fn set_result_content(&mut self, text: &str) {
        self.result_content = text.to_string();
    }
}
