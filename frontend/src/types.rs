//! Browser-side types plugged into the widget core.
//!
//! # Categories
//!
//! - **File Types** - `web_sys::File` as a widget candidate
//! - **View Types** - reactive signals behind `WidgetView`

use csvdrop::{CandidateFile, WidgetView};
use leptos::*;
use web_sys::File;

// =============================================================================
// File Types
// =============================================================================

/// A file from the picker or a drop, as the widget sees it.
#[derive(Clone, Debug)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn file(&self) -> &File {
        &self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl CandidateFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

// =============================================================================
// View Types
// =============================================================================

/// Read side of the widget state, consumed by the components.
#[derive(Clone, Copy)]
pub struct WidgetSignals {
    pub highlighted: ReadSignal<bool>,
    pub file_label: ReadSignal<String>,
    pub submit_enabled: ReadSignal<bool>,
    pub progress_visible: ReadSignal<bool>,
    pub progress_width: ReadSignal<f64>,
    pub status: ReadSignal<String>,
    pub result_visible: ReadSignal<bool>,
    pub result_content: ReadSignal<String>,
}

/// Write side of the widget state, driven by the core.
#[derive(Clone, Copy)]
pub struct SignalView {
    highlighted: WriteSignal<bool>,
    file_label: WriteSignal<String>,
    submit_enabled: WriteSignal<bool>,
    progress_visible: WriteSignal<bool>,
    progress_width: WriteSignal<f64>,
    status: WriteSignal<String>,
    result_visible: WriteSignal<bool>,
    result_content: WriteSignal<String>,
}

/// Create one set of signals for a widget instance.
pub fn create_widget_signals() -> (WidgetSignals, SignalView) {
    let (highlighted, set_highlighted) = create_signal(false);
    let (file_label, set_file_label) = create_signal(String::new());
    let (submit_enabled, set_submit_enabled) = create_signal(false);
    let (progress_visible, set_progress_visible) = create_signal(false);
    let (progress_width, set_progress_width) = create_signal(0.0);
    let (status, set_status) = create_signal(String::new());
    let (result_visible, set_result_visible) = create_signal(false);
    let (result_content, set_result_content) = create_signal(String::new());

    let signals = WidgetSignals {
        highlighted,
        file_label,
        submit_enabled,
        progress_visible,
        progress_width,
        status,
        result_visible,
        result_content,
    };
    let view = SignalView {
        highlighted: set_highlighted,
        file_label: set_file_label,
        submit_enabled: set_submit_enabled,
        progress_visible: set_progress_visible,
        progress_width: set_progress_width,
        status: set_status,
        result_visible: set_result_visible,
        result_content: set_result_content,
    };
    (signals, view)
}

impl WidgetView for SignalView {
    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted.set(highlighted);
    }

    fn set_file_label(&mut self, text: &str) {
        self.file_label.set(text.to_string());
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn set_progress_visible(&mut self, visible: bool) {
        self.progress_visible.set(visible);
    }

    fn set_progress_width(&mut self, percent: f64) {
        self.progress_width.set(percent);
    }

    fn set_status(&mut self, text: &str) {
        self.status.set(text.to_string());
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible.set(visible);
    }

    fn set_result_content(&mut self, text: &str) {
        self.result_content.set(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_view_writes_through() {
        let runtime = create_runtime();

        let (signals, mut view) = create_widget_signals();
        view.set_file_label("report.csv");
        view.set_submit_enabled(true);
        view.set_progress_width(42.5);
        view.set_result_content("<i>plain</i>");

        assert_eq!(signals.file_label.get_untracked(), "report.csv");
        assert!(signals.submit_enabled.get_untracked());
        assert_eq!(signals.progress_width.get_untracked(), 42.5);
        assert_eq!(signals.result_content.get_untracked(), "<i>plain</i>");

        runtime.dispose();
    }
}
