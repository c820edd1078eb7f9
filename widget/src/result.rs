//! Terminal-state rendering.

use crate::view::WidgetView;

/// Renders success payloads and error messages. Every call is safe to
/// repeat whatever the panel's current visibility.
pub struct ResultView;

impl ResultView {
    /// Reveal the result panel with `text` as plain content.
    pub fn show_success<V: WidgetView>(view: &mut V, text: &str) {
        view.set_result_content(text);
        view.set_result_visible(true);
    }

    /// Write `text` to the status line; the panel is left alone.
    pub fn show_error<V: WidgetView>(view: &mut V, text: &str) {
        view.set_status(text);
    }

    pub fn hide<V: WidgetView>(view: &mut V) {
        view.set_result_visible(false);
    }
}
