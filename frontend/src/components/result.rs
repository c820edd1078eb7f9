//! Result panel shown after a successful upload.

use leptos::*;
use crate::WidgetSignals;

#[component]
pub fn ResultPanel(signals: WidgetSignals) -> impl IntoView {
    view! {
        <div
            class="results"
            style:display={move || if signals.result_visible.get() { "block" } else { "none" }}
        >
            <h3>"Server response"</h3>
            // Text node: never parsed as markup
            <pre class="result-content">{move || signals.result_content.get()}</pre>
        </div>
    }
}
