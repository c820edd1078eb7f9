use leptos::*;
use crate::WidgetSignals;

#[component]
pub fn ProgressSection(signals: WidgetSignals) -> impl IntoView {
    view! {
        <div
            class="progress-container"
            style:display={move || if signals.progress_visible.get() { "block" } else { "none" }}
        >
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", signals.progress_width.get())
                ></div>
            </div>
            <div class="progress-status">{move || signals.status.get()}</div>
        </div>
    }
}
