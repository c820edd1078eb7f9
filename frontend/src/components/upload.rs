//! CSV upload widget with drag & drop support.
//!
//! Owns one [`Widget`] and forwards native drag, picker and click events
//! to it. All rendering state comes back through [`WidgetSignals`].

use std::cell::RefCell;
use std::rc::Rc;

use csvdrop::{run_upload, CompressionMode, DragPhase, Outcome, Widget, DEFAULT_COMPRESSION};
use leptos::ev::DragEvent;
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::{ProgressSection, ResultPanel};
use crate::services::XhrTransport;
use crate::{create_widget_signals, BrowserFile, SignalView, COMPRESSION_MODES};

type SharedWidget = Rc<RefCell<Widget<SignalView, BrowserFile>>>;

/// Files carried by a drop, in transfer order.
fn dropped_files(ev: &DragEvent) -> Vec<BrowserFile> {
    let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(BrowserFile::from)
        .collect()
}

/// Event handler feeding one drag phase to the widget.
fn drag_handler(
    widget: SharedWidget,
    phase: fn(&DragEvent) -> DragPhase<BrowserFile>,
) -> impl Fn(DragEvent) + 'static {
    move |ev: DragEvent| {
        if widget.borrow_mut().on_drag(phase(&ev)) {
            ev.prevent_default();
            ev.stop_propagation();
        }
    }
}

#[component]
pub fn UploadSection() -> impl IntoView {
    let (signals, view) = create_widget_signals();
    let widget: SharedWidget = Rc::new(RefCell::new(Widget::new(view)));
    let (compression, set_compression) = create_signal(DEFAULT_COMPRESSION.to_string());
    let file_input = create_node_ref::<html::Input>();

    // Handler pour le changement de fichier
    let on_file_change = {
        let widget = widget.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|files| files.get(0)).map(BrowserFile::from);
            // Empty the input so picking the same file again still fires `change`
            input.set_value("");
            widget.borrow_mut().on_pick(file);
        }
    };

    // Handler pour cliquer sur la zone entière
    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_submit = {
        let widget = widget.clone();
        move |_| {
            let widget = widget.clone();
            let compression = CompressionMode::from(compression.get_untracked());

            spawn_local(async move {
                match run_upload(&*widget, &XhrTransport::new(), compression).await {
                    Ok(Outcome::Success(text)) => log::info!("✅ Upload finished: {}", text),
                    Ok(Outcome::Failure(message)) => log::warn!("⚠️  Upload ended with: {}", message),
                    Err(e) => log::warn!("Submit ignored: {}", e),
                }
            });
        }
    };

    view! {
        <div class="upload-widget">
            <div
                class="drop-area"
                class:highlight=move || signals.highlighted.get()
                on:click=trigger_file_input
                on:dragenter=drag_handler(widget.clone(), |_| DragPhase::Enter)
                on:dragover=drag_handler(widget.clone(), |_| DragPhase::Over)
                on:dragleave=drag_handler(widget.clone(), |_| DragPhase::Leave)
                on:drop=drag_handler(widget.clone(), |ev| DragPhase::Drop(dropped_files(ev)))
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drop a CSV file here"</div>
                <div class="upload-hint">"or click to browse"</div>
                <input
                    type="file"
                    accept=".csv"
                    style="display:none"
                    node_ref=file_input
                    on:click=|ev| ev.stop_propagation()
                    on:change=on_file_change
                />
                <div class="file-name">{move || signals.file_label.get()}</div>
            </div>

            <div class="upload-controls">
                <label class="compression-label">
                    "Compression"
                    <select on:change=move |ev| set_compression.set(event_target_value(&ev))>
                        {COMPRESSION_MODES
                            .iter()
                            .map(|mode| {
                                view! {
                                    <option value=*mode selected={*mode == DEFAULT_COMPRESSION}>
                                        {*mode}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button
                    class="upload-button"
                    disabled=move || !signals.submit_enabled.get()
                    on:click=on_submit
                >
                    "Upload"
                </button>
            </div>

            <ProgressSection signals=signals/>
            <ResultPanel signals=signals/>
        </div>
    }
}
