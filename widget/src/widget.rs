//! The widget context.
//!
//! One [`Widget`] per upload widget on the page. It owns the drop zone,
//! the gate, the controller and the view, and every event handler goes
//! through it. The submit affordance is recomputed after each change as
//! `accepted file && no session in flight`.

use std::cell::RefCell;

use futures::StreamExt;

use crate::config::WidgetConfig;
use crate::controller::UploadController;
use crate::drag::{DragPhase, DragZone};
use crate::error::{UploadError, UploadResult};
use crate::file::CandidateFile;
use crate::gate::{FileGate, GateVerdict};
use crate::session::{Outcome, UploadSession};
use crate::transport::{Transport, TransportEvent};
use crate::types::{CompressionMode, UploadRequest};
use crate::view::WidgetView;

/// Reason given when a transport stream closes without answering.
const STREAM_CLOSED: &str = "transport closed without a response";

/// One upload widget: drop zone, gate, controller and the view they drive.
pub struct Widget<V, F> {
    drag: DragZone,
    gate: FileGate<F>,
    controller: UploadController,
    view: V,
}

impl<V, F> Widget<V, F>
where
    V: WidgetView,
    F: CandidateFile + Clone,
{
    pub fn new(view: V) -> Self {
        Self::with_config(WidgetConfig::default(), view)
    }

    /// Build a widget and push its initial state into `view`.
    pub fn with_config(config: WidgetConfig, view: V) -> Self {
        let mut widget = Self {
            drag: DragZone::new(),
            gate: FileGate::new(),
            controller: UploadController::new(config.endpoint),
            view,
        };
        widget.view.set_highlighted(false);
        widget.view.set_file_label(&widget.gate.verdict().label);
        widget.view.set_progress_visible(false);
        widget.view.set_result_visible(false);
        widget.refresh_affordance();
        widget
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn session(&self) -> Option<&UploadSession> {
        self.controller.session()
    }

    pub fn is_highlighted(&self) -> bool {
        self.drag.is_highlighted()
    }

    pub fn submit_enabled(&self) -> bool {
        self.gate.accepted_file().is_some() && !self.controller.in_flight()
    }

    /// Handle a drag event on the drop surface. Returns whether the native
    /// event's default action must be suppressed.
    pub fn on_drag(&mut self, phase: DragPhase<F>) -> bool {
        let response = self.drag.handle(phase, &mut self.view);
        if let Some(file) = response.forwarded {
            self.select(Some(file));
        }
        response.prevent_default
    }

    /// Handle a file-picker change. `None` is an empty selection.
    pub fn on_pick(&mut self, file: Option<F>) -> GateVerdict {
        self.select(file)
    }

    /// Open a session for the accepted file.
    pub fn begin_upload(&mut self, compression: CompressionMode) -> UploadResult<UploadRequest<F>> {
        if !self.submit_enabled() {
            return Err(UploadError::NotReady);
        }
        let file = self.gate.accepted_file().cloned().ok_or(UploadError::NotReady)?;

        let request = self.controller.start(&file, compression, &mut self.view);
        self.refresh_affordance();
        Ok(request)
    }

    /// Feed one transport event. Returns the outcome once the session ends.
    pub fn on_transport_event(&mut self, event: TransportEvent) -> Option<Outcome> {
        let outcome = self.controller.handle(event, &mut self.view);
        if outcome.is_some() {
            self.refresh_affordance();
        }
        outcome
    }

    fn select(&mut self, file: Option<F>) -> GateVerdict {
        let verdict = self.gate.evaluate(file);
        self.view.set_file_label(&verdict.label);
        self.refresh_affordance();
        verdict
    }

    fn refresh_affordance(&mut self) {
        let enabled = self.submit_enabled();
        self.view.set_submit_enabled(enabled);
    }
}

/// Run one upload to completion.
///
/// The widget is only borrowed between awaits, so drag and pick events
/// keep flowing while the request is in flight.
pub async fn run_upload<V, T>(
    widget: &RefCell<Widget<V, T::File>>,
    transport: &T,
    compression: CompressionMode,
) -> UploadResult<Outcome>
where
    V: WidgetView,
    T: Transport,
    T::File: Clone,
{
    let request = widget.borrow_mut().begin_upload(compression)?;
    let mut events = transport.send(request);

    while let Some(event) = events.next().await {
        if let Some(outcome) = widget.borrow_mut().on_transport_event(event) {
            return Ok(outcome);
        }
    }

    log::warn!("Transport stream ended without a terminal event");
    let outcome = widget
        .borrow_mut()
        .on_transport_event(TransportEvent::Failed(STREAM_CLOSED.to_string()))
        .unwrap_or_else(|| Outcome::Failure(UploadError::Network(STREAM_CLOSED.to_string()).to_string()));
    Ok(outcome)
}
