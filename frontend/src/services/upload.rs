//! Upload transport over `XMLHttpRequest`.
//!
//! `fetch` cannot report upload progress, so the request goes through
//! XHR and its callbacks are forwarded into a channel that the widget
//! reads as a stream of [`TransportEvent`]s.
//!
//! The callbacks live in an [`XhrRequest`] owned by that stream. Once the
//! widget has read the terminal event it drops the stream, which detaches
//! and frees the callbacks together with the request.

use std::pin::Pin;
use std::task::{Context, Poll};

use csvdrop::{CandidateFile, Transport, TransportEvent, UploadRequest, COMPRESSION_FIELD, FILE_FIELD};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::stream::{LocalBoxStream, Stream};
use futures::StreamExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FormData, ProgressEvent, XmlHttpRequest, XmlHttpRequestUpload};

use crate::BrowserFile;

type EventCallback = Closure<dyn FnMut(web_sys::Event)>;

/// Posts the multipart body with `XMLHttpRequest`.
#[derive(Clone, Copy, Debug, Default)]
pub struct XhrTransport;

impl XhrTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for XhrTransport {
    type File = BrowserFile;

    fn send(&self, request: UploadRequest<BrowserFile>) -> LocalBoxStream<'static, TransportEvent> {
        let (tx, rx) = mpsc::unbounded();

        let request = match start_request(&request, &tx) {
            Ok(request) => Some(request),
            Err(e) => {
                log::error!("Failed to start upload request: {:?}", e);
                finish(&tx, TransportEvent::Failed(format!("{:?}", e)));
                None
            }
        };

        XhrEvents {
            events: rx,
            _request: request,
        }
        .boxed_local()
    }
}

/// Event stream that keeps its request alive.
struct XhrEvents {
    events: UnboundedReceiver<TransportEvent>,
    _request: Option<XhrRequest>,
}

impl Stream for XhrEvents {
    type Item = TransportEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<TransportEvent>> {
        self.events.poll_next_unpin(cx)
    }
}

/// A sent request and the callbacks attached to it.
struct XhrRequest {
    xhr: XmlHttpRequest,
    upload: XmlHttpRequestUpload,
    _onprogress: Closure<dyn FnMut(ProgressEvent)>,
    _onload: EventCallback,
    _onerror: EventCallback,
    _onabort: EventCallback,
    _ontimeout: EventCallback,
}

impl Drop for XhrRequest {
    fn drop(&mut self) {
        self.upload.set_onprogress(None);
        self.xhr.set_onload(None);
        self.xhr.set_onerror(None);
        self.xhr.set_onabort(None);
        self.xhr.set_ontimeout(None);
        // No-op once the request has settled
        if let Err(e) = self.xhr.abort() {
            log::debug!("Abort on drop failed: {:?}", e);
        }
    }
}

/// Build the multipart body.
fn build_form(request: &UploadRequest<BrowserFile>) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, request.file.file(), &request.file.name())?;
    form.append_with_str(COMPRESSION_FIELD, request.compression.as_str())?;
    Ok(form)
}

/// Callback ending the stream with a failure.
fn failure_callback(tx: &UnboundedSender<TransportEvent>, reason: &'static str) -> EventCallback {
    let tx = tx.clone();
    Closure::wrap(Box::new(move |_: web_sys::Event| {
        finish(&tx, TransportEvent::Failed(reason.to_string()));
    }) as Box<dyn FnMut(web_sys::Event)>)
}

/// Open the request, hook its callbacks to `tx` and send it.
fn start_request(request: &UploadRequest<BrowserFile>, tx: &UnboundedSender<TransportEvent>) -> Result<XhrRequest, JsValue> {
    let form = build_form(request)?;
    let xhr = XmlHttpRequest::new()?;
    xhr.open_with_async("POST", &request.endpoint, true)?;
    let upload = xhr.upload()?;

    // Upload progress
    let progress_tx = tx.clone();
    let onprogress = Closure::wrap(Box::new(move |event: ProgressEvent| {
        let total = if event.length_computable() {
            Some(event.total() as u64)
        } else {
            None
        };
        let progress = TransportEvent::Progress {
            sent: event.loaded() as u64,
            total,
        };
        if let Err(e) = progress_tx.unbounded_send(progress) {
            log::debug!("Progress after the stream closed: {:?}", e.into_inner());
        }
    }) as Box<dyn FnMut(ProgressEvent)>);
    upload.set_onprogress(Some(onprogress.as_ref().unchecked_ref()));

    // Response received (any status)
    let load_tx = tx.clone();
    let load_xhr = xhr.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let event = TransportEvent::Completed {
            status: load_xhr.status().unwrap_or(0),
            status_text: load_xhr.status_text().unwrap_or_default(),
            body: load_xhr.response_text().ok().flatten().unwrap_or_default(),
        };
        finish(&load_tx, event);
    }) as Box<dyn FnMut(web_sys::Event)>);
    xhr.set_onload(Some(onload.as_ref().unchecked_ref()));

    // No response at all
    let onerror = failure_callback(tx, "network error");
    xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    let onabort = failure_callback(tx, "request aborted");
    xhr.set_onabort(Some(onabort.as_ref().unchecked_ref()));
    let ontimeout = failure_callback(tx, "request timed out");
    xhr.set_ontimeout(Some(ontimeout.as_ref().unchecked_ref()));

    let request = XhrRequest {
        xhr,
        upload,
        _onprogress: onprogress,
        _onload: onload,
        _onerror: onerror,
        _onabort: onabort,
        _ontimeout: ontimeout,
    };
    request.xhr.send_with_opt_form_data(Some(&form))?;

    Ok(request)
}

/// Send the terminal event and close the stream behind it.
fn finish(tx: &UnboundedSender<TransportEvent>, event: TransportEvent) {
    if let Err(e) = tx.unbounded_send(event) {
        log::debug!("Stream already closed, dropping {:?}", e.into_inner());
    }
    tx.close_channel();
}
