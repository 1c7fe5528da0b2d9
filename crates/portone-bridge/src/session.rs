// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Runtime state of one in-flight flow.
//
// The host owns the session for as long as its runtime surface is visible and
// forwards every runtime event to it. Events may arrive on any thread; the
// completion gate makes sure only the first resolving event is delivered.

use std::fmt;
use std::sync::Arc;

use tracing::{Level, instrument};
use url::Url;
use uuid::Uuid;

use portone_core::config::BridgeConfig;
use portone_core::error::Result;
use portone_core::json::JsonValue;
use portone_core::result::FlowError;

use crate::coordinator::CompletionGate;
use crate::dispatch::MainDispatcher;
use crate::logger::FlowLogger;
use crate::protocol::{self, NavigationPolicy, Operation, OperationKind, OperationResult};
use crate::traits::{PlatformBridge, RuntimeDocument};

/// Random identifier attached to every diagnostic of one flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowId(Uuid);

impl FlowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FlowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Collaborators shared by every session a bridge starts.
pub(crate) struct Shared {
    pub host: Arc<dyn PlatformBridge>,
    pub dispatcher: Arc<dyn MainDispatcher>,
    pub logger: Arc<dyn FlowLogger>,
    pub config: BridgeConfig,
    pub completion: Url,
}

/// One in-flight operation.
pub struct FlowSession<O: Operation> {
    id: FlowId,
    request: Option<O>,
    gate: CompletionGate<OperationResult<O>>,
    shared: Arc<Shared>,
}

impl<O: Operation> FlowSession<O> {
    pub(crate) fn new(
        shared: Arc<Shared>,
        request: Option<O>,
        on_completion: impl FnOnce(OperationResult<O>) + Send + 'static,
    ) -> Self {
        let id = FlowId::new();
        let logger = Arc::clone(&shared.logger);
        let dispatcher = Arc::clone(&shared.dispatcher);
        let gate = CompletionGate::new(move |result: OperationResult<O>| {
            logger.log(Level::INFO, id, O::KIND, &format!("complete: {result:?}"));
            dispatcher.dispatch(Box::new(move || on_completion(result)));
        });

        Self {
            id,
            request,
            gate,
            shared,
        }
    }

    pub fn id(&self) -> FlowId {
        self.id
    }

    pub fn operation(&self) -> OperationKind {
        O::KIND
    }

    /// The typed request, absent when a loose request failed to convert.
    pub fn request(&self) -> Option<&O> {
        self.request.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.gate.is_completed()
    }

    /// Encode the request and hand the runtime document to the host.
    #[instrument(skip_all, fields(flow_id = %self.id, operation = %O::KIND))]
    pub(crate) fn launch(&self) {
        let Some(request) = &self.request else {
            return;
        };

        if request.redirect_url().is_some() {
            self.log(
                Level::WARN,
                "redirectUrl is set by the SDK automatically; omit it from the request",
            );
        }

        let html = match self.render(request) {
            Ok(html) => html,
            Err(err) => {
                self.reject(&err.to_string());
                return;
            }
        };

        self.log(Level::DEBUG, "load initial document");
        let config = &self.shared.config;
        let document = RuntimeDocument {
            html: &html,
            base_url: &config.document_base_url,
            error_handler_name: &config.error_handler_name,
            inspectable: config.inspectable,
        };
        if let Err(err) = self.shared.host.load_document(&document) {
            let message = format!("failed to load the runtime document: {err}");
            self.log(Level::WARN, &message);
            self.resolve(|| Err(O::Error::unknown(message)));
        }
    }

    fn render(&self, request: &O) -> Result<String> {
        request.validate()?;
        let json = protocol::encode(request)?;
        protocol::render_document(O::KIND, &json, &self.shared.config)
    }

    /// Resolve the flow with `InvalidArgument` before the runtime is involved.
    pub(crate) fn reject(&self, message: &str) {
        self.log(Level::WARN, &format!("request rejected: {message}"));
        self.resolve(|| Err(O::Error::invalid_argument(message)));
    }

    /// Decide whether the runtime may follow a navigation.
    ///
    /// The completion URL resolves the flow; deep links are handed to the OS.
    /// Both are cancelled. Everything else loads normally.
    pub fn decide_navigation(&self, url: Option<&str>) -> NavigationPolicy {
        let Some(raw) = url else {
            self.log(Level::DEBUG, "navigation without a URL, allowing");
            return NavigationPolicy::Allow;
        };
        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(err) => {
                self.log(Level::DEBUG, &format!("cannot parse {raw} ({err}), allowing"));
                return NavigationPolicy::Allow;
            }
        };

        self.log(Level::DEBUG, &format!("try navigating to: {url}"));

        if protocol::is_completion_url(&url, &self.shared.completion) {
            if !self.resolve(|| protocol::decode_completion::<O>(&url)) {
                self.log(Level::DEBUG, "flow already completed, ignoring completion URL");
            }
            return NavigationPolicy::Cancel;
        }

        if protocol::is_deep_link(&url) {
            self.open_external(&url);
            return NavigationPolicy::Cancel;
        }

        NavigationPolicy::Allow
    }

    fn open_external(&self, url: &Url) {
        self.log(Level::DEBUG, &format!("found app scheme: {}", url.scheme()));
        let host = &self.shared.host;
        if !host.can_open_url(url.as_str()) {
            self.log(
                Level::WARN,
                &format!("cannot open {url}; the target app may not be installed"),
            );
            return;
        }
        match host.open_url(url.as_str()) {
            Ok(()) => self.log(Level::DEBUG, "app opened"),
            Err(err) => self.log(Level::WARN, &format!("failed to open {url}: {err}")),
        }
    }

    /// A message posted by the runtime's script to a named handler.
    pub fn receive_script_message(&self, handler_name: &str, body: &JsonValue) {
        if handler_name != self.shared.config.error_handler_name {
            self.log(Level::DEBUG, &format!("ignoring message for handler {handler_name}"));
            return;
        }
        let Some(message) = body.as_str() else {
            self.log(Level::WARN, "error handler message is not a string, ignoring");
            return;
        };

        self.log(Level::DEBUG, &format!("error from runtime: {message}"));
        if !self.resolve(|| Err(O::Error::invalid_argument(message))) {
            self.log(Level::DEBUG, "flow already completed, ignoring error message");
        }
    }

    /// A committed navigation failed.
    pub fn navigation_failed(&self, error: impl fmt::Display) {
        if self.is_completed() {
            return;
        }
        self.log(Level::WARN, &format!("error navigating: {error}"));
    }

    /// The runtime failed before any content was committed.
    pub fn provisional_navigation_failed(&self, error: impl fmt::Display) {
        if self.is_completed() {
            return;
        }
        self.log(Level::WARN, &format!("error loading content: {error}"));
    }

    fn resolve(&self, outcome: impl FnOnce() -> OperationResult<O>) -> bool {
        self.gate.complete_with(outcome)
    }

    fn log(&self, level: Level, message: &str) {
        self.shared.logger.log(level, self.id, O::KIND, message);
    }
}

impl<O: Operation> Drop for FlowSession<O> {
    fn drop(&mut self) {
        if !self.gate.is_completed() {
            self.log(Level::DEBUG, "flow dismissed without completion");
        }
    }
}

impl<O: Operation> fmt::Debug for FlowSession<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowSession")
            .field("id", &self.id)
            .field("operation", &O::KIND)
            .field("completed", &self.is_completed())
            .finish()
    }
}
