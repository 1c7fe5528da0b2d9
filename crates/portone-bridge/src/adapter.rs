// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host-facing entry point: starts flows and wires their collaborators.

use std::sync::Arc;

use tracing::{debug, info, instrument};
use url::Url;

use portone_core::config::BridgeConfig;
use portone_core::error::{PortOneError, Result};
use portone_core::json::{JsonObject, JsonValue};

use crate::dispatch::MainDispatcher;
use crate::logger::{FlowLogger, TracingLogger};
use crate::protocol::{Operation, OperationResult};
use crate::session::{FlowSession, Shared};
use crate::traits::PlatformBridge;

/// Starts flows against one host platform.
///
/// ```ignore
/// let bridge = PortOneBridge::new(host, Arc::new(InlineDispatcher))?;
/// let session = bridge.start(request, |result: PaymentResult| show(result));
/// // forward the web view's navigation and message events to `session`
/// ```
#[derive(Clone)]
pub struct PortOneBridge {
    shared: Arc<Shared>,
}

impl PortOneBridge {
    /// Bridge with the default configuration and a `tracing` logger.
    pub fn new(
        host: Arc<dyn PlatformBridge>,
        dispatcher: Arc<dyn MainDispatcher>,
    ) -> Result<Self> {
        Self::with_config(host, dispatcher, Arc::new(TracingLogger), BridgeConfig::default())
    }

    #[instrument(skip_all, fields(platform = host.platform_name()))]
    pub fn with_config(
        host: Arc<dyn PlatformBridge>,
        dispatcher: Arc<dyn MainDispatcher>,
        logger: Arc<dyn FlowLogger>,
        config: BridgeConfig,
    ) -> Result<Self> {
        let completion = Url::parse(&config.completion_url)
            .map_err(|e| PortOneError::InvalidUrl(format!("{}: {e}", config.completion_url)))?;
        Url::parse(&config.document_base_url)
            .map_err(|e| PortOneError::InvalidUrl(format!("{}: {e}", config.document_base_url)))?;

        info!(completion_url = %completion, "PortOne bridge ready");
        Ok(Self {
            shared: Arc::new(Shared {
                host,
                dispatcher,
                logger,
                config,
                completion,
            }),
        })
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.shared.config
    }

    /// Start a flow. `on_completion` runs at most once, on the main context.
    ///
    /// A request that fails validation or encoding resolves immediately with
    /// `InvalidArgument` and never reaches the runtime.
    pub fn start<O: Operation>(
        &self,
        request: O,
        on_completion: impl FnOnce(OperationResult<O>) + Send + 'static,
    ) -> FlowSession<O> {
        let session = FlowSession::new(Arc::clone(&self.shared), Some(request), on_completion);
        debug!(flow_id = %session.id(), operation = %session.operation(), "flow started");
        session.launch();
        session
    }

    /// Start a flow from a loosely-typed JSON object.
    ///
    /// The object is converted to the typed request first; unknown keys,
    /// missing mandatory keys and unknown enum values all resolve the flow
    /// with `InvalidArgument`.
    pub fn start_loose<O: Operation>(
        &self,
        object: JsonObject,
        on_completion: impl FnOnce(OperationResult<O>) + Send + 'static,
    ) -> FlowSession<O> {
        match convert::<O>(object) {
            Ok(request) => self.start(request, on_completion),
            Err(err) => {
                let session = FlowSession::new(Arc::clone(&self.shared), None, on_completion);
                session.reject(&err.to_string());
                session
            }
        }
    }
}

/// Convert a loose object into the typed request.
pub fn convert<O: Operation>(object: JsonObject) -> Result<O> {
    let value = serde_json::to_value(JsonValue::Object(object))?;
    serde_json::from_value(value).map_err(|e| PortOneError::InvalidRequest(e.to_string()))
}
