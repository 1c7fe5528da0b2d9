// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Diagnostics sink for flow sessions.
//
// Sessions never log through a global; each one holds the logger it was
// started with, so hosts can route flow diagnostics wherever they like.

use tracing::Level;

use crate::protocol::OperationKind;
use crate::session::FlowId;

/// Receives every diagnostic a flow session emits.
pub trait FlowLogger: Send + Sync {
    fn log(&self, level: Level, flow_id: FlowId, operation: OperationKind, message: &str);
}

/// Default logger: forwards to `tracing` with `flow_id` and `operation` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl FlowLogger for TracingLogger {
    fn log(&self, level: Level, flow_id: FlowId, operation: OperationKind, message: &str) {
        match level {
            Level::ERROR => tracing::error!(%flow_id, %operation, "{message}"),
            Level::WARN => tracing::warn!(%flow_id, %operation, "{message}"),
            Level::INFO => tracing::info!(%flow_id, %operation, "{message}"),
            Level::DEBUG => tracing::debug!(%flow_id, %operation, "{message}"),
            Level::TRACE => tracing::trace!(%flow_id, %operation, "{message}"),
        }
    }
}
