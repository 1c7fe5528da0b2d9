// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! PortOne bridge: runs browser SDK flows inside a host's embedded web view.
//!
//! The host implements `PlatformBridge` for its web view and OS, starts a
//! flow through `PortOneBridge`, and forwards the web view's navigation and
//! script-message events to the returned `FlowSession`. Exactly one outcome
//! reaches the caller's callback, on the host's main context.

pub mod adapter;
pub mod coordinator;
pub mod dispatch;
pub mod logger;
pub mod protocol;
pub mod session;
pub mod stub;
pub mod traits;

#[cfg(test)]
mod test_support;

pub use adapter::PortOneBridge;
pub use dispatch::{InlineDispatcher, MainDispatcher, MainQueue, QueueDispatcher, main_queue};
pub use logger::{FlowLogger, TracingLogger};
pub use protocol::{NavigationPolicy, Operation, OperationKind, OperationResult};
pub use session::{FlowId, FlowSession};
