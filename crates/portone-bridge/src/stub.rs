// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where no web view is available.
//
// Loading a document fails with `PlatformUnavailable`, so a flow started on
// the stub resolves immediately with an `Unknown` outcome.

use portone_core::error::{PortOneError, Result};

use crate::traits::*;

/// No-op bridge for hosts without an embedded runtime.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl EmbeddedRuntime for StubBridge {
    fn load_document(&self, _document: &RuntimeDocument<'_>) -> Result<()> {
        tracing::warn!("EmbeddedRuntime::load_document called on stub bridge");
        Err(PortOneError::PlatformUnavailable)
    }
}

impl ExternalUrlOpener for StubBridge {
    fn can_open_url(&self, _url: &str) -> bool {
        false
    }

    fn open_url(&self, _url: &str) -> Result<()> {
        tracing::warn!("ExternalUrlOpener::open_url called on stub bridge");
        Err(PortOneError::PlatformUnavailable)
    }
}
