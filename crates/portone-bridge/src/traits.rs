// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the host's native capabilities.
//
// A flow needs exactly two things from the host platform: somewhere to run
// the browser SDK document, and a way to hand deep links to other apps.

use portone_core::error::Result;

/// Unified bridge that groups the host capabilities a flow uses.
///
/// Platforms that lack a capability return
/// `PortOneError::PlatformUnavailable` from their implementation.
pub trait PlatformBridge: EmbeddedRuntime + ExternalUrlOpener + Send + Sync {
    /// Human-readable platform name (e.g. "iOS 17", "Android 14").
    fn platform_name(&self) -> &str;
}

/// Everything the host needs to present one flow's runtime document.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeDocument<'a> {
    pub html: &'a str,
    /// Base URL the document is loaded against.
    pub base_url: &'a str,
    /// Script message handler the host must register before loading.
    pub error_handler_name: &'a str,
    /// Whether a web inspector may attach.
    pub inspectable: bool,
}

/// A web view (or equivalent) that runs the browser SDK.
pub trait EmbeddedRuntime {
    /// Load the runtime document.
    ///
    /// Navigation requests and script messages raised by the document are
    /// routed back to the flow's session by the host.
    fn load_document(&self, document: &RuntimeDocument<'_>) -> Result<()>;
}

/// Hands URLs the embedded runtime must not load itself to the OS.
pub trait ExternalUrlOpener {
    /// Whether some installed app can handle the URL.
    fn can_open_url(&self, url: &str) -> bool;

    /// Open the URL outside the runtime (bank apps, card apps, wallets).
    fn open_url(&self, url: &str) -> Result<()>;
}
