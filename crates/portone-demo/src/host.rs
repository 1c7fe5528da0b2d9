// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Console host: stands in for a web view when driving flows from a terminal.

use tracing::info;

use portone_bridge::traits::{EmbeddedRuntime, ExternalUrlOpener, PlatformBridge, RuntimeDocument};
use portone_core::error::Result;

/// Accepts every document and prints deep links instead of opening them.
#[derive(Debug, Default)]
pub struct ConsoleHost;

impl PlatformBridge for ConsoleHost {
    fn platform_name(&self) -> &str {
        "console"
    }
}

impl EmbeddedRuntime for ConsoleHost {
    fn load_document(&self, document: &RuntimeDocument<'_>) -> Result<()> {
        info!(
            bytes = document.html.len(),
            base_url = document.base_url,
            handler = document.error_handler_name,
            inspectable = document.inspectable,
            "runtime document loaded"
        );
        Ok(())
    }
}

impl ExternalUrlOpener for ConsoleHost {
    fn can_open_url(&self, _url: &str) -> bool {
        true
    }

    fn open_url(&self, url: &str) -> Result<()> {
        println!("open {url}");
        Ok(())
    }
}
