// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Completion URL the SDK injects as `redirectUrl`.
pub const COMPLETION_URL: &str = "https://ios-sdk.portone.io/done";

/// Base URL the runtime document is loaded against.
pub const DOCUMENT_BASE_URL: &str = "https://ios-sdk.portone.io/ready";

/// Hosted browser SDK script.
pub const BROWSER_SDK_URL: &str = "https://cdn.portone.io/v2/browser-sdk.js";

/// Name of the script message handler used as the error side channel.
pub const ERROR_HANDLER_NAME: &str = "errorHandler";

/// Settings shared by every flow a host launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Navigation target that signals completion.
    pub completion_url: String,
    /// Base URL for the generated runtime document.
    pub document_base_url: String,
    /// Browser SDK script loaded by the runtime document.
    pub browser_sdk_url: String,
    /// Script message handler receiving client-side errors.
    pub error_handler_name: String,
    /// Allow attaching a web inspector to the runtime (debug builds).
    pub inspectable: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            completion_url: COMPLETION_URL.into(),
            document_base_url: DOCUMENT_BASE_URL.into(),
            browser_sdk_url: BROWSER_SDK_URL.into(),
            error_handler_name: ERROR_HANDLER_NAME.into(),
            inspectable: cfg!(debug_assertions),
        }
    }
}

impl BridgeConfig {
    /// Load a config file. Missing keys fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&raw)?;
        debug!(path = %path.as_ref().display(), "bridge config loaded");
        Ok(config)
    }

    /// Persist the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
