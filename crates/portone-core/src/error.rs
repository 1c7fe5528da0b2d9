// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error type for the bridge internals.
//
// These errors never cross the host boundary directly: a flow always ends in
// one of the per-operation result types in `crate::result`.

use thiserror::Error;

/// Top-level error type for fallible bridge operations.
#[derive(Debug, Error)]
pub enum PortOneError {
    // -- Request construction --
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("invalid value `{value}` for {kind}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("non-finite number cannot be encoded as JSON")]
    NonFiniteNumber,

    // -- Protocol --
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PortOneError>;

/// Reject empty mandatory strings.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortOneError::EmptyField { field });
    }
    Ok(())
}
