// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PortOne bridge: request models, result models and the JSON contract types
// shared by the bridge and host shells.

pub mod config;
pub mod error;
pub mod json;
pub mod result;
pub mod summary;
pub mod types;

pub use config::BridgeConfig;
pub use error::PortOneError;
pub use json::{JsonObject, JsonValue};
pub use result::*;
pub use types::*;
