// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory host and logger for unit tests.

use parking_lot::Mutex;
use tracing::Level;

use portone_core::error::{PortOneError, Result};

use crate::logger::FlowLogger;
use crate::protocol::OperationKind;
use crate::session::FlowId;
use crate::traits::*;

/// Records loaded documents and opened URLs.
#[derive(Default)]
pub struct RecordingHost {
    can_open: bool,
    refuse_open: bool,
    documents: Mutex<Vec<String>>,
    opened: Mutex<Vec<String>>,
}

impl RecordingHost {
    /// Report every deep link as openable.
    pub fn openable(mut self) -> Self {
        self.can_open = true;
        self
    }

    /// Report deep links as openable but fail to open them.
    pub fn refusing(mut self) -> Self {
        self.can_open = true;
        self.refuse_open = true;
        self
    }

    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl PlatformBridge for RecordingHost {
    fn platform_name(&self) -> &str {
        "test"
    }
}

impl EmbeddedRuntime for RecordingHost {
    fn load_document(&self, document: &RuntimeDocument<'_>) -> Result<()> {
        self.documents.lock().push(document.html.to_owned());
        Ok(())
    }
}

impl ExternalUrlOpener for RecordingHost {
    fn can_open_url(&self, _url: &str) -> bool {
        self.can_open
    }

    fn open_url(&self, url: &str) -> Result<()> {
        if self.refuse_open {
            return Err(PortOneError::Bridge(format!("no activity handles {url}")));
        }
        self.opened.lock().push(url.to_owned());
        Ok(())
    }
}

/// Keeps every record for assertions.
#[derive(Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    /// Number of records at any level containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|(_, message)| message.contains(needle))
            .count()
    }

    pub fn warned(&self, needle: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|(level, message)| *level == Level::WARN && message.contains(needle))
    }
}

impl FlowLogger for RecordingLogger {
    fn log(&self, level: Level, _flow_id: FlowId, _operation: OperationKind, message: &str) {
        self.records.lock().push((level, message.to_owned()));
    }
}
