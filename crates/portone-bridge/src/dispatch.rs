// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Marshalling of completion callbacks onto the host's main context.
//
// Completion events can arrive on any thread; UI toolkits only accept updates
// on their main thread. The host supplies a `MainDispatcher` that gets the
// delivery there.

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A unit of work to run on the main context.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks on the host's main context.
pub trait MainDispatcher: Send + Sync {
    fn dispatch(&self, task: Task);
}

/// Runs each task immediately on the calling thread.
///
/// Suitable when the host already delivers runtime events on its main thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDispatcher;

impl MainDispatcher for InlineDispatcher {
    fn dispatch(&self, task: Task) {
        task();
    }
}

/// Sending half of a main-context queue. Cheap to clone.
#[derive(Clone)]
pub struct QueueDispatcher {
    sender: mpsc::UnboundedSender<Task>,
}

impl MainDispatcher for QueueDispatcher {
    fn dispatch(&self, task: Task) {
        if self.sender.send(task).is_err() {
            warn!("main queue closed, dropping completion task");
        }
    }
}

/// Receiving half, drained by the host on its main loop.
pub struct MainQueue {
    receiver: mpsc::UnboundedReceiver<Task>,
}

/// Create a connected dispatcher/queue pair.
pub fn main_queue() -> (QueueDispatcher, MainQueue) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (QueueDispatcher { sender }, MainQueue { receiver })
}

impl MainQueue {
    /// Run every task queued so far without waiting. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            ran += 1;
        }
        if ran > 0 {
            debug!(ran, "main queue drained");
        }
        ran
    }

    /// Run tasks as they arrive until every dispatcher has been dropped.
    pub async fn run(mut self) {
        while let Some(task) = self.receiver.recv().await {
            task();
        }
        debug!("main queue closed");
    }
}
