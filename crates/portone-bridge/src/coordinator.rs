// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Single-assignment completion gate.
//
// A flow can be resolved by several racing signals (the completion
// navigation, the error channel, a load failure). The gate hands the
// callback to whichever signal takes the lock first; every later signal sees
// `Completed` and returns. The lock is released before the callback runs, so
// a callback that re-enters the gate cannot deadlock.

use parking_lot::Mutex;

type Callback<T> = Box<dyn FnOnce(T) + Send + 'static>;

enum GateState<T> {
    Pending(Callback<T>),
    Completed,
}

/// Delivers at most one outcome to its callback.
pub struct CompletionGate<T> {
    state: Mutex<GateState<T>>,
}

impl<T> CompletionGate<T> {
    pub fn new(callback: impl FnOnce(T) + Send + 'static) -> Self {
        Self {
            state: Mutex::new(GateState::Pending(Box::new(callback))),
        }
    }

    /// Deliver the outcome if no other signal has. Returns whether it was
    /// delivered; the outcome is only built when this call wins.
    pub fn complete_with(&self, outcome: impl FnOnce() -> T) -> bool {
        let callback = {
            let mut state = self.state.lock();
            match std::mem::replace(&mut *state, GateState::Completed) {
                GateState::Pending(callback) => callback,
                GateState::Completed => return false,
            }
        };
        callback(outcome());
        true
    }

    pub fn is_completed(&self) -> bool {
        matches!(*self.state.lock(), GateState::Completed)
    }
}
