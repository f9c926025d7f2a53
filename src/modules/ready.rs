// Readiness gate: work deferred until the document can be queried.

use std::collections::VecDeque;

type Callback<T> = Box<dyn FnOnce(&mut T)>;

enum GateState<T> {
    Pending(VecDeque<Callback<T>>),
    Open,
}

/// Defers work until a target becomes usable.
///
/// While pending, callbacks queue up. Opening the gate runs them once, in
/// insertion order, and from then on `on_ready` runs callbacks immediately.
pub struct ReadyGate<T> {
    state: GateState<T>,
}

impl<T> ReadyGate<T> {
    pub fn pending() -> Self {
        Self {
            state: GateState::Pending(VecDeque::new()),
        }
    }

    pub fn open_now() -> Self {
        Self {
            state: GateState::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, GateState::Open)
    }

    pub fn queued(&self) -> usize {
        match &self.state {
            GateState::Pending(queue) => queue.len(),
            GateState::Open => 0,
        }
    }

    pub fn on_ready<F>(&mut self, target: &mut T, callback: F)
    where
        F: FnOnce(&mut T) + 'static,
    {
        match &mut self.state {
            GateState::Pending(queue) => queue.push_back(Box::new(callback)),
            GateState::Open => callback(target),
        }
    }

    /// Opens the gate and drains the queue. Returns how many callbacks ran;
    /// zero when the gate was already open.
    pub fn open(&mut self, target: &mut T) -> usize {
        let queue = match std::mem::replace(&mut self.state, GateState::Open) {
            GateState::Pending(queue) => queue,
            GateState::Open => return 0,
        };
        let ran = queue.len();
        for callback in queue {
            callback(target);
        }
        ran
    }
}
