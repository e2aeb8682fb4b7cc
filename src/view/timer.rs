// src/view/timer.rs — Cancelable one-shot timers for visual transitions.
//
// Timers are deadlines polled by the UI tick rather than spawned sleeps, so
// scheduling, cancelling and firing all happen on the UI task. A slot holds at
// most one pending step: scheduling again replaces (cancels) the previous one.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TimerSlot<T> {
    pending: Option<(Instant, T)>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> TimerSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `step` to fire `delay` after `now`. Returns the step that was
    /// cancelled, if one was pending.
    pub fn schedule(&mut self, now: Instant, delay: Duration, step: T) -> Option<T> {
        let cancelled = self.cancel();
        self.pending = Some((now + delay, step));
        cancelled
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, step)| step)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, step)| step)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(at, _)| *at)
    }

    /// Take the pending step if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((at, _)) if now >= *at => self.cancel(),
            _ => None,
        }
    }
}
