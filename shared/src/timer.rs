//! Virtual-time scheduling for the timer-driven screens.
//!
//! Screens never sleep. A reducer that wants to be woken up exposes the single
//! timer it currently needs through [`Timed::pending_timer`]; whoever drives it
//! (a `gloo-timers` timeout in the browser, [`VirtualClock`] in tests) waits
//! `after` and feeds `event` back through [`Timed::apply`]. The timer is
//! re-read after every transition, so a machine re-arms itself simply by
//! returning another timer from its new state.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Timer<E> {
    pub after: Duration,
    pub event: E,
}

impl<E> Timer<E> {
    pub fn new(after_ms: u64, event: E) -> Self {
        Self {
            after: Duration::from_millis(after_ms),
            event,
        }
    }
}

pub trait Timed: Sized {
    type Event: Clone;

    fn pending_timer(&self) -> Option<Timer<Self::Event>>;

    fn apply(&self, event: Self::Event) -> Self;
}

/// Deterministic driver for a [`Timed`] machine.
#[derive(Debug, Clone)]
pub struct VirtualClock<M: Timed> {
    machine: M,
    elapsed: Duration,
    armed_at: Duration,
    fired: usize,
}

impl<M: Timed> VirtualClock<M> {
    pub fn new(machine: M) -> Self {
        Self {
            machine,
            elapsed: Duration::ZERO,
            armed_at: Duration::ZERO,
            fired: 0,
        }
    }

    pub fn state(&self) -> &M {
        &self.machine
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of timer events fired so far.
    pub fn fired(&self) -> usize {
        self.fired
    }

    /// Apply a user-initiated event now and re-arm from the current instant.
    pub fn send(&mut self, event: M::Event) {
        self.machine = self.machine.apply(event);
        self.armed_at = self.elapsed;
    }

    /// Move virtual time forward by `dt`, firing every timer that comes due.
    pub fn advance(&mut self, dt: Duration) {
        let target = self.elapsed + dt;
        while let Some(timer) = self.machine.pending_timer() {
            let deadline = self.armed_at + timer.after;
            if deadline > target {
                break;
            }
            self.elapsed = deadline;
            self.machine = self.machine.apply(timer.event);
            self.armed_at = deadline;
            self.fired += 1;
        }
        self.elapsed = target;
    }

    /// Advance until no timer is pending, bounded by `limit`.
    pub fn run_until_idle(&mut self, limit: Duration) {
        let stop = self.elapsed + limit;
        while let Some(timer) = self.machine.pending_timer() {
            let deadline = self.armed_at + timer.after;
            if deadline > stop {
                break;
            }
            self.advance(deadline - self.elapsed);
        }
    }

    pub fn into_inner(self) -> M {
        self.machine
    }
}
