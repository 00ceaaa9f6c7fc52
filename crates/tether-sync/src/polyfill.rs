//! Move notifications for platforms that never report window moves.
//!
//! The emulator is a cancellable per-frame ticker. The host wakes it up at
//! [`MoveEmulator::next_wake`] and feeds it the current outer geometry; the
//! emulator answers whether a move notification should be synthesized.

use std::time::{Duration, Instant};

use tether_common::WindowRectSnapshot;
use tracing::{debug, info};

/// Polls window geometry and reports changes.
#[derive(Debug)]
pub struct MoveEmulator {
    last: WindowRectSnapshot,
    interval: Duration,
    next_tick: Instant,
    running: bool,
}

impl MoveEmulator {
    /// Start with `initial` as the last seen geometry; the first tick is due
    /// immediately.
    pub fn new(initial: WindowRectSnapshot, interval: Duration, now: Instant) -> Self {
        info!(interval_ms = interval.as_millis() as u64, "emulating window move events");
        Self {
            last: initial,
            interval,
            next_tick: now,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn last_snapshot(&self) -> WindowRectSnapshot {
        self.last
    }

    /// Stop the ticker for good.
    pub fn cancel(&mut self) {
        if self.running {
            debug!("move emulation cancelled");
        }
        self.running = false;
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.running && now >= self.next_tick
    }

    /// When the host should wake up for the next tick, if at all.
    pub fn next_wake(&self) -> Option<Instant> {
        self.running.then_some(self.next_tick)
    }

    /// Run one tick if due. Returns `true` when a move notification should
    /// be dispatched.
    pub fn tick(&mut self, now: Instant, current: WindowRectSnapshot) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next_tick = now + self.interval;
        self.observe(current)
    }

    /// Compare `current` against the last snapshot, storing it on change.
    pub fn observe(&mut self, current: WindowRectSnapshot) -> bool {
        if current == self.last {
            return false;
        }
        debug!(?current, previous = ?self.last, "window rect changed");
        self.last = current;
        true
    }
}
