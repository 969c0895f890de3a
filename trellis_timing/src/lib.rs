// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_timing --heading-base-level=0

//! Trellis Timing: host-driven debounce and delay primitives.
//!
//! Widget state machines frequently gate work behind time: a modal overlay
//! coalesces viewport-resize storms behind a quiet period, and a tooltip
//! reveals its content only after the pointer has rested on the anchor for a
//! configured delay. This crate provides the two timer shapes those widgets
//! need, with the host owning the clock:
//!
//! - [`Debounce`]: a trailing-edge gate. Every trigger pushes the deadline
//!   out by the quiet period; polling reports firing once the deadline has
//!   passed with no further triggers.
//! - [`Delay`]: a single-shot timer that can be scheduled, cancelled, and
//!   polled.
//!
//! Timestamps are plain `u64` milliseconds in any monotonic timebase the
//! host chooses. There are no threads, no OS timers, and no callbacks; the
//! host polls from its own event loop or frame tick.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_timing::Debounce;
//!
//! let mut resize = Debounce::new(250);
//!
//! // A storm of resize events between t=0 and t=40.
//! resize.trigger(0);
//! resize.trigger(25);
//! resize.trigger(40);
//!
//! // Still inside the quiet period: nothing fires.
//! assert!(!resize.poll(240));
//!
//! // 250ms after the last trigger the gate fires, exactly once.
//! assert!(resize.poll(290));
//! assert!(!resize.poll(291));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Trailing-edge debounce gate over a host-supplied clock.
///
/// Each [`Debounce::trigger`] call re-arms the deadline to `now + quiet`.
/// [`Debounce::poll`] reports `true` once the deadline passes, then disarms,
/// so a quiet-period burst collapses into a single firing.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    quiet: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// Creates a disarmed debounce gate with the given quiet period in
    /// milliseconds.
    #[must_use]
    pub const fn new(quiet: u64) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Returns the configured quiet period in milliseconds.
    #[must_use]
    pub const fn quiet(&self) -> u64 {
        self.quiet
    }

    /// Records an occurrence of the debounced event at time `now`.
    ///
    /// The deadline moves to `now + quiet`, extending any pending deadline.
    pub fn trigger(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.quiet));
    }

    /// Returns `true` once the quiet period has elapsed since the last
    /// trigger, disarming the gate.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Disarms the gate without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Single-shot delay timer over a host-supplied clock.
///
/// Unlike [`Debounce`], scheduling while pending *replaces* the deadline
/// rather than extending a shared quiet period; each schedule stands alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct Delay {
    deadline: Option<u64>,
}

impl Delay {
    /// Creates an idle delay timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedules the timer to fire `after` milliseconds past `now`,
    /// replacing any pending deadline.
    pub fn schedule(&mut self, now: u64, after: u64) {
        self.deadline = Some(now.saturating_add(after));
    }

    /// Cancels a pending deadline, returning `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns `true` once the deadline has passed, disarming the timer.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_debounce_is_disarmed() {
        let mut debounce = Debounce::new(250);
        assert!(!debounce.is_armed());
        assert!(!debounce.poll(1_000));
    }

    #[test]
    fn retrigger_extends_deadline() {
        let mut debounce = Debounce::new(100);
        debounce.trigger(0);
        debounce.trigger(90);

        // The first deadline (t=100) must not fire after the retrigger.
        assert!(!debounce.poll(100));
        assert!(debounce.poll(190));
    }

    #[test]
    fn poll_fires_once() {
        let mut debounce = Debounce::new(50);
        debounce.trigger(0);

        assert!(debounce.poll(50));
        assert!(!debounce.is_armed());
        assert!(!debounce.poll(60));
    }

    #[test]
    fn cancel_disarms_without_firing() {
        let mut debounce = Debounce::new(50);
        debounce.trigger(0);
        debounce.cancel();

        assert!(!debounce.poll(1_000));
    }

    #[test]
    fn deadline_saturates_near_u64_max() {
        let mut debounce = Debounce::new(u64::MAX);
        debounce.trigger(10);

        assert!(!debounce.poll(u64::MAX - 1));
        assert!(debounce.poll(u64::MAX));
    }

    #[test]
    fn delay_schedule_and_fire() {
        let mut delay = Delay::new();
        assert!(!delay.is_pending());

        delay.schedule(100, 30);
        assert!(delay.is_pending());
        assert!(!delay.poll(129));
        assert!(delay.poll(130));
        assert!(!delay.is_pending());
    }

    #[test]
    fn delay_zero_fires_immediately() {
        let mut delay = Delay::new();
        delay.schedule(5, 0);
        assert!(delay.poll(5));
    }

    #[test]
    fn delay_cancel_reports_pending_state() {
        let mut delay = Delay::new();
        assert!(!delay.cancel());

        delay.schedule(0, 10);
        assert!(delay.cancel());
        assert!(!delay.poll(1_000));
    }

    #[test]
    fn reschedule_replaces_deadline() {
        let mut delay = Delay::new();
        delay.schedule(0, 10);
        delay.schedule(0, 100);

        assert!(!delay.poll(10));
        assert!(delay.poll(100));
    }
}
