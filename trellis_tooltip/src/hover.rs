// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover lifecycle: delayed reveal, move tracking, and hide.

use kurbo::{Point, Size, Vec2};
use trellis_timing::Delay;

use crate::place::{Placement, place};

/// Tooltip behavior chosen at setup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Where the tooltip takes its base position from.
    pub placement: Placement,
    /// Offset from the base position to the tooltip origin.
    pub offset: Vec2,
    /// Milliseconds the pointer must rest before the content reveals.
    pub delay: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            offset: Vec2::new(20.0, 20.0),
            delay: 0,
        }
    }
}

/// Transition the host must apply to its tooltip element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipEvent {
    /// Write the content, measure the element, and position it via
    /// [`Tooltip::position`].
    Reveal,
    /// Remove the tooltip element.
    Hide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed,
    Shown,
}

/// Hover-reveal state machine for one tooltip.
///
/// Drive it from the host's enter/move/leave callbacks and poll it with the
/// host clock; it emits [`TooltipEvent`]s for the host to apply. At most one
/// reveal is armed at a time, and re-entering while armed restarts the delay
/// from the new timestamp.
#[derive(Clone, Copy, Debug)]
pub struct Tooltip {
    config: TooltipConfig,
    reveal: Delay,
    phase: Phase,
    base: Point,
}

impl Tooltip {
    /// Creates an idle tooltip with the given configuration.
    #[must_use]
    pub const fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            reveal: Delay::new(),
            phase: Phase::Idle,
            base: Point::ZERO,
        }
    }

    /// Returns the configuration chosen at setup.
    #[must_use]
    pub const fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Returns `true` while a reveal is armed but not yet fired.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.phase == Phase::Armed
    }

    /// Returns `true` while the tooltip content is shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase == Phase::Shown
    }

    /// Records the pointer entering the anchor at time `now`.
    ///
    /// `base` is the position the tooltip will measure from: the anchor
    /// origin for [`Placement::Anchor`], the pointer position otherwise.
    /// Any armed or shown state restarts; the reveal fires once the
    /// configured delay elapses.
    pub fn pointer_enter(&mut self, base: Point, now: u64) {
        self.base = base;
        self.phase = Phase::Armed;
        self.reveal.schedule(now, self.config.delay);
    }

    /// Records pointer movement at `pointer`.
    ///
    /// Returns `true` when the host should reposition the tooltip, which
    /// happens only in [`Placement::PointerFollow`] mode while shown.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        if self.phase == Phase::Shown && self.config.placement == Placement::PointerFollow {
            self.base = pointer;
            return true;
        }
        false
    }

    /// Records the pointer leaving the anchor.
    ///
    /// An armed reveal is cancelled; a shown tooltip hides. Returns the
    /// transition the host must apply, if any.
    pub fn pointer_leave(&mut self) -> Option<TooltipEvent> {
        self.reveal.cancel();
        let was_shown = self.phase == Phase::Shown;
        self.phase = Phase::Idle;
        was_shown.then_some(TooltipEvent::Hide)
    }

    /// Polls the reveal delay with the host clock.
    ///
    /// Returns [`TooltipEvent::Reveal`] exactly once per armed hover, after
    /// the configured delay has elapsed.
    pub fn poll(&mut self, now: u64) -> Option<TooltipEvent> {
        if self.phase == Phase::Armed && self.reveal.poll(now) {
            self.phase = Phase::Shown;
            return Some(TooltipEvent::Reveal);
        }
        None
    }

    /// Computes the tooltip origin for the current base position.
    ///
    /// `tip` is the measured tooltip size, `viewport` the visible size, and
    /// `scroll` the document scroll offset. See [`place`] for the flipping
    /// rules.
    #[must_use]
    pub fn position(&self, tip: Size, viewport: Size, scroll: Vec2) -> Point {
        place(self.base, self.config.offset, tip, viewport, scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follow_config(delay: u64) -> TooltipConfig {
        TooltipConfig {
            placement: Placement::PointerFollow,
            delay,
            ..TooltipConfig::default()
        }
    }

    #[test]
    fn reveal_fires_once_after_the_delay() {
        let mut tip = Tooltip::new(TooltipConfig {
            delay: 100,
            ..TooltipConfig::default()
        });

        tip.pointer_enter(Point::new(10.0, 10.0), 0);
        assert!(tip.is_armed());
        assert_eq!(tip.poll(99), None);
        assert_eq!(tip.poll(100), Some(TooltipEvent::Reveal));
        assert!(tip.is_shown());
        assert_eq!(tip.poll(101), None);
    }

    #[test]
    fn zero_delay_reveals_on_the_next_poll() {
        let mut tip = Tooltip::new(TooltipConfig::default());
        tip.pointer_enter(Point::ZERO, 42);
        assert_eq!(tip.poll(42), Some(TooltipEvent::Reveal));
    }

    #[test]
    fn leave_while_armed_cancels_silently() {
        let mut tip = Tooltip::new(TooltipConfig {
            delay: 100,
            ..TooltipConfig::default()
        });

        tip.pointer_enter(Point::ZERO, 0);
        assert_eq!(tip.pointer_leave(), None);
        assert_eq!(tip.poll(1_000), None);
        assert!(!tip.is_armed());
    }

    #[test]
    fn leave_while_shown_hides() {
        let mut tip = Tooltip::new(TooltipConfig::default());
        tip.pointer_enter(Point::ZERO, 0);
        tip.poll(0);

        assert_eq!(tip.pointer_leave(), Some(TooltipEvent::Hide));
        assert!(!tip.is_shown());
    }

    #[test]
    fn reenter_restarts_the_delay() {
        let mut tip = Tooltip::new(TooltipConfig {
            delay: 100,
            ..TooltipConfig::default()
        });

        tip.pointer_enter(Point::ZERO, 0);
        tip.pointer_enter(Point::ZERO, 80);

        assert_eq!(tip.poll(100), None);
        assert_eq!(tip.poll(180), Some(TooltipEvent::Reveal));
    }

    #[test]
    fn moves_reposition_only_in_follow_mode_while_shown() {
        let mut fixed = Tooltip::new(TooltipConfig::default());
        fixed.pointer_enter(Point::ZERO, 0);
        fixed.poll(0);
        assert!(!fixed.pointer_move(Point::new(50.0, 50.0)));

        let mut follow = Tooltip::new(follow_config(0));
        follow.pointer_enter(Point::ZERO, 0);
        // Not shown yet: moves do not reposition.
        assert!(!follow.pointer_move(Point::new(5.0, 5.0)));
        follow.poll(0);
        assert!(follow.pointer_move(Point::new(50.0, 50.0)));
    }

    #[test]
    fn position_tracks_the_followed_pointer() {
        let viewport = Size::new(800.0, 600.0);
        let tip_size = Size::new(100.0, 40.0);

        let mut tip = Tooltip::new(follow_config(0));
        tip.pointer_enter(Point::new(10.0, 10.0), 0);
        tip.poll(0);

        assert_eq!(
            tip.position(tip_size, viewport, Vec2::ZERO),
            Point::new(30.0, 30.0)
        );

        tip.pointer_move(Point::new(200.0, 100.0));
        assert_eq!(
            tip.position(tip_size, viewport, Vec2::ZERO),
            Point::new(220.0, 120.0)
        );
    }
}
