// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Debounce: a host-agnostic trailing-edge debounce primitive.
//!
//! [`Debounce`] collapses a burst of triggers into a single firing, timed
//! from the **last** trigger of the burst. It owns no clock and schedules
//! nothing: the host supplies monotonic timestamps (milliseconds, any
//! epoch) and decides when to check for expiry, typically by scheduling one
//! timeout per [`Debounce::deadline`] value.
//!
//! ## Usage
//!
//! 1) On each trigger, call [`Debounce::arm`]. Arming while a deadline is
//!    pending replaces it — the latest trigger wins, which is what makes
//!    the debounce trailing-edge rather than leading-edge.
//! 2) When the host's timer fires (or on any convenient tick), call
//!    [`Debounce::fire`]. It returns `true` and disarms only when a
//!    deadline was pending and has expired; the caller then runs the
//!    debounced work exactly once.
//!
//! ## Minimal example
//!
//! ```rust
//! use marquee_debounce::Debounce;
//!
//! let mut debounce = Debounce::new(500.0);
//!
//! // Three triggers inside one window collapse to one firing, timed from
//! // the last trigger.
//! debounce.arm(0.0);
//! debounce.arm(100.0);
//! let deadline = debounce.arm(200.0);
//! assert_eq!(deadline, 700.0);
//!
//! assert!(!debounce.fire(699.0));
//! assert!(debounce.fire(700.0));
//! // Disarmed until the next trigger.
//! assert!(!debounce.fire(10_000.0));
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// Trailing-edge debounce state: an optional pending deadline.
///
/// The type is a plain value with no interior mutability and no clock; see
/// the crate docs for the host-driven protocol.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Debounce {
    delay: f64,
    deadline: Option<f64>,
}

impl Debounce {
    /// Floor applied to non-positive configured delays.
    ///
    /// A non-positive (or non-numeric) delay is a recoverable
    /// misconfiguration, corrected locally rather than reported.
    pub const MIN_DELAY_MS: f64 = 100.0;

    /// Delay used by [`Debounce::default`].
    pub const DEFAULT_DELAY_MS: f64 = 500.0;

    /// Creates a disarmed debounce with the given delay in milliseconds.
    ///
    /// Delays that are not strictly positive (including NaN) are coerced to
    /// [`Self::MIN_DELAY_MS`].
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        let delay = if delay_ms > 0.0 {
            delay_ms
        } else {
            Self::MIN_DELAY_MS
        };
        Self {
            delay,
            deadline: None,
        }
    }

    /// Returns the effective delay in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> f64 {
        self.delay
    }

    /// Arms (or re-arms) the deadline at `now + delay`, returning it.
    ///
    /// Any unexpired previous deadline is replaced: within a burst, only
    /// the last trigger's timer survives.
    pub fn arm(&mut self, now: f64) -> f64 {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    /// Returns the pending deadline, if armed.
    ///
    /// Hosts typically schedule one timeout per returned value and call
    /// [`Debounce::fire`] when it elapses.
    #[must_use]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the deadline if it has expired.
    ///
    /// Returns `true` exactly when a deadline was pending and `now` has
    /// reached it; the debounce is then disarmed. A stale timer from an
    /// earlier, replaced arming arrives before the current deadline and
    /// returns `false`, which is how cancelled windows die quietly.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Disarms without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::Debounce;

    #[test]
    fn non_positive_delay_clamps_to_floor() {
        assert_eq!(Debounce::new(-5.0).delay_ms(), Debounce::MIN_DELAY_MS);
        assert_eq!(Debounce::new(0.0).delay_ms(), Debounce::MIN_DELAY_MS);
        assert_eq!(Debounce::new(f64::NAN).delay_ms(), Debounce::MIN_DELAY_MS);
        assert_eq!(Debounce::new(250.0).delay_ms(), 250.0);
    }

    #[test]
    fn default_uses_standard_delay() {
        let debounce = Debounce::default();
        assert_eq!(debounce.delay_ms(), Debounce::DEFAULT_DELAY_MS);
        assert!(!debounce.is_armed());
    }

    #[test]
    fn burst_collapses_to_single_firing_from_last_trigger() {
        let mut debounce = Debounce::new(500.0);

        debounce.arm(0.0);
        debounce.arm(100.0);
        debounce.arm(449.0);
        assert_eq!(debounce.deadline(), Some(949.0));

        // The first trigger's timer would have fired at 500; it was replaced.
        assert!(!debounce.fire(500.0));
        assert!(!debounce.fire(948.0));
        assert!(debounce.fire(949.0));
        assert!(!debounce.is_armed());

        // Exactly one firing per burst.
        assert!(!debounce.fire(950.0));
    }

    #[test]
    fn fire_without_arming_is_a_no_op() {
        let mut debounce = Debounce::new(100.0);
        assert!(!debounce.fire(1_000.0));
    }

    #[test]
    fn cancel_discards_pending_deadline() {
        let mut debounce = Debounce::new(100.0);
        debounce.arm(0.0);
        debounce.cancel();
        assert!(!debounce.is_armed());
        assert!(!debounce.fire(1_000.0));
    }

    #[test]
    fn rearming_after_firing_starts_a_fresh_window() {
        let mut debounce = Debounce::new(200.0);
        debounce.arm(0.0);
        assert!(debounce.fire(200.0));

        debounce.arm(300.0);
        assert_eq!(debounce.deadline(), Some(500.0));
        assert!(debounce.fire(500.0));
    }
}
