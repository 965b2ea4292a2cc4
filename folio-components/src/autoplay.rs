//! Auto-advance timing for carousels.
//!
//! ## Usage
//!
//! Tick once per frame (or per simulated step) and apply the returned number
//! of advances to the owning carousel. Hovering suspends the schedule;
//! leaving re-arms a full interval.
use std::time::{Duration, Instant};

use tracing::trace;

/// Interval between automatic advances, matching the testimonial rotation.
const DEFAULT_AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5_000);
/// Floor for configured intervals so the tick loop always terminates.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Tick-driven auto-advance schedule.
///
/// The schedule holds at most one pending deadline, owns no thread and no OS
/// timer, so dropping it with its carousel cancels everything outstanding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoAdvance {
    interval: Duration,
    hovered: bool,
    next_fire: Option<Instant>,
}

impl AutoAdvance {
    /// Creates a schedule firing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            hovered: false,
            next_fire: None,
        }
    }

    /// The configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the pointer is currently over the component.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Updates the hover flag. Entering suspends the schedule and clears the
    /// pending deadline; leaving re-arms a full interval on the next tick.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.next_fire = None;
        trace!(hovered, "auto-advance hover state changed");
    }

    /// Observes the clock and returns how many intervals elapsed since the
    /// last observation.
    ///
    /// The first tick after construction or after a hover ends only arms the
    /// schedule. A late tick reports every missed interval at once, so a
    /// driver sleeping through three intervals still applies three advances.
    pub fn tick(&mut self, now: Instant) -> u32 {
        if self.hovered {
            return 0;
        }
        let Some(mut due) = self.next_fire else {
            self.next_fire = Some(now + self.interval);
            return 0;
        };
        let mut fires = 0;
        while now >= due {
            fires += 1;
            due += self.interval;
        }
        self.next_fire = Some(due);
        fires
    }
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_ADVANCE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_arms_without_firing() {
        let mut schedule = AutoAdvance::default();
        let start = Instant::now();
        assert_eq!(schedule.tick(start), 0);
    }

    #[test]
    fn three_elapsed_intervals_fire_exactly_three_times() {
        let mut schedule = AutoAdvance::new(Duration::from_millis(5_000));
        let start = Instant::now();
        schedule.tick(start);
        assert_eq!(schedule.tick(start + Duration::from_millis(15_000)), 3);
        assert_eq!(schedule.tick(start + Duration::from_millis(15_001)), 0);
    }

    #[test]
    fn per_interval_ticks_fire_once_each() {
        let mut schedule = AutoAdvance::new(Duration::from_millis(5_000));
        let start = Instant::now();
        schedule.tick(start);
        assert_eq!(schedule.tick(start + Duration::from_millis(4_999)), 0);
        assert_eq!(schedule.tick(start + Duration::from_millis(5_000)), 1);
        assert_eq!(schedule.tick(start + Duration::from_millis(10_000)), 1);
    }

    #[test]
    fn hover_suspends_and_leaving_rearms_a_full_interval() {
        let mut schedule = AutoAdvance::new(Duration::from_millis(5_000));
        let start = Instant::now();
        schedule.tick(start);

        schedule.set_hovered(true);
        assert_eq!(schedule.tick(start + Duration::from_millis(20_000)), 0);

        schedule.set_hovered(false);
        let resumed = start + Duration::from_millis(20_000);
        assert_eq!(schedule.tick(resumed), 0);
        assert_eq!(schedule.tick(resumed + Duration::from_millis(4_999)), 0);
        assert_eq!(schedule.tick(resumed + Duration::from_millis(5_000)), 1);
    }

    #[test]
    fn redundant_hover_updates_keep_the_deadline() {
        let mut schedule = AutoAdvance::new(Duration::from_millis(5_000));
        let start = Instant::now();
        schedule.tick(start);
        schedule.set_hovered(false);
        assert_eq!(schedule.tick(start + Duration::from_millis(5_000)), 1);
    }

    #[test]
    fn zero_interval_is_floored() {
        let schedule = AutoAdvance::new(Duration::ZERO);
        assert_eq!(schedule.interval(), Duration::from_millis(1));
    }
}
