//! Entrance animation played when the flow changes step

use std::time::{Duration, Instant};

/// Animation phase for the card body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Body sliding up into place
    Entering,
    /// Animation finished
    Settled,
}

/// Slide-in state for the current view
#[derive(Debug)]
pub struct ViewTransition {
    /// When the view was entered
    pub start_time: Instant,
    /// Current animation phase
    pub phase: TransitionPhase,
    /// Rows the body is still pushed down by
    pub offset: u16,
}

impl ViewTransition {
    /// Duration of the slide
    pub const DURATION: Duration = Duration::from_millis(250);
    /// Rows the body starts below its resting place
    pub const DISTANCE: u16 = 4;

    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: TransitionPhase::Entering,
            offset: Self::DISTANCE,
        }
    }

    /// A transition that is already over
    pub fn settled(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: TransitionPhase::Settled,
            offset: 0,
        }
    }

    /// Update animation state for the given frame time
    pub fn update(&mut self, now: Instant) {
        if self.phase == TransitionPhase::Settled {
            return;
        }

        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= Self::DURATION {
            self.phase = TransitionPhase::Settled;
            self.offset = 0;
            return;
        }

        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        // Cubic ease-out for smooth deceleration
        let eased = simple_easing::cubic_out(progress);
        self.offset = ((1.0 - eased) * Self::DISTANCE as f32).round() as u16;
    }

    pub fn is_settled(&self) -> bool {
        self.phase == TransitionPhase::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_entering_at_full_distance() {
        let transition = ViewTransition::new(Instant::now());
        assert_eq!(transition.phase, TransitionPhase::Entering);
        assert_eq!(transition.offset, ViewTransition::DISTANCE);
        assert!(!transition.is_settled());
    }

    #[test]
    fn test_settled_has_no_offset() {
        let transition = ViewTransition::settled(Instant::now());
        assert!(transition.is_settled());
        assert_eq!(transition.offset, 0);
    }

    #[test]
    fn test_offset_shrinks_over_time() {
        let start = Instant::now();
        let mut transition = ViewTransition::new(start);

        transition.update(start + ViewTransition::DURATION / 2);

        assert_eq!(transition.phase, TransitionPhase::Entering);
        assert!(transition.offset < ViewTransition::DISTANCE);
    }

    #[test]
    fn test_settles_after_duration() {
        let start = Instant::now();
        let mut transition = ViewTransition::new(start);

        transition.update(start + ViewTransition::DURATION);

        assert!(transition.is_settled());
        assert_eq!(transition.offset, 0);
    }

    #[test]
    fn test_update_is_monotonic() {
        let start = Instant::now();
        let mut transition = ViewTransition::new(start);
        let mut last = transition.offset;

        for ms in (0..=250).step_by(25) {
            transition.update(start + Duration::from_millis(ms));
            assert!(transition.offset <= last);
            last = transition.offset;
        }
    }

    #[test]
    fn test_update_after_settled_is_noop() {
        let start = Instant::now();
        let mut transition = ViewTransition::settled(start);
        transition.update(start);
        assert!(transition.is_settled());
    }
}
