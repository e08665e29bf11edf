//! Animation pacing clock.
//!
//! Frame advancement runs on its own cadence, slower than the render loop.
//! [`AnimationClock`] is a non-blocking deadline check against
//! [`WorldTime`](crate::resources::worldtime::WorldTime) elapsed seconds:
//! the state machine system asks once per loop iteration whether the next
//! deadline has passed and simply skips advancing when it has not.

use bevy_ecs::prelude::Resource;

/// Fixed-interval deadline predicate for animation advancement.
#[derive(Resource, Debug, Clone, Copy)]
pub struct AnimationClock {
    /// Seconds between animation ticks.
    pub interval: f32,
    next: f32,
}

impl AnimationClock {
    /// A clock whose first deadline is already due, so the first loop
    /// iteration after startup advances the animation.
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            next: 0.0,
        }
    }

    /// True when the deadline has passed; re-arms for `interval` seconds
    /// past `now` on fire.
    pub fn is_due(&mut self, now: f32) -> bool {
        if now > self.next {
            self.next = now + self.interval;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let mut clock = AnimationClock::new(0.1);
        assert!(clock.is_due(0.016));
        assert!(!clock.is_due(0.032));
        assert!(!clock.is_due(0.116));
        assert!(clock.is_due(0.117));
    }

    #[test]
    fn test_not_due_at_time_zero() {
        let mut clock = AnimationClock::new(0.1);
        assert!(!clock.is_due(0.0));
        assert!(clock.is_due(0.001));
    }

    #[test]
    fn test_rearms_relative_to_fire_time() {
        let mut clock = AnimationClock::new(0.1);
        assert!(clock.is_due(0.5));
        // Next deadline is 0.6, measured from the fire time
        assert!(!clock.is_due(0.59));
        assert!(clock.is_due(0.61));
    }
}
