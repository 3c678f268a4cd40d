/// Remaining distance below which the smoothed value snaps to its target.
const SETTLE_EPSILON: f32 = 1e-4;

/// Smoothed follower of a scroll progress value.
///
/// With a positive lag the value approaches its target exponentially and is
/// within about 2% of it after `lag` seconds; a zero lag follows exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubState {
    lag: f32,
    target: f32,
    current: f32,
}

impl ScrubState {
    /// Follower resting at `initial`.
    #[must_use]
    pub fn new(lag: f32, initial: f32) -> Self {
        Self {
            lag: lag.max(0.0),
            target: initial,
            current: initial,
        }
    }

    /// Set the value to approach.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        if self.lag == 0.0 {
            self.current = target;
        }
    }

    /// Advance by `dt` seconds. Returns `true` if the value moved.
    pub fn advance(&mut self, dt: f32) -> bool {
        let before = self.current;
        let remaining = self.target - self.current;
        if remaining.abs() <= SETTLE_EPSILON || self.lag == 0.0 {
            self.current = self.target;
        } else {
            let alpha = 1.0 - (-4.0 * dt.max(0.0) / self.lag).exp();
            self.current += remaining * alpha;
            if (self.target - self.current).abs() <= SETTLE_EPSILON {
                self.current = self.target;
            }
        }
        self.current != before
    }

    /// Smoothed value.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Value being approached.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the smoothed value has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_lag_follows_exactly() {
        let mut scrub = ScrubState::new(0.0, 0.0);
        scrub.set_target(0.6);
        assert_eq!(scrub.current(), 0.6);
        assert!(!scrub.advance(0.016));
    }

    #[test]
    fn lag_trails_then_settles() {
        let mut scrub = ScrubState::new(1.0, 0.0);
        scrub.set_target(1.0);

        assert!(scrub.advance(0.1));
        let early = scrub.current();
        assert!(early > 0.0 && early < 0.5, "got {early}");

        for _ in 0..60 {
            let _ = scrub.advance(0.1);
        }
        assert!(scrub.is_settled());
        assert_eq!(scrub.current(), 1.0);
    }

    #[test]
    fn tracks_backwards_too() {
        let mut scrub = ScrubState::new(0.5, 1.0);
        scrub.set_target(0.25);
        let _ = scrub.advance(0.05);
        assert!(scrub.current() < 1.0 && scrub.current() > 0.25);
    }
}
