use web_time::{Duration, Instant};

/// Longest step handed to the scrub smoother; a backgrounded tab would
/// otherwise snap the playhead in one frame.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Frame clock producing per-frame deltas for scrub smoothing and fades.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed frames per second using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock starting now.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance to `now` and return the clamped delta in seconds.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(MAX_FRAME_STEP).as_secs_f32()
    }

    /// Advance to the current instant and return the clamped delta.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
