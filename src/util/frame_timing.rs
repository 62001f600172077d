use web_time::{Duration, Instant};

/// Host clock for pointer frames.
///
/// Engines usually hand out a frame time; hosts that don't (a bare winit
/// loop) can stamp [`PointerFrame`](crate::input::PointerFrame)s with
/// [`FrameClock::tick`] instead. Also keeps a smoothed FPS for logging.
pub struct FrameClock {
    /// Clock origin
    start: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Start a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Seconds since the clock started, without ending a frame.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// End the current frame and return the time (seconds since start) to
    /// stamp the next pointer frame with.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        self.record(now.duration_since(self.last_frame));
        self.last_frame = now;
        now.duration_since(self.start).as_secs_f64()
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    fn record(&mut self, elapsed: Duration) {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(a >= 0.0);
        assert!(b >= a);
        assert!(clock.now() >= b);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let mut clock = FrameClock::new();
        for _ in 0..200 {
            clock.record(Duration::from_millis(10));
        }
        assert!((clock.fps() - 100.0).abs() < 1.0);
    }

    #[test]
    fn zero_length_frames_are_ignored() {
        let mut clock = FrameClock::new();
        clock.record(Duration::ZERO);
        assert_eq!(clock.fps(), 60.0);
    }
}
