use std::time::Instant;

/// Animation clock - real delta scaled by `time_scale`, frozen while paused
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    elapsed: f32,
    time_scale: f32,
    paused: bool,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            elapsed: 0.0,
            time_scale: 1.0,
            paused: false,
        }
    }

    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.set_time_scale(scale);
        self
    }

    /// Advance by wall-clock time since the last tick
    /// Returns the scaled delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.advance(delta)
    }

    /// Advance by an explicit real delta
    pub fn advance(&mut self, real_delta: f32) -> f32 {
        if self.paused || !real_delta.is_finite() || real_delta <= 0.0 {
            return 0.0;
        }
        let scaled = real_delta * self.time_scale;
        self.elapsed += scaled;
        scaled
    }

    /// Scaled seconds since start, excluding paused spans
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Negative and non-finite scales are clamped to zero
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.last_tick = Instant::now();
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Restart the animation from zero, keeping scale and pause state
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.elapsed = 0.0;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009);
        assert_eq!(clock.elapsed(), delta);
    }

    #[test]
    fn time_scale_applies() {
        let mut clock = Clock::new().with_time_scale(2.0);
        assert_eq!(clock.advance(0.25), 0.5);
        assert_eq!(clock.elapsed(), 0.5);
    }

    #[test]
    fn paused_clock_holds_still() {
        let mut clock = Clock::new();
        clock.advance(1.0);
        clock.pause();
        assert_eq!(clock.advance(5.0), 0.0);
        assert_eq!(clock.elapsed(), 1.0);

        clock.resume();
        clock.advance(0.5);
        assert_eq!(clock.elapsed(), 1.5);
    }

    #[test]
    fn elapsed_never_decreases() {
        let mut clock = Clock::new();
        clock.set_time_scale(-3.0);
        assert_eq!(clock.time_scale(), 0.0);
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();
        clock.advance(3.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
    }
}
