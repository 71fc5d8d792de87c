/// Frame rate averaged over a fixed window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    accumulator: f32,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    /// Report once every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(f32::EPSILON),
            accumulator: 0.0,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count one frame, returns the new average when the window closes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.accumulator += delta;
        self.frames += 1;

        if self.accumulator >= self.interval {
            self.fps = self.frames as f32 / self.accumulator;
            self.accumulator = 0.0;
            self.frames = 0;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last completed average
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_after_window() {
        let mut counter = FpsCounter::new(1.0);

        for _ in 0..3 {
            assert!(counter.tick(0.25).is_none());
        }
        assert_eq!(counter.tick(0.25), Some(4.0));
        assert_eq!(counter.fps(), 4.0);
    }

    #[test]
    fn keeps_last_value_between_windows() {
        let mut counter = FpsCounter::new(0.1);
        counter.tick(0.2);
        assert!(counter.tick(0.01).is_none());
        assert_eq!(counter.fps(), 5.0);
    }
}
