use crate::core::Clock;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Scaled animation time fed to the shaders
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields frame information from a [`Clock`]
/// Use this in a loop: `for frame in frames { ... }`
#[derive(Debug, Default)]
pub struct FrameIterator {
    frame_number: u64,
    clock: Clock,
}

impl FrameIterator {
    pub fn new(clock: Clock) -> Self {
        Self {
            frame_number: 0,
            clock,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Yield the next frame after an explicit real delta
    pub fn step(&mut self, real_delta: f32) -> FrameInfo {
        let delta = self.clock.advance(real_delta);
        self.emit(delta)
    }

    fn emit(&mut self, delta: f32) -> FrameInfo {
        let info = FrameInfo::new(self.frame_number, self.clock.elapsed(), delta);
        self.frame_number += 1;
        info
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = self.clock.tick();
        Some(self.emit(delta))
    }
}
