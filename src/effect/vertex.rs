//! CPU mirror of the vertex stages in `shaders/*.wgsl`
//!
//! Every function here is evaluated per vertex on the GPU; the CPU versions
//! exist so the math can be tested and inspected without a device.

use std::f32::consts::PI;

use glam::Vec3;

use crate::math::rotate;

/// Scale from elapsed seconds to the oscillator phase
pub const TIME_FREQUENCY: f32 = 0.5;

/// Base displacement along the normal, before easing
pub const DISPLACEMENT_SCALE: f32 = 2.0;

/// Peak multiplier applied after easing
pub const DISPLACEMENT_FACTOR: f32 = 10.0;

pub const EASE_IN_POWER: f32 = 5.0;

/// Whole-mesh rotation axis of the disintegrate effect
pub const ROTATION_AXIS: Vec3 = Vec3::new(1.0, 1.0, 0.0);

/// Height weight of the shatter wipe front
pub const WIPE_SLOPE: f32 = 0.8;

/// Width of the shatter wipe front
pub const WIPE_WIDTH: f32 = 0.2;

/// How far a shattering triangle travels along its normal
pub const SHATTER_PUSH: f32 = 3.0;

/// Full spin of a shattering triangle at `random == 1`
pub const SHATTER_SPIN: f32 = 3.0 * PI;

pub fn ease_in(k: f32, power: f32) -> f32 {
    k.powf(power)
}

/// Phase shared by the vertex and fragment stage of the disintegrate effect
pub fn sin_value(time: f32) -> f32 {
    time * TIME_FREQUENCY
}

/// Output of the disintegrate vertex stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisintegrateVertex {
    /// Object-space position after displacement and rotation
    pub position: Vec3,
    /// Varying handed to the fragment stage
    pub sin_value: f32,
}

/// Displaced position before the whole-mesh rotation
pub fn displace(position: Vec3, normal: Vec3, random: f32, time: f32) -> Vec3 {
    let mut offset = normal * random * DISPLACEMENT_SCALE;
    offset *= ease_in(sin_value(time).sin().abs(), EASE_IN_POWER) * DISPLACEMENT_FACTOR;
    position + offset
}

pub fn disintegrate(position: Vec3, normal: Vec3, random: f32, time: f32) -> DisintegrateVertex {
    let displaced = displace(position, normal, random, time);
    DisintegrateVertex {
        position: rotate(displaced, ROTATION_AXIS, time * TIME_FREQUENCY),
        sin_value: sin_value(time),
    }
}

/// Global oscillator in [-1, 1] driving the wipe
pub fn progress(time: f32) -> f32 {
    (time * TIME_FREQUENCY).sin()
}

/// Per-vertex progress in [0, 1]: 0 is intact, 1 is fully collapsed
pub fn local_progress(progress: f32, height: f32) -> f32 {
    ((progress - WIPE_SLOPE * height) / WIPE_WIDTH).clamp(0.0, 1.0)
}

/// Shatter transform for an explicit local progress
pub fn shatter_at(position: Vec3, normal: Vec3, random: f32, center: Vec3, locprog: f32) -> Vec3 {
    let mut p = position - center;
    p += SHATTER_PUSH * normal * random * locprog;
    p *= 1.0 - locprog;
    p += center;
    rotate(p, Vec3::Y, random * locprog * SHATTER_SPIN)
}

pub fn shatter(position: Vec3, normal: Vec3, random: f32, center: Vec3, time: f32) -> Vec3 {
    let locprog = local_progress(progress(time), position.y);
    shatter_at(position, normal, random, center, locprog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn ease_in_keeps_endpoints() {
        assert_eq!(ease_in(0.0, EASE_IN_POWER), 0.0);
        assert_eq!(ease_in(1.0, EASE_IN_POWER), 1.0);
        assert!((ease_in(0.5, EASE_IN_POWER) - 0.03125).abs() < EPS);
    }

    #[test]
    fn displacement_peaks_at_quarter_period() {
        // sin(t * 0.5) == 1 at t == PI
        let p = displace(Vec3::ZERO, Vec3::Z, 0.5, PI);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5 * 2.0 * 10.0), 1e-3), "{:?}", p);
    }

    #[test]
    fn zero_random_never_displaces() {
        for t in [0.0, 1.0, PI, 7.3] {
            assert_eq!(displace(Vec3::ONE, Vec3::Y, 0.0, t), Vec3::ONE);
        }
    }

    #[test]
    fn local_progress_is_clamped() {
        assert_eq!(local_progress(-1.0, 0.0), 0.0);
        assert_eq!(local_progress(1.0, 0.0), 1.0);
        // progress 0.5 at height 0.5 sits inside the front
        assert!((local_progress(0.5, 0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn wipe_reaches_lower_vertices_first() {
        let p = 0.0;
        assert!(local_progress(p, -1.0) > local_progress(p, 1.0));
    }

    #[test]
    fn sin_value_tracks_time() {
        assert_eq!(disintegrate(Vec3::X, Vec3::X, 0.3, 4.0).sin_value, 2.0);
    }
}
