//! CPU mirror of the fragment stages in `shaders/*.wgsl`

use glam::{Vec2, Vec4};

use crate::texture::TextureData;

pub const FADE_POWER: f32 = 10.0;

/// Alpha of the disintegrate effect: opaque at rest, clear at peak displacement
pub fn opacity(sin_value: f32) -> f32 {
    1.0 - sin_value.sin().abs().powf(FADE_POWER)
}

/// UV tint with the time-driven fade
pub fn disintegrate_color(uv: Vec2, sin_value: f32) -> Vec4 {
    Vec4::new(uv.x, uv.y, 1.0, opacity(sin_value))
}

/// Texture colour at `uv`; the GPU samples bilinearly, this picks the nearest texel
pub fn shatter_color(texture: &TextureData, uv: Vec2) -> Vec4 {
    texture.sample_nearest(uv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_is_symmetric() {
        assert!((opacity(0.7) - opacity(-0.7)).abs() < 1e-6);
    }

    #[test]
    fn opacity_stays_in_unit_range() {
        for i in 0..100 {
            let a = opacity(i as f32 * 0.13);
            assert!((0.0..=1.0).contains(&a));
        }
    }

    #[test]
    fn color_carries_uv() {
        let c = disintegrate_color(Vec2::new(0.25, 0.75), 0.0);
        assert_eq!(c, Vec4::new(0.25, 0.75, 1.0, 1.0));
    }
}
