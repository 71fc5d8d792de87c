pub mod fragment;
pub mod vertex;

use serde::{Deserialize, Serialize};

use crate::geometry::{primitives, AttributeSet, Mesh};

pub const DISINTEGRATE_WGSL: &str = include_str!("../shaders/disintegrate.wgsl");
pub const SHATTER_WGSL: &str = include_str!("../shaders/shatter.wgsl");

/// Icosahedron subdivision used by the disintegrate scene
pub const ICOSAHEDRON_DETAIL: u32 = 3;

pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 16;

/// Shader program and geometry pairing of a demo scene
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Whole mesh pulses outward per triangle, spins and fades
    #[default]
    Disintegrate,
    /// Triangles detach, shrink and spin behind a vertical wipe
    Shatter,
}

impl Effect {
    pub const ALL: [Effect; 2] = [Effect::Disintegrate, Effect::Shatter];

    pub fn label(&self) -> &'static str {
        match self {
            Effect::Disintegrate => "Disintegrate",
            Effect::Shatter => "Shatter",
        }
    }

    pub fn shader_source(&self) -> &'static str {
        match self {
            Effect::Disintegrate => DISINTEGRATE_WGSL,
            Effect::Shatter => SHATTER_WGSL,
        }
    }

    pub fn attribute_set(&self) -> AttributeSet {
        match self {
            Effect::Disintegrate => AttributeSet::Random,
            Effect::Shatter => AttributeSet::RandomAndCenter,
        }
    }

    pub fn uses_texture(&self) -> bool {
        matches!(self, Effect::Shatter)
    }

    /// Fades through alpha and needs blending
    pub fn is_transparent(&self) -> bool {
        matches!(self, Effect::Disintegrate)
    }

    pub fn default_wireframe(&self) -> bool {
        matches!(self, Effect::Disintegrate)
    }

    /// Built-in geometry of the scene
    pub fn default_mesh(&self) -> Mesh {
        match self {
            Effect::Disintegrate => primitives::icosahedron(1.0, ICOSAHEDRON_DETAIL),
            Effect::Shatter => primitives::inverted_sphere(SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS),
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
