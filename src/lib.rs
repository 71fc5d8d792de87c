pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod effect;
pub mod frame;
pub mod geometry;
pub mod hud;
pub mod loaders;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod texture;
pub mod uniforms;

pub use effect::Effect;
pub use geometry::{annotate, Annotations, AttributeSet, GeometryError, Mesh, Vertex};
pub use scene::Scene;
