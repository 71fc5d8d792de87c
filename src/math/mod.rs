mod aabb;
mod rotation;

pub use aabb::AABB;
pub use rotation::{rotate, rotation3d};
