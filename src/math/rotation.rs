use glam::{Mat3, Vec3};

/// Axis-angle rotation matrix in the layout the shaders build it
///
/// The Rodrigues terms are laid out column by column, which makes this the
/// transpose of the textbook matrix: a right-handed rotation by `-angle`.
/// The WGSL side constructs the identical matrix, keep the two in sync.
pub fn rotation3d(axis: Vec3, angle: f32) -> Mat3 {
    let axis = axis.normalize();
    let (s, c) = angle.sin_cos();
    let oc = 1.0 - c;

    Mat3::from_cols(
        Vec3::new(
            oc * axis.x * axis.x + c,
            oc * axis.x * axis.y - axis.z * s,
            oc * axis.z * axis.x + axis.y * s,
        ),
        Vec3::new(
            oc * axis.x * axis.y + axis.z * s,
            oc * axis.y * axis.y + c,
            oc * axis.y * axis.z - axis.x * s,
        ),
        Vec3::new(
            oc * axis.z * axis.x - axis.y * s,
            oc * axis.y * axis.z + axis.x * s,
            oc * axis.z * axis.z + c,
        ),
    )
}

pub fn rotate(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    rotation3d(axis, angle) * v
}
