use glam::Mat4;

/// Per-frame uniform block shared by both shader programs
///
/// Mirrors `struct Globals` in `shaders/*.wgsl`: two column-major matrices
/// followed by the animation time, padded to a 16-byte multiple.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub time: f32,
    pub _pad: [f32; 3],
}

impl FrameUniforms {
    pub fn new(view_proj: Mat4, model: Mat4, time: f32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            time,
            _pad: [0.0; 3],
        }
    }

    pub fn size() -> wgpu::BufferAddress {
        std::mem::size_of::<Self>() as wgpu::BufferAddress
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, 0.0)
    }
}
