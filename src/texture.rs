use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::{Vec2, Vec4};

const PLACEHOLDER_SIZE: u32 = 256;
const PLACEHOLDER_CELLS: u32 = 8;

/// Where a scene's image came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureSource {
    File(PathBuf),
    /// First image of an imported glTF
    Embedded,
    Placeholder,
}

impl std::fmt::Display for TextureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureSource::File(path) => write!(f, "{}", path.display()),
            TextureSource::Embedded => f.write_str("embedded"),
            TextureSource::Placeholder => f.write_str("placeholder"),
        }
    }
}

/// Decoded RGBA8 image ready for upload
///
/// Rows are stored bottom-up so that UV (0, 0) addresses the lower-left
/// corner of the source image.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    /// Decode an image file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("Failed to load texture: {:?}", path))?
            .flipv()
            .into_rgba8();

        let (width, height) = img.dimensions();
        log::info!("Loaded texture {:?} ({}x{})", path, width, height);

        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Wrap raw RGBA8 pixels, bottom row first
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        anyhow::ensure!(
            rgba.len() == expected && width > 0 && height > 0,
            "Invalid pixel buffer size: expected {} bytes for {}x{}, got {}",
            expected,
            width,
            height,
            rgba.len()
        );
        Ok(Self { width, height, rgba })
    }

    /// Two-tone checkerboard used when no texture is available
    pub fn checkerboard(size: u32, cells: u32) -> Self {
        let size = size.max(1);
        let cell = (size / cells.max(1)).max(1);
        let light = [235, 235, 235, 255];
        let dark = [40, 40, 48, 255];

        let rgba = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .flat_map(|(x, y)| if ((x / cell) + (y / cell)) % 2 == 0 { light } else { dark })
            .collect();

        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    /// Stand-in for a missing or unreadable image
    pub fn placeholder() -> Self {
        Self::checkerboard(PLACEHOLDER_SIZE, PLACEHOLDER_CELLS)
    }

    /// Load `path`, or fall back to the checkerboard with a warning
    pub fn load_or_placeholder(path: Option<&Path>) -> (Self, TextureSource) {
        match path.map(|p| (p, Self::load(p))) {
            Some((p, Ok(texture))) => (texture, TextureSource::File(p.to_path_buf())),
            Some((_, Err(e))) => {
                log::warn!("{:#}; using placeholder texture", e);
                (Self::placeholder(), TextureSource::Placeholder)
            }
            None => (Self::placeholder(), TextureSource::Placeholder),
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    /// Nearest texel with repeat wrapping, channels in [0, 1] before any colour space conversion
    pub fn sample_nearest(&self, uv: Vec2) -> Vec4 {
        let u = uv.x - uv.x.floor();
        let v = uv.y - uv.y.floor();
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);

        let i = ((y * self.width + x) * 4) as usize;
        let px = &self.rgba[i..i + 4];
        Vec4::new(px[0] as f32, px[1] as f32, px[2] as f32, px[3] as f32) / 255.0
    }
}
