//! Demo settings: JSON file defaults overridden by command-line flags

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::effect::Effect;

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Disintegration".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Every field has a default, so a config file may name only what it changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub effect: Effect,
    /// Random when absent; the chosen seed is logged
    pub seed: Option<u64>,
    pub texture: Option<PathBuf>,
    pub mesh: Option<PathBuf>,
    pub time_scale: f32,
    /// Falls back to the effect's default when absent
    pub wireframe: Option<bool>,
    pub show_ui: bool,
    pub camera_distance: f32,
    pub clear_color: [f64; 4],
    pub window: WindowConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            effect: Effect::default(),
            seed: None,
            texture: None,
            mesh: None,
            time_scale: 1.0,
            wireframe: None,
            show_ui: true,
            camera_distance: 5.0,
            clear_color: [0.02, 0.02, 0.03, 1.0],
            window: WindowConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Config file named by `--config` (or defaults) with the remaining flags applied on top
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(effect) = cli.effect {
            self.effect = effect;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(texture) = &cli.texture {
            self.texture = Some(texture.clone());
        }
        if let Some(mesh) = &cli.mesh {
            self.mesh = Some(mesh.clone());
        }
        if let Some(scale) = cli.time_scale {
            self.time_scale = scale;
        }
        if let Some(wireframe) = cli.wireframe_override() {
            self.wireframe = Some(wireframe);
        }
        if cli.no_ui {
            self.show_ui = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.time_scale.is_finite() && self.time_scale >= 0.0,
            "time_scale must be a non-negative number, got {}",
            self.time_scale
        );
        anyhow::ensure!(
            self.camera_distance.is_finite() && self.camera_distance > 0.0,
            "camera_distance must be positive, got {}",
            self.camera_distance
        );
        anyhow::ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be non-zero"
        );
        Ok(())
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe.unwrap_or_else(|| self.effect.default_wireframe())
    }

    /// Configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
