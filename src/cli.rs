// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::effect::Effect;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "disintegration")]
#[command(about = "Per-triangle disintegration and shatter shader demo", long_about = None)]
pub struct Cli {
    /// Effect to play
    #[arg(long, value_enum)]
    pub effect: Option<Effect>,

    /// Seed for the per-triangle random values
    #[arg(long)]
    pub seed: Option<u64>,

    /// Image sampled by the shatter effect
    #[arg(long)]
    pub texture: Option<PathBuf>,

    /// glTF file replacing the built-in geometry
    #[arg(long)]
    pub mesh: Option<PathBuf>,

    /// JSON settings file, overridden by the flags given here
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Animation speed multiplier
    #[arg(long)]
    pub time_scale: Option<f32>,

    /// Draw triangle edges only
    #[arg(long, overrides_with = "no_wireframe")]
    pub wireframe: bool,

    /// Draw filled triangles
    #[arg(long, overrides_with = "wireframe")]
    pub no_wireframe: bool,

    /// Disable UI elements
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Explicit wireframe choice, if any flag was given
    pub fn wireframe_override(&self) -> Option<bool> {
        match (self.wireframe, self.no_wireframe) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_effect_and_seed() {
        let cli = Cli::try_parse_from(["disintegration", "--effect", "shatter", "--seed", "42"]).unwrap();
        assert_eq!(cli.effect, Some(Effect::Shatter));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.wireframe_override(), None);
    }

    #[test]
    fn last_wireframe_flag_wins() {
        let cli = Cli::try_parse_from(["disintegration", "--wireframe", "--no-wireframe"]).unwrap();
        assert_eq!(cli.wireframe_override(), Some(false));
        let cli = Cli::try_parse_from(["disintegration", "--no-wireframe", "--wireframe"]).unwrap();
        assert_eq!(cli.wireframe_override(), Some(true));
    }

    #[test]
    fn rejects_unknown_effect() {
        assert!(Cli::try_parse_from(["disintegration", "--effect", "melt"]).is_err());
    }
}
