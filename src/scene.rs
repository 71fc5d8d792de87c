use anyhow::Result;
use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::DemoConfig;
use crate::effect::Effect;
use crate::geometry::{annotate, Annotations, Mesh};
use crate::loaders::load_gltf_mesh;
use crate::math::AABB;
use crate::texture::{TextureData, TextureSource};

/// Annotated geometry, effect and texture, built once before the first frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub effect: Effect,
    pub mesh: Mesh,
    pub annotations: Annotations,
    pub texture: Option<TextureData>,
    /// `None` when the effect does not sample
    pub texture_source: Option<TextureSource>,
    pub model: Mat4,
    pub seed: u64,
}

impl Scene {
    /// Annotate `mesh` for `effect` with a seeded generator
    pub fn new(effect: Effect, mesh: Mesh, texture: Option<(TextureData, TextureSource)>, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let annotations = annotate(&mesh, effect.attribute_set(), &mut rng);

        // Effects that sample always get an image
        let (texture, texture_source) = match (effect.uses_texture(), texture) {
            (true, Some((texture, source))) => (Some(texture), Some(source)),
            (true, None) => (Some(TextureData::placeholder()), Some(TextureSource::Placeholder)),
            (false, _) => (None, None),
        };

        Self {
            effect,
            mesh,
            annotations,
            texture,
            texture_source,
            model: Mat4::IDENTITY,
            seed,
        }
    }

    /// Scene with the effect's built-in geometry
    pub fn builtin(effect: Effect, seed: u64) -> Self {
        Self::new(effect, effect.default_mesh(), None, seed)
    }

    pub fn from_config(config: &DemoConfig) -> Result<Self> {
        let seed = config.seed_or_random();
        let effect = config.effect;

        let (mesh, embedded) = match &config.mesh {
            Some(path) => {
                let loaded = load_gltf_mesh(path)?;
                // Wipe height and displacement are tuned for unit-sized geometry
                let mesh = match loaded.mesh.bounds() {
                    Some(bounds) => loaded.mesh.transformed(fit_to_unit(&bounds)),
                    None => loaded.mesh,
                };
                (mesh, loaded.texture)
            }
            None => (effect.default_mesh(), None),
        };

        let texture = match (effect.uses_texture(), &config.texture, embedded) {
            (false, _, _) => None,
            (true, Some(path), _) => Some(TextureData::load_or_placeholder(Some(path.as_path()))),
            (true, None, Some(texture)) => Some((texture, TextureSource::Embedded)),
            (true, None, None) => {
                log::warn!("No texture given; using placeholder texture");
                None
            }
        };

        let scene = Self::new(effect, mesh, texture, seed);
        log::info!(
            "Scene: effect={}, triangles={}, seed={}, texture={}",
            scene.effect,
            scene.mesh.triangle_count(),
            scene.seed,
            scene
                .texture_source
                .as_ref()
                .map_or_else(|| "none".to_string(), ToString::to_string)
        );

        Ok(scene)
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }
}

/// Model matrix centring `bounds` on the origin with its largest side spanning 2 units
pub fn fit_to_unit(bounds: &AABB) -> Mat4 {
    let largest = bounds.extent().max_element();
    if !largest.is_finite() || largest <= f32::EPSILON {
        return Mat4::from_translation(-bounds.center());
    }
    Mat4::from_scale(Vec3::splat(2.0 / largest)) * Mat4::from_translation(-bounds.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::vertex::shatter;
    use crate::loaders::gltf_mesh::fixtures::{write_gltf, INDEXED_GLTF};
    use std::f32::consts::PI;

    fn shatter_config(mesh: Option<&std::path::Path>, texture: Option<&std::path::Path>) -> DemoConfig {
        DemoConfig {
            effect: Effect::Shatter,
            seed: Some(3),
            mesh: mesh.map(|p| p.to_path_buf()),
            texture: texture.map(|p| p.to_path_buf()),
            ..DemoConfig::default()
        }
    }

    #[test]
    fn annotations_match_vertex_count() {
        for effect in Effect::ALL {
            let scene = Scene::builtin(effect, 1);
            assert_eq!(scene.annotations.len(), scene.mesh.vertex_count());
            assert_eq!(scene.annotations.center().is_some(), effect == Effect::Shatter);
        }
    }

    #[test]
    fn texture_only_where_sampled() {
        assert!(Scene::builtin(Effect::Shatter, 1).texture.is_some());
        let tex = TextureData::checkerboard(4, 2);
        let scene = Scene::new(
            Effect::Disintegrate,
            Effect::Disintegrate.default_mesh(),
            Some((tex, TextureSource::Embedded)),
            1,
        );
        assert!(scene.texture.is_none());
        assert!(scene.texture_source.is_none());
    }

    #[test]
    fn same_seed_same_annotations() {
        let a = Scene::builtin(Effect::Disintegrate, 5);
        let b = Scene::builtin(Effect::Disintegrate, 5);
        assert_eq!(a.annotations, b.annotations);
    }

    #[test]
    fn fit_maps_box_into_unit_cube() {
        let bounds = AABB::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(14.0, 2.0, 1.0));
        let m = fit_to_unit(&bounds);
        assert!(m.transform_point3(bounds.center()).abs_diff_eq(Vec3::ZERO, 1e-5));
        assert!(m.transform_point3(bounds.max).abs_diff_eq(Vec3::new(1.0, 0.5, 0.25), 1e-5));
    }

    #[test]
    fn imported_mesh_is_baked_to_unit_size() {
        let file = write_gltf(INDEXED_GLTF);
        let scene = Scene::from_config(&shatter_config(Some(file.path()), None)).unwrap();

        assert_eq!(scene.model, Mat4::IDENTITY);
        let bounds = scene.mesh.bounds().unwrap();
        assert!(bounds.center().abs_diff_eq(Vec3::ZERO, 1e-5), "{:?}", bounds);
        assert!((bounds.extent().max_element() - 2.0).abs() < 1e-5);

        // Centroids are taken from the fitted vertices
        let centers = scene.annotations.center().unwrap();
        for (tri, center) in scene.mesh.triangles().zip(centers.chunks_exact(3)) {
            let expected = (tri[0].position() + tri[1].position() + tri[2].position()) / 3.0;
            assert!(Vec3::from_array(center[0]).abs_diff_eq(expected, 1e-5));
        }
    }

    #[test]
    fn translated_import_shatters_within_one_cycle() {
        let file = write_gltf(INDEXED_GLTF);
        let scene = Scene::from_config(&shatter_config(Some(file.path()), None)).unwrap();
        let centers = scene.annotations.center().unwrap();
        let randoms = scene.annotations.random();

        // One period of sin(t * 0.5)
        let moved = (0..64).map(|i| i as f32 * 4.0 * PI / 64.0).any(|t| {
            scene.mesh.vertices().iter().enumerate().any(|(i, v)| {
                let p = shatter(v.position(), v.normal(), randoms[i], Vec3::from_array(centers[i]), t);
                p.distance(v.position()) > 1e-3
            })
        });
        assert!(moved);
    }

    #[test]
    fn texture_source_is_recorded() {
        let scene = Scene::from_config(&shatter_config(None, None)).unwrap();
        assert_eq!(scene.texture_source, Some(TextureSource::Placeholder));

        let missing = std::path::Path::new("/no/such/texture.png");
        let scene = Scene::from_config(&shatter_config(None, Some(missing))).unwrap();
        assert_eq!(scene.texture_source, Some(TextureSource::Placeholder));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.png");
        image::RgbaImage::from_raw(1, 1, vec![10, 20, 30, 255]).unwrap().save(&path).unwrap();
        let scene = Scene::from_config(&shatter_config(None, Some(&path))).unwrap();
        assert_eq!(scene.texture_source, Some(TextureSource::File(path.clone())));

        let config = DemoConfig {
            effect: Effect::Disintegrate,
            ..DemoConfig::default()
        };
        assert_eq!(Scene::from_config(&config).unwrap().texture_source, None);
    }
}
