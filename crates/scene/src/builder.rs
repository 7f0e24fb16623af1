use crate::registry::{SceneObject, SceneRegistry};
use glam::Vec3;
use octaroom_common::{Bounds, Category, Color, Transform};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;

/// Scene construction parameters. Defaults produce the standard five-meter
/// room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Distance from the room center to each wall.
    pub room_radius: f32,
    /// Wall height; walls stand on the floor.
    pub wall_height: f32,
    /// Radius of the ring the cubes sit on.
    pub cube_ring_radius: f32,
    /// Seed for the per-object pseudo-random colors.
    pub color_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            room_radius: 5.0,
            wall_height: 3.0,
            cube_ring_radius: 3.0,
            color_seed: 42,
        }
    }
}

/// Wall half-thickness used for pick bounds.
const WALL_HALF_THICKNESS: f32 = 0.05;

/// Build the octagonal room: 8 walls facing the center, a floor disc, and
/// 8 unit cubes on an interior ring. Construction happens exactly once;
/// the registry never changes shape afterwards.
pub fn build_scene(config: &SceneConfig) -> SceneRegistry {
    let mut registry = SceneRegistry::new();

    // Walls on the outer circle, each yawed to face the room center.
    for i in 0..8 {
        let angle = i as f32 * FRAC_PI_4;
        let x = angle.cos() * config.room_radius;
        let z = angle.sin() * config.room_radius;
        let yaw = (-x).atan2(-z);
        registry.insert(SceneObject {
            name: format!("wall_{i}"),
            category: Category::Wall,
            transform: Transform {
                position: Vec3::new(x, config.wall_height / 2.0, z),
                rotation: Vec3::new(0.0, yaw, 0.0),
            },
            bounds: Bounds::Box {
                half_extents: Vec3::new(
                    config.room_radius * 1.5 / 2.0,
                    config.wall_height / 2.0,
                    WALL_HALF_THICKNESS,
                ),
            },
            color: seeded_color(config.color_seed, i),
        });
    }

    // Floor disc at y = 0, fixed gray.
    registry.insert(SceneObject {
        name: "floor".into(),
        category: Category::Floor,
        transform: Transform::default(),
        bounds: Bounds::Disc {
            radius: config.room_radius,
        },
        color: Color::GRAY,
    });

    // Unit cubes on the interior ring, resting on the floor.
    for i in 0..8 {
        let angle = i as f32 * FRAC_PI_4;
        let x = angle.cos() * config.cube_ring_radius;
        let z = angle.sin() * config.cube_ring_radius;
        registry.insert(SceneObject {
            name: format!("cube_{i}"),
            category: Category::Cube,
            transform: Transform::at(Vec3::new(x, 0.5, z)),
            bounds: Bounds::Box {
                half_extents: Vec3::splat(0.5),
            },
            color: seeded_color(config.color_seed, 8 + i),
        });
    }

    tracing::info!("scene built: {} objects", registry.len());
    registry
}

/// Deterministic per-object color: splitmix64 of seed and object index,
/// three 16-bit channels mapped to [0, 1].
fn seeded_color(seed: u64, index: u64) -> Color {
    let h = splitmix64(seed ^ index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    let channel = |shift: u32| ((h >> shift) & 0xFFFF) as f32 / 65535.0;
    Color::rgb(channel(0), channel(16), channel(32))
}

/// Splitmix64 ... a fast, high-quality deterministic PRNG step function.
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_seventeen_objects() {
        let registry = build_scene(&SceneConfig::default());
        assert_eq!(registry.len(), 17);

        let count = |cat: Category| {
            registry
                .objects()
                .values()
                .filter(|o| o.category == cat)
                .count()
        };
        assert_eq!(count(Category::Wall), 8);
        assert_eq!(count(Category::Floor), 1);
        assert_eq!(count(Category::Cube), 8);
    }

    #[test]
    fn names_are_unique() {
        let registry = build_scene(&SceneConfig::default());
        let mut names: Vec<&str> = registry
            .objects()
            .values()
            .map(|o| o.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn cubes_sit_on_their_ring() {
        let config = SceneConfig::default();
        let registry = build_scene(&config);
        for obj in registry.objects().values() {
            if obj.category == Category::Cube {
                let p = obj.transform.position;
                let ring = (p.x * p.x + p.z * p.z).sqrt();
                assert!((ring - config.cube_ring_radius).abs() < 1e-5);
                assert_eq!(p.y, 0.5);
            }
        }
    }

    #[test]
    fn walls_face_the_center() {
        let registry = build_scene(&SceneConfig::default());
        for obj in registry.objects().values() {
            if obj.category == Category::Wall {
                // The wall's local +Z axis (its thin axis) must point at the
                // room center.
                let normal = obj.transform.rotation_quat() * Vec3::Z;
                let p = obj.transform.position;
                let to_center = Vec3::new(-p.x, 0.0, -p.z).normalize();
                assert!(normal.dot(to_center) > 0.999, "wall {} misaligned", obj.name);
            }
        }
    }

    #[test]
    fn floor_is_gray_and_flat() {
        let registry = build_scene(&SceneConfig::default());
        let id = registry.find_by_name("floor").unwrap();
        let floor = registry.get(id).unwrap();
        assert_eq!(floor.color, Color::GRAY);
        assert_eq!(floor.transform.position.y, 0.0);
        assert!(matches!(floor.bounds, Bounds::Disc { radius } if radius == 5.0));
    }

    #[test]
    fn colors_are_deterministic_per_seed() {
        let a = build_scene(&SceneConfig::default());
        let b = build_scene(&SceneConfig::default());
        // Ids are freshly generated per build, so compare colors by name.
        let colors = |r: &SceneRegistry| -> Vec<(String, Color)> {
            let mut v: Vec<_> = r
                .objects()
                .values()
                .map(|o| (o.name.clone(), o.color))
                .collect();
            v.sort_by(|x, y| x.0.cmp(&y.0));
            v
        };
        assert_eq!(colors(&a), colors(&b));

        let other = build_scene(&SceneConfig {
            color_seed: 7,
            ..SceneConfig::default()
        });
        assert_ne!(colors(&a), colors(&other));
    }
}
