use glam::Vec3;
use octaroom_common::{Bounds, ObjectId, Transform};
use octaroom_render::FirstPersonCamera;
use octaroom_scene::SceneRegistry;

/// Ray cast from the camera through a screen point. Derived per click,
/// never persisted.
#[derive(Debug, Clone, Copy)]
pub struct PickRay {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl PickRay {
    /// Ray through pixel (px, py) of a width x height viewport.
    ///
    /// Pixel coordinates are normalized to [-1, 1] on both axes with the
    /// vertical axis flipped (screen-space y grows downward, NDC y grows
    /// upward), then the far-plane point is unprojected through the inverse
    /// view-projection matrix. Out-of-viewport coordinates still yield a
    /// valid ray.
    pub fn from_screen(
        px: f32,
        py: f32,
        width: f32,
        height: f32,
        camera: &FirstPersonCamera,
    ) -> Self {
        let ndc_x = (px / width) * 2.0 - 1.0;
        let ndc_y = -((py / height) * 2.0 - 1.0);

        let inv_view_proj = camera.view_projection().inverse();
        let far_point = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        Self {
            origin: camera.position,
            direction: (far_point - camera.position).normalize(),
        }
    }

    /// Point at parametric distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A resolved pick: the nearest intersected object and its distance from
/// the ray origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: ObjectId,
    pub distance: f32,
}

/// Resolve a ray against every object in the registry.
///
/// Returns the hit with the smallest non-negative distance, or `None` if the
/// ray intersects nothing. A strictly-smaller comparison keeps the first hit
/// in registry iteration order when distances tie.
pub fn resolve(registry: &SceneRegistry, ray: PickRay) -> Option<PickHit> {
    let mut nearest: Option<PickHit> = None;
    for (id, obj) in registry.objects() {
        let hit = match obj.bounds {
            Bounds::Box { half_extents } => intersect_box(ray, &obj.transform, half_extents),
            Bounds::Disc { radius } => intersect_disc(ray, &obj.transform, radius),
        };
        if let Some(distance) = hit {
            if nearest.is_none_or(|n| distance < n.distance) {
                nearest = Some(PickHit { id: *id, distance });
            }
        }
    }
    if let Some(hit) = nearest {
        tracing::debug!("pick hit at distance {:.3}", hit.distance);
    }
    nearest
}

/// Slab test against an oriented box, performed in the object's local frame.
fn intersect_box(ray: PickRay, transform: &Transform, half_extents: Vec3) -> Option<f32> {
    let inv_rot = transform.rotation_quat().inverse();
    let origin = inv_rot * (ray.origin - transform.position);
    let dir = inv_rot * ray.direction;

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let h = half_extents[axis];
        if d.abs() < 1e-8 {
            // Parallel to this slab: the origin must lie inside it.
            if o.abs() > h {
                return None;
            }
        } else {
            let t1 = (-h - o) / d;
            let t2 = (h - o) / d;
            let (lo, hi) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
            t_enter = t_enter.max(lo);
            t_exit = t_exit.min(hi);
            if t_enter > t_exit {
                return None;
            }
        }
    }
    if t_exit < 0.0 {
        return None;
    }
    Some(t_enter.max(0.0))
}

/// Ray-plane intersection restricted to a disc of the given radius around
/// the object's position, in its local XZ plane.
fn intersect_disc(ray: PickRay, transform: &Transform, radius: f32) -> Option<f32> {
    let normal = transform.rotation_quat() * Vec3::Y;
    let denom = ray.direction.dot(normal);
    if denom.abs() < 1e-8 {
        return None;
    }
    let t = (transform.position - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let offset = ray.at(t) - transform.position;
    let in_plane = offset - normal * offset.dot(normal);
    if in_plane.length_squared() <= radius * radius {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octaroom_scene::{SPIN_STEP, SceneConfig, Selection, build_scene, step};

    fn ray(origin: Vec3, direction: Vec3) -> PickRay {
        PickRay {
            origin,
            direction: direction.normalize(),
        }
    }

    // --- ray construction ---

    #[test]
    fn center_ray_matches_camera_forward() {
        let camera = FirstPersonCamera::default();
        let r = PickRay::from_screen(640.0, 360.0, 1280.0, 720.0, &camera);
        assert!((r.origin - camera.position).length() < 1e-5);
        assert!((r.direction - camera.forward()).length() < 1e-3);
    }

    #[test]
    fn vertical_axis_is_flipped() {
        let camera = FirstPersonCamera::default();
        let upper = PickRay::from_screen(640.0, 100.0, 1280.0, 720.0, &camera);
        let lower = PickRay::from_screen(640.0, 620.0, 1280.0, 720.0, &camera);
        // Clicking the upper half of the screen must aim the ray upward.
        assert!(upper.direction.y > 0.0);
        assert!(lower.direction.y < 0.0);
    }

    #[test]
    fn out_of_viewport_coordinates_still_yield_a_ray() {
        let camera = FirstPersonCamera::default();
        let r = PickRay::from_screen(-200.0, 9000.0, 1280.0, 720.0, &camera);
        assert!((r.direction.length() - 1.0).abs() < 1e-5);
    }

    // --- intersection primitives ---

    #[test]
    fn box_hit_distance() {
        let t = Transform::at(Vec3::ZERO);
        let hit = intersect_box(
            ray(Vec3::new(0.0, 0.0, -5.0), Vec3::Z),
            &t,
            Vec3::splat(0.5),
        );
        assert!((hit.unwrap() - 4.5).abs() < 1e-5);
    }

    #[test]
    fn box_miss() {
        let t = Transform::at(Vec3::ZERO);
        let hit = intersect_box(
            ray(Vec3::new(2.0, 0.0, -5.0), Vec3::Z),
            &t,
            Vec3::splat(0.5),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn box_behind_ray_is_ignored() {
        let t = Transform::at(Vec3::new(0.0, 0.0, -5.0));
        let hit = intersect_box(ray(Vec3::ZERO, Vec3::Z), &t, Vec3::splat(0.5));
        assert!(hit.is_none());
    }

    #[test]
    fn rotated_box_is_tested_in_local_space() {
        // A thin wall yawed 90 degrees: its broad face now blocks the X axis.
        let t = Transform {
            position: Vec3::new(5.0, 0.0, 0.0),
            rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        };
        let half = Vec3::new(2.0, 1.0, 0.05);
        let along_x = intersect_box(ray(Vec3::ZERO, Vec3::X), &t, half);
        assert!((along_x.unwrap() - 4.95).abs() < 1e-3);

        // Unrotated, the same ray would enter through the wide slab instead.
        let flat = Transform::at(Vec3::new(5.0, 0.0, 0.0));
        let side_on = intersect_box(ray(Vec3::ZERO, Vec3::X), &flat, half);
        assert!((side_on.unwrap() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn disc_hit_inside_radius_only() {
        let t = Transform::default();
        let down = ray(Vec3::new(1.0, 2.0, 1.0), Vec3::NEG_Y);
        assert!((intersect_disc(down, &t, 5.0).unwrap() - 2.0).abs() < 1e-5);

        let outside = ray(Vec3::new(8.0, 2.0, 0.0), Vec3::NEG_Y);
        assert!(intersect_disc(outside, &t, 5.0).is_none());

        let parallel = ray(Vec3::new(0.0, 2.0, 0.0), Vec3::X);
        assert!(intersect_disc(parallel, &t, 5.0).is_none());
    }

    // --- full resolution against the built scene ---

    #[test]
    fn center_pick_aimed_at_cube_selects_it_and_spins_to_one_radian() {
        let mut registry = build_scene(&SceneConfig::default());
        let cube_0 = registry.find_by_name("cube_0").unwrap();
        let cube_pos = registry.get(cube_0).unwrap().transform.position;

        let mut camera = FirstPersonCamera::default();
        camera.look_at(cube_pos);

        let r = PickRay::from_screen(640.0, 360.0, 1280.0, 720.0, &camera);
        let hit = resolve(&registry, r).unwrap();
        assert_eq!(hit.id, cube_0);

        let mut selection = Selection::new();
        selection.set_from_pick(&registry, Some(hit.id));
        for _ in 0..100 {
            step(&mut registry, &selection);
        }
        let rot = registry.get(cube_0).unwrap().transform.rotation;
        assert!((rot.x - 100.0 * SPIN_STEP).abs() < 1e-4);
        assert!((rot.y - 100.0 * SPIN_STEP).abs() < 1e-4);
    }

    #[test]
    fn level_pick_over_the_cubes_hits_the_far_wall() {
        let registry = build_scene(&SceneConfig::default());
        // The default camera looks level along -Z from eye height 1.5; the
        // cubes top out at y = 1.0, so the ray reaches wall_6 at (0, _, -5).
        let camera = FirstPersonCamera::default();
        let r = PickRay::from_screen(640.0, 360.0, 1280.0, 720.0, &camera);
        let hit = resolve(&registry, r).unwrap();
        assert_eq!(registry.get(hit.id).unwrap().name, "wall_6");
        assert!((hit.distance - 4.95).abs() < 0.01);

        let mut selection = Selection::new();
        selection.set_from_pick(&registry, Some(hit.id));
        assert!(selection.is_empty());
        assert!(!selection.last_pick().unwrap().rotatable);
    }

    #[test]
    fn wall_pick_aimed_directly_reports_not_rotatable() {
        let registry = build_scene(&SceneConfig::default());
        let wall_3 = registry.find_by_name("wall_3").unwrap();
        let wall_pos = registry.get(wall_3).unwrap().transform.position;

        let mut camera = FirstPersonCamera::default();
        camera.look_at(wall_pos);
        let r = PickRay::from_screen(640.0, 360.0, 1280.0, 720.0, &camera);
        let hit = resolve(&registry, r).unwrap();
        assert_eq!(hit.id, wall_3);
    }

    #[test]
    fn ray_through_the_open_roof_hits_nothing() {
        let registry = build_scene(&SceneConfig::default());
        let up = ray(Vec3::new(0.0, 1.5, 0.0), Vec3::Y);
        assert!(resolve(&registry, up).is_none());
    }

    #[test]
    fn downward_pick_hits_the_floor() {
        let registry = build_scene(&SceneConfig::default());
        let down = ray(Vec3::new(0.0, 1.5, 0.0), Vec3::new(0.3, -1.0, 0.3));
        let hit = resolve(&registry, down).unwrap();
        assert_eq!(registry.get(hit.id).unwrap().name, "floor");
    }

    #[test]
    fn nearest_of_two_cubes_wins() {
        let registry = build_scene(&SceneConfig::default());
        // cube_0 sits at (3, 0.5, 0); aim through it from the center so the
        // ray would also reach wall_0 behind it.
        let toward = ray(
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        let hit = resolve(&registry, toward).unwrap();
        assert_eq!(registry.get(hit.id).unwrap().name, "cube_0");
        assert!((hit.distance - 2.5).abs() < 1e-4);
    }
}
