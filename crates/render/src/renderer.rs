use crate::camera::FirstPersonCamera;
use octaroom_scene::SceneRegistry;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the scene registry and a camera, then produces output.
/// It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene state and camera.
    fn render(&self, scene: &SceneRegistry, camera: &FirstPersonCamera) -> Self::Output;
}

/// Text renderer for headless output.
///
/// Produces a human-readable snapshot of the scene. Used by the CLI `dump`
/// command and by tests that exercise the render interface without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &SceneRegistry, camera: &FirstPersonCamera) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Scene ({} objects) ===\n", scene.len()));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) yaw={:.2} pitch={:.2} fov={:.0}\n",
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.yaw,
            camera.pitch,
            camera.fov.to_degrees()
        ));

        for obj in scene.objects().values() {
            let p = obj.transform.position;
            let r = obj.transform.rotation;
            out.push_str(&format!(
                "  {:<8} {:?} pos=({:.2}, {:.2}, {:.2}) rot=({:.2}, {:.2}, {:.2})\n",
                obj.name, obj.category, p.x, p.y, p.z, r.x, r.y, r.z
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octaroom_scene::{SceneConfig, build_scene};

    #[test]
    fn debug_renderer_empty_scene() {
        let scene = SceneRegistry::new();
        let output = DebugTextRenderer::new().render(&scene, &FirstPersonCamera::default());
        assert!(output.contains("0 objects"));
    }

    #[test]
    fn debug_renderer_lists_every_object() {
        let scene = build_scene(&SceneConfig::default());
        let output = DebugTextRenderer::new().render(&scene, &FirstPersonCamera::default());
        assert!(output.contains("17 objects"));
        assert!(output.contains("floor"));
        assert!(output.contains("wall_7"));
        assert!(output.contains("cube_0"));
    }
}
