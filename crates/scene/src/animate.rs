use crate::registry::SceneRegistry;
use crate::selection::Selection;

/// Per-frame orientation increment in radians, applied to the x and y axes.
///
/// The value accumulates additively and unboundedly; there is no wraparound
/// to [0, 2π). The drift over long runs is accepted behavior.
pub const SPIN_STEP: f32 = 0.01;

/// One animation frame: if an object is selected, advance its spin.
///
/// The selection invariant guarantees the target is a Cube, so the registry
/// guard can only fire if that invariant is broken elsewhere.
pub fn step(registry: &mut SceneRegistry, selection: &Selection) {
    let Some(id) = selection.current() else {
        return;
    };
    if let Err(e) = registry.spin(id, SPIN_STEP, SPIN_STEP) {
        tracing::warn!("animation step skipped: {e}");
    }
}
