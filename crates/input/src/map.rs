use crate::action::Action;

/// Maps raw pointer events to [`Action`]s and owns the pointer-lock
/// engagement state.
///
/// The first click engages look mode; that same click also produces a pick,
/// so a fresh user's very first click already selects what they aimed at.
/// Escape releases look mode.
#[derive(Debug, Clone, Default)]
pub struct InputMap {
    engaged: bool,
}

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether pointer-lock look mode is currently engaged.
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// A primary-button click at the given viewport coordinates.
    pub fn on_click(&mut self, x: f32, y: f32) -> Vec<Action> {
        if self.engaged {
            vec![Action::Pick { x, y }]
        } else {
            self.engaged = true;
            tracing::debug!("pointer lock engaged");
            vec![Action::EngageLook, Action::Pick { x, y }]
        }
    }

    /// Relative mouse motion.
    pub fn on_mouse_motion(&self, dx: f32, dy: f32) -> Action {
        if self.engaged {
            Action::Look { dx, dy }
        } else {
            Action::Noop
        }
    }

    /// The Escape key.
    pub fn on_escape(&mut self) -> Action {
        if self.engaged {
            self.engaged = false;
            tracing::debug!("pointer lock released");
            Action::ReleaseLook
        } else {
            Action::Noop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_click_engages_and_picks() {
        let mut map = InputMap::new();
        let actions = map.on_click(10.0, 20.0);
        assert_eq!(
            actions,
            vec![Action::EngageLook, Action::Pick { x: 10.0, y: 20.0 }]
        );
        assert!(map.engaged());
    }

    #[test]
    fn later_clicks_only_pick() {
        let mut map = InputMap::new();
        map.on_click(0.0, 0.0);
        let actions = map.on_click(5.0, 6.0);
        assert_eq!(actions, vec![Action::Pick { x: 5.0, y: 6.0 }]);
    }

    #[test]
    fn motion_is_noop_until_engaged() {
        let mut map = InputMap::new();
        assert_eq!(map.on_mouse_motion(1.0, 1.0), Action::Noop);
        map.on_click(0.0, 0.0);
        assert_eq!(
            map.on_mouse_motion(1.0, 1.0),
            Action::Look { dx: 1.0, dy: 1.0 }
        );
    }

    #[test]
    fn escape_releases_once() {
        let mut map = InputMap::new();
        map.on_click(0.0, 0.0);
        assert_eq!(map.on_escape(), Action::ReleaseLook);
        assert_eq!(map.on_escape(), Action::Noop);
        assert_eq!(map.on_mouse_motion(1.0, 1.0), Action::Noop);
    }

    #[test]
    fn click_after_release_re_engages() {
        let mut map = InputMap::new();
        map.on_click(0.0, 0.0);
        map.on_escape();
        let actions = map.on_click(3.0, 4.0);
        assert_eq!(
            actions,
            vec![Action::EngageLook, Action::Pick { x: 3.0, y: 4.0 }]
        );
    }
}
