use crate::registry::SceneRegistry;
use octaroom_common::ObjectId;

/// Result of the most recent pick, kept as an observable value for display
/// sinks (status overlay, CLI output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome {
    pub name: String,
    pub rotatable: bool,
}

impl std::fmt::Display for PickOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rotatable {
            write!(f, "Picked: {}", self.name)
        } else {
            write!(f, "Picked: {} (not rotatable)", self.name)
        }
    }
}

/// Holds at most one selected object id.
///
/// The id is a lookup key into the registry's owned storage, never a
/// reference. Non-rotatable picks clear the selection outright rather than
/// leaving a stale prior selection in place.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<ObjectId>,
    last_pick: Option<PickOutcome>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected object, if any. Always a Cube.
    pub fn current(&self) -> Option<ObjectId> {
        self.current
    }

    /// The most recent pick outcome, if any pick has happened yet.
    pub fn last_pick(&self) -> Option<&PickOutcome> {
        self.last_pick.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Apply a pick result.
    ///
    /// - `None` (nothing hit): selection and last outcome are cleared.
    /// - A Cube: it becomes the selection.
    /// - A Wall or Floor: the selection is cleared; the outcome still records
    ///   the hit so sinks can report the non-rotatable pick.
    ///
    /// An id that no longer resolves in the registry is treated as a miss.
    pub fn set_from_pick(&mut self, registry: &SceneRegistry, result: Option<ObjectId>) {
        let Some(id) = result else {
            self.current = None;
            self.last_pick = None;
            return;
        };
        let Some(obj) = registry.get(id) else {
            self.current = None;
            self.last_pick = None;
            return;
        };

        let rotatable = obj.category.is_rotatable();
        self.last_pick = Some(PickOutcome {
            name: obj.name.clone(),
            rotatable,
        });
        self.current = if rotatable { Some(id) } else { None };
    }
}
