use octaroom_common::{Bounds, Category, Color, ObjectId, Transform};
use serde::Serialize;
use std::collections::BTreeMap;

/// A renderable, pickable object in the scene.
///
/// Position, category, bounds, and color are fixed at creation. Orientation
/// is mutated only through [`SceneRegistry::spin`].
#[derive(Debug, Clone, Serialize)]
pub struct SceneObject {
    pub name: String,
    pub category: Category,
    pub transform: Transform,
    pub bounds: Bounds,
    pub color: Color,
}

/// Errors from registry mutation.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("object {0:?} not found")]
    UnknownObject(ObjectId),
    #[error("object \"{0}\" is not rotatable")]
    NotRotatable(String),
}

/// The owned set of all scene objects.
///
/// Backed by a BTreeMap so iteration order is stable; the picking resolver's
/// tie-break ("first in registry iteration order") relies on this. Objects are
/// only handed out by shared reference; the single mutation path is `spin`,
/// which guards the rotatable invariant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SceneRegistry {
    objects: BTreeMap<ObjectId, SceneObject>,
}

impl SceneRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object during scene construction. Returns its id.
    pub fn insert(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId::new();
        self.objects.insert(id, object);
        id
    }

    /// Number of objects in the registry.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get a reference to an object.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Read-only access to all objects in registry iteration order.
    pub fn objects(&self) -> &BTreeMap<ObjectId, SceneObject> {
        &self.objects
    }

    /// Look up an object id by name.
    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, obj)| obj.name == name)
            .map(|(id, _)| *id)
    }

    /// Advance an object's orientation by the given x/y angle deltas.
    ///
    /// Angles accumulate additively and without wraparound. Only `Cube`
    /// objects may spin; anything else is an invariant violation surfaced
    /// as an error.
    pub fn spin(&mut self, id: ObjectId, dx: f32, dy: f32) -> Result<(), SceneError> {
        let obj = self
            .objects
            .get_mut(&id)
            .ok_or(SceneError::UnknownObject(id))?;
        if !obj.category.is_rotatable() {
            return Err(SceneError::NotRotatable(obj.name.clone()));
        }
        obj.transform.rotation.x += dx;
        obj.transform.rotation.y += dy;
        Ok(())
    }
}
