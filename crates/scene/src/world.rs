use serde::Serialize;

use crate::components::{Drawable3D, Light, Role, Transform, Visibility};
use crate::entity::EntityId;

/// Flat scene graph: one slot per entity in each component column.
#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    roles: Vec<Option<Role>>,
    parents: Vec<Option<EntityId>>,
    transforms: Vec<Option<Transform>>,
    visibility: Vec<Option<Visibility>>,
    drawables_3d: Vec<Option<Drawable3D>>,
    lights: Vec<Option<Light>>,
}

/// One node of the scene as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub id: EntityId,
    pub parent: Option<EntityId>,
    pub role: Option<Role>,
    pub transform: Transform,
    pub visible: bool,
    pub drawable: Option<Drawable3D>,
    pub light: Option<Light>,
}

/// Declarative snapshot of the whole scene, in entity order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescription {
    pub nodes: Vec<SceneNode>,
}

impl SceneDescription {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(self.next_index);
        self.next_index += 1;
        self.ensure_capacity(id.index() as usize);
        id
    }

    /// Spawn an entity that carries a role, a transform, and a parent.
    pub fn spawn_node(
        &mut self,
        role: Role,
        transform: Transform,
        parent: Option<EntityId>,
    ) -> EntityId {
        let entity = self.spawn();
        self.set_role(entity, role);
        self.set_transform(entity, transform);
        if let Some(parent) = parent {
            self.set_parent(entity, parent);
        }
        entity
    }

    pub fn len(&self) -> usize {
        self.next_index as usize
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }

    pub fn set_role(&mut self, entity: EntityId, role: Role) {
        self.ensure_capacity(entity.index() as usize);
        self.roles[entity.index() as usize] = Some(role);
    }

    pub fn set_parent(&mut self, entity: EntityId, parent: EntityId) {
        self.ensure_capacity(entity.index() as usize);
        self.parents[entity.index() as usize] = Some(parent);
    }

    pub fn set_transform(&mut self, entity: EntityId, transform: Transform) {
        self.ensure_capacity(entity.index() as usize);
        self.transforms[entity.index() as usize] = Some(transform);
    }

    pub fn set_visibility(&mut self, entity: EntityId, visibility: Visibility) {
        self.ensure_capacity(entity.index() as usize);
        self.visibility[entity.index() as usize] = Some(visibility);
    }

    pub fn set_drawable_3d(&mut self, entity: EntityId, drawable: Drawable3D) {
        self.ensure_capacity(entity.index() as usize);
        self.drawables_3d[entity.index() as usize] = Some(drawable);
    }

    pub fn set_light(&mut self, entity: EntityId, light: Light) {
        self.ensure_capacity(entity.index() as usize);
        self.lights[entity.index() as usize] = Some(light);
    }

    /// Snapshot every node, hidden ones included, so the renderer can build
    /// all objects up front and toggle them per frame.
    pub fn describe(&self) -> SceneDescription {
        let nodes = (0..self.len())
            .map(|idx| SceneNode {
                id: EntityId(idx as u32),
                parent: self.parents[idx],
                role: self.roles[idx],
                transform: self.transforms[idx].unwrap_or_else(Transform::identity),
                visible: self.is_visible(idx),
                drawable: self.drawables_3d[idx].clone(),
                light: self.lights[idx],
            })
            .collect();
        SceneDescription { nodes }
    }

    fn is_visible(&self, idx: usize) -> bool {
        self.visibility
            .get(idx)
            .and_then(|v| *v)
            .map(|v| v.visible)
            .unwrap_or(true)
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.transforms.len() <= idx {
            let new_len = idx + 1;
            self.roles.resize(new_len, None);
            self.parents.resize(new_len, None);
            self.transforms.resize(new_len, None);
            self.visibility.resize(new_len, None);
            self.drawables_3d.resize(new_len, None);
            self.lights.resize(new_len, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::color::Rgb;
    use crate::components::{Drawable3D, Light, Material, Role, Transform, Visibility};
    use foundation::math::Vec3;

    fn dot() -> Drawable3D {
        Drawable3D::sphere(1.0, 8, Material::basic(Rgb::WHITE, 1.0))
    }

    #[test]
    fn describe_lists_every_node_in_entity_order() {
        let mut world = World::new();
        let globe = world.spawn_node(Role::Globe, Transform::identity(), None);
        world.set_drawable_3d(globe, dot());
        let sun = world.spawn_node(Role::Sun, Transform::translate(Vec3::new(6.0, 0.0, 3.0)), None);
        world.set_light(sun, Light::directional(Rgb::WHITE, 2.0));

        let desc = world.describe();
        assert_eq!(desc.nodes.len(), 2);
        assert_eq!(desc.nodes[0].id, globe);
        assert_eq!(desc.nodes[0].drawable, Some(dot()));
        assert_eq!(desc.nodes[0].light, None);
        assert_eq!(desc.nodes[1].role, Some(Role::Sun));
        assert_eq!(desc.nodes[1].transform.position, Vec3::new(6.0, 0.0, 3.0));
        assert!(desc.nodes[1].light.is_some());
    }

    #[test]
    fn hidden_nodes_stay_in_the_description() {
        let mut world = World::new();
        let entity = world.spawn();
        world.set_drawable_3d(entity, dot());
        world.set_visibility(entity, Visibility::hidden());

        let desc = world.describe();
        assert_eq!(desc.nodes.len(), 1);
        assert!(!desc.nodes[0].visible);
        assert_eq!(desc.nodes[0].transform, Transform::identity());
    }

    #[test]
    fn parent_links_survive_describe() {
        let mut world = World::new();
        let marker = world.spawn_node(Role::Marker(3), Transform::identity(), None);
        let ring = world.spawn_node(Role::MarkerRing(3), Transform::identity(), Some(marker));
        world.spawn();

        let desc = world.describe();
        assert_eq!(world.len(), 3);
        assert_eq!(desc.nodes[ring.index() as usize].parent, Some(marker));
        assert_eq!(desc.nodes[marker.index() as usize].parent, None);
        assert_eq!(desc.nodes[2].role, None);
    }
}
