//! ECS World implementation
//!
//! The world owns the entity arena and one type-erased storage per
//! component type. It is the "host engine object model" that cached
//! accessors consult: [`World::lookup`] is the expensive by-entity search,
//! [`World::resolve`] the O(1) generation-checked dereference.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::SlotMap;
use thiserror::Error;

use crate::ecs::storage::ErasedStorage;
use crate::ecs::{Component, ComponentStorage, Entity, EntityRecord};
use crate::foundation::collections::TypedHandle;

/// Errors raised by world mutations
///
/// Read paths never error: a missing component resolves to `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    /// The target entity was never spawned or has been despawned
    #[error("entity is not alive")]
    EntityNotAlive,

    /// The entity already carries a component of the given type
    #[error("a component of type `{0}` is already attached")]
    AlreadyAttached(&'static str),
}

/// ECS World containing all entities and components
pub struct World {
    entities: SlotMap<Entity, EntityRecord>,
    storages: HashMap<TypeId, Box<dyn ErasedStorage>>,
    lookup_count: AtomicU64,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            storages: HashMap::new(),
            lookup_count: AtomicU64::new(0),
        }
    }

    /// Spawn a new entity with the given name
    pub fn spawn(&mut self, name: impl Into<String>) -> Entity {
        let record = EntityRecord::new(name);
        log::debug!("spawning entity `{}`", record.name);
        self.entities.insert(record)
    }

    /// Despawn an entity, dropping every component attached to it
    ///
    /// Returns `false` if the entity was not alive. All handles to the
    /// entity's components become stale.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        let Some(record) = self.entities.remove(entity) else {
            return false;
        };
        log::debug!("despawning entity `{}`", record.name);
        for storage in self.storages.values_mut() {
            storage.remove_entity(entity);
        }
        true
    }

    /// Whether an entity is alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Get an entity's record
    pub fn entity(&self, entity: Entity) -> Option<&EntityRecord> {
        self.entities.get(entity)
    }

    /// Get an entity's record, mutably
    pub fn entity_mut(&mut self, entity: Entity) -> Option<&mut EntityRecord> {
        self.entities.get_mut(entity)
    }

    /// Iterate over all live entities
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Attach a component to an entity and return its handle
    ///
    /// At most one component of a given type may be attached to an entity;
    /// attaching a second is an error. Replacement is detach-then-attach,
    /// which retires the old handle.
    pub fn attach<T: Component>(
        &mut self,
        entity: Entity,
        component: T,
    ) -> Result<TypedHandle<T>, WorldError> {
        if !self.is_alive(entity) {
            return Err(WorldError::EntityNotAlive);
        }
        let storage = self.storage_mut::<T>();
        if storage.contains(entity) {
            return Err(WorldError::AlreadyAttached(std::any::type_name::<T>()));
        }
        log::debug!("attaching `{}`", std::any::type_name::<T>());
        Ok(storage.insert(entity, component))
    }

    /// Detach and return the component of type `T` from an entity
    ///
    /// Absence is not an error. The component's handle becomes stale.
    pub fn detach<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.typed_storage_mut::<T>()?.remove(entity)
    }

    /// Search for the component of type `T` attached to an entity
    ///
    /// This is the by-entity lookup that cached accessors exist to avoid;
    /// every call is counted in [`World::lookup_count`].
    pub fn lookup<T: Component>(&self, entity: Entity) -> Option<TypedHandle<T>> {
        self.lookup_count.fetch_add(1, Ordering::Relaxed);
        let key = self.typed_storage::<T>()?.key_of(entity)?;
        Some(TypedHandle::new(key))
    }

    /// Resolve a handle to the component it references
    ///
    /// This is the liveness predicate for cached references: it returns
    /// `Some` exactly while the arena slot exists with a matching
    /// generation, and `None` forever after the component is detached or
    /// its entity despawned.
    pub fn resolve<T: Component>(&self, handle: TypedHandle<T>) -> Option<&T> {
        self.typed_storage::<T>()?.get(handle.key())
    }

    /// Resolve a handle to the component it references, mutably
    pub fn resolve_mut<T: Component>(&mut self, handle: TypedHandle<T>) -> Option<&mut T> {
        self.typed_storage_mut::<T>()?.get_mut(handle.key())
    }

    /// Whether a handle still refers to a live component
    pub fn is_live<T: Component>(&self, handle: TypedHandle<T>) -> bool {
        self.typed_storage::<T>()
            .is_some_and(|storage| storage.is_live(handle.key()))
    }

    /// Whether an entity carries a component of type `T`
    pub fn contains<T: Component>(&self, entity: Entity) -> bool {
        self.typed_storage::<T>()
            .is_some_and(|storage| storage.contains(entity))
    }

    /// Total number of by-entity lookups performed so far
    ///
    /// Diagnostic counter; cached accessors should keep this nearly flat
    /// once their caches are warm.
    pub fn lookup_count(&self) -> u64 {
        self.lookup_count.load(Ordering::Relaxed)
    }

    fn typed_storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
        self.storages
            .get(&TypeId::of::<T>())?
            .as_any()
            .downcast_ref()
    }

    fn typed_storage_mut<T: Component>(&mut self) -> Option<&mut ComponentStorage<T>> {
        self.storages
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut()
    }

    fn storage_mut<T: Component>(&mut self) -> &mut ComponentStorage<T> {
        self.storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentStorage::<T>::new()))
            .as_any_mut()
            .downcast_mut()
            .expect("storage type matches its TypeId key")
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(f32);
    impl Component for Health {}

    #[derive(Debug, PartialEq)]
    struct Armor(f32);
    impl Component for Armor {}

    #[test]
    fn test_spawn_attach_lookup_resolve() {
        let mut world = World::new();
        let e = world.spawn("player");

        let handle = world.attach(e, Health(100.0)).unwrap();
        assert!(world.contains::<Health>(e));
        assert_eq!(world.lookup::<Health>(e), Some(handle));
        assert_eq!(world.resolve(handle), Some(&Health(100.0)));
        assert!(world.is_live(handle));
    }

    #[test]
    fn test_attach_to_dead_entity_fails() {
        let mut world = World::new();
        let e = world.spawn("ghost");
        world.despawn(e);

        assert_eq!(
            world.attach(e, Health(1.0)),
            Err(WorldError::EntityNotAlive)
        );
    }

    #[test]
    fn test_double_attach_fails() {
        let mut world = World::new();
        let e = world.spawn("player");
        world.attach(e, Health(1.0)).unwrap();

        let err = world.attach(e, Health(2.0)).unwrap_err();
        assert!(matches!(err, WorldError::AlreadyAttached(_)));
        // The first component is untouched.
        let handle = world.lookup::<Health>(e).unwrap();
        assert_eq!(world.resolve(handle), Some(&Health(1.0)));
    }

    #[test]
    fn test_detach_stales_handle() {
        let mut world = World::new();
        let e = world.spawn("player");
        let handle = world.attach(e, Health(5.0)).unwrap();

        assert_eq!(world.detach::<Health>(e), Some(Health(5.0)));
        assert!(!world.is_live(handle));
        assert_eq!(world.resolve(handle), None);
        assert_eq!(world.detach::<Health>(e), None);
    }

    #[test]
    fn test_stale_handle_rejected_after_replacement() {
        let mut world = World::new();
        let e = world.spawn("player");
        let old = world.attach(e, Health(1.0)).unwrap();

        world.detach::<Health>(e);
        let new = world.attach(e, Health(2.0)).unwrap();

        assert_eq!(world.resolve(old), None);
        assert_eq!(world.resolve(new), Some(&Health(2.0)));
    }

    #[test]
    fn test_despawn_drops_all_components() {
        let mut world = World::new();
        let e = world.spawn("player");
        let health = world.attach(e, Health(1.0)).unwrap();
        let armor = world.attach(e, Armor(2.0)).unwrap();

        assert!(world.despawn(e));
        assert!(!world.is_alive(e));
        assert!(!world.is_live(health));
        assert!(!world.is_live(armor));
        assert!(!world.despawn(e));
    }

    #[test]
    fn test_lookup_count_tracks_every_search() {
        let mut world = World::new();
        let e = world.spawn("player");
        world.attach(e, Health(1.0)).unwrap();

        assert_eq!(world.lookup_count(), 0);
        world.lookup::<Health>(e);
        world.lookup::<Health>(e);
        world.lookup::<Armor>(e);
        assert_eq!(world.lookup_count(), 3);
    }

    #[test]
    fn test_entity_records_and_iteration() {
        let mut world = World::new();
        let a = world.spawn("camera");
        let b = world.spawn("light");

        assert_eq!(world.entity_count(), 2);
        assert_eq!(world.entity(a).map(|r| r.name.as_str()), Some("camera"));

        if let Some(record) = world.entity_mut(b) {
            record.active = false;
        }
        assert_eq!(world.entity(b).map(|r| r.active), Some(false));

        let mut live: Vec<Entity> = world.entities().collect();
        live.sort();
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(live, expected);
    }

    #[test]
    fn test_resolve_mut_updates_in_place() {
        let mut world = World::new();
        let e = world.spawn("player");
        let handle = world.attach(e, Health(10.0)).unwrap();

        if let Some(health) = world.resolve_mut(handle) {
            health.0 -= 4.0;
        }
        assert_eq!(world.resolve(handle), Some(&Health(6.0)));
    }
}
