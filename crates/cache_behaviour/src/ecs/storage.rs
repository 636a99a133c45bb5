//! Component storage
//!
//! One [`ComponentStorage`] exists per component type. Instances live in a
//! generational arena; an entity-to-key index supports the by-entity
//! lookups that cached accessors fall back to. At most one component of a
//! given type is attached to an entity at a time.

use std::any::Any;
use std::collections::HashMap;

use crate::ecs::{Component, Entity};
use crate::foundation::collections::{ComponentKey, HandleMap, TypedHandle};

/// Arena-backed storage for components of a single type
#[derive(Debug)]
pub struct ComponentStorage<T: Component> {
    components: HandleMap<T>,
    by_entity: HashMap<Entity, ComponentKey>,
}

impl<T: Component> ComponentStorage<T> {
    /// Create an empty storage
    pub fn new() -> Self {
        Self {
            components: HandleMap::with_key(),
            by_entity: HashMap::new(),
        }
    }

    /// Insert a component for an entity and return its handle
    ///
    /// Any component previously attached to the entity is dropped; its
    /// handle stops resolving.
    pub fn insert(&mut self, entity: Entity, component: T) -> TypedHandle<T> {
        if let Some(old) = self.by_entity.remove(&entity) {
            self.components.remove(old);
        }
        let key = self.components.insert(component);
        self.by_entity.insert(entity, key);
        TypedHandle::new(key)
    }

    /// Remove and return the component attached to an entity
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let key = self.by_entity.remove(&entity)?;
        self.components.remove(key)
    }

    /// Whether the entity has a component in this storage
    pub fn contains(&self, entity: Entity) -> bool {
        self.by_entity.contains_key(&entity)
    }

    /// Find the key of the component attached to an entity
    pub fn key_of(&self, entity: Entity) -> Option<ComponentKey> {
        self.by_entity.get(&entity).copied()
    }

    /// Resolve a key to the stored component
    pub fn get(&self, key: ComponentKey) -> Option<&T> {
        self.components.get(key)
    }

    /// Resolve a key to the stored component, mutably
    pub fn get_mut(&mut self, key: ComponentKey) -> Option<&mut T> {
        self.components.get_mut(key)
    }

    /// Whether a key still refers to a live component
    ///
    /// Live means the arena slot exists and its generation matches; a
    /// removed component's key never reports live again.
    pub fn is_live(&self, key: ComponentKey) -> bool {
        self.components.contains_key(key)
    }

    /// Number of components currently stored
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the storage holds no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<T: Component> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased storage interface
///
/// Lets the world hold heterogeneous storages in one map and clean them up
/// when an entity is despawned.
pub(crate) trait ErasedStorage: Any + Send + Sync {
    /// Drop the component this storage holds for an entity, if any
    fn remove_entity(&mut self, entity: Entity);

    /// Upcast for typed downcasting
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedStorage for ComponentStorage<T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
