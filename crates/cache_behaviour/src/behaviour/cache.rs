//! Per-object component reference cache
//!
//! The cache memoizes the result of by-entity component lookups as
//! generational handles. A populated slot is trusted for as long as its
//! handle still resolves; the generation check makes staleness detection
//! O(1), so no lookup is paid while the referenced component stays alive.

use std::any::TypeId;
use std::collections::HashMap;

use crate::ecs::{Component, Entity, World};
use crate::foundation::collections::{ComponentKey, TypedHandle};

/// Type-keyed cache of component handles for one host object
///
/// Slots for different component types are fully independent: populating
/// or invalidating one never touches another. The cache never proactively
/// invalidates a slot; validity is re-checked lazily on every access.
#[derive(Debug, Default)]
pub struct ComponentCache {
    slots: HashMap<TypeId, ComponentKey>,
}

impl ComponentCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the component of type `T` attached to `entity`, consulting
    /// the cache first
    ///
    /// If the cached handle still resolves, it is returned without
    /// touching the world's lookup path. Otherwise exactly one lookup is
    /// performed: a hit repopulates the slot, a miss clears it and yields
    /// `None`. While no component is attached every access re-runs the
    /// lookup, since an empty slot is always invalid.
    pub fn get_or_fetch<'w, T: Component>(
        &mut self,
        entity: Entity,
        world: &'w World,
    ) -> Option<&'w T> {
        if let Some(&key) = self.slots.get(&TypeId::of::<T>()) {
            let cached = TypedHandle::<T>::new(key);
            if let Some(component) = world.resolve(cached) {
                return Some(component);
            }
        }

        match world.lookup::<T>(entity) {
            Some(handle) => {
                log::trace!("refetched `{}` for cache", std::any::type_name::<T>());
                self.slots.insert(TypeId::of::<T>(), handle.key());
                world.resolve(handle)
            }
            None => {
                self.slots.remove(&TypeId::of::<T>());
                None
            }
        }
    }

    /// The cached handle for `T`, if a slot is populated
    ///
    /// Diagnostic accessor; the handle may already be stale.
    pub fn cached_handle<T: Component>(&self) -> Option<TypedHandle<T>> {
        self.slots
            .get(&TypeId::of::<T>())
            .map(|&key| TypedHandle::new(key))
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is populated
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::logging;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Health(f32);
    impl Component for Health {}

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Armor(f32);
    impl Component for Armor {}

    #[test]
    fn test_repeated_access_performs_one_lookup() {
        logging::init_for_tests();
        let mut world = World::new();
        let e = world.spawn("player");
        world.attach(e, Health(100.0)).unwrap();

        let mut cache = ComponentCache::new();
        let first = cache.get_or_fetch::<Health>(e, &world).copied();
        let lookups_after_first = world.lookup_count();
        let second = cache.get_or_fetch::<Health>(e, &world).copied();

        assert_eq!(first, Some(Health(100.0)));
        assert_eq!(second, first);
        assert_eq!(lookups_after_first, 1);
        // The second access was served entirely from the cache.
        assert_eq!(world.lookup_count(), 1);
    }

    #[test]
    fn test_same_handle_within_an_epoch() {
        let mut world = World::new();
        let e = world.spawn("player");
        let attached = world.attach(e, Health(1.0)).unwrap();

        let mut cache = ComponentCache::new();
        cache.get_or_fetch::<Health>(e, &world);
        let h1 = cache.cached_handle::<Health>().unwrap();
        cache.get_or_fetch::<Health>(e, &world);
        let h2 = cache.cached_handle::<Health>().unwrap();

        assert_eq!(h1, attached);
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_destruction_triggers_exactly_one_fresh_lookup() {
        let mut world = World::new();
        let e = world.spawn("player");
        world.attach(e, Health(1.0)).unwrap();

        let mut cache = ComponentCache::new();
        cache.get_or_fetch::<Health>(e, &world);
        assert_eq!(world.lookup_count(), 1);

        // Destroy and replace the component between accesses.
        world.detach::<Health>(e);
        world.attach(e, Health(2.0)).unwrap();

        let refreshed = cache.get_or_fetch::<Health>(e, &world).copied();
        assert_eq!(refreshed, Some(Health(2.0)));
        assert_eq!(world.lookup_count(), 2);

        // The new handle is trusted again; no further lookups.
        cache.get_or_fetch::<Health>(e, &world);
        assert_eq!(world.lookup_count(), 2);
    }

    #[test]
    fn test_destruction_without_replacement_yields_none() {
        let mut world = World::new();
        let e = world.spawn("player");
        world.attach(e, Health(1.0)).unwrap();

        let mut cache = ComponentCache::new();
        cache.get_or_fetch::<Health>(e, &world);
        world.detach::<Health>(e);

        assert_eq!(cache.get_or_fetch::<Health>(e, &world), None);
        // The stale slot was cleared, not left dangling.
        assert!(cache.cached_handle::<Health>().is_none());
    }

    #[test]
    fn test_absent_component_is_looked_up_every_access() {
        let mut world = World::new();
        let e = world.spawn("player");

        let mut cache = ComponentCache::new();
        assert_eq!(cache.get_or_fetch::<Health>(e, &world), None);
        assert_eq!(cache.get_or_fetch::<Health>(e, &world), None);
        assert_eq!(cache.get_or_fetch::<Health>(e, &world), None);
        assert_eq!(world.lookup_count(), 3);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_slots_are_independent_per_type() {
        let mut world = World::new();
        let e = world.spawn("player");
        world.attach(e, Health(1.0)).unwrap();
        world.attach(e, Armor(5.0)).unwrap();

        let mut cache = ComponentCache::new();
        cache.get_or_fetch::<Health>(e, &world);
        cache.get_or_fetch::<Armor>(e, &world);
        assert_eq!(world.lookup_count(), 2);

        // Invalidate Health only; the Armor slot keeps serving cached hits.
        world.detach::<Health>(e);
        assert_eq!(cache.get_or_fetch::<Armor>(e, &world), Some(&Armor(5.0)));
        assert_eq!(world.lookup_count(), 2);

        assert_eq!(cache.get_or_fetch::<Health>(e, &world), None);
        assert_eq!(world.lookup_count(), 3);
    }

    #[test]
    fn test_despawned_entity_stales_cache() {
        let mut world = World::new();
        let e = world.spawn("player");
        world.attach(e, Health(1.0)).unwrap();

        let mut cache = ComponentCache::new();
        cache.get_or_fetch::<Health>(e, &world);

        world.despawn(e);
        assert_eq!(cache.get_or_fetch::<Health>(e, &world), None);
    }
}
