//! Specialized collection types
//!
//! Generational arenas and the typed handles that reference entries in
//! them. A handle never dangles: once its entry is removed, the slot's
//! generation advances and the handle stops resolving.

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Untyped generational key into a component arena
    pub struct ComponentKey;
}

/// Arena storing component instances of a single type
pub type HandleMap<T> = SlotMap<ComponentKey, T>;

/// Typed handle for type-safe component references
///
/// Wraps a [`ComponentKey`] and remembers which component type it points
/// at, so a handle for one type cannot be resolved against the arena of
/// another.
#[derive(Debug)]
pub struct TypedHandle<T> {
    key: ComponentKey,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> TypedHandle<T> {
    /// Create a new typed handle from a key
    pub fn new(key: ComponentKey) -> Self {
        Self {
            key,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get the underlying key
    pub fn key(&self) -> ComponentKey {
        self.key
    }
}

// Manual impls: derives would bound `T` itself, but the handle is Copy and
// comparable regardless of the component type it names.
impl<T> Clone for TypedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedHandle<T> {}

impl<T> PartialEq for TypedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedHandle<T> {}

impl<T> std::hash::Hash for TypedHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_resolves_until_removed() {
        let mut arena: HandleMap<u32> = HandleMap::with_key();
        let key = arena.insert(7);
        let handle = TypedHandle::<u32>::new(key);

        assert_eq!(arena.get(handle.key()), Some(&7));
        arena.remove(handle.key());
        assert_eq!(arena.get(handle.key()), None);
    }

    #[test]
    fn test_stale_handle_does_not_resolve_to_replacement() {
        let mut arena: HandleMap<u32> = HandleMap::with_key();
        let old = TypedHandle::<u32>::new(arena.insert(1));
        arena.remove(old.key());

        // Reuse of the slot bumps the generation.
        let new = TypedHandle::<u32>::new(arena.insert(2));
        assert_eq!(arena.get(old.key()), None);
        assert_eq!(arena.get(new.key()), Some(&2));
        assert_ne!(old, new);
    }
}
