//! # Cache Behaviour
//!
//! Lazily-cached component accessors over a generational host-object
//! model.
//!
//! Looking a component up by entity is the kind of call that is cheap
//! once and expensive every frame. [`behaviour::CacheBehaviour`] memoizes
//! each lookup behind a named accessor: the first access pays the search,
//! later accesses resolve the cached generational handle in O(1), and a
//! stale handle (component detached, entity despawned) triggers exactly
//! one fresh lookup.
//!
//! ## Features
//!
//! - **Generational handles**: staleness is detected by slot generation,
//!   never by dangling references
//! - **Per-type independence**: each accessor's cache slot lives and dies
//!   on its own
//! - **Macro-generated accessors**: one named accessor per built-in
//!   component type, plus a generic `get_or_fetch` for custom types
//! - **Persistence-safe**: caches are skipped by serialization and warm
//!   back up lazily
//!
//! ## Quick Start
//!
//! ```rust
//! use cache_behaviour::prelude::*;
//!
//! let mut world = World::new();
//! let ship = world.spawn("ship");
//! world.attach(ship, Transform::default()).unwrap();
//! world.attach(ship, Rigidbody::with_mass(10.0)).unwrap();
//!
//! let mut behaviour = CacheBehaviour::new(ship);
//!
//! // First access per type performs the lookup...
//! let position = behaviour.transform(&world).map(|t| t.position);
//! assert!(position.is_some());
//!
//! // ...subsequent accesses are cache hits.
//! assert_eq!(behaviour.rigidbody(&world).map(|b| b.mass), Some(10.0));
//! assert_eq!(behaviour.rigidbody(&world).map(|b| b.mass), Some(10.0));
//! assert_eq!(world.lookup_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod behaviour;
pub mod ecs;
pub mod foundation;

pub use behaviour::{CacheBehaviour, ComponentCache};
pub use ecs::{Component, Entity, World, WorldError};

/// Common imports for crate users
pub mod prelude {
    pub use crate::behaviour::{CacheBehaviour, ComponentCache};
    pub use crate::ecs::components::{
        Animation, Animator, AudioSource, Button, Camera, Canvas, CanvasRenderer, Collider,
        Collider2D, ConstantForce, GridLayoutGroup, HingeJoint, HorizontalLayoutGroup, Image,
        InputField, LayoutElement, Layers, Light, Mask, MeshRenderer, ParticleSystem, RawImage,
        RectTransform, Rigidbody, Rigidbody2D, ScrollRect, Scrollbar, Slider, SpriteRenderer,
        Text, Toggle, ToggleGroup, Transform, VerticalLayoutGroup,
    };
    pub use crate::ecs::{Component, Entity, EntityRecord, World, WorldError};
    pub use crate::foundation::math::{Quat, Rect, Vec2, Vec3, Vec4};
}
