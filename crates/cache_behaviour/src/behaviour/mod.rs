//! Cached component accessors
//!
//! [`CacheBehaviour`] pairs a host entity with a private
//! [`ComponentCache`] and exposes one named accessor per built-in
//! component type. Each accessor costs a by-entity lookup only when its
//! cached handle is unset or stale; otherwise it resolves in O(1).

pub mod cache;

pub use cache::ComponentCache;

use serde::{Deserialize, Serialize};

use crate::ecs::components::{
    Animation, Animator, AudioSource, Button, Camera, Canvas, CanvasRenderer, Collider, Collider2D,
    ConstantForce, GridLayoutGroup, HingeJoint, HorizontalLayoutGroup, Image, InputField,
    LayoutElement, Light, Mask, MeshRenderer, ParticleSystem, RawImage, RectTransform, Rigidbody,
    Rigidbody2D, ScrollRect, Scrollbar, Slider, SpriteRenderer, Text, Toggle, ToggleGroup,
    Transform, VerticalLayoutGroup,
};
use crate::ecs::{Component, Entity, World};

/// Generate one cached accessor per component type
///
/// Each accessor is a thin delegation to
/// [`ComponentCache::get_or_fetch`]; the repetition lives here instead of
/// in thirty hand-written methods.
macro_rules! cached_accessors {
    ($($(#[$attr:meta])* $name:ident => $ty:ty),+ $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $name<'w>(&mut self, world: &'w World) -> Option<&'w $ty> {
                self.cache.get_or_fetch::<$ty>(self.entity, world)
            }
        )+
    };
}

/// Host-object wrapper with lazily-cached component accessors
///
/// Embed this in behaviour types instead of holding a bare [`Entity`]:
/// accessors memoize the lookup for their component type and re-query
/// only once the cached reference goes stale (the component was detached
/// or its entity despawned).
///
/// The cache is an access-time optimization, not state: it is skipped by
/// serialization, so a deserialized behaviour starts cold and repopulates
/// on first use.
///
/// # Examples
///
/// ```
/// use cache_behaviour::ecs::components::Rigidbody;
/// use cache_behaviour::ecs::World;
/// use cache_behaviour::behaviour::CacheBehaviour;
///
/// let mut world = World::new();
/// let entity = world.spawn("ship");
/// world.attach(entity, Rigidbody::with_mass(10.0)).unwrap();
///
/// let mut behaviour = CacheBehaviour::new(entity);
/// // First access pays the lookup, later ones are cache hits.
/// let mass = behaviour.rigidbody(&world).map(|body| body.mass);
/// assert_eq!(mass, Some(10.0));
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheBehaviour {
    entity: Entity,

    #[serde(skip)]
    cache: ComponentCache,
}

impl CacheBehaviour {
    /// Create a behaviour for the given host entity with a cold cache
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            cache: ComponentCache::new(),
        }
    }

    /// The host entity this behaviour is attached to
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Cached access to a component of any type, including user-defined
    /// ones
    ///
    /// The named accessors below are generated shorthands for this.
    pub fn get_or_fetch<'w, T: Component>(&mut self, world: &'w World) -> Option<&'w T> {
        self.cache.get_or_fetch::<T>(self.entity, world)
    }

    cached_accessors! {
        /// Gets the `Transform` attached to the object.
        transform => Transform,
        /// Gets the `RectTransform` attached to the object.
        rect_transform => RectTransform,
        /// Gets the `Rigidbody` attached to the object.
        rigidbody => Rigidbody,
        /// Gets the `Rigidbody2D` attached to the object.
        rigidbody2d => Rigidbody2D,
        /// Gets the `ConstantForce` attached to the object.
        constant_force => ConstantForce,
        /// Gets the `HingeJoint` attached to the object.
        hinge_joint => HingeJoint,
        /// Gets the `Collider` attached to the object.
        collider => Collider,
        /// Gets the `Collider2D` attached to the object.
        collider2d => Collider2D,
        /// Gets the `MeshRenderer` attached to the object.
        mesh_renderer => MeshRenderer,
        /// Gets the `SpriteRenderer` attached to the object.
        sprite_renderer => SpriteRenderer,
        /// Gets the `CanvasRenderer` attached to the object.
        canvas_renderer => CanvasRenderer,
        /// Gets the `ParticleSystem` attached to the object.
        particle_system => ParticleSystem,
        /// Gets the `Light` attached to the object.
        light => Light,
        /// Gets the `Camera` attached to the object.
        camera => Camera,
        /// Gets the `AudioSource` attached to the object.
        audio_source => AudioSource,
        /// Gets the `Animation` attached to the object.
        animation => Animation,
        /// Gets the `Animator` attached to the object.
        animator => Animator,
        /// Gets the `Canvas` attached to the object.
        canvas => Canvas,
        /// Gets the `Button` attached to the object.
        button => Button,
        /// Gets the `Image` attached to the object.
        image => Image,
        /// Gets the `RawImage` attached to the object.
        raw_image => RawImage,
        /// Gets the `Text` attached to the object.
        text => Text,
        /// Gets the `InputField` attached to the object.
        input_field => InputField,
        /// Gets the `Scrollbar` attached to the object.
        scrollbar => Scrollbar,
        /// Gets the `ScrollRect` attached to the object.
        scroll_rect => ScrollRect,
        /// Gets the `Slider` attached to the object.
        slider => Slider,
        /// Gets the `Toggle` attached to the object.
        toggle => Toggle,
        /// Gets the `ToggleGroup` attached to the object.
        toggle_group => ToggleGroup,
        /// Gets the `Mask` attached to the object.
        mask => Mask,
        /// Gets the `LayoutElement` attached to the object.
        layout_element => LayoutElement,
        /// Gets the `GridLayoutGroup` attached to the object.
        grid_layout_group => GridLayoutGroup,
        /// Gets the `HorizontalLayoutGroup` attached to the object.
        horizontal_layout_group => HorizontalLayoutGroup,
        /// Gets the `VerticalLayoutGroup` attached to the object.
        vertical_layout_group => VerticalLayoutGroup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_named_accessor_caches_lookup() {
        let mut world = World::new();
        let e = world.spawn("ship");
        world.attach(e, Rigidbody::with_mass(3.0)).unwrap();

        let mut behaviour = CacheBehaviour::new(e);
        assert_eq!(behaviour.rigidbody(&world).map(|b| b.mass), Some(3.0));
        assert_eq!(behaviour.rigidbody(&world).map(|b| b.mass), Some(3.0));
        assert_eq!(world.lookup_count(), 1);
    }

    #[test]
    fn test_accessors_are_independent() {
        let mut world = World::new();
        let e = world.spawn("hud");
        world.attach(e, Slider::default()).unwrap();
        world.attach(e, Text::new("score")).unwrap();

        let mut behaviour = CacheBehaviour::new(e);
        assert!(behaviour.slider(&world).is_some());
        assert!(behaviour.text(&world).is_some());
        assert_eq!(world.lookup_count(), 2);

        // Detaching the slider leaves the text accessor's cache warm.
        world.detach::<Slider>(e);
        assert!(behaviour.slider(&world).is_none());
        assert!(behaviour.text(&world).is_some());
        assert_eq!(world.lookup_count(), 3);
    }

    #[test]
    fn test_accessor_sees_replacement_component() {
        let mut world = World::new();
        let e = world.spawn("ship");
        world
            .attach(e, Transform::from_position(Vec3::new(1.0, 0.0, 0.0)))
            .unwrap();

        let mut behaviour = CacheBehaviour::new(e);
        assert_eq!(
            behaviour.transform(&world).map(|t| t.position.x),
            Some(1.0)
        );

        world.detach::<Transform>(e);
        world
            .attach(e, Transform::from_position(Vec3::new(2.0, 0.0, 0.0)))
            .unwrap();
        assert_eq!(
            behaviour.transform(&world).map(|t| t.position.x),
            Some(2.0)
        );
    }

    #[test]
    fn test_missing_component_yields_none_not_error() {
        let mut world = World::new();
        let e = world.spawn("empty");
        let mut behaviour = CacheBehaviour::new(e);

        assert!(behaviour.camera(&world).is_none());
        assert!(behaviour.audio_source(&world).is_none());
    }

    #[test]
    fn test_generic_accessor_supports_custom_components() {
        #[derive(Debug, PartialEq)]
        struct Score(u32);
        impl Component for Score {}

        let mut world = World::new();
        let e = world.spawn("player");
        world.attach(e, Score(42)).unwrap();

        let mut behaviour = CacheBehaviour::new(e);
        assert_eq!(behaviour.get_or_fetch::<Score>(&world), Some(&Score(42)));
        behaviour.get_or_fetch::<Score>(&world);
        assert_eq!(world.lookup_count(), 1);
    }

    #[test]
    fn test_serialization_excludes_cache() {
        let mut world = World::new();
        let e = world.spawn("ship");
        world.attach(e, Rigidbody::with_mass(7.0)).unwrap();

        let mut behaviour = CacheBehaviour::new(e);
        behaviour.rigidbody(&world);
        assert_eq!(world.lookup_count(), 1);

        let serialized = ron::to_string(&behaviour).unwrap();
        // The cache slots never appear in the serialized form.
        assert!(!serialized.contains("cache"));

        let mut revived: CacheBehaviour = ron::from_str(&serialized).unwrap();
        assert_eq!(revived.entity(), e);

        // The revived behaviour starts cold and repopulates lazily.
        assert_eq!(revived.rigidbody(&world).map(|b| b.mass), Some(7.0));
        assert_eq!(world.lookup_count(), 2);
        revived.rigidbody(&world);
        assert_eq!(world.lookup_count(), 2);
    }
}
