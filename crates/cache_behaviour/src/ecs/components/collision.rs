//! Collision components
//!
//! Colliders carry a shape plus layer/mask pairs for filtering which
//! bodies are allowed to interact. Most games need to filter collisions;
//! this is done via collision layers and masks.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::ecs::Component;
use crate::foundation::math::{Vec2, Vec3};

bitflags! {
    /// Collision and culling layer bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Layers: u32 {
        /// Default layer for unclassified objects
        const DEFAULT = 1 << 0;
        /// Player characters
        const PLAYER = 1 << 1;
        /// Enemy characters
        const ENEMY = 1 << 2;
        /// Projectiles (bullets, missiles, etc.)
        const PROJECTILE = 1 << 3;
        /// Static environment geometry
        const ENVIRONMENT = 1 << 4;
        /// Trigger volumes (no physical response)
        const TRIGGER = 1 << 5;
        /// Debris and small physics objects
        const DEBRIS = 1 << 6;
        /// UI hit-test layer
        const UI = 1 << 7;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Check if two objects should interact based on their layers and masks
///
/// Interaction is symmetric: each side's mask must accept the other
/// side's layer.
pub fn should_collide(layer_a: Layers, mask_a: Layers, layer_b: Layers, mask_b: Layers) -> bool {
    mask_a.intersects(layer_b) && mask_b.intersects(layer_a)
}

/// Collision shapes for 3D colliders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Sphere centered on the entity
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Axis-aligned box centered on the entity
    Box {
        /// Half extents along each axis
        half_extents: Vec3,
    },
    /// Vertical capsule centered on the entity
    Capsule {
        /// Capsule radius
        radius: f32,
        /// Distance between the cap centers
        height: f32,
    },
}

/// Collider component for 3D physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Shape used for intersection tests
    pub shape: ColliderShape,

    /// Offset of the shape from the entity origin
    pub offset: Vec3,

    /// Triggers report overlaps without a physical response
    pub is_trigger: bool,

    /// Layer this collider occupies
    pub layer: Layers,

    /// Layers this collider interacts with
    pub mask: Layers,
}

impl Component for Collider {}

impl Default for Collider {
    fn default() -> Self {
        Self {
            shape: ColliderShape::Sphere { radius: 0.5 },
            offset: Vec3::zeros(),
            is_trigger: false,
            layer: Layers::DEFAULT,
            mask: Layers::all(),
        }
    }
}

impl Collider {
    /// Create a sphere collider with the given radius
    pub fn sphere(radius: f32) -> Self {
        Self {
            shape: ColliderShape::Sphere { radius },
            ..Default::default()
        }
    }

    /// Create a box collider with the given half extents
    pub fn cuboid(half_extents: Vec3) -> Self {
        Self {
            shape: ColliderShape::Box { half_extents },
            ..Default::default()
        }
    }

    /// Whether this collider interacts with another
    pub fn collides_with(&self, other: &Self) -> bool {
        should_collide(self.layer, self.mask, other.layer, other.mask)
    }
}

/// Collision shapes for 2D colliders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape2D {
    /// Circle centered on the entity
    Circle {
        /// Circle radius
        radius: f32,
    },
    /// Axis-aligned box centered on the entity
    Box {
        /// Half extents along each axis
        half_extents: Vec2,
    },
}

/// Collider component for 2D physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider2D {
    /// Shape used for intersection tests
    pub shape: ColliderShape2D,

    /// Offset of the shape from the entity origin
    pub offset: Vec2,

    /// Triggers report overlaps without a physical response
    pub is_trigger: bool,

    /// Layer this collider occupies
    pub layer: Layers,

    /// Layers this collider interacts with
    pub mask: Layers,
}

impl Component for Collider2D {}

impl Default for Collider2D {
    fn default() -> Self {
        Self {
            shape: ColliderShape2D::Circle { radius: 0.5 },
            offset: Vec2::zeros(),
            is_trigger: false,
            layer: Layers::DEFAULT,
            mask: Layers::all(),
        }
    }
}
