//! Transform components
//!
//! Pure data components for spatial placement. World-space transforms use
//! Y-up right-handed conventions; rect transforms describe anchored 2D
//! layout within a parent rectangle.

use serde::{Deserialize, Serialize};

use crate::ecs::Component;
use crate::foundation::math::{Mat4, Quat, Rect, Vec2, Vec3};

/// Spatial transform in world space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World space position
    pub position: Vec3,

    /// World space rotation quaternion
    pub rotation: Quat,

    /// World space scale factors
    pub scale: Vec3,
}

impl Component for Transform {}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Builder pattern: set scale (uniform)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// The local forward axis (-Z) rotated into world space
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::new(0.0, 0.0, -1.0)
    }
}

/// Anchored 2D layout transform for UI elements
///
/// Anchors are normalized coordinates within the parent rectangle. When
/// the anchors coincide the element has a fixed size (`size_delta`); when
/// they span a region the element stretches with its parent and
/// `size_delta` adjusts the stretched extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectTransform {
    /// Position offset relative to the anchor region, in pixels
    pub anchored_position: Vec2,

    /// Size adjustment applied on top of the anchor region extent
    pub size_delta: Vec2,

    /// Lower-left anchor in normalized parent coordinates
    pub anchor_min: Vec2,

    /// Upper-right anchor in normalized parent coordinates
    pub anchor_max: Vec2,

    /// Normalized pivot point within the element's own rectangle
    pub pivot: Vec2,
}

impl Component for RectTransform {}

impl Default for RectTransform {
    fn default() -> Self {
        Self {
            anchored_position: Vec2::zeros(),
            size_delta: Vec2::new(100.0, 100.0),
            anchor_min: Vec2::new(0.5, 0.5),
            anchor_max: Vec2::new(0.5, 0.5),
            pivot: Vec2::new(0.5, 0.5),
        }
    }
}

impl RectTransform {
    /// Create a centered rect transform with the given pixel size
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            size_delta: Vec2::new(width, height),
            ..Default::default()
        }
    }

    /// Create a rect transform that stretches to fill its parent
    pub fn stretched() -> Self {
        Self {
            size_delta: Vec2::zeros(),
            anchor_min: Vec2::zeros(),
            anchor_max: Vec2::new(1.0, 1.0),
            ..Default::default()
        }
    }

    /// Resolve the element rectangle within a parent rectangle
    pub fn rect(&self, parent: Rect) -> Rect {
        let region_x = parent.x + self.anchor_min.x * parent.width;
        let region_y = parent.y + self.anchor_min.y * parent.height;
        let region_width = (self.anchor_max.x - self.anchor_min.x) * parent.width;
        let region_height = (self.anchor_max.y - self.anchor_min.y) * parent.height;

        let width = region_width + self.size_delta.x;
        let height = region_height + self.size_delta.y;

        // The pivot sits at its interpolated point of the anchor region,
        // displaced by the anchored position.
        let pivot_x = region_x + self.pivot.x * region_width + self.anchored_position.x;
        let pivot_y = region_y + self.pivot.y * region_height + self.anchored_position.y;

        Rect::new(
            pivot_x - self.pivot.x * width,
            pivot_y - self.pivot.y * height,
            width,
            height,
        )
    }
}
