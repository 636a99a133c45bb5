//! Camera component

use serde::{Deserialize, Serialize};

use crate::ecs::components::collision::Layers;
use crate::ecs::Component;
use crate::foundation::math::{Mat4, Rect, Vec4};

/// Projection mode for a camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// Perspective projection
    Perspective {
        /// Vertical field of view in radians
        fov_y: f32,
        /// Near clip plane distance
        near: f32,
        /// Far clip plane distance
        far: f32,
    },
    /// Orthographic projection
    Orthographic {
        /// Half of the vertical viewing volume extent
        size: f32,
        /// Near clip plane distance
        near: f32,
        /// Far clip plane distance
        far: f32,
    },
}

/// What a camera clears its render target to before drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClearFlags {
    /// Clear to the background color
    SolidColor,
    /// Clear depth only, keep the previous frame's color
    DepthOnly,
    /// Clear nothing
    Nothing,
}

/// Camera component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Projection mode and parameters
    pub projection: Projection,

    /// Clear behavior at the start of the camera's pass
    pub clear_flags: ClearFlags,

    /// Background color used with [`ClearFlags::SolidColor`]
    pub background: Vec4,

    /// Layers this camera renders
    pub culling_mask: Layers,

    /// Normalized viewport rectangle on the render target
    pub viewport: Rect,

    /// Draw order among cameras (lower renders first)
    pub depth: i32,
}

impl Component for Camera {}

impl Default for Camera {
    fn default() -> Self {
        Self {
            projection: Projection::Perspective {
                fov_y: std::f32::consts::FRAC_PI_3,
                near: 0.1,
                far: 1000.0,
            },
            clear_flags: ClearFlags::SolidColor,
            background: Vec4::new(0.05, 0.05, 0.08, 1.0),
            culling_mask: Layers::all(),
            viewport: Rect::unit(),
            depth: 0,
        }
    }
}

impl Camera {
    /// Create an orthographic camera with the given half-height
    pub fn orthographic(size: f32) -> Self {
        Self {
            projection: Projection::Orthographic {
                size,
                near: 0.1,
                far: 1000.0,
            },
            ..Default::default()
        }
    }

    /// Whether this camera draws objects on the given layer
    pub fn renders_layer(&self, layer: Layers) -> bool {
        self.culling_mask.intersects(layer)
    }

    /// Build the projection matrix for the given viewport aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match self.projection {
            Projection::Perspective { fov_y, near, far } => {
                Mat4::new_perspective(aspect, fov_y, near, far)
            }
            Projection::Orthographic { size, near, far } => {
                let half_h = size;
                let half_w = size * aspect;
                Mat4::new_orthographic(-half_w, half_w, -half_h, half_h, near, far)
            }
        }
    }
}
