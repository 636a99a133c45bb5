//! Renderer components
//!
//! Pure data components that mark an entity as renderable and carry the
//! data the render queue needs to sort and submit it.

use serde::{Deserialize, Serialize};

use crate::ecs::Component;
use crate::foundation::math::{Rect, Vec4};

/// Mesh renderer for 3D geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshRenderer {
    /// Asset path of the mesh to draw
    pub mesh: Option<String>,

    /// Asset path of the material to draw with
    pub material: Option<String>,

    /// Whether this object is visible
    pub visible: bool,

    /// Whether this object casts shadows
    pub cast_shadows: bool,

    /// Whether this material is transparent (affects render order)
    pub is_transparent: bool,

    /// Rendering layer for sorting (higher values render later)
    pub render_layer: u8,
}

impl Component for MeshRenderer {}

impl Default for MeshRenderer {
    fn default() -> Self {
        Self {
            mesh: None,
            material: None,
            visible: true,
            cast_shadows: true,
            is_transparent: false,
            render_layer: 0,
        }
    }
}

impl MeshRenderer {
    /// Create a renderer for the given mesh and material assets
    pub fn new(mesh: impl Into<String>, material: impl Into<String>) -> Self {
        Self {
            mesh: Some(mesh.into()),
            material: Some(material.into()),
            ..Default::default()
        }
    }

    /// Check if this component should be rendered
    pub fn should_render(&self) -> bool {
        self.visible && self.mesh.is_some()
    }
}

/// Sprite renderer for 2D images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteRenderer {
    /// Asset path of the sprite to draw
    pub sprite: Option<String>,

    /// Tint color (RGBA)
    pub color: Vec4,

    /// Mirror the sprite horizontally
    pub flip_x: bool,

    /// Mirror the sprite vertically
    pub flip_y: bool,

    /// Draw order within the sprite pass (higher draws on top)
    pub sorting_order: i32,

    /// Whether this sprite is visible
    pub visible: bool,
}

impl Component for SpriteRenderer {}

impl Default for SpriteRenderer {
    fn default() -> Self {
        Self {
            sprite: None,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            flip_x: false,
            flip_y: false,
            sorting_order: 0,
            visible: true,
        }
    }
}

/// Canvas renderer for UI geometry
///
/// Sits between a UI widget and the canvas it is drawn into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasRenderer {
    /// Overall alpha multiplier applied to the widget
    pub alpha: f32,

    /// Skip rendering fully transparent geometry
    pub cull_transparent: bool,
}

impl Component for CanvasRenderer {}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            cull_transparent: true,
        }
    }
}

impl CanvasRenderer {
    /// Whether the widget contributes any visible geometry
    pub fn should_render(&self) -> bool {
        self.alpha > 0.0 || !self.cull_transparent
    }
}

/// Particle system emitter state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSystem {
    /// Upper bound on live particles
    pub max_particles: u32,

    /// Particles spawned per second while playing
    pub emission_rate: f32,

    /// Lifetime of each particle in seconds
    pub particle_lifetime: f32,

    /// Initial particle speed
    pub start_speed: f32,

    /// Initial particle size
    pub start_size: f32,

    /// Restart emission when the cycle completes
    pub looping: bool,

    /// Whether the system is currently emitting
    pub playing: bool,

    /// Normalized UV region of the particle texture atlas
    pub uv_rect: Rect,
}

impl Component for ParticleSystem {}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self {
            max_particles: 1000,
            emission_rate: 10.0,
            particle_lifetime: 5.0,
            start_speed: 5.0,
            start_size: 1.0,
            looping: true,
            playing: true,
            uv_rect: Rect::unit(),
        }
    }
}

impl ParticleSystem {
    /// Begin emitting particles
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop emitting particles; live particles finish their lifetime
    pub fn stop(&mut self) {
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_renderer_needs_mesh_to_render() {
        let empty = MeshRenderer::default();
        assert!(!empty.should_render());

        let mut renderer = MeshRenderer::new("meshes/ship.obj", "materials/hull.ron");
        assert!(renderer.should_render());

        renderer.visible = false;
        assert!(!renderer.should_render());
    }

    #[test]
    fn test_canvas_renderer_culls_transparent() {
        let mut renderer = CanvasRenderer::default();
        assert!(renderer.should_render());

        renderer.alpha = 0.0;
        assert!(!renderer.should_render());

        renderer.cull_transparent = false;
        assert!(renderer.should_render());
    }
}
