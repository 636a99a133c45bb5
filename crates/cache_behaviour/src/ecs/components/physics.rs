//! Physics components
//!
//! Pure data components consumed by a physics integrator: rigid bodies in
//! 3D and 2D, persistent forces, and hinge joints.

use serde::{Deserialize, Serialize};

use crate::ecs::{Component, Entity};
use crate::foundation::math::{Vec2, Vec3};

/// Rigid body dynamics state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rigidbody {
    /// Mass in kilograms
    pub mass: f32,

    /// Linear velocity in world space, meters per second
    pub velocity: Vec3,

    /// Angular velocity in radians per second
    pub angular_velocity: Vec3,

    /// Linear damping coefficient
    pub linear_damping: f32,

    /// Angular damping coefficient
    pub angular_damping: f32,

    /// Whether gravity is applied to this body
    pub use_gravity: bool,

    /// Kinematic bodies are moved by code, not by forces
    pub is_kinematic: bool,
}

impl Component for Rigidbody {}

impl Default for Rigidbody {
    fn default() -> Self {
        Self {
            mass: 1.0,
            velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            linear_damping: 0.0,
            angular_damping: 0.05,
            use_gravity: true,
            is_kinematic: false,
        }
    }
}

impl Rigidbody {
    /// Create a body with the given mass
    pub fn with_mass(mass: f32) -> Self {
        Self {
            mass,
            ..Default::default()
        }
    }

    /// Apply an instantaneous impulse, changing velocity by impulse / mass
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if !self.is_kinematic && self.mass > 0.0 {
            self.velocity += impulse / self.mass;
        }
    }

    /// Current linear momentum
    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass
    }
}

/// Rigid body dynamics state for 2D physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rigidbody2D {
    /// Mass in kilograms
    pub mass: f32,

    /// Linear velocity in world space
    pub velocity: Vec2,

    /// Angular velocity in radians per second
    pub angular_velocity: f32,

    /// Multiplier on the global gravity vector
    pub gravity_scale: f32,

    /// Kinematic bodies are moved by code, not by forces
    pub is_kinematic: bool,
}

impl Component for Rigidbody2D {}

impl Default for Rigidbody2D {
    fn default() -> Self {
        Self {
            mass: 1.0,
            velocity: Vec2::zeros(),
            angular_velocity: 0.0,
            gravity_scale: 1.0,
            is_kinematic: false,
        }
    }
}

/// Constant force applied every simulation step
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstantForce {
    /// Force in world space
    pub force: Vec3,

    /// Force in the body's local space
    pub relative_force: Vec3,

    /// Torque in world space
    pub torque: Vec3,

    /// Torque in the body's local space
    pub relative_torque: Vec3,
}

impl Component for ConstantForce {}

impl ConstantForce {
    /// A steady world-space push
    pub fn from_force(force: Vec3) -> Self {
        Self {
            force,
            ..Default::default()
        }
    }
}

/// Hinge joint constraining rotation to a single axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HingeJoint {
    /// Body this joint connects to, if any
    pub connected_entity: Option<Entity>,

    /// Anchor point in local space
    pub anchor: Vec3,

    /// Rotation axis in local space
    pub axis: Vec3,

    /// Whether angular limits are enforced
    pub use_limits: bool,

    /// Lower angular limit in radians
    pub min_angle: f32,

    /// Upper angular limit in radians
    pub max_angle: f32,
}

impl Component for HingeJoint {}

impl Default for HingeJoint {
    fn default() -> Self {
        Self {
            connected_entity: None,
            anchor: Vec3::zeros(),
            axis: Vec3::new(0.0, 1.0, 0.0),
            use_limits: false,
            min_angle: 0.0,
            max_angle: 0.0,
        }
    }
}

impl HingeJoint {
    /// Clamp an angle into the configured limits
    ///
    /// Returns the angle unchanged when limits are disabled.
    pub fn clamp_angle(&self, angle: f32) -> f32 {
        if self.use_limits {
            angle.clamp(self.min_angle, self.max_angle)
        } else {
            angle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_impulse_scales_by_mass() {
        let mut body = Rigidbody::with_mass(2.0);
        body.apply_impulse(Vec3::new(4.0, 0.0, 0.0));
        assert_relative_eq!(body.velocity, Vec3::new(2.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(body.momentum(), Vec3::new(4.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_kinematic_body_ignores_impulses() {
        let mut body = Rigidbody {
            is_kinematic: true,
            ..Default::default()
        };
        body.apply_impulse(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(body.velocity, Vec3::zeros());
    }

    #[test]
    fn test_hinge_limits() {
        let joint = HingeJoint {
            use_limits: true,
            min_angle: -0.5,
            max_angle: 0.5,
            ..Default::default()
        };
        assert_relative_eq!(joint.clamp_angle(1.2), 0.5);
        assert_relative_eq!(joint.clamp_angle(-2.0), -0.5);
        assert_relative_eq!(joint.clamp_angle(0.1), 0.1);

        let free = HingeJoint::default();
        assert_relative_eq!(free.clamp_angle(3.0), 3.0);
    }
}
