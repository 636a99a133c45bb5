//! Lighting component
//!
//! Pure data component for lights; no logic beyond factory constructors.

use serde::{Deserialize, Serialize};

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Types of lights supported by the lighting system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightType {
    /// Directional light (like sunlight) with parallel rays
    Directional,
    /// Point light that radiates in all directions from a position
    Point,
    /// Spot light that creates a cone of light from a position
    Spot,
}

/// Light source component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// The type of light (directional, point, or spot)
    pub light_type: LightType,

    /// RGB color values for the light (0.0 to 1.0 range)
    pub color: Vec3,

    /// Light intensity multiplier (0.0 = no light, 1.0 = full intensity)
    pub intensity: f32,

    /// Maximum range for point/spot lights
    pub range: f32,

    /// Cone angle for spot lights, in radians
    pub spot_angle: f32,

    /// Whether the light is currently enabled
    pub enabled: bool,

    /// Whether this light should cast shadows
    pub cast_shadows: bool,
}

impl Component for Light {}

impl Default for Light {
    fn default() -> Self {
        Self::directional(Vec3::new(1.0, 1.0, 1.0), 1.0)
    }
}

impl Light {
    /// Create a directional light
    pub fn directional(color: Vec3, intensity: f32) -> Self {
        Self {
            light_type: LightType::Directional,
            color,
            intensity,
            range: 0.0,
            spot_angle: 0.0,
            enabled: true,
            cast_shadows: true,
        }
    }

    /// Create a point light with the given falloff range
    pub fn point(color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            light_type: LightType::Point,
            range,
            ..Self::directional(color, intensity)
        }
    }

    /// Create a spot light with the given cone angle in radians
    pub fn spot(color: Vec3, intensity: f32, range: f32, spot_angle: f32) -> Self {
        Self {
            light_type: LightType::Spot,
            range,
            spot_angle,
            ..Self::directional(color, intensity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_set_light_type() {
        let white = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(
            Light::directional(white, 1.0).light_type,
            LightType::Directional
        );
        assert_eq!(Light::point(white, 1.0, 10.0).light_type, LightType::Point);

        let spot = Light::spot(white, 1.0, 10.0, 0.6);
        assert_eq!(spot.light_type, LightType::Spot);
        assert_eq!(spot.spot_angle, 0.6);
    }
}
