//! Audio source component

use serde::{Deserialize, Serialize};

use crate::ecs::Component;

/// Audio source attached to an entity
///
/// Spatial sources attenuate between the min and max distances; flat
/// sources play at constant volume regardless of listener position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSource {
    /// Asset path of the clip to play
    pub clip: Option<String>,

    /// Playback volume in [0, 1]
    pub volume: f32,

    /// Playback rate multiplier
    pub pitch: f32,

    /// Restart the clip when it finishes
    pub looping: bool,

    /// Whether the source is positioned in 3D space
    pub spatial: bool,

    /// Distance at which attenuation begins
    pub min_distance: f32,

    /// Distance beyond which the source is inaudible
    pub max_distance: f32,

    /// Whether the source is currently playing
    pub playing: bool,

    /// Start playing as soon as the entity spawns
    pub play_on_spawn: bool,
}

impl Component for AudioSource {}

impl Default for AudioSource {
    fn default() -> Self {
        Self {
            clip: None,
            volume: 1.0,
            pitch: 1.0,
            looping: false,
            spatial: true,
            min_distance: 1.0,
            max_distance: 50.0,
            playing: false,
            play_on_spawn: false,
        }
    }
}

impl AudioSource {
    /// Create a source for the given clip asset
    pub fn new(clip: impl Into<String>) -> Self {
        Self {
            clip: Some(clip.into()),
            ..Default::default()
        }
    }

    /// Begin playback
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop playback
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Linear attenuation factor for a listener at the given distance
    pub fn attenuation(&self, distance: f32) -> f32 {
        if !self.spatial || distance <= self.min_distance {
            return 1.0;
        }
        if distance >= self.max_distance {
            return 0.0;
        }
        1.0 - (distance - self.min_distance) / (self.max_distance - self.min_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_attenuation_curve() {
        let source = AudioSource {
            min_distance: 10.0,
            max_distance: 20.0,
            ..Default::default()
        };

        assert_relative_eq!(source.attenuation(0.0), 1.0);
        assert_relative_eq!(source.attenuation(10.0), 1.0);
        assert_relative_eq!(source.attenuation(15.0), 0.5);
        assert_relative_eq!(source.attenuation(25.0), 0.0);
    }

    #[test]
    fn test_flat_source_ignores_distance() {
        let source = AudioSource {
            spatial: false,
            ..Default::default()
        };
        assert_relative_eq!(source.attenuation(1000.0), 1.0);
    }
}
