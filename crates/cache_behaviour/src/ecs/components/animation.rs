//! Animation components
//!
//! `Animation` plays a single clip directly; `Animator` drives a
//! controller graph of clips and transitions.

use serde::{Deserialize, Serialize};

use crate::ecs::Component;

/// How a clip behaves when playback reaches its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Stop on the final frame
    Once,
    /// Restart from the beginning
    Loop,
    /// Play back and forth
    PingPong,
    /// Hold the final pose and keep advancing time
    ClampForever,
}

/// Single-clip animation playback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Asset path of the clip to play
    pub clip: Option<String>,

    /// Playback speed multiplier
    pub speed: f32,

    /// End-of-clip behavior
    pub wrap_mode: WrapMode,

    /// Current playback position in seconds
    pub time: f32,

    /// Whether playback is running
    pub playing: bool,
}

impl Component for Animation {}

impl Default for Animation {
    fn default() -> Self {
        Self {
            clip: None,
            speed: 1.0,
            wrap_mode: WrapMode::Once,
            time: 0.0,
            playing: false,
        }
    }
}

impl Animation {
    /// Start playing the given clip from the beginning
    pub fn play(&mut self, clip: impl Into<String>) {
        self.clip = Some(clip.into());
        self.time = 0.0;
        self.playing = true;
    }

    /// Stop playback and rewind
    pub fn stop(&mut self) {
        self.playing = false;
        self.time = 0.0;
    }
}

/// Controller-driven animation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animator {
    /// Asset path of the controller graph
    pub controller: Option<String>,

    /// Playback speed multiplier applied to the whole graph
    pub speed: f32,

    /// Apply root-motion deltas to the entity transform
    pub apply_root_motion: bool,

    /// Name of the state currently playing
    pub current_state: Option<String>,
}

impl Component for Animator {}

impl Default for Animator {
    fn default() -> Self {
        Self {
            controller: None,
            speed: 1.0,
            apply_root_motion: false,
            current_state: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_rewinds_and_starts() {
        let mut animation = Animation {
            time: 3.2,
            ..Default::default()
        };
        animation.play("clips/walk.ron");

        assert!(animation.playing);
        assert_eq!(animation.time, 0.0);
        assert_eq!(animation.clip.as_deref(), Some("clips/walk.ron"));

        animation.stop();
        assert!(!animation.playing);
    }
}
