//! Camera follow rig math
//!
//! Pure state, no rendering: the rig trails the runner with frame-rate
//! independent damping and widens its field of view as speed climbs.

use serde::{Deserialize, Serialize};
use strider_core::{clamp01, lerp, smooth_factor, Vec3};

/// Rig tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Rig position relative to the runner
    pub offset: Vec3,
    /// Damping rate for the position follow
    pub follow_lerp: f32,
    /// Field of view at rest, degrees
    pub base_fov: f32,
    /// Field of view at top speed, degrees
    pub max_fov: f32,
    /// Height above the runner the rig looks at
    pub look_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 3.2, -7.5),
            follow_lerp: 8.0,
            base_fov: 60.0,
            max_fov: 72.0,
            look_height: 1.2,
        }
    }
}

/// Follow state advanced once per frame.
#[derive(Debug, Clone)]
pub struct CameraRig {
    config: CameraConfig,
    pub position: Vec3,
    pub fov: f32,
    /// Once set, the FOV kick stops responding to speed
    pub game_over: bool,
}

impl CameraRig {
    pub fn new(config: CameraConfig, target: Vec3) -> Self {
        let position = target + config.offset;
        let fov = config.base_fov;
        Self {
            config,
            position,
            fov,
            game_over: false,
        }
    }

    /// Follow the target and modulate FOV by normalized speed.
    pub fn update(&mut self, dt: f32, target: Vec3, speed01: f32) {
        let desired = target + self.config.offset;
        let t = smooth_factor(self.config.follow_lerp, dt);
        self.position = self.position.lerp(&desired, t);

        if !self.game_over {
            self.fov = lerp(self.config.base_fov, self.config.max_fov, clamp01(speed01));
        }
    }

    /// The point the rig should be looking at.
    pub fn look_target(&self, target: Vec3) -> Vec3 {
        target + Vec3::UP * self.config.look_height
    }
}
