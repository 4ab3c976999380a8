//! Runner tuning parameters and validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use strider_core::{Result, StriderError};

/// Tuning for a single runner. Built in code or loaded from TOML.
///
/// Validation happens once, at controller construction; the tick path
/// clamps instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Lateral distance between adjacent lane centers, meters
    pub lane_width: f32,
    /// Lowest legal lane index
    pub lane_min: i32,
    /// Highest legal lane index
    pub lane_max: i32,
    /// Lane occupied at spawn and after a reset
    pub starting_lane: i32,
    /// Lateral tween speed, meters per second
    pub lane_change_speed: f32,
    /// Forward speed granted when the run begins
    pub start_speed: f32,
    /// Floor applied to forward speed while the run is live
    pub min_speed: f32,
    /// Ceiling for forward speed
    pub max_speed: f32,
    /// Downward acceleration, negative, meters per second squared
    pub gravity: f32,
    /// Upward velocity applied by a jump
    pub jump_force: f32,
    /// Grace window for jumping after leaving the ground, seconds
    pub coyote_time: f32,
    /// Small downward velocity that keeps a grounded body pressed to the
    /// surface instead of accumulating free-fall
    pub grounded_stick: f32,
    /// How long a slide lasts before auto-recovery, seconds
    pub slide_duration: f32,
    /// Multiplier applied to collider height and center while sliding
    pub crouch_height_scale: f32,
    /// Standing collider height
    pub collider_height: f32,
    /// Standing collider center height
    pub collider_center_y: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            lane_width: 2.0,
            lane_min: 0,
            lane_max: 2,
            starting_lane: 1,
            lane_change_speed: 12.0,
            start_speed: 8.0,
            min_speed: 8.0,
            max_speed: 18.0,
            gravity: -30.0,
            jump_force: 10.5,
            coyote_time: 0.12,
            grounded_stick: -2.0,
            slide_duration: 0.55,
            crouch_height_scale: 0.5,
            collider_height: 2.0,
            collider_center_y: 1.0,
        }
    }
}

impl RunnerConfig {
    /// Load and validate a config from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would degrade into silent clamping
    /// nonsense (inverted lane bounds, zero-width speed band, ...).
    pub fn validate(&self) -> Result<()> {
        if self.lane_min > self.lane_max {
            return Err(StriderError::InvertedLaneBounds {
                min: self.lane_min,
                max: self.lane_max,
            });
        }
        if self.starting_lane < self.lane_min || self.starting_lane > self.lane_max {
            return Err(StriderError::ValueOutOfRange {
                field: "starting_lane".into(),
                min: self.lane_min as f64,
                max: self.lane_max as f64,
                value: self.starting_lane as f64,
            });
        }
        if self.lane_width <= 0.0 {
            return Err(StriderError::Config(format!(
                "lane_width must be positive, got {}",
                self.lane_width
            )));
        }
        if self.lane_change_speed <= 0.0 {
            return Err(StriderError::Config(format!(
                "lane_change_speed must be positive, got {}",
                self.lane_change_speed
            )));
        }
        if self.start_speed < 0.0 {
            return Err(StriderError::Config(format!(
                "start_speed must not be negative, got {}",
                self.start_speed
            )));
        }
        if self.max_speed <= self.start_speed {
            return Err(StriderError::Config(format!(
                "max_speed ({}) must exceed start_speed ({})",
                self.max_speed, self.start_speed
            )));
        }
        if self.min_speed < 0.0 || self.min_speed > self.start_speed {
            return Err(StriderError::ValueOutOfRange {
                field: "min_speed".into(),
                min: 0.0,
                max: self.start_speed as f64,
                value: self.min_speed as f64,
            });
        }
        if self.gravity >= 0.0 {
            return Err(StriderError::Config(format!(
                "gravity must be negative, got {}",
                self.gravity
            )));
        }
        if self.jump_force <= 0.0 {
            return Err(StriderError::Config(format!(
                "jump_force must be positive, got {}",
                self.jump_force
            )));
        }
        if self.coyote_time < 0.0 {
            return Err(StriderError::Config(format!(
                "coyote_time must not be negative, got {}",
                self.coyote_time
            )));
        }
        if self.grounded_stick >= 0.0 {
            return Err(StriderError::Config(format!(
                "grounded_stick must be negative, got {}",
                self.grounded_stick
            )));
        }
        if self.slide_duration <= 0.0 {
            return Err(StriderError::Config(format!(
                "slide_duration must be positive, got {}",
                self.slide_duration
            )));
        }
        if self.crouch_height_scale <= 0.0 || self.crouch_height_scale > 1.0 {
            return Err(StriderError::ValueOutOfRange {
                field: "crouch_height_scale".into(),
                min: 0.0,
                max: 1.0,
                value: self.crouch_height_scale as f64,
            });
        }
        if self.collider_height <= 0.0 {
            return Err(StriderError::Config(format!(
                "collider_height must be positive, got {}",
                self.collider_height
            )));
        }
        Ok(())
    }

    /// Index of the lane whose center sits at lateral position zero.
    pub fn lane_center(&self) -> f32 {
        (self.lane_min + self.lane_max) as f32 * 0.5
    }

    /// World-space lateral position of a lane's center.
    pub fn lane_target_x(&self, lane: i32) -> f32 {
        (lane as f32 - self.lane_center()) * self.lane_width
    }
}
