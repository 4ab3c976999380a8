//! Speed ramp — raises forward speed over the course of a run
//!
//! The ramp owns no speed itself; each tick it takes the controller's
//! current speed and returns the value to push back through `set_speed`.

use serde::{Deserialize, Serialize};
use strider_core::{clamp01, inverse_lerp};

/// Smallest speed delta worth reporting to consumers.
const CHANGE_THRESHOLD: f32 = 0.01;

/// Easing applied to the continuous ramp's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampCurve {
    Linear,
    EaseInOut,
}

impl RampCurve {
    /// Evaluate at `t`, clamped to [0, 1].
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = clamp01(t);
        match self {
            RampCurve::Linear => t,
            RampCurve::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// How the ramp climbs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampMode {
    /// Every tick: `rate * dt * (1.2 + curve(progress))`, where progress
    /// is how far the current speed sits between start and max.
    Continuous { rate: f32, curve: RampCurve },
    /// A flat `amount` bump every `every` seconds.
    Interval { every: f32, amount: f32 },
}

/// Ramp tuning. `start_speed`/`max_speed` should match the runner's
/// config; the ramp never pushes past `max_speed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RampConfig {
    pub start_speed: f32,
    pub max_speed: f32,
    pub mode: RampMode,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            start_speed: 8.0,
            max_speed: 18.0,
            mode: RampMode::Continuous {
                rate: 0.8,
                curve: RampCurve::EaseInOut,
            },
        }
    }
}

/// Tick-stepped speed progression.
#[derive(Debug, Clone)]
pub struct SpeedRamp {
    config: RampConfig,
    game_time: f64,
    last_increase_time: f64,
}

impl SpeedRamp {
    pub fn new(config: RampConfig) -> Self {
        Self {
            config,
            game_time: 0.0,
            last_increase_time: 0.0,
        }
    }

    pub fn config(&self) -> &RampConfig {
        &self.config
    }

    /// Seconds of run time the ramp has seen.
    pub fn game_time(&self) -> f64 {
        self.game_time
    }

    /// Advance by `dt` and return the speed to push to the controller,
    /// capped at `max_speed`.
    pub fn update(&mut self, dt: f32, current_speed: f32) -> f32 {
        self.game_time += dt as f64;

        let next = match self.config.mode {
            RampMode::Continuous { rate, curve } => {
                let progress = inverse_lerp(
                    self.config.start_speed,
                    self.config.max_speed,
                    current_speed,
                );
                current_speed + rate * dt * (1.2 + curve.evaluate(progress))
            }
            RampMode::Interval { every, amount } => {
                if self.game_time - self.last_increase_time >= every as f64 {
                    self.last_increase_time = self.game_time;
                    current_speed + amount
                } else {
                    current_speed
                }
            }
        };

        next.min(self.config.max_speed)
    }

    /// True when the delta between two readings is worth reporting.
    pub fn changed(previous: f32, next: f32) -> bool {
        (next - previous).abs() > CHANGE_THRESHOLD
    }

    /// How far the given speed sits along the ramp, in [0, 1].
    pub fn progress01(&self, current_speed: f32) -> f32 {
        inverse_lerp(self.config.start_speed, self.config.max_speed, current_speed)
    }

    /// Start over for a fresh run.
    pub fn reset(&mut self) {
        self.game_time = 0.0;
        self.last_increase_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn continuous() -> SpeedRamp {
        SpeedRamp::new(RampConfig::default())
    }

    fn interval(every: f32, amount: f32) -> SpeedRamp {
        SpeedRamp::new(RampConfig {
            mode: RampMode::Interval { every, amount },
            ..Default::default()
        })
    }

    #[test]
    fn test_curve_endpoints() {
        for curve in [RampCurve::Linear, RampCurve::EaseInOut] {
            assert_eq!(curve.evaluate(0.0), 0.0);
            assert_eq!(curve.evaluate(1.0), 1.0);
            // out-of-range inputs clamp
            assert_eq!(curve.evaluate(-1.0), 0.0);
            assert_eq!(curve.evaluate(2.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert_eq!(RampCurve::EaseInOut.evaluate(0.5), 0.5);
        // slow start, fast middle
        assert!(RampCurve::EaseInOut.evaluate(0.1) < 0.1);
        assert!(RampCurve::EaseInOut.evaluate(0.9) > 0.9);
    }

    #[test]
    fn test_continuous_climbs_and_caps() {
        let mut ramp = continuous();
        let mut speed = 8.0_f32;

        let mut previous = speed;
        for _ in 0..20 {
            speed = ramp.update(0.1, speed);
            assert!(speed >= previous, "ramp went backwards");
            previous = speed;
        }
        assert!(speed > 8.0);

        // a long run saturates at the ceiling and stays there
        for _ in 0..2000 {
            speed = ramp.update(0.1, speed);
        }
        assert_eq!(speed, 18.0);
    }

    #[test]
    fn test_interval_steps_at_cadence() {
        let mut ramp = interval(8.0, 3.0);
        let mut speed = 8.0_f32;

        // 7.9s: no bump yet
        for _ in 0..79 {
            speed = ramp.update(0.1, speed);
        }
        assert_eq!(speed, 8.0);

        // crossing 8s: one bump
        speed = ramp.update(0.1, speed);
        assert_eq!(speed, 11.0);

        // the next bump needs another full interval
        for _ in 0..79 {
            speed = ramp.update(0.1, speed);
        }
        assert_eq!(speed, 11.0);
        speed = ramp.update(0.1, speed);
        assert_eq!(speed, 14.0);
    }

    #[test]
    fn test_interval_respects_cap() {
        let mut ramp = interval(1.0, 100.0);
        let mut speed = 8.0_f32;
        for _ in 0..30 {
            speed = ramp.update(0.1, speed);
        }
        assert_eq!(speed, 18.0);
    }

    #[test]
    fn test_change_threshold() {
        assert!(!SpeedRamp::changed(10.0, 10.005));
        assert!(SpeedRamp::changed(10.0, 10.5));
    }

    #[test]
    fn test_progress01() {
        let ramp = continuous();
        assert_eq!(ramp.progress01(8.0), 0.0);
        assert_eq!(ramp.progress01(13.0), 0.5);
        assert_eq!(ramp.progress01(18.0), 1.0);
        assert_eq!(ramp.progress01(99.0), 1.0);
    }

    #[test]
    fn test_reset() {
        let mut ramp = interval(8.0, 3.0);
        for _ in 0..85 {
            let _ = ramp.update(0.1, 8.0);
        }
        ramp.reset();
        assert_eq!(ramp.game_time(), 0.0);
        let speed = ramp.update(0.1, 8.0);
        assert_eq!(speed, 8.0, "reset ramp must wait a full interval again");
    }
}
