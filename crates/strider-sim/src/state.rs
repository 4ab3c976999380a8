//! Movement state and collider extents

use crate::config::RunnerConfig;
use strider_core::Vec3;

/// Behavioral mode of the runner.
///
/// A closed set matched exhaustively; `Dead` is terminal and only
/// [`crate::RunnerController::reset_run`] leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Jumping,
    Crouched,
    Dead,
}

/// Collision extents of the runner's body: capsule height and the height
/// of its center. Shrinks while sliding and must always be restored to
/// the captured pre-slide values on recovery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderExtents {
    pub height: f32,
    pub center_y: f32,
}

impl ColliderExtents {
    /// Extents scaled by `factor` (height and center together, so the
    /// capsule stays planted on the ground).
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            height: self.height * factor,
            center_y: self.center_y * factor,
        }
    }
}

/// Everything about the runner that changes from tick to tick.
#[derive(Debug, Clone)]
pub struct MovementState {
    pub mode: RunState,
    /// Discrete lane index, always within the configured bounds
    pub lane: i32,
    /// Continuous lateral position, tweened toward the lane's center
    pub lateral_position: f32,
    pub vertical_velocity: f32,
    pub forward_speed: f32,
    /// Seconds left in which a jump is still honored after leaving ground
    pub coyote_timer: f32,
    /// Seconds left in the committed portion of a slide
    pub slide_timer: f32,
    /// False during the pre-race hold; gravity runs, motion does not
    pub has_started: bool,
    /// The crouch input is currently held down
    pub crouch_held: bool,
    /// A slide is active and the collider is shrunk
    pub sliding: bool,
    /// Grounding as reported by the movement executor last tick
    pub grounded: bool,
    /// World position mirrored back from the movement executor
    pub position: Vec3,
    /// Current collision extents
    pub extents: ColliderExtents,
    /// Extents captured at the most recent slide start, restored on recovery
    pub standing_extents: ColliderExtents,
}

impl MovementState {
    /// The state a fresh run attempt begins in: idle on the starting
    /// lane, standing, not yet moving.
    pub fn initial(config: &RunnerConfig) -> Self {
        let x = config.lane_target_x(config.starting_lane);
        let extents = ColliderExtents {
            height: config.collider_height,
            center_y: config.collider_center_y,
        };
        Self {
            mode: RunState::Idle,
            lane: config.starting_lane,
            lateral_position: x,
            vertical_velocity: 0.0,
            forward_speed: 0.0,
            coyote_timer: 0.0,
            slide_timer: 0.0,
            has_started: false,
            crouch_held: false,
            sliding: false,
            grounded: true,
            position: Vec3::new(x, 0.0, 0.0),
            extents,
            standing_extents: extents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_matches_config() {
        let config = RunnerConfig::default();
        let state = MovementState::initial(&config);

        assert_eq!(state.mode, RunState::Idle);
        assert_eq!(state.lane, 1);
        assert_eq!(state.lateral_position, 0.0);
        assert_eq!(state.forward_speed, 0.0);
        assert!(!state.has_started);
        assert_eq!(state.extents, state.standing_extents);
    }

    #[test]
    fn test_initial_spawns_on_noncenter_lane() {
        let config = RunnerConfig {
            starting_lane: 0,
            ..Default::default()
        };
        let state = MovementState::initial(&config);
        assert_eq!(state.lateral_position, -2.0);
        assert_eq!(state.position.x, -2.0);
    }

    #[test]
    fn test_extents_scaling() {
        let extents = ColliderExtents {
            height: 2.0,
            center_y: 1.0,
        };
        let crouched = extents.scaled(0.5);
        assert_eq!(crouched.height, 1.0);
        assert_eq!(crouched.center_y, 0.5);
    }
}
