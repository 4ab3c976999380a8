//! Discrete lanes and the lateral tween

use crate::config::RunnerConfig;
use crate::state::{MovementState, RunState};
use strider_core::move_toward;
use strider_runtime::{EventBus, RunEvent};

/// Shift the runner one lane in `direction` (-1 left, +1 right), clamped
/// strictly to the configured bounds. Ignored once dead.
pub(crate) fn try_lane(
    config: &RunnerConfig,
    state: &mut MovementState,
    events: &mut EventBus,
    direction: i32,
) {
    if state.mode == RunState::Dead {
        return;
    }
    let target = (state.lane + direction).clamp(config.lane_min, config.lane_max);
    if target != state.lane {
        events.push(RunEvent::LaneChanged {
            from: state.lane,
            to: target,
        });
        state.lane = target;
    }
}

/// Advance the lateral position toward the current lane's center by at
/// most `lane_change_speed * dt`, returning the distance actually moved.
/// Linear approach; never overshoots.
pub(crate) fn step_lateral(config: &RunnerConfig, state: &mut MovementState, dt: f32) -> f32 {
    let target = config.lane_target_x(state.lane);
    let next = move_toward(state.lateral_position, target, config.lane_change_speed * dt);
    let delta = next - state.lateral_position;
    state.lateral_position = next;
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (RunnerConfig, MovementState, EventBus) {
        let config = RunnerConfig::default();
        let state = MovementState::initial(&config);
        (config, state, EventBus::new())
    }

    #[test]
    fn test_lane_clamps_at_bounds() {
        let (config, mut state, mut events) = setup();
        state.mode = RunState::Running;

        for _ in 0..10 {
            try_lane(&config, &mut state, &mut events, -1);
        }
        assert_eq!(state.lane, config.lane_min);

        for _ in 0..25 {
            try_lane(&config, &mut state, &mut events, 1);
        }
        assert_eq!(state.lane, config.lane_max);
    }

    #[test]
    fn test_lane_stays_in_bounds_for_any_sequence() {
        let (config, mut state, mut events) = setup();
        state.mode = RunState::Running;

        // a deliberately lopsided zig-zag
        for (i, dir) in [-1, -1, 1, -1, 1, 1, 1, 1, -1, 1, 1, -1, -1, -1, -1]
            .iter()
            .enumerate()
        {
            try_lane(&config, &mut state, &mut events, *dir);
            assert!(
                state.lane >= config.lane_min && state.lane <= config.lane_max,
                "lane escaped bounds at step {i}"
            );
        }
    }

    #[test]
    fn test_clamped_push_emits_no_event() {
        let (config, mut state, mut events) = setup();
        state.mode = RunState::Running;
        state.lane = config.lane_max;

        try_lane(&config, &mut state, &mut events, 1);
        assert!(events.is_empty());

        try_lane(&config, &mut state, &mut events, -1);
        assert_eq!(
            events.drain(),
            vec![RunEvent::LaneChanged { from: 2, to: 1 }]
        );
    }

    #[test]
    fn test_dead_ignores_lane_commands() {
        let (config, mut state, mut events) = setup();
        state.mode = RunState::Dead;
        try_lane(&config, &mut state, &mut events, 1);
        assert_eq!(state.lane, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_tween_approaches_without_overshoot() {
        let (config, mut state, mut events) = setup();
        state.mode = RunState::Running;
        try_lane(&config, &mut state, &mut events, 1);
        let target = config.lane_target_x(state.lane);

        let mut previous = state.lateral_position;
        for _ in 0..60 {
            step_lateral(&config, &mut state, 1.0 / 60.0);
            assert!(state.lateral_position >= previous, "tween reversed");
            assert!(state.lateral_position <= target, "tween overshot");
            previous = state.lateral_position;
        }
        assert_eq!(state.lateral_position, target);
    }

    #[test]
    fn test_tween_handles_large_dt_exactly() {
        let (config, mut state, mut events) = setup();
        state.mode = RunState::Running;
        try_lane(&config, &mut state, &mut events, -1);

        // one huge step lands exactly on target, not past it
        let delta = step_lateral(&config, &mut state, 10.0);
        assert_eq!(state.lateral_position, config.lane_target_x(0));
        assert_eq!(delta, -2.0);
    }
}
