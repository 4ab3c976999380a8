//! Gravity, ground-stick, jumps, and the coyote-time window

use crate::config::RunnerConfig;
use crate::state::{MovementState, RunState};
use strider_runtime::{EventBus, RunEvent};

/// Refresh or decay the coyote window from the executor's grounded report.
/// Runs before commands each tick, so a jump pressed on the tick the
/// window lapses is refused.
pub(crate) fn update_coyote(config: &RunnerConfig, state: &mut MovementState, dt: f32) {
    if state.grounded {
        state.coyote_timer = config.coyote_time;
    } else {
        state.coyote_timer = (state.coyote_timer - dt).max(0.0);
    }
}

/// Integrate vertical velocity: grounded bodies get pressed onto the
/// surface instead of accumulating free-fall; airborne bodies fall.
pub(crate) fn integrate(config: &RunnerConfig, state: &mut MovementState, dt: f32) {
    if state.grounded && state.vertical_velocity < 0.0 {
        state.vertical_velocity = config.grounded_stick;
    } else {
        state.vertical_velocity += config.gravity * dt;
    }
}

/// Apply a jump impulse if the grace window is open. No jumping while
/// crouched, and nothing happens once dead.
pub(crate) fn try_jump(config: &RunnerConfig, state: &mut MovementState, events: &mut EventBus) {
    match state.mode {
        RunState::Dead | RunState::Crouched => return,
        RunState::Idle | RunState::Running | RunState::Jumping => {}
    }
    if state.coyote_timer > 0.0 {
        state.vertical_velocity = config.jump_force;
        state.mode = RunState::Jumping;
        state.coyote_timer = 0.0;
        events.push(RunEvent::Jumped);
    }
}
