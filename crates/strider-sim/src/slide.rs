//! Crouch and slide timing with paired collider shrink/restore
//!
//! A slide is committed: it runs its full duration even if the crouch
//! input is released early. Holding crouch past the timer keeps the
//! runner crouched until release. Shrinking and restoring the collider
//! extents are always paired through the captured standing extents.

use crate::config::RunnerConfig;
use crate::state::{MovementState, RunState};
use strider_runtime::{EventBus, RunEvent};

/// Begin (or re-assert) a crouch. Starts a slide if one isn't active:
/// captures the current extents, shrinks the collider, arms the timer.
pub(crate) fn start_crouch_or_slide(
    config: &RunnerConfig,
    state: &mut MovementState,
    events: &mut EventBus,
) {
    if state.mode == RunState::Dead {
        return;
    }
    state.crouch_held = true;

    if !state.sliding {
        state.standing_extents = state.extents;
        state.extents = state.extents.scaled(config.crouch_height_scale);
        state.sliding = true;
        state.slide_timer = config.slide_duration;
        events.push(RunEvent::SlideStarted);
    }
    state.mode = RunState::Crouched;
}

/// The crouch input went up. The slide keeps running until its timer
/// expires; only a slide already past its duration recovers immediately.
pub(crate) fn release_crouch(state: &mut MovementState, events: &mut EventBus) {
    state.crouch_held = false;
    if state.sliding && state.slide_timer <= 0.0 {
        recover(state, events);
    }
}

/// Per-tick slide countdown. Auto-recovers once the timer has run out
/// and the input is no longer held.
pub(crate) fn update(state: &mut MovementState, dt: f32, events: &mut EventBus) {
    if !state.sliding {
        return;
    }
    state.slide_timer -= dt;
    if state.slide_timer <= 0.0 && !state.crouch_held {
        recover(state, events);
    }
}

/// End the slide: restore the captured extents exactly, return to
/// running if the body is on the ground.
fn recover(state: &mut MovementState, events: &mut EventBus) {
    state.extents = state.standing_extents;
    state.sliding = false;
    state.slide_timer = 0.0;
    if state.grounded {
        state.mode = RunState::Running;
    }
    events.push(RunEvent::SlideEnded);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (RunnerConfig, MovementState, EventBus) {
        let config = RunnerConfig::default();
        let mut state = MovementState::initial(&config);
        state.mode = RunState::Running;
        state.has_started = true;
        (config, state, EventBus::new())
    }

    #[test]
    fn test_slide_shrinks_collider_and_arms_timer() {
        let (config, mut state, mut events) = setup();
        let standing = state.extents;

        start_crouch_or_slide(&config, &mut state, &mut events);
        assert_eq!(state.mode, RunState::Crouched);
        assert!(state.sliding);
        assert_eq!(state.slide_timer, config.slide_duration);
        assert_eq!(state.extents.height, standing.height * 0.5);
        assert_eq!(state.extents.center_y, standing.center_y * 0.5);
        assert_eq!(state.standing_extents, standing);
    }

    #[test]
    fn test_reassert_while_sliding_does_not_restack() {
        let (config, mut state, mut events) = setup();
        start_crouch_or_slide(&config, &mut state, &mut events);
        let shrunk = state.extents;

        // held crouch re-fires the command; the shrink must not compound
        start_crouch_or_slide(&config, &mut state, &mut events);
        assert_eq!(state.extents, shrunk);
        assert_eq!(events.drain(), vec![RunEvent::SlideStarted]);
    }

    #[test]
    fn test_early_release_keeps_slide_committed() {
        let (config, mut state, mut events) = setup();
        start_crouch_or_slide(&config, &mut state, &mut events);

        // 0.2s in, input released
        for _ in 0..4 {
            update(&mut state, 0.05, &mut events);
        }
        release_crouch(&mut state, &mut events);
        assert!(state.sliding, "slide must survive an early release");
        assert_eq!(state.mode, RunState::Crouched);

        // the remaining 0.35s elapse, then recovery
        for _ in 0..6 {
            update(&mut state, 0.05, &mut events);
            assert!(state.sliding);
        }
        update(&mut state, 0.05, &mut events);
        assert!(!state.sliding);
        assert_eq!(state.mode, RunState::Running);
    }

    #[test]
    fn test_held_past_timer_stays_crouched_until_release() {
        let (config, mut state, mut events) = setup();
        start_crouch_or_slide(&config, &mut state, &mut events);

        // run the timer out with the input still held
        for _ in 0..20 {
            update(&mut state, 0.05, &mut events);
        }
        assert!(state.sliding);
        assert_eq!(state.mode, RunState::Crouched);

        release_crouch(&mut state, &mut events);
        assert!(!state.sliding);
        assert_eq!(state.mode, RunState::Running);
    }

    #[test]
    fn test_recovery_restores_extents_exactly() {
        let (config, mut state, mut events) = setup();
        let standing = state.extents;

        start_crouch_or_slide(&config, &mut state, &mut events);
        for _ in 0..20 {
            update(&mut state, 0.05, &mut events);
        }
        release_crouch(&mut state, &mut events);

        assert_eq!(state.extents, standing);
        let drained = events.drain();
        assert_eq!(drained, vec![RunEvent::SlideStarted, RunEvent::SlideEnded]);
    }

    #[test]
    fn test_airborne_recovery_defers_running_mode() {
        let (config, mut state, mut events) = setup();
        start_crouch_or_slide(&config, &mut state, &mut events);
        state.grounded = false;

        for _ in 0..12 {
            update(&mut state, 0.05, &mut events);
        }
        release_crouch(&mut state, &mut events);
        assert!(!state.sliding);
        // not grounded, so the mode change waits for landing
        assert_eq!(state.mode, RunState::Crouched);
    }

    #[test]
    fn test_dead_ignores_crouch() {
        let (config, mut state, mut events) = setup();
        state.mode = RunState::Dead;
        start_crouch_or_slide(&config, &mut state, &mut events);
        assert!(!state.sliding);
        assert_eq!(state.mode, RunState::Dead);
        assert!(events.is_empty());
    }
}
