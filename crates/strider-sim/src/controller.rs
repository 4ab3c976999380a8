//! The per-tick orchestrator

use crate::config::RunnerConfig;
use crate::executor::{Displacement, MoveOutcome};
use crate::state::{MovementState, RunState};
use crate::{lane, slide, vertical};
use strider_core::{clamp01, Result};
use strider_runtime::{Command, EventBus, InputFrame, RunEvent};

/// Composes the lane tween, vertical integrator, and slide timer into one
/// simulated tick, and owns the command surface external collaborators
/// call between ticks.
///
/// Tick order is load-bearing: the grounded report feeds the timers, then
/// commands apply (a crouch can block a jump arriving in the same tick),
/// then vertical integration, then the lateral tween, then the forward
/// clamp. The resulting [`Displacement`] goes to the movement executor,
/// whose outcome comes back through [`RunnerController::observe_move`]
/// before the next tick.
pub struct RunnerController {
    config: RunnerConfig,
    state: MovementState,
    events: EventBus,
}

impl RunnerController {
    /// Build a controller from a validated config. Rejects configs that
    /// would produce degenerate clamps.
    pub fn new(config: RunnerConfig) -> Result<Self> {
        config.validate()?;
        let state = MovementState::initial(&config);
        Ok(Self {
            config,
            state,
            events: EventBus::new(),
        })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    /// Take the events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<RunEvent> {
        self.events.drain()
    }

    /// Advance one simulated tick and return the intended displacement
    /// for the movement executor. Dead runners produce no motion.
    pub fn tick(&mut self, dt: f32, input: &InputFrame) -> Displacement {
        if self.state.mode == RunState::Dead {
            return Displacement::ZERO;
        }

        vertical::update_coyote(&self.config, &mut self.state, dt);
        slide::update(&mut self.state, dt, &mut self.events);

        if !self.state.has_started {
            // pre-race hold: gravity keeps the body settled, everything
            // else waits for begin_run
            vertical::integrate(&self.config, &mut self.state, dt);
            return Displacement {
                lateral: 0.0,
                vertical: self.state.vertical_velocity * dt,
                forward: 0.0,
            };
        }

        for &command in input.commands() {
            match command {
                Command::LaneLeft => {
                    lane::try_lane(&self.config, &mut self.state, &mut self.events, -1)
                }
                Command::LaneRight => {
                    lane::try_lane(&self.config, &mut self.state, &mut self.events, 1)
                }
                Command::Jump => vertical::try_jump(&self.config, &mut self.state, &mut self.events),
                Command::CrouchStart => {
                    slide::start_crouch_or_slide(&self.config, &mut self.state, &mut self.events)
                }
                Command::CrouchEnd => slide::release_crouch(&mut self.state, &mut self.events),
            }
        }

        vertical::integrate(&self.config, &mut self.state, dt);
        let lateral = lane::step_lateral(&self.config, &mut self.state, dt);
        self.state.forward_speed = self
            .state
            .forward_speed
            .clamp(self.config.min_speed, self.config.max_speed);

        Displacement {
            lateral,
            vertical: self.state.vertical_velocity * dt,
            forward: self.state.forward_speed * dt,
        }
    }

    /// Feed back what the executor actually did: final position and
    /// grounding for the next tick. Landing while not crouched puts the
    /// runner back in `Running`.
    pub fn observe_move(&mut self, outcome: &MoveOutcome) {
        if self.state.mode == RunState::Dead {
            return;
        }
        self.state.position = outcome.position;
        self.state.lateral_position = outcome.position.x;
        self.state.grounded = outcome.grounded;

        if self.state.has_started
            && outcome.grounded
            && self.state.mode != RunState::Crouched
        {
            self.state.mode = RunState::Running;
        }
    }

    /// End the pre-race hold. Idempotent; refused once dead.
    pub fn begin_run(&mut self) {
        if self.state.mode == RunState::Dead || self.state.has_started {
            return;
        }
        self.state.has_started = true;
        self.state.mode = RunState::Running;
        self.state.forward_speed = self.state.forward_speed.max(self.config.start_speed);
        self.events.push(RunEvent::RunStarted);
    }

    /// Restore the initial state for a fresh attempt: idle on the
    /// starting lane, standing extents, all timers cleared.
    pub fn reset_run(&mut self) {
        self.state = MovementState::initial(&self.config);
    }

    /// External speed override (speed ramp, boosts). Clamped to
    /// `[0, max_speed]`; refused once dead.
    pub fn set_speed(&mut self, speed: f32) {
        if self.state.mode == RunState::Dead {
            return;
        }
        self.state.forward_speed = speed.clamp(0.0, self.config.max_speed);
    }

    /// Terminal. Only `reset_run` follows.
    pub fn die(&mut self) {
        if self.state.mode == RunState::Dead {
            return;
        }
        self.state.mode = RunState::Dead;
        self.state.forward_speed = 0.0;
        self.events.push(RunEvent::Died);
    }

    /// Forward speed normalized to `[0, 1]` against the configured
    /// ceiling, for presentation consumers (camera FOV and the like).
    pub fn speed01(&self) -> f32 {
        clamp01(self.state.forward_speed / self.config.max_speed.max(f32::EPSILON))
    }
}
