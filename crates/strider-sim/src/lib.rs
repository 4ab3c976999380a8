//! Strider Sim - The runner movement controller
//!
//! A deterministic, frame-stepped kinematic state machine: discrete lanes
//! with a linear lateral tween, gravity integration with a coyote-time
//! grace window, committed slides with paired collider shrink/restore,
//! and a terminal death state.
//!
//! The controller never touches the world directly. Each tick it emits an
//! intended [`Displacement`]; a [`MovementExecutor`] resolves that against
//! whatever owns collision and reports position and grounding back through
//! [`RunnerController::observe_move`].

mod config;
mod controller;
mod executor;
mod lane;
mod slide;
mod state;
mod vertical;

pub use config::RunnerConfig;
pub use controller::RunnerController;
pub use executor::{Displacement, FlatGroundExecutor, MoveOutcome, MovementExecutor};
pub use state::{ColliderExtents, MovementState, RunState};
