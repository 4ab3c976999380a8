//! Strider Player - Headless session driver
//!
//! Everything a windowed build would do around the simulation, minus the
//! window: scripted input, pre-race countdown, per-tick orchestration of
//! controller/executor/ramp/score, camera follow math, and HUD text.

pub mod camera;
pub mod hud;
pub mod script;
pub mod session;
