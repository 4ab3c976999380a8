//! Strider Track - Track-side collaborators for the runner
//!
//! Everything here observes or feeds the movement controller from the
//! outside:
//! - `SpeedRamp` — pushes forward speed up over the course of a run
//! - `RoadRecycler` — keeps a fixed window of road segments ahead of the
//!   player by moving passed segments forward
//! - `RunScore` — elapsed time, distance covered, and the score readout

mod ramp;
mod road;
mod score;

pub use ramp::{RampConfig, RampCurve, RampMode, SpeedRamp};
pub use road::{RoadConfig, RoadRecycler, RoadSegment};
pub use score::RunScore;
