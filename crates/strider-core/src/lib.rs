//! Strider Core - Foundational types for the runner simulation
//!
//! This crate provides the types every other Strider crate depends on:
//! - `StriderError` / `Result` - error enum and alias
//! - `Vec3` - minimal spatial type for positions and offsets
//! - Scalar math helpers (`clamp01`, `lerp`, `move_toward`, ...)

mod error;
mod math;
mod types;

pub use error::{Result, StriderError};
pub use math::{clamp01, inverse_lerp, lerp, move_toward, smooth_factor};
pub use types::Vec3;
