//! Strider Runtime - Frame loop infrastructure
//!
//! Provides the building blocks that drive the simulation:
//! - `FrameClock` — fixed-timestep accumulator for deterministic ticking
//! - `Button` / `Command` / `InputCollector` — abstract input edges collected
//!   into per-tick command frames (no device knowledge)
//! - `RunEvent` / `EventBus` — typed event queue drained by the session
//! - `Countdown` — tick-driven pre-race hold

mod clock;
mod countdown;
mod event;
mod input;

pub use clock::FrameClock;
pub use countdown::Countdown;
pub use event::{EventBus, RunEvent};
pub use input::{Button, Command, InputCollector, InputFrame};
