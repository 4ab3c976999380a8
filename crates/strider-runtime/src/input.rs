//! Abstract input collection
//!
//! Devices live outside the simulation. Whatever reads them (a window event
//! loop, a replay file, a test) reports abstract button edges here, and the
//! collector turns those edges into the per-tick command set the controller
//! consumes.

use std::collections::HashSet;

/// The four abstract buttons a runner responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Jump,
    Crouch,
}

/// An edge-triggered command for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LaneLeft,
    LaneRight,
    Jump,
    CrouchStart,
    CrouchEnd,
}

/// The commands collected for a single tick, in arrival order.
///
/// Order matters: a crouch released and re-pressed within one tick must
/// reach the controller as `CrouchEnd` then `CrouchStart`.
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    commands: Vec<Command>,
}

impl InputFrame {
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Turns button press/release edges into per-tick [`InputFrame`]s.
///
/// Repeat presses of a held button are ignored, matching key-repeat
/// suppression; a crouch release is the only release that produces a
/// command.
#[derive(Debug, Default)]
pub struct InputCollector {
    held: HashSet<Button>,
    pending: InputFrame,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a button going down.
    pub fn press(&mut self, button: Button) {
        if !self.held.insert(button) {
            return; // already held, swallow the repeat
        }
        let command = match button {
            Button::Left => Command::LaneLeft,
            Button::Right => Command::LaneRight,
            Button::Jump => Command::Jump,
            Button::Crouch => Command::CrouchStart,
        };
        self.pending.push(command);
    }

    /// Report a button going up.
    pub fn release(&mut self, button: Button) {
        if !self.held.remove(&button) {
            return;
        }
        if button == Button::Crouch {
            self.pending.push(Command::CrouchEnd);
        }
    }

    /// Is a button currently held?
    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    /// Take everything collected since the last call, leaving the
    /// collector ready for the next tick.
    pub fn take_frame(&mut self) -> InputFrame {
        std::mem::take(&mut self.pending)
    }
}
