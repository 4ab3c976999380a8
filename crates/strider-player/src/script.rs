//! Scripted input for headless runs
//!
//! A script is a TOML list of timed actions standing in for a human on a
//! keyboard. Taps (lanes, jump) press and release in the same tick;
//! crouch press/release are separate actions so scripts can hold a slide.

use serde::{Deserialize, Serialize};
use std::path::Path;
use strider_core::{Result, StriderError};
use strider_runtime::{Button, InputCollector};

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAction {
    LaneLeft,
    LaneRight,
    Jump,
    CrouchPress,
    CrouchRelease,
    /// Stand-in for the hazard detector a real scene would have
    Die,
}

/// An action and the run time it fires at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    /// Seconds from session start (countdown included)
    pub at: f64,
    pub action: ScriptAction,
}

/// A full input script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl InputScript {
    pub fn parse(content: &str) -> Result<Self> {
        let script: Self = toml::from_str(content)?;
        for event in &script.events {
            if event.at < 0.0 {
                return Err(StriderError::Script(format!(
                    "event time must not be negative, got {}",
                    event.at
                )));
            }
        }
        Ok(script)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The canned run used when no script is supplied: a few lane
    /// switches, a jump, and a held slide.
    pub fn demo() -> Self {
        use ScriptAction::*;
        let events = [
            (4.0, LaneLeft),
            (5.5, Jump),
            (7.0, LaneRight),
            (7.4, LaneRight),
            (9.0, CrouchPress),
            (9.2, CrouchRelease),
            (11.0, Jump),
            (12.5, LaneLeft),
            (14.0, CrouchPress),
            (15.5, CrouchRelease),
        ];
        Self {
            events: events
                .into_iter()
                .map(|(at, action)| ScriptEvent { at, action })
                .collect(),
        }
    }
}

/// Replays a script into an [`InputCollector`] as session time advances.
pub struct ScriptCursor {
    events: Vec<ScriptEvent>,
    next: usize,
}

impl ScriptCursor {
    pub fn new(mut script: InputScript) -> Self {
        script
            .events
            .sort_by(|a, b| a.at.total_cmp(&b.at));
        Self {
            events: script.events,
            next: 0,
        }
    }

    /// Feed every event due at or before `t` into the collector.
    /// Returns true if a `die` action fired.
    pub fn pump(&mut self, t: f64, input: &mut InputCollector) -> bool {
        let mut die = false;
        while let Some(event) = self.events.get(self.next) {
            if event.at > t {
                break;
            }
            match event.action {
                ScriptAction::LaneLeft => {
                    input.press(Button::Left);
                    input.release(Button::Left);
                }
                ScriptAction::LaneRight => {
                    input.press(Button::Right);
                    input.release(Button::Right);
                }
                ScriptAction::Jump => {
                    input.press(Button::Jump);
                    input.release(Button::Jump);
                }
                ScriptAction::CrouchPress => input.press(Button::Crouch),
                ScriptAction::CrouchRelease => input.release(Button::Crouch),
                ScriptAction::Die => die = true,
            }
            self.next += 1;
        }
        die
    }

    /// Events not yet replayed.
    pub fn remaining(&self) -> usize {
        self.events.len() - self.next
    }
}
