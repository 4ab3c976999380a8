//! The movement executor seam
//!
//! The controller computes what it wants to happen; whatever owns world
//! collision applies it and reports back where the body actually ended up
//! and whether it is standing on something. The simulation core never
//! holds a handle to the world.

use strider_core::Vec3;

/// One tick's intended motion, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Displacement {
    /// Along the lane axis (+x is right)
    pub lateral: f32,
    /// Up/down
    pub vertical: f32,
    /// Along the run direction (+z)
    pub forward: f32,
}

impl Displacement {
    pub const ZERO: Self = Self {
        lateral: 0.0,
        vertical: 0.0,
        forward: 0.0,
    };
}

/// What actually happened once a displacement was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    pub position: Vec3,
    pub grounded: bool,
}

/// Applies intended displacement against the world.
pub trait MovementExecutor {
    fn step(&mut self, position: Vec3, intent: Displacement) -> MoveOutcome;
}

/// Executor over an infinite flat ground plane with no obstacles.
/// Enough for tests and the headless player.
#[derive(Debug, Clone)]
pub struct FlatGroundExecutor {
    pub ground_y: f32,
}

impl Default for FlatGroundExecutor {
    fn default() -> Self {
        Self { ground_y: 0.0 }
    }
}

impl MovementExecutor for FlatGroundExecutor {
    fn step(&mut self, position: Vec3, intent: Displacement) -> MoveOutcome {
        let mut next = Vec3::new(
            position.x + intent.lateral,
            position.y + intent.vertical,
            position.z + intent.forward,
        );
        let grounded = next.y <= self.ground_y;
        if grounded {
            next.y = self.ground_y;
        }
        MoveOutcome {
            position: next,
            grounded,
        }
    }
}
