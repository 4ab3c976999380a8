//! Frame clock with fixed-timestep accumulator

use std::time::Instant;

/// Accumulates elapsed wall time and doles it out as fixed simulation steps.
///
/// The clock can be fed measured time via [`FrameClock::tick`] or exact
/// elapsed seconds via [`FrameClock::advance`]; the latter keeps scripted
/// and test runs fully deterministic.
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time consumed by the most recent advance
    pub delta_time: f64,
    /// Fixed timestep interval (default: 1/60 second)
    pub fixed_timestep: f64,
    /// Longest frame the accumulator will accept, guarding against a
    /// spiral of death after a long stall
    pub max_frame_time: f64,
    accumulator: f64,
    last_instant: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            fixed_timestep: 1.0 / 60.0,
            max_frame_time: 0.25,
            accumulator: 0.0,
            last_instant: None,
        }
    }
}

impl FrameClock {
    /// A clock stepping at the default 60Hz.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock stepping at `hz` fixed updates per second.
    pub fn with_step_hz(hz: f64) -> Self {
        Self {
            fixed_timestep: 1.0 / hz,
            ..Self::default()
        }
    }

    /// Feed exact elapsed seconds into the accumulator.
    pub fn advance(&mut self, elapsed: f64) {
        self.delta_time = elapsed.min(self.max_frame_time);
        self.total_time += self.delta_time;
        self.accumulator += self.delta_time;
    }

    /// Measure wall time since the previous call and feed it in.
    /// The first call contributes zero time.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = match self.last_instant {
            Some(prev) => now.duration_since(prev).as_secs_f64(),
            None => 0.0,
        };
        self.last_instant = Some(now);
        self.advance(elapsed);
    }

    /// Consume whole fixed steps from the accumulator, returning how many
    /// the caller should simulate this frame.
    pub fn drain_fixed_steps(&mut self) -> u32 {
        let mut steps = 0;
        while self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            steps += 1;
        }
        steps
    }

    /// Fraction of a fixed step left in the accumulator, for render
    /// interpolation between simulation states.
    pub fn interpolation_alpha(&self) -> f64 {
        self.accumulator / self.fixed_timestep
    }
}
