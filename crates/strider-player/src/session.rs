//! Headless run session
//!
//! One object owns everything a frame would touch and steps it in the
//! order a windowed build would: scripted input, countdown or controller
//! tick, executor, speed ramp, score, camera. Simulation events become
//! timestamped timeline lines instead of sounds and particles.

use crate::camera::{CameraConfig, CameraRig};
use crate::hud;
use crate::script::{InputScript, ScriptCursor};
use strider_core::Result;
use strider_runtime::{Countdown, FrameClock, InputCollector, InputFrame, RunEvent};
use strider_sim::{FlatGroundExecutor, MovementExecutor, RunState, RunnerConfig, RunnerController};
use strider_track::{RampConfig, RoadConfig, RoadRecycler, RunScore, SpeedRamp};

/// Whole-session settings, distinct from runner tuning.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Seconds to simulate, countdown included
    pub duration: f64,
    /// Fixed simulation rate
    pub tick_hz: f64,
    /// Pre-race hold length
    pub countdown_seconds: f64,
    /// Cadence of HUD status lines
    pub hud_interval: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration: 30.0,
            tick_hz: 60.0,
            countdown_seconds: 3.0,
            hud_interval: 1.0,
        }
    }
}

/// Summary of a finished session.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub simulated_seconds: f64,
    pub run_time: f64,
    pub distance: f32,
    pub score: i64,
    pub top_speed: f32,
    pub died: bool,
}

/// The full headless stack for one run.
pub struct Session {
    controller: RunnerController,
    executor: FlatGroundExecutor,
    ramp: SpeedRamp,
    road: RoadRecycler,
    score: RunScore,
    camera: CameraRig,
    input: InputCollector,
    cursor: ScriptCursor,
    countdown: Countdown,
    clock: FrameClock,
    config: SessionConfig,
    sim_time: f64,
    next_hud_time: f64,
    last_reported_speed: f32,
    top_speed: f32,
    timeline: Vec<String>,
}

impl Session {
    pub fn new(
        runner: RunnerConfig,
        config: SessionConfig,
        script: InputScript,
    ) -> Result<Self> {
        let controller = RunnerController::new(runner)?;
        let start = controller.state().position;
        let runner_config = controller.config().clone();

        let ramp = SpeedRamp::new(RampConfig {
            start_speed: runner_config.start_speed,
            max_speed: runner_config.max_speed,
            ..Default::default()
        });

        let countdown = Countdown::new(config.countdown_seconds);
        let clock = FrameClock::with_step_hz(config.tick_hz);
        let hud_interval = config.hud_interval;

        let mut session = Self {
            controller,
            executor: FlatGroundExecutor::default(),
            ramp,
            road: RoadRecycler::new(RoadConfig::default(), start.z),
            score: RunScore::new(start),
            camera: CameraRig::new(CameraConfig::default(), start),
            input: InputCollector::new(),
            cursor: ScriptCursor::new(script),
            countdown,
            clock,
            config,
            sim_time: 0.0,
            next_hud_time: hud_interval,
            last_reported_speed: 0.0,
            top_speed: 0.0,
            timeline: Vec::new(),
        };
        if !session.countdown.is_expired() {
            let line = format!("countdown: {}", session.countdown.seconds_left());
            session.note(line);
        }
        Ok(session)
    }

    /// Simulate the configured duration and return the summary.
    pub fn run(&mut self) -> RunReport {
        let frame_time = self.clock.fixed_timestep;
        let total_steps = (self.config.duration * self.config.tick_hz).round() as u64;

        for _ in 0..total_steps {
            self.clock.advance(frame_time);
            for _ in 0..self.clock.drain_fixed_steps() {
                let dt = self.clock.fixed_timestep as f32;
                self.step(dt);
            }
        }
        self.report()
    }

    /// Everything that happens in one simulated tick.
    fn step(&mut self, dt: f32) {
        if self.cursor.pump(self.sim_time, &mut self.input) {
            self.controller.die();
        }
        let mut frame = self.input.take_frame();

        if !self.countdown.is_expired() {
            let before = self.countdown.seconds_left();
            if self.countdown.tick(dt as f64) {
                self.controller.begin_run();
            } else if self.countdown.seconds_left() != before {
                let line = format!("countdown: {}", self.countdown.seconds_left());
                self.note(line);
            }
            // inputs don't land during the hold
            frame = InputFrame::default();
        }

        let intent = self.controller.tick(dt, &frame);
        let outcome = self.executor.step(self.controller.state().position, intent);
        self.controller.observe_move(&outcome);

        // the ramp pushes speed while the run is live
        let live = self.controller.state().has_started
            && self.controller.state().mode != RunState::Dead;
        if live {
            let current = self.controller.state().forward_speed;
            let next = self.ramp.update(dt, current);
            if SpeedRamp::changed(current, next) {
                self.controller.set_speed(next);
            }

            let speed = self.controller.state().forward_speed;
            if (speed - self.last_reported_speed).abs() >= 1.0 {
                self.last_reported_speed = speed;
                let line = describe_event(&RunEvent::SpeedChanged { speed });
                self.note(line);
            }

            let position = self.controller.state().position;
            self.road.update(position.z);
            self.score.update(
                dt as f64,
                &position,
                speed,
                self.controller.config().start_speed,
            );
            self.top_speed = self.top_speed.max(speed);
        }

        let position = self.controller.state().position;
        let speed01 = self.controller.speed01();
        self.camera.update(dt, position, speed01);

        for event in self.controller.drain_events() {
            if event == RunEvent::Died {
                self.camera.game_over = true;
            }
            if let RunEvent::RunStarted = event {
                self.last_reported_speed = self.controller.state().forward_speed;
            }
            let line = describe_event(&event);
            self.note(line);
        }

        self.sim_time += dt as f64;

        if self.sim_time + 1e-9 >= self.next_hud_time {
            self.note_hud();
            self.next_hud_time += self.config.hud_interval;
        }
    }

    fn note(&mut self, message: String) {
        self.timeline
            .push(format!("[{}] {}", hud::format_timer(self.sim_time), message));
    }

    fn note_hud(&mut self) {
        let state = self.controller.state();
        let line = format!(
            "hud: {} | {} | speed {:.1} | lane {} | {:?}",
            hud::format_timer(self.score.game_time()),
            hud::format_distance(self.score.distance()),
            state.forward_speed,
            state.lane,
            state.mode,
        );
        self.note(line);
    }

    /// Timestamped lines produced so far.
    pub fn timeline(&self) -> &[String] {
        &self.timeline
    }

    pub fn report(&self) -> RunReport {
        RunReport {
            simulated_seconds: self.sim_time,
            run_time: self.score.game_time(),
            distance: self.score.distance(),
            score: self.score.score(),
            top_speed: self.top_speed,
            died: self.controller.state().mode == RunState::Dead,
        }
    }
}

fn describe_event(event: &RunEvent) -> String {
    match event {
        RunEvent::RunStarted => "run started".into(),
        RunEvent::LaneChanged { from, to } => format!("lane {from} -> {to}"),
        RunEvent::Jumped => "jump".into(),
        RunEvent::SlideStarted => "slide".into(),
        RunEvent::SlideEnded => "slide recovered".into(),
        RunEvent::SpeedChanged { speed } => format!("speed {speed:.1}"),
        RunEvent::Died => "died".into(),
    }
}
