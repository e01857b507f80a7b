//! Frame loop driver
//!
//! Each scheduled frame: poll input, tick, render, then ask the scheduler
//! for another frame. A frozen session halts ticking and rendering; the
//! driver only watches input for a restart until one arrives.

use crate::renderer::{Renderer, draw_session};
use crate::sim::{FrameOutcome, GameEvent, Session, tick};

use super::input::InputSource;

/// Host-provided "call me before the next display refresh"
pub trait FrameScheduler {
    /// Wait for the next frame; false once the host is shutting down
    fn next_frame(&mut self) -> bool;
}

/// Scheduler that grants a fixed number of frames (headless runs, tests)
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Whether the driver is ticking or waiting for a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Halted,
}

/// Counters accumulated across a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub frames_ticked: u64,
    pub frames_rendered: u64,
    pub games_over: u32,
    pub restarts: u32,
    pub obstacles_spawned: u64,
    /// Longest stretch of running frames between restarts, including the
    /// run still in progress
    pub best_run: u64,
    current_run: u64,
}

/// Owns a session and wires it to input and rendering
pub struct Driver<I, R> {
    pub session: Session,
    pub input: I,
    pub renderer: R,
    state: LoopState,
    stats: DriverStats,
}

impl<I: InputSource, R: Renderer> Driver<I, R> {
    pub fn new(session: Session, input: I, renderer: R) -> Self {
        let state = if session.is_frozen() {
            LoopState::Halted
        } else {
            LoopState::Running
        };
        Self {
            session,
            input,
            renderer,
            state,
            stats: DriverStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> &DriverStats {
        &self.stats
    }

    /// Run one running frame: input, update, render
    pub fn step(&mut self) -> LoopState {
        let input = self.input.poll(&self.session);
        let outcome = tick(&mut self.session, &input);
        if outcome != FrameOutcome::Frozen {
            draw_session(&self.session, &mut self.renderer);
            self.stats.frames_rendered += 1;
        }
        self.record(outcome);
        self.state
    }

    /// While halted: restart if the input asks for it
    pub fn poll_restart(&mut self) -> LoopState {
        let input = self.input.poll(&self.session);
        if input.restart {
            let outcome = tick(&mut self.session, &input);
            self.record(outcome);
        }
        self.state
    }

    /// Drive frames until the scheduler stops granting them
    pub fn run(&mut self, scheduler: &mut impl FrameScheduler) -> &DriverStats {
        while scheduler.next_frame() {
            match self.state {
                LoopState::Running => self.step(),
                LoopState::Halted => self.poll_restart(),
            };
        }
        log::info!(
            "Loop stopped after {} frames ({} games over, best run {} frames)",
            self.stats.frames_ticked,
            self.stats.games_over,
            self.stats.best_run
        );
        &self.stats
    }

    fn record(&mut self, outcome: FrameOutcome) {
        match outcome {
            FrameOutcome::Continue | FrameOutcome::GameOver => {
                self.stats.frames_ticked += 1;
                self.stats.current_run += 1;
                self.stats.best_run = self.stats.best_run.max(self.stats.current_run);
            }
            FrameOutcome::Restarted => {
                self.stats.current_run = 0;
            }
            FrameOutcome::Frozen => {}
        }
        self.state = if outcome.keeps_running() {
            LoopState::Running
        } else {
            LoopState::Halted
        };

        for event in self.session.drain_events() {
            log::trace!("{:?}", event);
            match event {
                GameEvent::ObstacleSpawned { .. } => self.stats.obstacles_spawned += 1,
                GameEvent::GameOver { .. } => self.stats.games_over += 1,
                GameEvent::Restarted => self.stats.restarts += 1,
                GameEvent::SpeedIncreased { .. } | GameEvent::Landed => {}
            }
        }
    }
}
