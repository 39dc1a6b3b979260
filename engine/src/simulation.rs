//! Run-state bookkeeping around a `Grid`.
//!
//! The grid itself only knows how to compute the next generation. `Simulation` owns one grid
//! and tracks whether a timer should keep advancing it, how many iterations have run, and how
//! fast timed steps happen. Front-ends drive it from their own event loop.

use std::time::Instant;

use crate::grid::{Brush, Grid};
use crate::pattern::StructurePattern;
use crate::speed::Speed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub columns: usize,
    pub speed: Speed,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            rows: 36,
            columns: 64,
            speed: Speed::default(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    /// The last step produced no change.
    Halted,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    state: RunState,
    iterations: u64,
    speed: Speed,
    last_step: Option<Instant>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Simulation {
            grid: Grid::new(config.rows, config.columns),
            state: RunState::Idle,
            iterations: 0,
            speed: config.speed,
            last_step: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Every call to `step` counts, including the one that detects a halt.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn start(&mut self) {
        if self.state != RunState::Running {
            log::debug!("simulation started at iteration {}", self.iterations);
        }
        self.state = RunState::Running;
        self.last_step = None;
    }

    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            log::debug!("simulation stopped at iteration {}", self.iterations);
            self.state = RunState::Idle;
        }
    }

    /// Returns whether the simulation is running afterwards.
    pub fn toggle_running(&mut self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Advance one generation. Returns `true` if nothing changed.
    pub fn step(&mut self) -> bool {
        let halted = self.grid.advance();
        self.iterations += 1;
        if halted && self.state == RunState::Running {
            log::info!("grid halted after {} iterations", self.iterations);
            self.state = RunState::Halted;
        }
        halted
    }

    /// Step up to `iterations` times, stopping early at a fixed point. Returns the steps taken.
    pub fn run(&mut self, iterations: usize) -> usize {
        for taken in 1..=iterations {
            if self.step() {
                return taken;
            }
        }
        iterations
    }

    /// Timer entry point. Steps once if running and the speed delay has elapsed since the
    /// previous timed step, returning the halt flag of that step.
    pub fn tick(&mut self, now: Instant) -> Option<bool> {
        if !self.is_running() {
            return None;
        }
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.speed.delay() {
                return None;
            }
        }
        self.last_step = Some(now);
        Some(self.step())
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.iterations = 0;
        self.state = RunState::Idle;
        self.last_step = None;
        log::debug!("grid cleared");
    }

    pub fn randomize(&mut self) {
        self.grid.randomize();
        if self.state == RunState::Halted {
            self.state = RunState::Running;
        }
        log::debug!("grid randomized, {} cells alive", self.grid.alive_count());
    }

    pub fn place(&mut self, pattern: &StructurePattern, row: isize, column: isize, brush: Brush) {
        self.grid.place_structure(pattern, row, column, brush);
        self.edited();
    }

    pub fn paint(&mut self, pattern: &StructurePattern, row: isize, column: isize) {
        self.place(pattern, row, column, Brush::Paint);
    }

    pub fn erase(&mut self, pattern: &StructurePattern, row: isize, column: isize) {
        self.place(pattern, row, column, Brush::Erase);
    }

    /// Panics if the coordinate is out of range.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.grid.set(row, col, alive);
        self.edited();
    }

    /// Panics if the coordinate is out of range.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let alive = self.grid.toggle(row, col);
        self.edited();
        alive
    }

    fn edited(&mut self) {
        if self.state == RunState::Halted {
            self.state = RunState::Idle;
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new(SimulationConfig::default())
    }
}
