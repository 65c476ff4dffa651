use std::time::Duration;

use pathviz_core::Point;
use pathviz_search::RunnerConfig;

/// Everything needed to start an interactive session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub cols: i32,
    pub rows: i32,
    pub start: Point,
    pub end: Point,
    /// Terminal columns and rows covered by one grid cell.
    pub cell_size: Point,
    /// Wall probability used by the scatter command.
    pub wall_density: f64,
    /// Fixed RNG seed for reproducible wall layouts; random when `None`.
    pub seed: Option<u64>,
    pub runner: RunnerConfig,
    /// How long an idle session waits for input per poll. Runs never wait:
    /// their cadence comes from `runner` alone.
    pub idle_wait: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cols: 20,
            rows: 20,
            start: Point::new(0, 0),
            end: Point::new(19, 19),
            cell_size: Point::new(2, 1),
            wall_density: 0.3,
            seed: None,
            runner: RunnerConfig::default(),
            idle_wait: Duration::from_millis(16),
        }
    }
}

impl SessionConfig {
    /// Resize the grid, keeping the start at the origin and moving the end
    /// to the opposite corner.
    pub fn with_size(mut self, cols: i32, rows: i32) -> Self {
        self.cols = cols;
        self.rows = rows;
        self.start = Point::ZERO;
        self.end = Point::new(cols - 1, rows - 1);
        self
    }

    pub fn with_end(mut self, end: Point) -> Self {
        self.end = end;
        self
    }

    pub fn with_cell_size(mut self, cell_size: Point) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_wall_density(mut self, density: f64) -> Self {
        self.wall_density = density;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_runner(mut self, runner: RunnerConfig) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_idle_wait(mut self, wait: Duration) -> Self {
        self.idle_wait = wait;
        self
    }
}
