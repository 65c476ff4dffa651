//! Drives strategies step by step with pacing, timing and reporting.

use std::fmt;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use pathviz_core::Point;

use crate::grid::Grid;
use crate::path::{reconstruct, PathError};
use crate::search::{SearchOutcome, StepSink, StrategyKind};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Timing knobs for the [`Runner`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunnerConfig {
    /// Pause after every visualised step.
    pub step_delay: Duration,
    /// Pause between consecutive runs of [`Runner::run_all`].
    pub pause_between: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(30),
            pause_between: Duration::from_millis(500),
        }
    }
}

impl RunnerConfig {
    pub fn with_step_delay(mut self, d: Duration) -> Self {
        self.step_delay = d;
        self
    }

    pub fn with_pause_between(mut self, d: Duration) -> Self {
        self.pause_between = d;
        self
    }

    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            step_delay: Duration::ZERO,
            pause_between: Duration::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Pacing and reporting
// ---------------------------------------------------------------------------

/// Delay primitive invoked between animation steps. Advisory only.
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

/// Blocks the current thread for the requested interval.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, interval: Duration) {
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }
}

/// Never waits. Useful for benchmarks and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _interval: Duration) {}
}

/// Outcome and timing of one strategy run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub strategy: StrategyKind,
    pub outcome: SearchOutcome,
    /// Wall-clock time of the run, step pacing included.
    pub elapsed: Duration,
    /// Cells announced to the step sink, the cancelling step included.
    ///
    /// Breadth-first search flags cells when it queues them, so this can be
    /// lower than [`Grid::visited_count`] after a BFS run.
    pub visited: usize,
    /// Start-to-end path; empty unless the end was found.
    pub path: Vec<Point>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {:.6} seconds. ({}, {} visited",
            self.strategy,
            self.elapsed.as_secs_f64(),
            self.outcome,
            self.visited
        )?;
        if !self.path.is_empty() {
            write!(f, ", path {} cells", self.path.len())?;
        }
        f.write_str(")")
    }
}

/// Receives a report after every completed (or cancelled) run.
pub trait ReportSink {
    fn report(&mut self, report: &RunReport);
}

impl<F> ReportSink for F
where
    F: FnMut(&RunReport),
{
    fn report(&mut self, report: &RunReport) {
        self(report)
    }
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Runs strategies over a grid one at a time.
///
/// The grid is borrowed mutably for the whole run, so walls and the end
/// cannot change until it returns.
#[derive(Debug, Default)]
pub struct Runner<P = SleepPacer> {
    config: RunnerConfig,
    pacer: P,
}

impl Runner<SleepPacer> {
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_pacer(config, SleepPacer)
    }
}

impl<P: Pacer> Runner<P> {
    pub fn with_pacer(config: RunnerConfig, pacer: P) -> Self {
        Self { config, pacer }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Soft-reset `grid`, run `kind` on it and report.
    ///
    /// Every step goes to `render`, followed by the configured step delay.
    /// When the end is found the path is rebuilt and marked on the grid.
    pub fn run_one<R: StepSink + ?Sized>(
        &mut self,
        grid: &mut Grid,
        kind: StrategyKind,
        render: &mut R,
    ) -> Result<RunReport, PathError> {
        grid.soft_reset();
        let step_delay = self.config.step_delay;
        let pacer = &mut self.pacer;
        let mut announced = 0;
        let mut paced = |g: &Grid, p: Point| {
            log::trace!("{kind} visits {p}");
            announced += 1;
            let flow = render.step(g, p);
            if flow.is_continue() {
                pacer.pause(step_delay);
            }
            flow
        };

        let began = Instant::now();
        let outcome = kind.search(grid, &mut paced);
        let elapsed = began.elapsed();

        let path = match outcome {
            SearchOutcome::Found(end) => {
                let path = reconstruct(grid, end)?;
                grid.mark_path(&path);
                path
            }
            SearchOutcome::NotFound | SearchOutcome::Cancelled => Vec::new(),
        };

        let report = RunReport {
            strategy: kind,
            outcome,
            elapsed,
            visited: announced,
            path,
        };
        log::info!("{report}");
        Ok(report)
    }

    /// Run every strategy in [`StrategyKind::ALL`] order, pausing between
    /// runs and sending each report to `reports`.
    ///
    /// A cancelled run ends the sequence.
    pub fn run_all<R, S>(
        &mut self,
        grid: &mut Grid,
        render: &mut R,
        reports: &mut S,
    ) -> Result<Vec<RunReport>, PathError>
    where
        R: StepSink + ?Sized,
        S: ReportSink + ?Sized,
    {
        let mut done = Vec::with_capacity(StrategyKind::ALL.len());
        for (i, kind) in StrategyKind::ALL.into_iter().enumerate() {
            if i > 0 {
                self.pacer.pause(self.config.pause_between);
            }
            let report = self.run_one(grid, kind, render)?;
            reports.report(&report);
            let cancelled = report.outcome == SearchOutcome::Cancelled;
            done.push(report);
            if cancelled {
                log::debug!("run sequence stopped after {kind}");
                break;
            }
        }
        Ok(done)
    }
}

/// A render sink that ignores every step.
pub fn no_render(_: &Grid, _: Point) -> ControlFlow<()> {
    ControlFlow::Continue(())
}
