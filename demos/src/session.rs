//! The interactive session: input handling, runs and redraws.

use std::error::Error;
use std::ops::ControlFlow;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use pathviz_core::{Context, Driver, DriverResult, Msg, Point};
use pathviz_search::{
    scatter_walls, Command, Grid, GridError, InputMap, Pacer, RunReport, Runner, SleepPacer,
    StepSink, StrategyKind,
};

use crate::config::SessionConfig;
use crate::status::StatusLines;
use crate::view::{View, STATUS_ROWS};

/// Owns the grid, the back-end and everything in between.
pub struct Session<D: Driver, P: Pacer = SleepPacer> {
    config: SessionConfig,
    driver: D,
    grid: Grid,
    input: InputMap,
    runner: Runner<P>,
    rng: StdRng,
    view: View,
    status: StatusLines,
    hover: Option<Point>,
    reports: Vec<RunReport>,
    ctx: Context,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
}

impl<D: Driver> Session<D> {
    pub fn new(config: SessionConfig, driver: D, status: StatusLines) -> Result<Self, GridError> {
        Self::with_pacer(config, driver, status, SleepPacer)
    }
}

impl<D: Driver, P: Pacer> Session<D, P> {
    pub fn with_pacer(
        config: SessionConfig,
        driver: D,
        status: StatusLines,
        pacer: P,
    ) -> Result<Self, GridError> {
        let grid = Grid::new(config.cols, config.rows, config.start, config.end)?;
        let input = InputMap::new(config.cell_size, grid.bounds());
        let view = View::new(&grid, config.cell_size);
        let runner = Runner::with_pacer(config.runner.clone(), pacer);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            config,
            driver,
            grid,
            input,
            runner,
            rng,
            view,
            status,
            hover: None,
            reports: Vec::new(),
            ctx: Context::new(),
            tx,
            rx,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Every run report of the session, oldest first.
    pub fn reports(&self) -> &[RunReport] {
        &self.reports
    }

    pub fn is_done(&self) -> bool {
        self.ctx.is_done()
    }

    /// Run the interaction loop until the user quits.
    ///
    /// The driver is closed on every exit path.
    pub fn run(&mut self) -> DriverResult {
        self.driver.init()?;
        let result = self.event_loop();
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> DriverResult {
        log::info!(
            "{}x{} grid, start {}, end {}",
            self.grid.cols(),
            self.grid.rows(),
            self.grid.start(),
            self.grid.end()
        );
        self.redraw()?;
        while !self.ctx.is_done() {
            self.driver
                .poll_msgs(&self.ctx, &self.tx, self.config.idle_wait)?;
            let mut dirty = false;
            while !self.ctx.is_done() {
                let Ok(msg) = self.rx.try_recv() else {
                    break;
                };
                dirty |= self.update(msg)?;
            }
            if dirty && !self.ctx.is_done() {
                self.redraw()?;
            }
        }
        Ok(())
    }

    /// Apply one input message. Returns whether the screen needs a redraw.
    pub fn update(&mut self, msg: Msg) -> DriverResult<bool> {
        if let Msg::Screen { .. } = msg {
            self.view.invalidate();
            return Ok(true);
        }
        let Some(cmd) = self.input.translate(&msg) else {
            return Ok(false);
        };
        match cmd {
            Command::SetEnd(p) => {
                if let Err(err) = self.grid.set_end(p) {
                    log::debug!("{err}");
                }
            }
            Command::ToggleWall(p) => {
                if let Err(err) = self.grid.toggle_wall(p) {
                    log::debug!("{err}");
                }
            }
            Command::Hover(p) => {
                if self.hover == Some(p) {
                    return Ok(false);
                }
                self.hover = Some(p);
            }
            Command::Run(kind) => self.run_strategies(Some(kind))?,
            Command::RunAll => self.run_strategies(None)?,
            Command::ClearWalls => {
                self.grid.soft_reset();
                self.grid.clear_walls();
                log::info!("walls cleared");
            }
            Command::ScatterWalls => {
                self.grid.soft_reset();
                let n = scatter_walls(&mut self.grid, &mut self.rng, self.config.wall_density);
                log::info!("{n} walls placed");
            }
            Command::Quit => self.ctx.cancel(),
        }
        Ok(true)
    }

    /// Run one strategy, or all of them, animating every step.
    fn run_strategies(&mut self, only: Option<StrategyKind>) -> DriverResult {
        let Self {
            driver,
            grid,
            input,
            runner,
            view,
            status,
            hover,
            reports,
            ctx,
            tx,
            rx,
            ..
        } = self;

        let mut render = StepRenderer {
            driver,
            view,
            status,
            input,
            hover: *hover,
            ctx,
            tx,
            rx,
            error: None,
        };
        match only {
            Some(kind) => {
                let report = runner.run_one(grid, kind, &mut render)?;
                reports.push(report);
            }
            None => {
                let mut record = |r: &RunReport| reports.push(r.clone());
                runner.run_all(grid, &mut render, &mut record)?;
            }
        }
        *hover = render.hover;
        match render.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn redraw(&mut self) -> DriverResult {
        let lines = self.status.recent(STATUS_ROWS as usize);
        self.view.draw(&self.grid, self.hover, &lines);
        let frame = self.view.take_frame();
        if !frame.cells.is_empty() {
            self.driver.flush(frame)?;
        }
        Ok(())
    }
}

/// Paints the grid after every search step and watches for quit requests.
///
/// Other input arriving mid-run is dropped: the grid is locked until the
/// run ends.
struct StepRenderer<'a, D: Driver> {
    driver: &'a mut D,
    view: &'a mut View,
    status: &'a StatusLines,
    input: &'a InputMap,
    hover: Option<Point>,
    ctx: &'a Context,
    tx: &'a Sender<Msg>,
    rx: &'a Receiver<Msg>,
    error: Option<Box<dyn Error>>,
}

impl<D: Driver> StepRenderer<'_, D> {
    fn paint(&mut self, grid: &Grid) -> DriverResult {
        let lines = self.status.recent(STATUS_ROWS as usize);
        self.view.draw(grid, self.hover, &lines);
        let frame = self.view.take_frame();
        if !frame.cells.is_empty() {
            self.driver.flush(frame)?;
        }
        // Never block here: the runner's pacer owns the step cadence.
        self.driver.poll_msgs(self.ctx, self.tx, Duration::ZERO)?;
        while let Ok(msg) = self.rx.try_recv() {
            match self.input.translate(&msg) {
                Some(Command::Quit) => self.ctx.cancel(),
                Some(Command::Hover(p)) => self.hover = Some(p),
                Some(cmd) => log::debug!("ignored {cmd:?} during a run"),
                None => {}
            }
        }
        Ok(())
    }
}

impl<D: Driver> StepSink for StepRenderer<'_, D> {
    fn step(&mut self, grid: &Grid, _p: Point) -> ControlFlow<()> {
        if let Err(err) = self.paint(grid) {
            self.error = Some(err);
            return ControlFlow::Break(());
        }
        if self.ctx.is_done() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use pathviz_core::{Frame, Key, MouseAction};
    use pathviz_search::{NoPause, RunnerConfig, SearchOutcome};

    use super::*;

    /// Replays one scripted message per poll and records flushed frames.
    #[derive(Default)]
    struct Scripted {
        script: VecDeque<Msg>,
        frames: Vec<Frame>,
        waits: Vec<Duration>,
        inited: bool,
        closed: bool,
        fail_flush: bool,
    }

    impl Driver for Scripted {
        fn init(&mut self) -> DriverResult {
            self.inited = true;
            Ok(())
        }

        fn poll_msgs(&mut self, _ctx: &Context, tx: &Sender<Msg>, wait: Duration) -> DriverResult {
            self.waits.push(wait);
            if let Some(msg) = self.script.pop_front() {
                tx.send(msg)?;
            }
            Ok(())
        }

        fn flush(&mut self, frame: Frame) -> DriverResult {
            if self.fail_flush {
                return Err("display gone".into());
            }
            self.frames.push(frame);
            Ok(())
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    fn session(script: Vec<Msg>) -> Session<Scripted, NoPause> {
        let config = SessionConfig::default()
            .with_size(5, 5)
            .with_cell_size(Point::new(1, 1))
            .with_seed(9)
            .with_runner(RunnerConfig::instant());
        let driver = Scripted {
            script: script.into(),
            ..Scripted::default()
        };
        Session::with_pacer(config, driver, StatusLines::new(16), NoPause).unwrap()
    }

    #[test]
    fn quit_closes_the_driver() {
        let mut s = session(vec![Msg::key(Key::Char('q'))]);
        s.run().unwrap();
        assert!(s.is_done());
        assert!(s.driver().inited);
        assert!(s.driver().closed);
        assert_eq!(s.driver().frames.len(), 1);
    }

    #[test]
    fn clicks_edit_the_grid() {
        let mut s = session(Vec::new());
        assert!(s.update(Msg::mouse(MouseAction::Secondary, 2, 2)).unwrap());
        assert!(s.grid().is_wall(Point::new(2, 2)));
        s.update(Msg::mouse(MouseAction::Main, 2, 2)).unwrap();
        assert_eq!(s.grid().end(), Point::new(4, 4));
        s.update(Msg::mouse(MouseAction::Main, 3, 1)).unwrap();
        assert_eq!(s.grid().end(), Point::new(3, 1));
        s.update(Msg::mouse(MouseAction::Secondary, 3, 1)).unwrap();
        assert!(!s.grid().is_wall(Point::new(3, 1)));
        assert!(!s.update(Msg::mouse(MouseAction::Main, 40, 40)).unwrap());
    }

    #[test]
    fn space_runs_every_strategy() {
        let mut s = session(Vec::new());
        s.update(Msg::key(Key::Space)).unwrap();
        let kinds: Vec<_> = s.reports().iter().map(|r| r.strategy).collect();
        assert_eq!(kinds, StrategyKind::ALL);
        assert!(s
            .reports()
            .iter()
            .all(|r| r.outcome == SearchOutcome::Found(Point::new(4, 4))));
        // One frame per animated step at least.
        let steps: usize = s.reports().iter().map(|r| r.visited).sum();
        assert!(s.driver().frames.len() >= s.reports().len());
        assert!(steps > 0);
    }

    #[test]
    fn digit_runs_a_single_strategy() {
        let mut s = session(Vec::new());
        s.update(Msg::key(Key::Char('2'))).unwrap();
        assert_eq!(s.reports().len(), 1);
        assert_eq!(s.reports()[0].strategy, StrategyKind::BreadthFirst);
        assert_eq!(s.reports()[0].path.len(), 9);
    }

    #[test]
    fn quit_during_a_run_cancels_it() {
        let mut s = session(vec![Msg::key(Key::Char('1')), Msg::Quit]);
        s.run().unwrap();
        assert_eq!(s.reports().len(), 1);
        assert_eq!(s.reports()[0].outcome, SearchOutcome::Cancelled);
        assert!(s.driver().closed);
    }

    #[test]
    fn scatter_and_clear() {
        let mut s = session(Vec::new());
        s.update(Msg::key(Key::Char('r'))).unwrap();
        let walls = |s: &Session<Scripted, NoPause>| {
            s.grid().bounds().iter().filter(|&p| s.grid().is_wall(p)).count()
        };
        let placed = walls(&s);
        assert!(!s.grid().is_wall(s.grid().start()));
        s.update(Msg::key(Key::Char('c'))).unwrap();
        assert_eq!(walls(&s), 0);
        assert!(placed <= 23);
    }

    #[test]
    fn flush_errors_end_the_session() {
        let mut s = session(vec![Msg::Quit]);
        s.driver.fail_flush = true;
        assert!(s.run().is_err());
        assert!(s.driver().closed);
    }

    #[test]
    fn runs_poll_without_waiting() {
        let mut s = session(Vec::new());
        s.update(Msg::key(Key::Space)).unwrap();
        let steps: usize = s.reports().iter().map(|r| r.visited).sum();
        assert_eq!(s.driver().waits.len(), steps);
        assert!(s.driver().waits.iter().all(|w| w.is_zero()));
    }

    #[test]
    fn idle_polls_use_the_configured_wait() {
        let mut s = session(vec![Msg::key(Key::Char('q'))]);
        s.run().unwrap();
        assert_eq!(s.driver().waits, [Duration::from_millis(16)]);
    }

    #[test]
    fn hover_during_a_run_is_kept() {
        let mut s = session(vec![Msg::mouse(MouseAction::Move, 2, 3)]);
        s.update(Msg::mouse(MouseAction::Move, 1, 1)).unwrap();
        s.update(Msg::key(Key::Char('4'))).unwrap();
        assert_eq!(s.hover, Some(Point::new(2, 3)));
        // Unchanged hover does not ask for a redraw.
        assert!(!s.update(Msg::mouse(MouseAction::Move, 2, 3)).unwrap());
    }

    #[test]
    fn hover_only_redraws_on_change() {
        let mut s = session(Vec::new());
        assert!(s.update(Msg::mouse(MouseAction::Move, 1, 1)).unwrap());
        assert!(!s.update(Msg::mouse(MouseAction::Move, 1, 1)).unwrap());
    }
}
