use std::fmt;
use std::ops::ControlFlow;

use pathviz_core::Point;

use crate::grid::Grid;

/// Receives one notification per visited cell while a search runs.
///
/// Returning `ControlFlow::Break(())` aborts the search on the spot; the grid
/// keeps whatever partial state it had reached.
pub trait StepSink {
    fn step(&mut self, grid: &Grid, p: Point) -> ControlFlow<()>;
}

impl<F> StepSink for F
where
    F: FnMut(&Grid, Point) -> ControlFlow<()>,
{
    #[inline]
    fn step(&mut self, grid: &Grid, p: Point) -> ControlFlow<()> {
        self(grid, p)
    }
}

/// Terminal state of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The end cell was reached.
    Found(Point),
    /// Every reachable cell was explored without reaching the end.
    NotFound,
    /// The step sink asked to stop.
    Cancelled,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(p) => write!(f, "found {p}"),
            Self::NotFound => f.write_str("not found"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// A single traversal of a [`Grid`] from its start towards its end.
///
/// A search value is built around a mutable borrow of the grid and is
/// consumed by [`run`](Self::run); a new run needs a new value (and a
/// [`Grid::soft_reset`] first).
pub trait Search {
    fn run<S: StepSink + ?Sized>(self, sink: &mut S) -> SearchOutcome;
}

/// The four available strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    DepthFirst,
    BreadthFirst,
    Dijkstra,
    AStar,
}

impl StrategyKind {
    /// Benchmark order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::DepthFirst,
        StrategyKind::BreadthFirst,
        StrategyKind::Dijkstra,
        StrategyKind::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "DFS",
            Self::BreadthFirst => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// Build the matching strategy over `grid` and run it.
    pub fn search<S: StepSink + ?Sized>(self, grid: &mut Grid, sink: &mut S) -> SearchOutcome {
        match self {
            Self::DepthFirst => crate::dfs::DepthFirst::new(grid).run(sink),
            Self::BreadthFirst => crate::bfs::BreadthFirst::new(grid).run(sink),
            Self::Dijkstra => crate::dijkstra::Dijkstra::new(grid).run(sink),
            Self::AStar => crate::astar::AStar::new(grid).run(sink),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
