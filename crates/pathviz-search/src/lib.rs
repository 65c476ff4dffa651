//! Step-by-step search strategies on a walled 2D grid.
//!
//! A [`Grid`] holds walls, a start cell and an end cell. Four strategies
//! explore it from the start and report every visited cell to a
//! [`StepSink`] as they go, so a front-end can animate the search:
//!
//! | Strategy | Type | Path |
//! |---|---|---|
//! | Depth-first backtracking | [`DepthFirst`] | connected, usually long |
//! | Breadth-first | [`BreadthFirst`] | shortest |
//! | Dijkstra | [`Dijkstra`] | shortest |
//! | A* (Manhattan) | [`AStar`] | shortest |
//!
//! After a successful run, [`reconstruct`] follows parent links back from the
//! end. [`Runner`] wraps all of this with pacing, timing and reporting, and
//! [`InputMap`] turns raw [`Msg`](pathviz_core::Msg)s into [`Command`]s.
//!
//! A sink can stop a search early by returning `ControlFlow::Break`; the grid
//! keeps its partial state until the next [`Grid::soft_reset`].

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod grid;
mod input;
mod neighbors;
mod path;
mod runner;
mod search;
mod walls;

#[cfg(test)]
mod testutil;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use grid::{CellKind, Grid, GridError, Node};
pub use input::{Command, InputMap};
pub use neighbors::Neighbors;
pub use path::{reconstruct, PathError};
pub use runner::{
    no_render, NoPause, Pacer, ReportSink, RunReport, Runner, RunnerConfig, SleepPacer,
};
pub use search::{Search, SearchOutcome, StepSink, StrategyKind};
pub use walls::scatter_walls;
