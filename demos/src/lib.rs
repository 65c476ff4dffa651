//! Interactive grid pathfinding visualiser.
//!
//! Click to move the end cell, right-click to toggle walls, then watch DFS,
//! BFS, Dijkstra and A* explore the grid one cell at a time. Each run logs
//! its duration to the status area and, after exit, to stdout.

pub mod config;
pub mod session;
pub mod status;
pub mod view;

pub use config::SessionConfig;
pub use session::Session;
pub use status::{StatusLines, StatusLog};
pub use view::{color_of, View};
