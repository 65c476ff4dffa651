//! **pathviz-core**: shared types for the grid pathfinding visualiser.
//!
//! Geometry primitives, styled cells, an owned render canvas with frame
//! diffing, input messages, and the [`Driver`] trait that back-ends
//! implement.

pub mod canvas;
pub mod cell;
pub mod driver;
pub mod geom;
pub mod messages;

pub use canvas::{compute_frame, Canvas, Frame, FrameCell};
pub use cell::{Cell, Color, Style};
pub use driver::{Context, Driver, DriverResult};
pub use geom::{Point, Range};
pub use messages::{Key, MouseAction, Msg};
