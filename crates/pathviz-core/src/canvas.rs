//! The [`Canvas`] type: an owned 2D buffer of styled [`Cell`]s, and the
//! [`Frame`] diff that back-ends flush.

use crate::cell::{Cell, Style};
use crate::geom::{Point, Range};

/// A fixed-size 2D buffer of [`Cell`]s in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Canvas {
    /// Create a canvas of the given dimensions, filled with default cells.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Read the cell at `p`. Returns `Cell::default()` outside bounds.
    pub fn at(&self, p: Point) -> Cell {
        self.bounds
            .index_of(p)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Set the cell at `p`. No-op outside bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.bounds.index_of(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `text` starting at `p`, one character per column, clipped at
    /// the right edge. Returns the number of columns written.
    pub fn print(&mut self, p: Point, text: &str, style: Style) -> i32 {
        let mut written = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(i as i32, 0);
            if !self.bounds.contains(q) {
                break;
            }
            self.set(q, Cell { ch, style });
            written += 1;
        }
        written
    }

    /// Overwrite `self` with the contents of `src`. Sizes must match;
    /// otherwise `self` is replaced wholesale.
    pub fn copy_from(&mut self, src: &Canvas) {
        if self.bounds == src.bounds {
            self.cells.copy_from_slice(&src.cells);
        } else {
            *self = src.clone();
        }
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Point,
}

/// A set of cell changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Compute the cells of `curr` that differ from `prev`.
///
/// If the canvases differ in size every cell of `curr` is included.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let same_size = prev.bounds == curr.bounds;
    let cells = curr
        .iter()
        .filter(|&(p, c)| !same_size || prev.at(p) != c)
        .map(|(pos, cell)| FrameCell { cell, pos })
        .collect();
    Frame {
        cells,
        width: curr.bounds.width(),
        height: curr.bounds.height(),
    }
}
