//! Drawing the grid and the status area onto a [`Canvas`].

use pathviz_core::{compute_frame, Canvas, Cell, Color, Frame, Point, Style};
use pathviz_search::{CellKind, Grid};

pub const COL_START: Color = Color::from_rgb(0, 255, 0);
pub const COL_END: Color = Color::from_rgb(255, 0, 0);
pub const COL_WALL: Color = Color::from_rgb(50, 50, 50);
pub const COL_VISITED: Color = Color::from_rgb(0, 0, 255);
pub const COL_PATH: Color = Color::from_rgb(255, 255, 0);
pub const COL_EMPTY: Color = Color::from_rgb(200, 200, 200);
const COL_CURSOR: Color = Color::from_rgb(255, 255, 255);
const COL_STATUS_FG: Color = Color::from_rgb(200, 200, 200);
const COL_STATUS_BG: Color = Color::from_rgb(30, 30, 50);
const COL_HELP_FG: Color = Color::from_rgb(140, 140, 170);

const HELP: &str = "click: end  right-click: wall  space: run all  1-4: DFS/BFS/Dijkstra/A*  c: clear  r: scatter  q: quit";

/// Rows below the grid: help, cursor line, then log lines.
pub const STATUS_ROWS: i32 = 6;
const MIN_WIDTH: i32 = 40;

/// Background colour for a cell kind.
pub fn color_of(kind: CellKind) -> Color {
    match kind {
        CellKind::Start => COL_START,
        CellKind::End => COL_END,
        CellKind::Wall => COL_WALL,
        CellKind::Path => COL_PATH,
        CellKind::Visited => COL_VISITED,
        CellKind::Empty => COL_EMPTY,
    }
}

/// Double-buffered screen state.
#[derive(Debug)]
pub struct View {
    cell_size: Point,
    prev: Canvas,
    curr: Canvas,
}

impl View {
    pub fn new(grid: &Grid, cell_size: Point) -> Self {
        let cell_size = Point::new(cell_size.x.max(1), cell_size.y.max(1));
        let width = (grid.cols() * cell_size.x).max(MIN_WIDTH);
        let height = grid.rows() * cell_size.y + STATUS_ROWS;
        Self {
            cell_size,
            prev: Canvas::new(0, 0),
            curr: Canvas::new(width, height),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.curr
    }

    /// Forget what is on screen so the next frame repaints everything.
    pub fn invalidate(&mut self) {
        self.prev = Canvas::new(0, 0);
    }

    /// Paint the grid, the hover cursor and the status area.
    pub fn draw(&mut self, grid: &Grid, hover: Option<Point>, status: &[String]) {
        self.curr.fill(Cell::default());
        for p in grid.bounds() {
            let Some(kind) = grid.cell_kind(p) else {
                continue;
            };
            let mut cell = Cell::filled(color_of(kind));
            if hover == Some(p) {
                cell = cell.with_char('+').with_style(
                    cell.style.with_fg(COL_CURSOR).with_bold(true),
                );
            }
            self.paint_cell(p, cell);
        }
        self.draw_status(grid, hover, status);
    }

    fn paint_cell(&mut self, p: Point, cell: Cell) {
        let origin = Point::new(p.x * self.cell_size.x, p.y * self.cell_size.y);
        for dy in 0..self.cell_size.y {
            for dx in 0..self.cell_size.x {
                // Only the first column carries the glyph.
                let c = if dx == 0 { cell } else { cell.with_char(' ') };
                self.curr.set(origin.shift(dx, dy), c);
            }
        }
    }

    fn draw_status(&mut self, grid: &Grid, hover: Option<Point>, status: &[String]) {
        let top = grid.rows() * self.cell_size.y;
        let width = self.curr.size().x;
        let bar = Style::default().with_fg(COL_STATUS_FG).with_bg(COL_STATUS_BG);
        for y in top..top + STATUS_ROWS {
            for x in 0..width {
                self.curr.set(Point::new(x, y), Cell::filled(COL_STATUS_BG));
            }
        }

        self.curr
            .print(Point::new(0, top), HELP, bar.with_fg(COL_HELP_FG));
        let cursor = match hover {
            Some(p) => format!("cursor {p}  end {}", grid.end()),
            None => format!("end {}", grid.end()),
        };
        self.curr.print(Point::new(0, top + 1), &cursor, bar);
        let log_rows = (STATUS_ROWS - 2) as usize;
        let skip = status.len().saturating_sub(log_rows);
        for (i, line) in status.iter().skip(skip).enumerate() {
            self.curr
                .print(Point::new(0, top + 2 + i as i32), line, bar.with_bold(i == 0));
        }
    }

    /// Diff against what was last flushed and remember the new state.
    pub fn take_frame(&mut self) -> Frame {
        let frame = compute_frame(&self.prev, &self.curr);
        self.prev.copy_from(&self.curr);
        frame
    }
}
