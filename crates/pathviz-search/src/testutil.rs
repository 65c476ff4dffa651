use std::ops::ControlFlow;

use pathviz_core::Point;

use crate::grid::Grid;

/// A step sink that records every visited point and never stops.
pub(crate) fn recorder(steps: &mut Vec<Point>) -> impl FnMut(&Grid, Point) -> ControlFlow<()> + '_ {
    move |_, p| {
        steps.push(p);
        ControlFlow::Continue(())
    }
}

/// A step sink that stops after `limit` steps.
pub(crate) fn stop_after(limit: usize) -> impl FnMut(&Grid, Point) -> ControlFlow<()> {
    let mut seen = 0;
    move |_, _| {
        seen += 1;
        if seen >= limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// A wall-free grid from the top-left to the bottom-right corner.
pub(crate) fn open_grid(cols: i32, rows: i32) -> Grid {
    Grid::new(cols, rows, Point::new(0, 0), Point::new(cols - 1, rows - 1)).unwrap()
}

/// Wall in the four neighbours of `p`.
pub(crate) fn enclose(grid: &mut Grid, p: Point) {
    for n in p.neighbors_4() {
        if grid.contains(n) {
            grid.set_wall(n, true).unwrap();
        }
    }
}
