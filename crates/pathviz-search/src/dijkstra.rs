use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::search::{Search, SearchOutcome, StepSink};

/// Uniform-cost search keyed on `g`.
///
/// Every edge costs 1. Relaxed cells are pushed again rather than updated
/// in place; a popped cell that is already visited is skipped.
pub struct Dijkstra<'g> {
    grid: &'g mut Grid,
    open: Frontier,
}

impl<'g> Dijkstra<'g> {
    pub fn new(grid: &'g mut Grid) -> Self {
        Self {
            grid,
            open: Frontier::new(),
        }
    }
}

impl Search for Dijkstra<'_> {
    fn run<S: StepSink + ?Sized>(mut self, sink: &mut S) -> SearchOutcome {
        let end = self.grid.end();
        let (Some(start_idx), Some(goal_idx)) =
            (self.grid.idx(self.grid.start()), self.grid.idx(end))
        else {
            return SearchOutcome::NotFound;
        };

        self.grid.node_at_mut(start_idx).g = 0.0;
        self.open.push(start_idx, 0.0, 0.0);

        while let Some(ci) = self.open.pop() {
            // Stale duplicate of an already settled cell.
            if self.grid.node_at(ci).visited {
                continue;
            }
            self.grid.node_at_mut(ci).visited = true;

            let cp = self.grid.point(ci);
            if sink.step(self.grid, cp).is_break() {
                return SearchOutcome::Cancelled;
            }
            if ci == goal_idx {
                return SearchOutcome::Found(end);
            }

            let candidate = self.grid.node_at(ci).g + 1.0;
            for np in self.grid.neighbors(cp) {
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                let n = self.grid.node_at_mut(ni);
                if n.wall || n.visited || candidate >= n.g {
                    continue;
                }
                n.g = candidate;
                n.parent = Some(ci);
                self.open.push(ni, candidate, 0.0);
            }
        }

        SearchOutcome::NotFound
    }
}
