use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::search::{Search, SearchOutcome, StepSink};

/// A* search with the Manhattan heuristic.
///
/// Same relaxation as [`Dijkstra`](crate::Dijkstra) but ordered on
/// `g + h`, ties going to the cell closer to the end. `h` is filled in the
/// first time a cell is discovered and not recomputed during the run.
pub struct AStar<'g> {
    grid: &'g mut Grid,
    open: Frontier,
}

impl<'g> AStar<'g> {
    pub fn new(grid: &'g mut Grid) -> Self {
        Self {
            grid,
            open: Frontier::new(),
        }
    }
}

impl Search for AStar<'_> {
    fn run<S: StepSink + ?Sized>(mut self, sink: &mut S) -> SearchOutcome {
        let start = self.grid.start();
        let end = self.grid.end();
        let (Some(start_idx), Some(goal_idx)) = (self.grid.idx(start), self.grid.idx(end)) else {
            return SearchOutcome::NotFound;
        };

        let h0 = manhattan(start, end) as f32;
        let s = self.grid.node_at_mut(start_idx);
        s.g = 0.0;
        s.h = h0;
        self.open.push(start_idx, h0, h0);

        while let Some(ci) = self.open.pop() {
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
                if n.g.is_infinite() {
                    // First discovery.
                    n.h = manhattan(np, end) as f32;
                }
                n.g = candidate;
                n.parent = Some(ci);
                let (f, h) = (n.f(), n.h);
                self.open.push(ni, f, h);
            }
        }

        SearchOutcome::NotFound
    }
}
