use std::collections::VecDeque;

use crate::grid::Grid;
use crate::search::{Search, SearchOutcome, StepSink};

/// Breadth-first search.
///
/// Cells are flagged visited and linked to their parent when enqueued, so no
/// cell enters the queue twice. Steps are reported as cells leave the queue,
/// which happens in non-decreasing distance from the start.
pub struct BreadthFirst<'g> {
    grid: &'g mut Grid,
    queue: VecDeque<usize>,
}

impl<'g> BreadthFirst<'g> {
    pub fn new(grid: &'g mut Grid) -> Self {
        Self {
            grid,
            queue: VecDeque::new(),
        }
    }
}

impl Search for BreadthFirst<'_> {
    fn run<S: StepSink + ?Sized>(mut self, sink: &mut S) -> SearchOutcome {
        let end = self.grid.end();
        let (Some(start_idx), Some(goal_idx)) =
            (self.grid.idx(self.grid.start()), self.grid.idx(end))
        else {
            return SearchOutcome::NotFound;
        };

        let start = self.grid.node_at_mut(start_idx);
        start.visited = true;
        start.g = 0.0;
        self.queue.push_back(start_idx);

        while let Some(ci) = self.queue.pop_front() {
            let cp = self.grid.point(ci);
            if sink.step(self.grid, cp).is_break() {
                return SearchOutcome::Cancelled;
            }
            if ci == goal_idx {
                return SearchOutcome::Found(end);
            }

            let next_g = self.grid.node_at(ci).g + 1.0;
            for np in self.grid.neighbors(cp) {
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                let n = self.grid.node_at_mut(ni);
                if n.wall || n.visited {
                    continue;
                }
                n.visited = true;
                n.parent = Some(ci);
                n.g = next_g;
                self.queue.push_back(ni);
            }
        }

        SearchOutcome::NotFound
    }
}
