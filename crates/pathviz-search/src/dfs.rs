use std::ops::ControlFlow;

use pathviz_core::Point;

use crate::grid::Grid;
use crate::search::{Search, SearchOutcome, StepSink};

/// One cell on the depth-first stack and the next direction to try from it.
#[derive(Clone, Copy, Debug)]
struct StackFrame {
    idx: usize,
    next_dir: usize,
}

/// Depth-first backtracking search with an explicit stack.
///
/// Neighbours are tried in the order up, down, left, right. The path found is
/// connected and loop-free but usually not the shortest. Each cell is visited
/// at most once, so a run takes at most `cols × rows` steps.
pub struct DepthFirst<'g> {
    grid: &'g mut Grid,
    stack: Vec<StackFrame>,
}

impl<'g> DepthFirst<'g> {
    pub fn new(grid: &'g mut Grid) -> Self {
        Self {
            grid,
            stack: Vec::new(),
        }
    }

    /// Mark `idx` visited, push it and report the step.
    fn visit<S: StepSink + ?Sized>(
        &mut self,
        idx: usize,
        parent: Option<usize>,
        sink: &mut S,
    ) -> ControlFlow<()> {
        let depth = parent.map_or(0.0, |pi| self.grid.node_at(pi).g + 1.0);
        let node = self.grid.node_at_mut(idx);
        node.visited = true;
        node.parent = parent;
        node.g = depth;
        self.stack.push(StackFrame { idx, next_dir: 0 });
        let p = self.grid.point(idx);
        sink.step(self.grid, p)
    }
}

impl Search for DepthFirst<'_> {
    fn run<S: StepSink + ?Sized>(mut self, sink: &mut S) -> SearchOutcome {
        let end = self.grid.end();
        let (Some(start_idx), Some(goal_idx)) =
            (self.grid.idx(self.grid.start()), self.grid.idx(end))
        else {
            return SearchOutcome::NotFound;
        };

        if self.visit(start_idx, None, sink).is_break() {
            return SearchOutcome::Cancelled;
        }
        if start_idx == goal_idx {
            return SearchOutcome::Found(end);
        }

        while let Some(top) = self.stack.last_mut() {
            let Some(&dir) = Point::CARDINALS.get(top.next_dir) else {
                // Every direction tried: backtrack.
                self.stack.pop();
                continue;
            };
            top.next_dir += 1;
            let current = top.idx;

            let np = self.grid.point(current) + dir;
            let Some(ni) = self.grid.idx(np) else {
                continue;
            };
            let n = self.grid.node_at(ni);
            if n.wall || n.visited {
                continue;
            }

            if self.visit(ni, Some(current), sink).is_break() {
                return SearchOutcome::Cancelled;
            }
            if ni == goal_idx {
                log::trace!("dfs reached {end} at depth {}", self.stack.len() - 1);
                return SearchOutcome::Found(end);
            }
        }

        SearchOutcome::NotFound
    }
}
