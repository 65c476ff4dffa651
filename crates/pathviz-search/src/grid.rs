//! The search [`Grid`]: a fixed arena of [`Node`]s with walls, a start and an
//! end cell.

use pathviz_core::{Point, Range};

use crate::neighbors::Neighbors;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Rejected grid construction or mutation.
///
/// Mutations that fail leave the grid unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("coordinate {0} is outside the grid")]
    OutOfRange(Point),

    #[error("rejected mutation at {pos}: {reason}")]
    InvalidMutation { pos: Point, reason: &'static str },

    #[error("invalid grid dimensions {cols}x{rows}")]
    InvalidDimensions { cols: i32, rows: i32 },
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Per-cell search state.
///
/// `parent` is a flat index into the owning grid's arena and always points
/// one step closer to the start.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub wall: bool,
    pub visited: bool,
    /// Cost from the start; `f32::INFINITY` until discovered.
    pub g: f32,
    /// Heuristic estimate to the end (A* only).
    pub h: f32,
    pub parent: Option<usize>,
    /// Set on cells of the last reconstructed path.
    pub on_path: bool,
}

impl Node {
    /// Priority used by A*.
    #[inline]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }

    fn clear_search_state(&mut self) {
        self.visited = false;
        self.g = f32::INFINITY;
        self.h = 0.0;
        self.parent = None;
        self.on_path = false;
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            wall: false,
            visited: false,
            g: f32::INFINITY,
            h: 0.0,
            parent: None,
            on_path: false,
        }
    }
}

// ---------------------------------------------------------------------------
// CellKind
// ---------------------------------------------------------------------------

/// How a renderer should paint a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Start,
    End,
    Wall,
    Path,
    Visited,
    Empty,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `cols × rows` grid of search nodes stored row-major.
///
/// Dimensions and the start cell never change after construction. The start
/// and end are never walls and never coincide.
#[derive(Clone, Debug)]
pub struct Grid {
    bounds: Range,
    nodes: Vec<Node>,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create a wall-free grid.
    pub fn new(cols: i32, rows: i32, start: Point, end: Point) -> Result<Self, GridError> {
        if cols <= 0 || rows <= 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        let bounds = Range::with_size(cols, rows);
        for p in [start, end] {
            if !bounds.contains(p) {
                return Err(GridError::OutOfRange(p));
            }
        }
        if start == end {
            return Err(GridError::InvalidMutation {
                pos: end,
                reason: "start and end must differ",
            });
        }
        Ok(Self {
            bounds,
            nodes: vec![Node::default(); bounds.len()],
            start,
            end,
        })
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Search state of the cell at `p`.
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    pub fn is_wall(&self, p: Point) -> bool {
        self.node(p).is_some_and(|n| n.wall)
    }

    pub fn is_visited(&self, p: Point) -> bool {
        self.node(p).is_some_and(|n| n.visited)
    }

    /// Cost-so-far at `p` (`INFINITY` if undiscovered or outside).
    pub fn g_cost(&self, p: Point) -> f32 {
        self.node(p).map_or(f32::INFINITY, |n| n.g)
    }

    pub fn h_cost(&self, p: Point) -> f32 {
        self.node(p).map_or(0.0, |n| n.h)
    }

    /// The cell `p` was reached from, if any.
    pub fn parent(&self, p: Point) -> Option<Point> {
        self.node(p)?.parent.map(|i| self.point(i))
    }

    pub fn visited_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.visited).count()
    }

    /// Visited cells in row-major order.
    pub fn visited_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds
            .iter()
            .zip(&self.nodes)
            .filter(|(_, n)| n.visited)
            .map(|(p, _)| p)
    }

    /// In-bounds neighbours of `p` in the order up, down, left, right.
    #[inline]
    pub fn neighbors(&self, p: Point) -> Neighbors {
        Neighbors::new(p, self.bounds)
    }

    // -----------------------------------------------------------------------
    // User mutations
    // -----------------------------------------------------------------------

    /// Flip the wall flag at `p` and return the new state.
    ///
    /// The start and end cells cannot be walled.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let wall = !self.checked_node(p)?.wall;
        self.set_wall(p, wall)?;
        Ok(wall)
    }

    /// Set the wall flag at `p`. Walling the start or end is rejected.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfRange(p))?;
        if wall && p == self.start {
            return Err(GridError::InvalidMutation {
                pos: p,
                reason: "the start cell cannot be a wall",
            });
        }
        if wall && p == self.end {
            return Err(GridError::InvalidMutation {
                pos: p,
                reason: "the end cell cannot be a wall",
            });
        }
        self.nodes[i].wall = wall;
        Ok(())
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for n in &mut self.nodes {
            n.wall = false;
        }
    }

    /// Move the end cell to `p`. Rejected if `p` is a wall or the start.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        if self.checked_node(p)?.wall {
            return Err(GridError::InvalidMutation {
                pos: p,
                reason: "the end cannot be placed on a wall",
            });
        }
        if p == self.start {
            return Err(GridError::InvalidMutation {
                pos: p,
                reason: "the end cannot be placed on the start",
            });
        }
        self.end = p;
        Ok(())
    }

    /// Clear visited flags, parents, costs and the marked path on every
    /// cell. Walls and the end cell are kept.
    pub fn soft_reset(&mut self) {
        for n in &mut self.nodes {
            n.clear_search_state();
        }
    }

    /// Flag the cells of `path` for the `Path` colour. Out-of-range points
    /// are ignored.
    pub fn mark_path(&mut self, path: &[Point]) {
        for &p in path {
            if let Some(i) = self.idx(p) {
                self.nodes[i].on_path = true;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Colouring
    // -----------------------------------------------------------------------

    /// Paint policy for the cell at `p`: start and end first, then wall,
    /// path, visited, empty.
    pub fn cell_kind(&self, p: Point) -> Option<CellKind> {
        let n = self.node(p)?;
        let kind = if p == self.start {
            CellKind::Start
        } else if p == self.end {
            CellKind::End
        } else if n.wall {
            CellKind::Wall
        } else if n.on_path {
            CellKind::Path
        } else if n.visited {
            CellKind::Visited
        } else {
            CellKind::Empty
        };
        Some(kind)
    }

    // -----------------------------------------------------------------------
    // Arena helpers
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index_of(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.bounds.point_at(idx)
    }

    #[inline]
    pub(crate) fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_at_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    fn checked_node(&self, p: Point) -> Result<&Node, GridError> {
        self.node(p).ok_or(GridError::OutOfRange(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(5, 5, Point::new(0, 0), Point::new(4, 4)).unwrap()
    }

    #[test]
    fn new_rejects_bad_input() {
        assert_eq!(
            Grid::new(0, 5, Point::ZERO, Point::new(1, 1)).unwrap_err(),
            GridError::InvalidDimensions { cols: 0, rows: 5 }
        );
        assert_eq!(
            Grid::new(5, 5, Point::ZERO, Point::new(5, 0)).unwrap_err(),
            GridError::OutOfRange(Point::new(5, 0))
        );
        assert!(matches!(
            Grid::new(5, 5, Point::ZERO, Point::ZERO),
            Err(GridError::InvalidMutation { .. })
        ));
    }

    #[test]
    fn fresh_nodes_are_unexplored() {
        let g = grid();
        assert_eq!(g.len(), 25);
        let n = g.node(Point::new(2, 3)).unwrap();
        assert!(!n.wall && !n.visited);
        assert!(n.g.is_infinite());
        assert_eq!(n.h, 0.0);
        assert_eq!(n.parent, None);
    }

    #[test]
    fn toggle_wall_flips() {
        let mut g = grid();
        let p = Point::new(2, 2);
        assert_eq!(g.toggle_wall(p), Ok(true));
        assert!(g.is_wall(p));
        assert_eq!(g.toggle_wall(p), Ok(false));
        assert!(!g.is_wall(p));
    }

    #[test]
    fn toggle_wall_on_start_or_end_is_rejected() {
        let mut g = grid();
        for p in [g.start(), g.end()] {
            assert!(matches!(
                g.toggle_wall(p),
                Err(GridError::InvalidMutation { .. })
            ));
            assert!(!g.is_wall(p));
        }
    }

    #[test]
    fn toggle_wall_out_of_range() {
        let mut g = grid();
        let p = Point::new(-1, 2);
        assert_eq!(g.toggle_wall(p), Err(GridError::OutOfRange(p)));
    }

    #[test]
    fn set_end_onto_wall_is_rejected() {
        let mut g = grid();
        let w = Point::new(3, 1);
        g.toggle_wall(w).unwrap();
        assert!(g.set_end(w).is_err());
        assert_eq!(g.end(), Point::new(4, 4));
    }

    #[test]
    fn set_end_onto_start_or_outside_is_rejected() {
        let mut g = grid();
        assert!(g.set_end(g.start()).is_err());
        assert_eq!(
            g.set_end(Point::new(9, 9)),
            Err(GridError::OutOfRange(Point::new(9, 9)))
        );
        assert_eq!(g.end(), Point::new(4, 4));
        assert_eq!(g.set_end(Point::new(2, 0)), Ok(()));
        assert_eq!(g.end(), Point::new(2, 0));
    }

    #[test]
    fn soft_reset_keeps_walls_and_end() {
        let mut g = grid();
        let w = Point::new(1, 1);
        g.toggle_wall(w).unwrap();
        g.set_end(Point::new(3, 0)).unwrap();
        {
            let n = g.node_at_mut(7);
            n.visited = true;
            n.g = 2.0;
            n.h = 5.0;
            n.parent = Some(6);
            n.on_path = true;
        }
        g.soft_reset();
        assert!(g.is_wall(w));
        assert_eq!(g.end(), Point::new(3, 0));
        assert_eq!(g.node_at(7), &Node::default());
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn cell_kind_precedence() {
        let mut g = grid();
        let w = Point::new(1, 0);
        g.toggle_wall(w).unwrap();
        let path_cell = Point::new(0, 1);
        let seen = Point::new(0, 2);
        let i = g.idx(path_cell).unwrap();
        g.node_at_mut(i).visited = true;
        g.mark_path(&[g.start(), path_cell]);
        let j = g.idx(seen).unwrap();
        g.node_at_mut(j).visited = true;

        assert_eq!(g.cell_kind(g.start()), Some(CellKind::Start));
        assert_eq!(g.cell_kind(g.end()), Some(CellKind::End));
        assert_eq!(g.cell_kind(w), Some(CellKind::Wall));
        assert_eq!(g.cell_kind(path_cell), Some(CellKind::Path));
        assert_eq!(g.cell_kind(seen), Some(CellKind::Visited));
        assert_eq!(g.cell_kind(Point::new(3, 3)), Some(CellKind::Empty));
        assert_eq!(g.cell_kind(Point::new(5, 5)), None);
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        let g = grid();
        let n: Vec<_> = g.neighbors(Point::new(2, 2)).collect();
        assert_eq!(
            n,
            vec![
                Point::new(2, 1),
                Point::new(2, 3),
                Point::new(1, 2),
                Point::new(3, 2),
            ]
        );
        let edge: Vec<_> = g.neighbors(Point::new(4, 0)).collect();
        assert_eq!(edge, vec![Point::new(4, 1), Point::new(3, 0)]);
    }

    #[test]
    fn clear_walls_removes_all() {
        let mut g = grid();
        g.toggle_wall(Point::new(1, 1)).unwrap();
        g.toggle_wall(Point::new(2, 1)).unwrap();
        g.clear_walls();
        assert!(g.bounds().iter().all(|p| !g.is_wall(p)));
    }
}
