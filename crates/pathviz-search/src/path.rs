use pathviz_core::Point;

use crate::grid::Grid;

/// Failure to rebuild a path from parent links.
///
/// Only reachable when asking for a path after a search that did not find
/// `end`; treat it as a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("no parent chain leads from {end} back to the start")]
    NoPath { end: Point },
}

/// Walk parent links back from `end` and return the path ordered from the
/// start to `end`, both included.
///
/// The walk is bounded by the number of cells, so corrupted links cannot
/// loop forever.
pub fn reconstruct(grid: &Grid, end: Point) -> Result<Vec<Point>, PathError> {
    let no_path = PathError::NoPath { end };
    let start_idx = grid.idx(grid.start()).ok_or(no_path)?;
    let mut ci = grid.idx(end).ok_or(no_path)?;

    let mut path = vec![end];
    for _ in 0..grid.len() {
        if ci == start_idx {
            path.reverse();
            return Ok(path);
        }
        let Some(pi) = grid.node_at(ci).parent else {
            break;
        };
        ci = pi;
        path.push(grid.point(ci));
    }
    Err(no_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::open_grid;

    #[test]
    fn follows_parents_to_start() {
        let mut g = open_grid(3, 3);
        // (0,0) <- (1,0) <- (1,1) <- (2,1) <- (2,2)
        let links = [((1, 0), (0, 0)), ((1, 1), (1, 0)), ((2, 1), (1, 1)), ((2, 2), (2, 1))];
        for ((cx, cy), (px, py)) in links {
            let ci = g.idx(Point::new(cx, cy)).unwrap();
            let pi = g.idx(Point::new(px, py)).unwrap();
            g.node_at_mut(ci).parent = Some(pi);
        }
        let path = reconstruct(&g, Point::new(2, 2)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn start_alone_is_a_path() {
        let g = open_grid(3, 3);
        assert_eq!(reconstruct(&g, g.start()), Ok(vec![g.start()]));
    }

    #[test]
    fn missing_parent_is_no_path() {
        let g = open_grid(3, 3);
        let end = g.end();
        assert_eq!(reconstruct(&g, end), Err(PathError::NoPath { end }));
    }

    #[test]
    fn chain_not_reaching_start_is_no_path() {
        let mut g = open_grid(3, 3);
        let ci = g.idx(Point::new(2, 2)).unwrap();
        let pi = g.idx(Point::new(2, 1)).unwrap();
        g.node_at_mut(ci).parent = Some(pi);
        assert!(reconstruct(&g, Point::new(2, 2)).is_err());
    }

    #[test]
    fn cyclic_links_terminate() {
        let mut g = open_grid(3, 3);
        let a = g.idx(Point::new(1, 1)).unwrap();
        let b = g.idx(Point::new(2, 1)).unwrap();
        g.node_at_mut(a).parent = Some(b);
        g.node_at_mut(b).parent = Some(a);
        assert!(reconstruct(&g, Point::new(1, 1)).is_err());
    }

    #[test]
    fn outside_end_is_no_path() {
        let g = open_grid(3, 3);
        assert!(reconstruct(&g, Point::new(7, 7)).is_err());
    }
}
