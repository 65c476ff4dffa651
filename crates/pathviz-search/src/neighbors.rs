use pathviz_core::{Point, Range};

/// Iterator over the in-bounds cardinal neighbours of a cell, in the fixed
/// order up, down, left, right.
///
/// The order decides traversal tie-breaks, so every strategy sees the same
/// sequence. Walls are not filtered here.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Point,
    bounds: Range,
    next: usize,
}

impl Neighbors {
    pub(crate) fn new(center: Point, bounds: Range) -> Self {
        // A centre outside the bounds has no neighbours at all.
        let next = if bounds.contains(center) {
            0
        } else {
            Point::CARDINALS.len()
        };
        Self {
            center,
            bounds,
            next,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some(&d) = Point::CARDINALS.get(self.next) {
            self.next += 1;
            let p = self.center + d;
            if self.bounds.contains(p) {
                return Some(p);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_four_in_order() {
        let n: Vec<_> = Neighbors::new(Point::new(1, 1), Range::with_size(3, 3)).collect();
        assert_eq!(
            n,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn corner_cell_keeps_order_of_survivors() {
        let n: Vec<_> = Neighbors::new(Point::new(0, 0), Range::with_size(3, 3)).collect();
        assert_eq!(n, vec![Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn outside_center_yields_nothing() {
        assert_eq!(
            Neighbors::new(Point::new(-1, 0), Range::with_size(3, 3)).count(),
            0
        );
    }
}
