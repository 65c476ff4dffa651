//! Random wall layouts.

use rand::Rng;

use crate::grid::Grid;

/// Replace the wall layer of `grid` with random walls.
///
/// Every cell other than the start and the end becomes a wall with
/// probability `density`, clamped to `[0, 1]`. Returns the number of walls
/// placed.
pub fn scatter_walls<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, density: f64) -> usize {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    grid.clear_walls();

    let (start, end) = (grid.start(), grid.end());
    let mut placed = 0;
    for p in grid.bounds() {
        if p == start || p == end {
            continue;
        }
        if rng.random_bool(density) && grid.set_wall(p, true).is_ok() {
            placed += 1;
        }
    }
    log::debug!("scattered {placed} walls at density {density:.2}");
    placed
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::testutil::open_grid;

    fn walls(g: &Grid) -> Vec<pathviz_core::Point> {
        g.bounds().iter().filter(|&p| g.is_wall(p)).collect()
    }

    #[test]
    fn full_density_walls_everything_but_the_endpoints() {
        let mut g = open_grid(6, 5);
        let placed = scatter_walls(&mut g, &mut StdRng::seed_from_u64(1), 1.0);
        assert_eq!(placed, 28);
        assert!(!g.is_wall(g.start()));
        assert!(!g.is_wall(g.end()));
    }

    #[test]
    fn zero_density_clears() {
        let mut g = open_grid(6, 5);
        scatter_walls(&mut g, &mut StdRng::seed_from_u64(1), 1.0);
        let placed = scatter_walls(&mut g, &mut StdRng::seed_from_u64(1), 0.0);
        assert_eq!(placed, 0);
        assert!(walls(&g).is_empty());
    }

    #[test]
    fn out_of_range_density_is_clamped() {
        let mut g = open_grid(4, 4);
        assert_eq!(scatter_walls(&mut g, &mut StdRng::seed_from_u64(3), 7.5), 14);
        assert_eq!(scatter_walls(&mut g, &mut StdRng::seed_from_u64(3), -1.0), 0);
        assert_eq!(scatter_walls(&mut g, &mut StdRng::seed_from_u64(3), f64::NAN), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = open_grid(20, 20);
        let mut b = open_grid(20, 20);
        let na = scatter_walls(&mut a, &mut StdRng::seed_from_u64(42), 0.3);
        let nb = scatter_walls(&mut b, &mut StdRng::seed_from_u64(42), 0.3);
        assert_eq!(na, nb);
        assert_eq!(walls(&a), walls(&b));
        assert_eq!(walls(&a).len(), na);
    }
}
