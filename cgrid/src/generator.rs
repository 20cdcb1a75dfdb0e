use log::debug;
use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{
    coord::Coord,
    error::{GridError, Result},
    grid::{CellKind, Grid},
};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub const DEFAULT_OPEN_PROBABILITY: f64 = 0.7;

/// Creates the generator from `seed`, or from a fresh random seed. The seed actually used is
/// returned too, so the run can be reproduced.
pub fn seeded_random(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

/// Fills the inside of a grid with walls, each cell independently.
///
/// There is no connectivity analysis, so the result doesn't have to be solvable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generator {
    open_probability: f64,
}

impl Generator {
    pub fn new(open_probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&open_probability) {
            return Err(GridError::InvalidProbability(open_probability));
        }

        Ok(Self { open_probability })
    }

    pub fn open_probability(&self) -> f64 {
        self.open_probability
    }

    /// Redraws every interior cell. Border cells and the current endpoints are left as they are.
    pub fn fill(&self, grid: &mut Grid, rng: &mut Random) {
        let Coord(rows, cols) = grid.size();
        let endpoints = [grid.start, grid.end];

        for pos in Coord::iter_fill(grid.size()) {
            let interior = pos.0 > 0 && pos.1 > 0 && pos.0 < rows - 1 && pos.1 < cols - 1;
            if !interior || endpoints.contains(&Some(pos)) {
                continue;
            }

            let kind = if rng.gen::<f64>() < self.open_probability {
                CellKind::Open
            } else {
                CellKind::Wall
            };
            grid.cells[pos].set_kind(kind);
        }

        debug!(
            "filled {}x{} grid, {} open and {} wall cells",
            rows,
            cols,
            grid.count(CellKind::Open),
            grid.count(CellKind::Wall)
        );
    }

    /// New grid, filled, with random endpoints placed.
    pub fn generate(&self, rows: usize, columns: usize, rng: &mut Random) -> Result<Grid> {
        let mut grid = Grid::new(rows, columns)?;
        self.fill(&mut grid, rng);
        grid.choose_random_start_and_end(rng)?;
        Ok(grid)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            open_probability: DEFAULT_OPEN_PROBABILITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};

    use super::*;

    #[test]
    fn rejects_bad_probability() {
        assert_eq!(
            Generator::new(1.5),
            Err(GridError::InvalidProbability(1.5))
        );
        assert!(Generator::new(-0.1).is_err());
        assert!(Generator::new(f64::NAN).is_err());
        assert!(Generator::new(0.0).is_ok());
        assert!(Generator::new(1.0).is_ok());
    }

    #[test]
    fn fill_keeps_border() {
        let mut rng = Random::seed_from_u64(42);
        let mut grid = Grid::new(12, 9).unwrap();
        Generator::new(1.0).unwrap().fill(&mut grid, &mut rng);

        for pos in Coord::iter_fill(grid.size()) {
            let expected = if grid.is_border(pos) {
                CellKind::Wall
            } else {
                CellKind::Open
            };
            assert_eq!(grid.kind(pos), Ok(expected));
        }
    }

    #[test]
    fn fill_extremes() {
        let mut rng = Random::seed_from_u64(1);
        let mut grid = Grid::new(10, 10).unwrap();

        Generator::new(0.0).unwrap().fill(&mut grid, &mut rng);
        assert_eq!(grid.count(CellKind::Wall), 100);

        Generator::new(1.0).unwrap().fill(&mut grid, &mut rng);
        assert_eq!(grid.count(CellKind::Open), 64);
    }

    #[test]
    fn fill_skips_endpoints() {
        let mut rng = Random::seed_from_u64(3);
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_start(Coord(1, 1)).unwrap();
        grid.set_end(Coord(3, 3)).unwrap();

        Generator::new(0.0).unwrap().fill(&mut grid, &mut rng);
        assert_eq!(grid.kind(Coord(1, 1)), Ok(CellKind::Start));
        assert_eq!(grid.kind(Coord(3, 3)), Ok(CellKind::End));
        assert_eq!(grid.count(CellKind::Wall), 23);
    }

    #[test]
    fn roughly_follows_probability() {
        let mut rng = Random::seed_from_u64(99);
        let mut grid = Grid::new(102, 102).unwrap();
        Generator::default().fill(&mut grid, &mut rng);

        let open = grid.count(CellKind::Open) as f64 / (100.0 * 100.0);
        assert!((open - DEFAULT_OPEN_PROBABILITY).abs() < 0.05, "{}", open);
    }

    #[test]
    fn same_seed_same_grid() {
        let generator = Generator::default();
        let a = generator
            .generate(15, 15, &mut Random::seed_from_u64(5))
            .unwrap();
        let b = generator
            .generate(15, 15, &mut Random::seed_from_u64(5))
            .unwrap();

        assert_eq!(a.render(), b.render());
        assert_eq!(a.endpoints(), b.endpoints());
    }

    #[test]
    fn seeded_random_reports_seed() {
        let (_, seed) = seeded_random(Some(1234));
        assert_eq!(seed, 1234);

        let (mut a, seed) = seeded_random(None);
        let mut b = Random::seed_from_u64(seed);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
