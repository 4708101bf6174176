use crate::grid::Cell;
use rand::Rng;

/// Rejection sampling gives up after this many tries and falls back to
/// picking from the free cells directly.
const MAX_REROLLS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
    pub alive: bool,
}

impl Default for Food {
    fn default() -> Self {
        Self {
            position: Cell::default(),
            alive: false,
        }
    }
}

impl Food {
    /// Places the food on a uniformly random cell of the `grid_size` field
    /// for which `occupied` is false, and marks it alive.
    ///
    /// Returns `false`, leaving the food dead, when no free cell exists.
    pub fn respawn<R, F>(&mut self, rng: &mut R, grid_size: u32, occupied: F) -> bool
    where
        R: Rng,
        F: Fn(Cell) -> bool,
    {
        let n = grid_size as i32;
        for _ in 0..MAX_REROLLS {
            let candidate = Cell::new(rng.gen_range(0..n), rng.gen_range(0..n));
            if !occupied(candidate) {
                self.place(candidate);
                return true;
            }
        }

        let free: Vec<Cell> = (0..n)
            .flat_map(|y| (0..n).map(move |x| Cell::new(x, y)))
            .filter(|&cell| !occupied(cell))
            .collect();
        if free.is_empty() {
            return false;
        }
        let pick = free[rng.gen_range(0..free.len())];
        self.place(pick);
        true
    }

    fn place(&mut self, cell: Cell) {
        self.position = cell;
        self.alive = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn respawn_avoids_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::default();
        // Everything but the bottom row is taken.
        let occupied = |c: Cell| c.y < 4;
        for _ in 0..200 {
            food.alive = false;
            assert!(food.respawn(&mut rng, 5, occupied));
            assert!(food.alive);
            assert_eq!(food.position.y, 4);
        }
    }

    #[test]
    fn respawn_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::default();
        let hole = Cell::new(2, 1);
        assert!(food.respawn(&mut rng, 3, |c| c != hole));
        assert_eq!(food.position, hole);
    }

    #[test]
    fn respawn_fails_on_full_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut food = Food::default();
        assert!(!food.respawn(&mut rng, 3, |_| true));
        assert!(!food.alive);
    }

    #[test]
    fn respawn_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut food = Food::default();
        for _ in 0..500 {
            assert!(food.respawn(&mut rng, 6, |_| false));
            assert!(food.position.in_bounds(6));
        }
    }
}
