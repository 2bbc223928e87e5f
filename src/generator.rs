//! Maze carving

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::Cell;

/// Carves perfect mazes with a randomized recursive backtracker.
///
/// Only odd coordinates are carvable cells; even coordinates are the wall
/// lattice between them, removed one connector at a time. Every carve
/// strictly shrinks the remaining wall set, so the walk always terminates,
/// and because each carvable cell is opened exactly once the result is a
/// spanning tree: one simple path between any two open cells.
pub struct MazeGenerator<R: Rng = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Create a generator from an explicit seed, or from system entropy
    /// when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Neighbor offsets two cells away: up, down, left, right.
    const DIRECTIONS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

    /// Create a generator around any random source, e.g. a mock for tests.
    pub fn with_rng(random: R) -> Self {
        Self { random }
    }

    /// Carve a `rows × cols` maze and stamp the start and end anchors.
    ///
    /// Dimensions must be odd and at least 3; [`crate::Maze`] validates
    /// this before calling.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Vec<Vec<Cell>> {
        debug_assert!(rows >= 3 && cols >= 3 && rows % 2 == 1 && cols % 2 == 1);

        let mut grid = vec![vec![Cell::Wall; cols]; rows];
        grid[1][1] = Cell::Path;
        let mut stack = vec![(1, 1)];

        while let Some((x, y)) = stack.pop() {
            let mut directions = Self::DIRECTIONS;
            directions.shuffle(&mut self.random);

            for (dx, dy) in directions {
                let nx = (x as i32 + dx) as usize;
                let ny = (y as i32 + dy) as usize;

                if nx > 0
                    && nx < rows - 1
                    && ny > 0
                    && ny < cols - 1
                    && grid[nx][ny] == Cell::Wall
                {
                    // Open the connector between the two cells, then the
                    // neighbor itself.
                    grid[(x as i32 + dx / 2) as usize][(y as i32 + dy / 2) as usize] = Cell::Path;
                    grid[nx][ny] = Cell::Path;
                    stack.push((nx, ny));
                }
            }
        }

        // With odd dimensions the walk visits every odd-odd cell, so the
        // end anchor must have been carved.
        debug_assert_eq!(grid[rows - 2][cols - 2], Cell::Path);
        grid[1][1] = Cell::Start;
        grid[rows - 2][cols - 2] = Cell::End;
        grid
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::MazeGenerator;
    use crate::Cell;

    #[test]
    fn border_stays_walled_and_anchors_are_stamped() {
        let grid = MazeGenerator::new(Some(0)).generate(15, 11);

        for y in 0..11 {
            assert_eq!(grid[0][y], Cell::Wall);
            assert_eq!(grid[14][y], Cell::Wall);
        }
        for row in &grid {
            assert_eq!(row[0], Cell::Wall);
            assert_eq!(row[10], Cell::Wall);
        }

        assert_eq!(grid[1][1], Cell::Start);
        assert_eq!(grid[13][9], Cell::End);
        for cell in [Cell::Start, Cell::End] {
            let count = grid.iter().flatten().filter(|&&c| c == cell).count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn carved_region_is_a_spanning_tree() {
        for (rows, cols, seed) in [(5, 5, 1), (9, 15, 2), (21, 21, 3)] {
            let grid = MazeGenerator::new(Some(seed)).generate(rows, cols);

            // Node cells sit on odd-odd coordinates, connector cells have
            // one even coordinate. A tree has exactly nodes - 1 edges.
            let mut nodes = 0;
            let mut connectors = 0;
            for (x, row) in grid.iter().enumerate() {
                for (y, &cell) in row.iter().enumerate() {
                    if cell == Cell::Wall {
                        continue;
                    }
                    if x % 2 == 1 && y % 2 == 1 {
                        nodes += 1;
                    } else {
                        connectors += 1;
                    }
                }
            }
            assert_eq!(nodes, (rows / 2) * (cols / 2), "not every cell carved");
            assert_eq!(connectors, nodes - 1, "open region is not a tree");

            // Connected: a flood fill from the start reaches every open cell.
            let mut seen = vec![vec![false; cols]; rows];
            seen[1][1] = true;
            let mut frontier = vec![(1usize, 1usize)];
            let mut reached = 1;
            while let Some((x, y)) = frontier.pop() {
                for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                    if grid[nx][ny] != Cell::Wall && !seen[nx][ny] {
                        seen[nx][ny] = true;
                        reached += 1;
                        frontier.push((nx, ny));
                    }
                }
            }
            assert_eq!(reached, nodes + connectors);
        }
    }

    #[test]
    fn mock_rng_carves_deterministically() {
        let a = MazeGenerator::with_rng(StepRng::new(0, 0)).generate(7, 7);
        let b = MazeGenerator::with_rng(StepRng::new(0, 0)).generate(7, 7);
        assert_eq!(a, b);
    }
}
