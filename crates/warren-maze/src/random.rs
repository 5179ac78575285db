//! Uniform random wall scattering.

use rand::{Rng, RngExt};
use warren_core::{EventSink, Grid, Point};

use crate::MazeGen;

impl<R: Rng> MazeGen<R> {
    /// Scatter walls over roughly 25% of the grid.
    ///
    /// Cells are drawn uniformly with replacement, so duplicate draws
    /// land on already-walled cells and the true density may fall a
    /// little under the target. Connectivity is not guaranteed.
    pub fn random_maze(&mut self, grid: &mut Grid, sink: &mut impl EventSink) {
        grid.clear_walls();
        let target = (grid.len() as f64 * 0.25) as usize;
        self.scatter(grid, target, sink);
    }

    /// Scatter a fixed 200 wall draws regardless of grid size.
    pub fn simple_maze(&mut self, grid: &mut Grid, sink: &mut impl EventSink) {
        grid.clear_walls();
        self.scatter(grid, 200, sink);
    }

    fn scatter(&mut self, grid: &mut Grid, draws: usize, sink: &mut impl EventSink) {
        if grid.is_empty() {
            return;
        }
        for _ in 0..draws {
            let x = self.rng.random_range(0..grid.width());
            let y = self.rng.random_range(0..grid.height());
            Self::place_wall(grid, Point::new(x, y), sink);
        }
    }
}
