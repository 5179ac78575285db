//! Recursive-division carving.
//!
//! All three variants wall the grid's outer border first, then bisect the
//! open space with wall lines and punch random gaps in each. The generic
//! variant alternates split axes by region shape; the forced variants
//! always split the same axis at the midpoint. Gap draws are independent
//! and may coincide, so a wall can end up with fewer effective gaps than
//! drawn — an accepted outcome, as is a start/end pair that the carving
//! happens to separate.

use rand::{Rng, RngExt};
use warren_core::{EventSink, Grid, Point};

use crate::MazeGen;

impl<R: Rng> MazeGen<R> {
    /// Recursive division over shape-chosen split axes.
    ///
    /// Regions are inclusive `[min_row, max_row] x [min_col, max_col]`
    /// spans. A region stops subdividing when either dimension is 5 or
    /// less. The larger dimension is split (ties split rows, drawing a
    /// horizontal wall); the split line lands at least 2 cells in from
    /// each region edge, and gets 3 gap draws. Both children inherit the
    /// split line in their bounds, matching the carver this reproduces.
    pub fn recursive_division(&mut self, grid: &mut Grid, sink: &mut impl EventSink) {
        grid.clear_walls();
        Self::add_border(grid, sink);
        self.divide(grid, 0, grid.height() - 1, 0, grid.width() - 1, sink);
    }

    fn divide(
        &mut self,
        grid: &mut Grid,
        min_row: i32,
        max_row: i32,
        min_col: i32,
        max_col: i32,
        sink: &mut impl EventSink,
    ) {
        if max_row - min_row <= 5 || max_col - min_col <= 5 {
            return;
        }

        let horizontal = (max_row - min_row) >= (max_col - min_col);
        if horizontal {
            let wall_row = self.rng.random_range(min_row + 2..max_row - 2);
            for col in min_col + 1..max_col {
                Self::place_wall(grid, Point::new(col, wall_row), sink);
            }
            for _ in 0..3 {
                let gap = self.rng.random_range(min_col + 1..max_col - 1);
                Self::carve(grid, Point::new(gap, wall_row), sink);
            }
            self.divide(grid, min_row, wall_row, min_col, max_col, sink);
            self.divide(grid, wall_row, max_row, min_col, max_col, sink);
        } else {
            let wall_col = self.rng.random_range(min_col + 2..max_col - 2);
            for row in min_row + 1..max_row {
                Self::place_wall(grid, Point::new(wall_col, row), sink);
            }
            for _ in 0..3 {
                let gap = self.rng.random_range(min_row + 1..max_row - 1);
                Self::carve(grid, Point::new(wall_col, gap), sink);
            }
            self.divide(grid, min_row, max_row, min_col, wall_col, sink);
            self.divide(grid, min_row, max_row, wall_col, max_col, sink);
        }
    }

    /// Recursive division with horizontal walls only: each span of rows
    /// splits at its midpoint, the wall crosses the full grid width, and
    /// 4 gap draws land on interior columns so the border stays closed.
    /// Recursion stops when the span is 3 rows or less.
    pub fn recursive_division_horizontal(&mut self, grid: &mut Grid, sink: &mut impl EventSink) {
        grid.clear_walls();
        Self::add_border(grid, sink);
        if grid.width() < 3 {
            return;
        }
        self.divide_rows(grid, 0, grid.height() - 1, sink);
    }

    fn divide_rows(&mut self, grid: &mut Grid, top: i32, bottom: i32, sink: &mut impl EventSink) {
        if bottom - top <= 3 {
            return;
        }
        let mid = (top + bottom) / 2;
        for col in 0..grid.width() {
            Self::place_wall(grid, Point::new(col, mid), sink);
        }
        for _ in 0..4 {
            let gap = self.rng.random_range(1..grid.width() - 1);
            Self::carve(grid, Point::new(gap, mid), sink);
        }
        self.divide_rows(grid, top, mid - 1, sink);
        self.divide_rows(grid, mid + 1, bottom, sink);
    }

    /// Recursive division with vertical walls only; the column-axis
    /// mirror of [`recursive_division_horizontal`](Self::recursive_division_horizontal).
    pub fn recursive_division_vertical(&mut self, grid: &mut Grid, sink: &mut impl EventSink) {
        grid.clear_walls();
        Self::add_border(grid, sink);
        if grid.height() < 3 {
            return;
        }
        self.divide_cols(grid, 0, grid.width() - 1, sink);
    }

    fn divide_cols(&mut self, grid: &mut Grid, left: i32, right: i32, sink: &mut impl EventSink) {
        if right - left <= 3 {
            return;
        }
        let mid = (left + right) / 2;
        for row in 0..grid.height() {
            Self::place_wall(grid, Point::new(mid, row), sink);
        }
        for _ in 0..4 {
            let gap = self.rng.random_range(1..grid.height() - 1);
            Self::carve(grid, Point::new(mid, gap), sink);
        }
        self.divide_cols(grid, left, mid - 1, sink);
        self.divide_cols(grid, mid + 1, right, sink);
    }

    /// Wall the four outer edges, skipping start/end cells.
    fn add_border(grid: &mut Grid, sink: &mut impl EventSink) {
        let w = grid.width();
        let h = grid.height();
        for y in 0..h {
            Self::place_wall(grid, Point::new(0, y), sink);
            Self::place_wall(grid, Point::new(w - 1, y), sink);
        }
        for x in 0..w {
            Self::place_wall(grid, Point::new(x, 0), sink);
            Self::place_wall(grid, Point::new(x, h - 1), sink);
        }
    }
}
