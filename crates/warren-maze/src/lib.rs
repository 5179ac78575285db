//! Maze and obstacle generators for warren grids.
//!
//! Five procedures that populate a grid's wall cells:
//!
//! - **Random** ([`MazeGen::random_maze`]): uniform scatter targeting 25%
//!   of the cells.
//! - **Simple** ([`MazeGen::simple_maze`]): a fixed 200 scatter draws
//!   regardless of grid size.
//! - **Recursive division** ([`MazeGen::recursive_division`]) and its
//!   forced-horizontal / forced-vertical variants: border the grid, then
//!   repeatedly bisect open rectangles with a wall and punch random gaps.
//!
//! Generators mutate wall flags only: start/end cells are never buried,
//! and the transient search output is untouched. None of them guarantees
//! that start and end stay connected. Callers must rebuild the grid's
//! adjacency before searching (searches do this themselves).

use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use warren_core::{EventKind, EventSink, Grid, Point};

mod division;
mod random;

/// The selectable generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeKind {
    Random,
    Simple,
    RecursiveDivision,
    RecursiveDivisionHorizontal,
    RecursiveDivisionVertical,
}

impl MazeKind {
    /// Every generator, in menu order.
    pub const ALL: [MazeKind; 5] = [
        Self::Random,
        Self::Simple,
        Self::RecursiveDivision,
        Self::RecursiveDivisionHorizontal,
        Self::RecursiveDivisionVertical,
    ];

    /// The display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "Random Maze",
            Self::Simple => "Simple Maze",
            Self::RecursiveDivision => "Recursive Division",
            Self::RecursiveDivisionHorizontal => "Recursive Division (Horizontal)",
            Self::RecursiveDivisionVertical => "Recursive Division (Vertical)",
        }
    }

    /// Look up a generator by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maze generator over an arbitrary random source.
pub struct MazeGen<R: Rng> {
    rng: R,
}

impl MazeGen<StdRng> {
    /// Generator seeded for reproducibility, or from OS entropy when no
    /// seed is given.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run the selected generator against `grid`.
    pub fn run(&mut self, kind: MazeKind, grid: &mut Grid, sink: &mut impl EventSink) {
        match kind {
            MazeKind::Random => self.random_maze(grid, sink),
            MazeKind::Simple => self.simple_maze(grid, sink),
            MazeKind::RecursiveDivision => self.recursive_division(grid, sink),
            MazeKind::RecursiveDivisionHorizontal => {
                self.recursive_division_horizontal(grid, sink)
            }
            MazeKind::RecursiveDivisionVertical => self.recursive_division_vertical(grid, sink),
        }
        debug!(
            "{kind}: {} wall cells on a {}x{} grid",
            grid.count(|c| c.wall),
            grid.width(),
            grid.height()
        );
    }

    /// Flag `p` as a wall, notifying the sink when the flag flips.
    /// Endpoints and out-of-bounds positions are skipped.
    pub(crate) fn place_wall(grid: &mut Grid, p: Point, sink: &mut impl EventSink) {
        if grid.set_wall(p, true) {
            sink.emit(p, EventKind::WallPlaced);
        }
    }

    /// Carve `p` back open, notifying the sink when the flag flips.
    pub(crate) fn carve(grid: &mut Grid, p: Point, sink: &mut impl EventSink) {
        if grid.set_wall(p, false) {
            sink.emit(p, EventKind::WallCleared);
        }
    }
}
