//! The [`Grid`] type: a fixed-size rectangle of [`Cell`]s with a derived
//! adjacency index.
//!
//! Dimensions are set at construction and never change; every operation
//! mutates the cells in place. Adjacency is a cache rebuilt from the
//! current wall layout by [`recompute_neighbors`](Grid::recompute_neighbors)
//! rather than maintained incrementally, so a wall edit can never leave a
//! stale neighbor reference behind.

use crate::cell::Cell;
use crate::error::{EndpointIssue, GridError};
use crate::geom::Point;

/// Cardinal offsets in fixed north, south, east, west order.
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// The neighbors of one cell: up to four in-bounds, non-wall positions in
/// north, south, east, west order. A wall cell has no neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    pts: [Point; 4],
    len: u8,
}

impl Neighbors {
    #[inline]
    fn push(&mut self, p: Point) {
        self.pts[self.len as usize] = p;
        self.len += 1;
    }

    /// The neighbors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.pts[..self.len as usize]
    }

    /// Number of neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether there are no neighbors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the neighbors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.as_slice().iter()
    }
}

/// A fixed-size rectangular grid of [`Cell`]s.
///
/// Storage is a flat row-major `Vec`; positions convert to flat indices
/// via [`idx`](Grid::idx) / [`point`](Grid::point). The grid exclusively
/// owns its cells: searches and generators borrow it mutably for the
/// duration of one call, which also rules out overlapping runs on the
/// same grid.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    adjacency: Vec<Neighbors>,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with default
    /// cells and an empty adjacency index. Negative dimensions clamp to
    /// zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let len = (w as usize) * (h as usize);
        Self {
            width: w,
            height: h,
            cells: vec![Cell::default(); len],
            adjacency: vec![Neighbors::default(); len],
        }
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a position to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// The cell at a flat index.
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access to the cell at a flat index.
    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// The cached neighbors of the cell at a flat index.
    ///
    /// Only meaningful after [`recompute_neighbors`](Grid::recompute_neighbors);
    /// a freshly created or reset grid has empty neighbor sets.
    #[inline]
    pub fn neighbors(&self, idx: usize) -> Neighbors {
        self.adjacency[idx]
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (self.point(i), c))
    }

    /// Count the cells satisfying a predicate.
    pub fn count(&self, mut f: impl FnMut(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| f(*c)).count()
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Return every cell to its construction-time default and empty the
    /// adjacency index. Idempotent; never reallocates.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::default();
        }
        for n in self.adjacency.iter_mut() {
            *n = Neighbors::default();
        }
    }

    /// Clear `visited`/`path` on every cell that is not start, end or
    /// wall, leaving the wall layout and endpoints intact. Idempotent.
    pub fn clear_path(&mut self) {
        for c in self.cells.iter_mut() {
            if !c.is_marked() {
                c.visited = false;
                c.path = false;
            }
        }
    }

    /// Clear the wall flag on every cell that is not start or end.
    pub fn clear_walls(&mut self) {
        for c in self.cells.iter_mut() {
            if !c.start && !c.end {
                c.wall = false;
            }
        }
    }

    /// Reset every cell's scratch scores to infinity.
    pub fn reset_scores(&mut self) {
        for c in self.cells.iter_mut() {
            c.clear_scores();
        }
    }

    /// Rebuild the adjacency index from the current wall layout.
    ///
    /// Must be called after any bulk wall change and before a search reads
    /// adjacency. Each open cell gets its in-bounds, non-wall cardinal
    /// neighbors in north, south, east, west order; wall cells get none.
    pub fn recompute_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let mut set = Neighbors::default();
            if !self.cells[i].wall {
                let p = self.point(i);
                for d in DIRS {
                    let n = p + d;
                    match self.idx(n) {
                        Some(ni) if !self.cells[ni].wall => set.push(n),
                        _ => {}
                    }
                }
            }
            self.adjacency[i] = set;
        }
    }

    // -----------------------------------------------------------------------
    // Classification flags
    // -----------------------------------------------------------------------

    /// Flag `p` as the start cell, clearing any previous start.
    ///
    /// The target cell's end/wall flags are cleared so the classification
    /// flags stay mutually exclusive.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        for c in self.cells.iter_mut() {
            c.start = false;
        }
        let c = &mut self.cells[i];
        c.start = true;
        c.end = false;
        c.wall = false;
        Ok(())
    }

    /// Flag `p` as the end cell, clearing any previous end.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        for c in self.cells.iter_mut() {
            c.end = false;
        }
        let c = &mut self.cells[i];
        c.end = true;
        c.start = false;
        c.wall = false;
        Ok(())
    }

    /// Set or clear the wall flag at `p`.
    ///
    /// Out-of-bounds positions and start/end cells are left untouched, so
    /// generators can draw freely without burying an endpoint. Returns
    /// whether the flag actually changed.
    pub fn set_wall(&mut self, p: Point, on: bool) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        let c = &mut self.cells[i];
        if c.start || c.end || c.wall == on {
            return false;
        }
        c.wall = on;
        true
    }

    /// The position flagged as start, if any.
    pub fn start(&self) -> Option<Point> {
        self.cells
            .iter()
            .position(|c| c.start)
            .map(|i| self.point(i))
    }

    /// The position flagged as end, if any.
    pub fn end(&self) -> Option<Point> {
        self.cells.iter().position(|c| c.end).map(|i| self.point(i))
    }

    /// Both endpoints, or `InvalidEndpoints` if either flag is missing.
    pub fn endpoints(&self) -> Result<(Point, Point), GridError> {
        match (self.start(), self.end()) {
            (Some(s), Some(e)) => Ok((s, e)),
            _ => Err(GridError::InvalidEndpoints(EndpointIssue::Missing)),
        }
    }
}
