//! Depth-first search.

use warren_core::{EventSink, Grid, GridError, Point};

use crate::report::{SearchReport, SearchStatus};
use crate::search::Search;

impl Search {
    /// Depth-first search from `start` to `end`.
    ///
    /// LIFO frontier: the most recently discovered cell is expanded
    /// first, so with the fixed north/south/east/west neighbor order the
    /// west branch is explored before the others. The returned path is
    /// valid but not necessarily shortest.
    pub fn dfs(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        sink: &mut impl EventSink,
    ) -> Result<SearchReport, GridError> {
        let (si, ei) = self.prepare(grid, start, end)?;

        let mut stack: Vec<usize> = vec![si];
        self.seen[si] = true;

        let mut explored = 0usize;

        while let Some(ci) = stack.pop() {
            if self.cancelled() {
                return Ok(SearchReport {
                    status: SearchStatus::Aborted,
                    explored,
                });
            }
            explored += 1;

            if ci == ei {
                self.reconstruct(grid, ei, sink);
                return Ok(SearchReport {
                    status: SearchStatus::Found,
                    explored,
                });
            }

            self.settle(grid, ci, sink);

            for &np in grid.neighbors(ci).as_slice() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if !self.seen[ni] {
                    self.seen[ni] = true;
                    self.came_from[ni] = ci;
                    stack.push(ni);
                }
            }
        }

        Ok(SearchReport {
            status: SearchStatus::Unreachable,
            explored,
        })
    }
}
