//! Greedy best-first search.

use std::collections::BinaryHeap;

use warren_core::{EventSink, Grid, GridError, Point};

use crate::frontier::NodeRef;
use crate::report::{SearchReport, SearchStatus};
use crate::search::{Heuristic, NO_PARENT, Search};

impl Search {
    /// Greedy best-first search from `start` to `end`, ordered purely by
    /// the Manhattan estimate to the end.
    ///
    /// No g-scores are tracked and there is no relaxation: every time a
    /// not-yet-settled neighbor is seen it is re-queued with
    /// `f = h(neighbor)`, and the first predecessor assignment wins.
    /// Stale pops of already-settled cells are skipped, uncounted. The
    /// returned path is valid but not necessarily shortest.
    pub fn greedy(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        sink: &mut impl EventSink,
    ) -> Result<SearchReport, GridError> {
        let (si, ei) = self.prepare(grid, start, end)?;

        grid.cell_mut(si).f_score = Heuristic::Manhattan.estimate(start, end);

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq = 0u64;
        open.push(NodeRef {
            f: grid.cell(si).f_score,
            seq,
            idx: si,
        });
        seq += 1;

        let mut explored = 0usize;

        while let Some(current) = open.pop() {
            if self.cancelled() {
                return Ok(SearchReport {
                    status: SearchStatus::Aborted,
                    explored,
                });
            }

            let ci = current.idx;
            if self.seen[ci] {
                continue;
            }
            explored += 1;

            if ci == ei {
                self.reconstruct(grid, ei, sink);
                return Ok(SearchReport {
                    status: SearchStatus::Found,
                    explored,
                });
            }

            self.seen[ci] = true;
            self.settle(grid, ci, sink);

            for &np in grid.neighbors(ci).as_slice() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if self.seen[ni] {
                    continue;
                }
                if self.came_from[ni] == NO_PARENT {
                    self.came_from[ni] = ci;
                }
                let h = Heuristic::Manhattan.estimate(np, end);
                grid.cell_mut(ni).f_score = h;
                open.push(NodeRef { f: h, seq, idx: ni });
                seq += 1;
            }
        }

        Ok(SearchReport {
            status: SearchStatus::Unreachable,
            explored,
        })
    }
}
