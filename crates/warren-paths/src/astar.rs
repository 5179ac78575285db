//! A* search.

use std::collections::BinaryHeap;

use warren_core::{EventSink, Grid, GridError, Point};

use crate::frontier::NodeRef;
use crate::report::{SearchReport, SearchStatus};
use crate::search::{Heuristic, Search};

impl Search {
    /// A* from `start` to `end` with the given heuristic.
    ///
    /// Standard g-score relaxation over unit-cost edges. An improved
    /// route to an open cell pushes a fresh frontier entry; the stale
    /// entry is skipped, uncounted, when it surfaces (lazy deletion), so
    /// `explored` counts distinct settles plus the terminal pop.
    pub fn astar(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        heuristic: Heuristic,
        sink: &mut impl EventSink,
    ) -> Result<SearchReport, GridError> {
        let (si, ei) = self.prepare(grid, start, end)?;

        grid.cell_mut(si).g_score = 0.0;
        grid.cell_mut(si).f_score = heuristic.estimate(start, end);

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
            // Stale entry for an already-settled cell.
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
            let current_g = grid.cell(ci).g_score;

            for &np in grid.neighbors(ci).as_slice() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if self.seen[ni] {
                    continue;
                }
                let tentative = current_g + 1.0;
                let neighbor = grid.cell_mut(ni);
                if tentative < neighbor.g_score {
                    neighbor.g_score = tentative;
                    neighbor.f_score = tentative + heuristic.estimate(np, end);
                    self.came_from[ni] = ci;
                    open.push(NodeRef {
                        f: neighbor.f_score,
                        seq,
                        idx: ni,
                    });
                    seq += 1;
                }
            }
        }

        Ok(SearchReport {
            status: SearchStatus::Unreachable,
            explored,
        })
    }
}
