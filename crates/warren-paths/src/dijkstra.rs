//! Dijkstra's algorithm.

use std::collections::BinaryHeap;

use warren_core::{EventSink, Grid, GridError, Point};

use crate::frontier::NodeRef;
use crate::report::{SearchReport, SearchStatus};
use crate::search::Search;

impl Search {
    /// Dijkstra's algorithm from `start` to `end` over unit-cost edges.
    ///
    /// Duplicate frontier entries are handled by lazy deletion: every pop
    /// is counted in `explored`, then cells already settled (the cell's
    /// `visited` flag doubles as the settled marker) are skipped.
    pub fn dijkstra(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        sink: &mut impl EventSink,
    ) -> Result<SearchReport, GridError> {
        let (si, ei) = self.prepare(grid, start, end)?;

        grid.cell_mut(si).distance = 0.0;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq = 0u64;
        open.push(NodeRef {
            f: 0.0,
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
            explored += 1;
            if grid.cell(ci).visited {
                continue;
            }
            grid.cell_mut(ci).visited = true;

            if ci == ei {
                self.reconstruct(grid, ei, sink);
                return Ok(SearchReport {
                    status: SearchStatus::Found,
                    explored,
                });
            }
            sink.emit(grid.point(ci), warren_core::EventKind::Visited);

            let current_dist = grid.cell(ci).distance;

            for &np in grid.neighbors(ci).as_slice() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if grid.cell(ni).visited {
                    continue;
                }
                let next = current_dist + 1.0;
                let neighbor = grid.cell_mut(ni);
                if next < neighbor.distance {
                    neighbor.distance = next;
                    self.came_from[ni] = ci;
                    open.push(NodeRef {
                        f: next,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dijkstra_matches_bfs_path_length() {
        let mut g = Grid::new(7, 7);
        g.set_start(Point::new(0, 3)).unwrap();
        g.set_end(Point::new(6, 3)).unwrap();
        for y in 0..6 {
            g.set_wall(Point::new(3, y), true);
        }
        let mut search = Search::new();
        let dij = search
            .dijkstra(&mut g, Point::new(0, 3), Point::new(6, 3), &mut ())
            .unwrap();
        let dij_len = g.count(|c| c.path);
        let bfs = search
            .bfs(&mut g, Point::new(0, 3), Point::new(6, 3), &mut ())
            .unwrap();
        assert!(dij.path_found() && bfs.path_found());
        assert_eq!(dij_len, g.count(|c| c.path));
    }

    #[test]
    fn dijkstra_settles_end_cell() {
        // Unlike the other algorithms, Dijkstra flags the end cell as
        // visited before the termination check.
        let mut g = Grid::new(3, 1);
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_end(Point::new(2, 0)).unwrap();
        let mut search = Search::new();
        let report = search
            .dijkstra(&mut g, Point::new(0, 0), Point::new(2, 0), &mut ())
            .unwrap();
        assert!(report.path_found());
        assert!(g.at(Point::new(2, 0)).unwrap().visited);
    }

    #[test]
    fn distances_increase_by_one_along_the_route() {
        let mut g = Grid::new(5, 1);
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_end(Point::new(4, 0)).unwrap();
        let mut search = Search::new();
        search
            .dijkstra(&mut g, Point::new(0, 0), Point::new(4, 0), &mut ())
            .unwrap();
        for x in 0..5 {
            assert_eq!(g.at(Point::new(x, 0)).unwrap().distance, x as f64);
        }
    }
}
