//! Breadth-first search.

use std::collections::VecDeque;

use warren_core::{EventSink, Grid, GridError, Point};

use crate::report::{SearchReport, SearchStatus};
use crate::search::Search;

impl Search {
    /// Breadth-first search from `start` to `end`.
    ///
    /// FIFO frontier; cells are marked seen when enqueued, so each cell
    /// enters the frontier at most once and the first discovery wins the
    /// predecessor slot. Returns a shortest path in edge count.
    pub fn bfs(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        sink: &mut impl EventSink,
    ) -> Result<SearchReport, GridError> {
        let (si, ei) = self.prepare(grid, start, end)?;

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);
        self.seen[si] = true;

        let mut explored = 0usize;

        while let Some(ci) = queue.pop_front() {
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
                    queue.push_back(ni);
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
    fn bfs_visits_in_distance_order() {
        let mut g = Grid::new(4, 1);
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_end(Point::new(3, 0)).unwrap();
        let mut log = warren_core::EventLog::new();
        let mut search = Search::new();
        let report = search
            .bfs(&mut g, Point::new(0, 0), Point::new(3, 0), &mut log)
            .unwrap();
        assert!(report.path_found());
        assert_eq!(report.explored, 4);
        let visited: Vec<Point> = log
            .events()
            .iter()
            .filter(|(_, k)| *k == warren_core::EventKind::Visited)
            .map(|(p, _)| *p)
            .collect();
        assert_eq!(
            visited,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn bfs_path_is_shortest_around_an_obstacle() {
        let mut g = Grid::new(5, 3);
        g.set_start(Point::new(0, 1)).unwrap();
        g.set_end(Point::new(4, 1)).unwrap();
        g.set_wall(Point::new(2, 0), true);
        g.set_wall(Point::new(2, 1), true);
        let mut search = Search::new();
        let report = search
            .bfs(&mut g, Point::new(0, 1), Point::new(4, 1), &mut ())
            .unwrap();
        assert!(report.path_found());
        // Detour below the wall: 6 edges, 5 intermediate cells.
        assert_eq!(g.count(|c| c.path), 5);
    }
}
