//! The [`Search`] coordinator and algorithm selection.

use std::fmt;

use log::debug;
use warren_core::{EndpointIssue, EventKind, EventSink, Grid, GridError, Point};

use crate::distance::{euclidean, manhattan};
use crate::report::SearchReport;

/// Heuristic used by A* to bias exploration toward the end cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// Estimated remaining distance from `a` to `b`.
    #[inline]
    pub fn estimate(self, a: Point, b: Point) -> f64 {
        match self {
            Self::Manhattan => manhattan(a, b) as f64,
            Self::Euclidean => euclidean(a, b),
        }
    }
}

/// The selectable search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AstarManhattan,
    AstarEuclidean,
    Bfs,
    Dijkstra,
    Dfs,
    GreedyBfs,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Self::AstarManhattan,
        Self::AstarEuclidean,
        Self::Bfs,
        Self::Dijkstra,
        Self::Dfs,
        Self::GreedyBfs,
    ];

    /// The display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AstarManhattan => "A* (Manhattan)",
            Self::AstarEuclidean => "A* (Euclidean)",
            Self::Bfs => "BFS",
            Self::Dijkstra => "Dijkstra's",
            Self::Dfs => "DFS",
            Self::GreedyBfs => "Greedy BFS",
        }
    }

    /// Look up an algorithm by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sentinel meaning "no predecessor" in the `came_from` buffer.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Coordinator for search runs on a grid.
///
/// Owns the predecessor and seen-set scratch buffers so repeated runs on
/// one grid reuse their allocations, plus the optional cancellation token
/// every algorithm checks between frontier pops.
#[derive(Debug, Default)]
pub struct Search {
    pub(crate) came_from: Vec<usize>,
    pub(crate) seen: Vec<bool>,
    cancel: Option<warren_core::CancelToken>,
}

impl Search {
    /// Create a search coordinator with no cancellation token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search coordinator that stops when `token` is cancelled.
    pub fn with_cancel(token: warren_core::CancelToken) -> Self {
        Self {
            cancel: Some(token),
            ..Self::default()
        }
    }

    /// Run `algo` between two explicit endpoints.
    pub fn run(
        &mut self,
        algo: Algorithm,
        grid: &mut Grid,
        start: Point,
        end: Point,
        sink: &mut impl EventSink,
    ) -> Result<SearchReport, GridError> {
        let report = match algo {
            Algorithm::AstarManhattan => {
                self.astar(grid, start, end, Heuristic::Manhattan, sink)
            }
            Algorithm::AstarEuclidean => {
                self.astar(grid, start, end, Heuristic::Euclidean, sink)
            }
            Algorithm::Bfs => self.bfs(grid, start, end, sink),
            Algorithm::Dijkstra => self.dijkstra(grid, start, end, sink),
            Algorithm::Dfs => self.dfs(grid, start, end, sink),
            Algorithm::GreedyBfs => self.greedy(grid, start, end, sink),
        }?;
        debug!(
            "{algo}: {:?} after exploring {} cells",
            report.status, report.explored
        );
        Ok(report)
    }

    /// Run `algo` between the grid's flagged start and end cells.
    pub fn run_marked(
        &mut self,
        algo: Algorithm,
        grid: &mut Grid,
        sink: &mut impl EventSink,
    ) -> Result<SearchReport, GridError> {
        let (start, end) = grid.endpoints()?;
        self.run(algo, grid, start, end, sink)
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub(crate) fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|t| t.is_cancelled())
    }

    /// Validate the endpoints and put the grid in its pre-run state:
    /// previous output cleared, adjacency rebuilt, scores at infinity,
    /// scratch buffers sized and cleared.
    pub(crate) fn prepare(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
    ) -> Result<(usize, usize), GridError> {
        let si = grid.idx(start).ok_or(GridError::OutOfBounds(start))?;
        let ei = grid.idx(end).ok_or(GridError::OutOfBounds(end))?;
        if si == ei {
            return Err(GridError::InvalidEndpoints(EndpointIssue::Identical(start)));
        }
        if grid.cell(si).wall {
            return Err(GridError::InvalidEndpoints(EndpointIssue::Wall(start)));
        }
        if grid.cell(ei).wall {
            return Err(GridError::InvalidEndpoints(EndpointIssue::Wall(end)));
        }

        grid.clear_path();
        grid.recompute_neighbors();
        grid.reset_scores();

        let n = grid.len();
        self.came_from.clear();
        self.came_from.resize(n, NO_PARENT);
        self.seen.clear();
        self.seen.resize(n, false);
        Ok((si, ei))
    }

    /// Settle a cell: flag it visited and notify the sink.
    #[inline]
    pub(crate) fn settle(&self, grid: &mut Grid, idx: usize, sink: &mut impl EventSink) {
        let p = grid.point(idx);
        grid.cell_mut(idx).visited = true;
        sink.emit(p, EventKind::Visited);
    }

    /// Walk the predecessor chain back from the end, flagging every
    /// intermediate cell as path. Start and end are never flagged.
    pub(crate) fn reconstruct(&self, grid: &mut Grid, end_idx: usize, sink: &mut impl EventSink) {
        let mut ci = self.came_from[end_idx];
        while ci != NO_PARENT {
            let p = grid.point(ci);
            let cell = grid.cell_mut(ci);
            if !cell.start && !cell.end {
                cell.path = true;
                sink.emit(p, EventKind::PathMarked);
            }
            ci = self.came_from[ci];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SearchStatus;
    use warren_core::{CancelToken, EventLog};

    fn open_grid(width: i32, height: i32, start: Point, end: Point) -> Grid {
        let mut g = Grid::new(width, height);
        g.set_start(start).unwrap();
        g.set_end(end).unwrap();
        g
    }

    /// 5x5 grid with column x=2 walled except a single gap at the bottom,
    /// start top-left, end top-right. The only route detours through the
    /// gap at (2, 4).
    fn detour_grid() -> Grid {
        let mut g = open_grid(5, 5, Point::new(0, 0), Point::new(4, 0));
        for y in 0..4 {
            g.set_wall(Point::new(2, y), true);
        }
        g
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algo.name()), Some(algo));
        }
        assert_eq!(Algorithm::from_name("simulated annealing"), None);
    }

    #[test]
    fn open_grid_shortest_paths_have_eight_edges() {
        // 8 edges => 9 cells on the route, 7 of them marked (endpoints
        // excluded).
        for algo in [
            Algorithm::AstarManhattan,
            Algorithm::AstarEuclidean,
            Algorithm::Bfs,
            Algorithm::Dijkstra,
        ] {
            let mut g = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
            let mut search = Search::new();
            let report = search
                .run(algo, &mut g, Point::new(0, 0), Point::new(4, 4), &mut ())
                .unwrap();
            assert!(report.path_found(), "{algo} found no path");
            assert_eq!(g.count(|c| c.path), 7, "{algo} path is not shortest");
        }
    }

    #[test]
    fn dfs_finds_some_path_on_open_grid() {
        let mut g = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
        let mut search = Search::new();
        let report = search
            .run(
                Algorithm::Dfs,
                &mut g,
                Point::new(0, 0),
                Point::new(4, 4),
                &mut (),
            )
            .unwrap();
        assert!(report.path_found());
        // DFS is not required to be shortest.
        assert!(g.count(|c| c.path) >= 7);
    }

    #[test]
    fn every_algorithm_detours_through_the_gap() {
        for algo in Algorithm::ALL {
            let mut g = detour_grid();
            let mut search = Search::new();
            let report = search.run_marked(algo, &mut g, &mut ()).unwrap();
            assert!(report.path_found(), "{algo} found no path");
            assert!(
                g.at(Point::new(2, 4)).unwrap().path,
                "{algo} did not route through the gap"
            );
        }
    }

    #[test]
    fn bfs_explored_count_on_detour_grid_is_exact() {
        // All 21 open cells are reachable and the end is dequeued last;
        // hand-simulating the FIFO expansion gives exactly 21 pops.
        let mut g = detour_grid();
        let mut search = Search::new();
        let report = search.run_marked(Algorithm::Bfs, &mut g, &mut ()).unwrap();
        assert!(report.path_found());
        assert_eq!(report.explored, 21);
        // Shortest detour: 12 edges, so 11 intermediate path cells.
        assert_eq!(g.count(|c| c.path), 11);
    }

    #[test]
    fn enclosed_start_reports_unreachable_component_size() {
        for algo in Algorithm::ALL {
            let mut g = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
            g.set_wall(Point::new(1, 0), true);
            g.set_wall(Point::new(0, 1), true);
            g.set_wall(Point::new(1, 1), true);
            let mut search = Search::new();
            let report = search.run_marked(algo, &mut g, &mut ()).unwrap();
            assert_eq!(report.status, SearchStatus::Unreachable, "{algo}");
            // The start's component is just the start cell itself.
            assert_eq!(report.explored, 1, "{algo}");
            assert_eq!(g.count(|c| c.path), 0, "{algo}");
        }
    }

    #[test]
    fn rerun_on_unchanged_grid_is_deterministic() {
        for algo in Algorithm::ALL {
            let mut g = detour_grid();
            let mut search = Search::new();
            let first = search.run_marked(algo, &mut g, &mut ()).unwrap();
            let second = search.run_marked(algo, &mut g, &mut ()).unwrap();
            assert_eq!(first, second, "{algo}");
        }
    }

    #[test]
    fn identical_endpoints_are_rejected() {
        let mut g = Grid::new(5, 5);
        let mut search = Search::new();
        let err = search
            .run(
                Algorithm::Bfs,
                &mut g,
                Point::new(2, 2),
                Point::new(2, 2),
                &mut (),
            )
            .unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidEndpoints(EndpointIssue::Identical(Point::new(2, 2)))
        );
    }

    #[test]
    fn wall_endpoint_is_rejected() {
        let mut g = Grid::new(5, 5);
        g.set_wall(Point::new(4, 4), true);
        let mut search = Search::new();
        let err = search
            .run(
                Algorithm::AstarManhattan,
                &mut g,
                Point::new(0, 0),
                Point::new(4, 4),
                &mut (),
            )
            .unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidEndpoints(EndpointIssue::Wall(Point::new(4, 4)))
        );
    }

    #[test]
    fn out_of_bounds_endpoint_is_rejected() {
        let mut g = Grid::new(5, 5);
        let mut search = Search::new();
        let err = search
            .run(
                Algorithm::Dijkstra,
                &mut g,
                Point::new(0, 0),
                Point::new(7, 0),
                &mut (),
            )
            .unwrap_err();
        assert_eq!(err, GridError::OutOfBounds(Point::new(7, 0)));
    }

    #[test]
    fn missing_flags_are_rejected_by_run_marked() {
        let mut g = Grid::new(5, 5);
        g.set_start(Point::new(0, 0)).unwrap();
        let mut search = Search::new();
        let err = search
            .run_marked(Algorithm::Bfs, &mut g, &mut ())
            .unwrap_err();
        assert_eq!(err, GridError::InvalidEndpoints(EndpointIssue::Missing));
    }

    #[test]
    fn event_log_matches_report() {
        let mut g = detour_grid();
        let mut search = Search::new();
        let mut log = EventLog::new();
        let report = search.run_marked(Algorithm::Bfs, &mut g, &mut log).unwrap();
        let visited = log
            .events()
            .iter()
            .filter(|(_, k)| *k == EventKind::Visited)
            .count();
        let path = log
            .events()
            .iter()
            .filter(|(_, k)| *k == EventKind::PathMarked)
            .count();
        // The end cell's terminal pop emits no event.
        assert_eq!(visited, report.explored - 1);
        assert_eq!(path, g.count(|c| c.path));
        // The first visitation is the start cell.
        assert_eq!(log.events()[0], (Point::new(0, 0), EventKind::Visited));
    }

    #[test]
    fn pre_cancelled_token_aborts_immediately() {
        for algo in Algorithm::ALL {
            let token = CancelToken::new();
            token.cancel();
            let mut g = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
            let mut search = Search::with_cancel(token);
            let report = search.run_marked(algo, &mut g, &mut ()).unwrap();
            assert_eq!(report.status, SearchStatus::Aborted, "{algo}");
            assert_eq!(report.explored, 0, "{algo}");
            assert_eq!(g.count(|c| c.path), 0, "{algo}");
        }
    }

    #[test]
    fn clear_path_then_reset_clears_everything() {
        let mut g = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
        let mut search = Search::new();
        search
            .run_marked(Algorithm::Bfs, &mut g, &mut ())
            .unwrap();
        assert!(g.count(|c| c.visited) > 0);
        g.clear_path();
        // Start/end keep their flags through clear_path, so only unmarked
        // cells are checked here.
        assert_eq!(g.count(|c| c.visited && !c.is_marked()), 0);
        assert_eq!(g.count(|c| c.path), 0);
        g.reset();
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
    }
}
