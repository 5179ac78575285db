//! Search algorithms over a warren grid.
//!
//! Six interchangeable algorithms share one contract:
//!
//! - **A\*** with a Manhattan or Euclidean heuristic ([`Search::astar`])
//! - **Breadth-first search** ([`Search::bfs`])
//! - **Depth-first search** ([`Search::dfs`])
//! - **Dijkstra** ([`Search::dijkstra`])
//! - **Greedy best-first** ([`Search::greedy`])
//!
//! Every run validates the endpoints, clears the previous run's output
//! from the grid, rebuilds adjacency, then explores until the end cell is
//! settled or the frontier is exhausted. Settled cells are flagged
//! `visited` in settle order (reported to an optional
//! [`EventSink`](warren_core::EventSink)); on success the reconstructed
//! path is flagged `path`, endpoints excluded. The returned
//! [`SearchReport`] carries the explored-cell count and the outcome.
//!
//! All runs go through [`Search`], which owns reusable scratch buffers so
//! repeated queries on one grid avoid reallocation, and which can carry a
//! [`CancelToken`](warren_core::CancelToken) checked between frontier
//! pops.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod greedy;
mod report;
mod search;

pub use distance::{euclidean, manhattan};
pub use report::{SearchReport, SearchStatus};
pub use search::{Algorithm, Heuristic, Search};
