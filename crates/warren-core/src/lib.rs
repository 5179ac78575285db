//! **warren-core** — the grid model shared by the warren pathfinding and
//! maze-generation crates.
//!
//! This crate provides the foundational types: the [`Point`] geometry
//! primitive, the per-position [`Cell`] state record, the [`Grid`] itself
//! with its derived adjacency index, the progress-event plumbing
//! ([`EventSink`], [`EventLog`]) used by searches and generators to report
//! each step, and cooperative cancellation ([`CancelToken`]).

pub mod cell;
pub mod error;
pub mod events;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::{EndpointIssue, GridError};
pub use events::{CancelToken, EventKind, EventLog, EventSink};
pub use geom::Point;
pub use grid::{Grid, Neighbors};
