//! Progress events and cooperative cancellation.
//!
//! Searches and generators report each step to an [`EventSink`] so that a
//! caller driving a display can animate progress. Sinks are synchronous:
//! the algorithms call [`EventSink::emit`] and move on, they never wait on
//! a consumer. Pacing between steps is entirely the consumer's concern and
//! does not affect the final grid state or the returned counts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::geom::Point;

/// What happened at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A search settled the cell.
    Visited,
    /// Path reconstruction marked the cell.
    PathMarked,
    /// A generator placed a wall.
    WallPlaced,
    /// A generator carved a gap in a wall.
    WallCleared,
}

/// Receiver for per-step progress notifications.
pub trait EventSink {
    /// Called once per visitation or wall change, in order.
    fn emit(&mut self, pos: Point, kind: EventKind);
}

/// The discard sink: attach when no animation feed is wanted.
impl EventSink for () {
    #[inline]
    fn emit(&mut self, _pos: Point, _kind: EventKind) {}
}

/// A sink that records every event in order.
///
/// Consuming the log with `into_iter` yields the finite, non-restartable
/// playback sequence a renderer can animate at its own pace.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<(Point, EventKind)>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The recorded events, in emission order.
    pub fn events(&self) -> &[(Point, EventKind)] {
        &self.events
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, pos: Point, kind: EventKind) {
        self.events.push((pos, kind));
    }
}

impl IntoIterator for EventLog {
    type Item = (Point, EventKind);
    type IntoIter = std::vec::IntoIter<(Point, EventKind)>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

/// Cooperative cancellation flag.
///
/// Clone the token and hand one copy to the search; flipping it from any
/// thread makes the search stop between frontier pops and report an
/// aborted outcome instead of unreachable.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_records_in_order() {
        let mut log = EventLog::new();
        log.emit(Point::new(0, 0), EventKind::Visited);
        log.emit(Point::new(1, 0), EventKind::PathMarked);
        assert_eq!(log.len(), 2);
        let seq: Vec<_> = log.into_iter().collect();
        assert_eq!(seq[0], (Point::new(0, 0), EventKind::Visited));
        assert_eq!(seq[1], (Point::new(1, 0), EventKind::PathMarked));
    }

    #[test]
    fn cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
