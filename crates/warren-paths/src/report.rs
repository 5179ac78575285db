//! The result of one search run.

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The end cell was reached and a path was marked.
    Found,
    /// The frontier was exhausted without reaching the end.
    Unreachable,
    /// Cancellation was requested; the grid is left partially visited and
    /// no path is marked.
    Aborted,
}

/// Summary of a completed (or aborted) search run.
///
/// Elapsed time is deliberately absent: the caller measures wall-clock
/// time around the call if it wants to display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub status: SearchStatus,
    /// Number of cells removed from the frontier.
    pub explored: usize,
}

impl SearchReport {
    /// Whether the run reached the end cell.
    #[inline]
    pub fn path_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_round_trip() {
        let r = SearchReport {
            status: SearchStatus::Found,
            explored: 42,
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
