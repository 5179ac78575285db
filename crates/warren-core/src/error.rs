//! Typed failures reported to the caller.

use std::fmt;

use crate::geom::Point;

/// What is wrong with the requested start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointIssue {
    /// The grid has no start or no end cell flagged.
    Missing,
    /// Start and end refer to the same cell.
    Identical(Point),
    /// The given endpoint is flagged as a wall.
    Wall(Point),
}

/// Errors reported by grid operations and search preconditions.
///
/// An unreachable end is *not* an error: a completed search reports it as
/// a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the grid dimensions.
    OutOfBounds(Point),
    /// Start/end missing, identical, or placed on a wall.
    InvalidEndpoints(EndpointIssue),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is outside the grid"),
            Self::InvalidEndpoints(issue) => match issue {
                EndpointIssue::Missing => {
                    write!(f, "invalid endpoints: grid has no start or no end cell")
                }
                EndpointIssue::Identical(p) => {
                    write!(f, "invalid endpoints: start and end are both {p}")
                }
                EndpointIssue::Wall(p) => {
                    write!(f, "invalid endpoints: {p} is a wall")
                }
            },
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = GridError::OutOfBounds(Point::new(9, 9));
        assert_eq!(e.to_string(), "coordinate (9, 9) is outside the grid");
        let e = GridError::InvalidEndpoints(EndpointIssue::Wall(Point::new(1, 2)));
        assert_eq!(e.to_string(), "invalid endpoints: (1, 2) is a wall");
    }
}
