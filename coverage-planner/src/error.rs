//! Planner-level error type

use crate::geometry::Rect;
use thiserror::Error;

/// Errors that can be returned by [`crate::plan`].
///
/// `ObstacleOutOfBounds` and `EmptyTrajectory` from the design notes are
/// soft conditions, not fatal errors — they are surfaced as
/// [`crate::Warning`] values on a successfully-returned (possibly empty)
/// [`crate::Trajectory`] instead.
#[derive(Error, Debug, PartialEq)]
pub enum PlannerError {
    /// One or more planner inputs are out of their valid range.
    #[error("invalid planner parameters - {0}")]
    InvalidParameters(&'static str),
    /// Self-check in S6 found a waypoint strictly inside a forbidden
    /// rectangle. Indicates an implementation bug, not a caller error.
    #[error("collision self-check failed: waypoint {index} lies inside forbidden rect {rect:?}")]
    CollisionDetected { index: usize, rect: Rect },
}
