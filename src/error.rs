//! Error types.
//!
//! The engine's queries are infallible: an occupied slot is a `false`
//! from [`crate::placement::can_place`], and removing or consuming an
//! unknown id is a no-op. Errors exist only at the boundaries: loading
//! configuration, and the checked drop path of
//! [`crate::state::SchedulingState`].

use thiserror::Error;

/// Crate-level error.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The period calendar does not know this period.
    #[error("unknown period {0}")]
    UnknownPeriod(u32),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Why a dropped visit was not committed.
///
/// Every variant is raised before any mutation, so a rejected drop
/// leaves both the schedule and the pool untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// The dragged instance id is not in the period's pool.
    #[error("visit '{0}' is not in this period's visit bank")]
    UnknownInstance(String),

    /// The instance has no uses left.
    #[error("visit '{0}' has already been scheduled")]
    Exhausted(String),

    /// The target cell is outside the grid, or the visit would run past it.
    #[error("week {week}, day {day}, {hour}:00 is outside the calendar grid")]
    OutOfRange { week: usize, day: u8, hour: u32 },

    /// Another visit overlaps the target window.
    #[error("cannot place visit at week {week}, day {day}, {hour}:00: time slot is occupied")]
    Occupied { week: usize, day: u8, hour: u32 },
}

/// Result alias for fallible planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
