//! Field-visit planning core.
//!
//! Decides which visit obligations exist in a fiscal period for a roster
//! of sites, and whether a visit may be placed on an hourly calendar grid
//! without colliding with another. Rendering, persistence and export are
//! left to the caller; everything here is plain data and synchronous.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `VisitTypeRule`, `RosterEntity`,
//!   `GeneratedVisitInstance`, `PlacedVisit`, `VisitSchedule`,
//!   `PeriodDescriptor`, `HourWindow`
//! - **`catalog`**: The closed set of visit type rules
//! - **`generator`**: Expands the catalog into a period's visit pool
//! - **`placement`**: Collision-checked placement and grid queries
//! - **`state`**: One session's pools and calendars, threaded explicitly
//! - **`validation`**: Integrity checks for catalogs, rosters and schedules
//! - **`summary`**: Week and period figures for export
//!
//! # Example
//!
//! ```
//! use visit_planner::models::{RosterEntity, VisitPosition};
//! use visit_planner::placement::{self, GridBounds};
//! use visit_planner::state::SchedulingState;
//!
//! let mut state = SchedulingState::new(RosterEntity::roster_from_names(["Site A"]));
//! let grid = GridBounds::new(4);
//!
//! state
//!     .drop_visit(1, "qra-rest-0", VisitPosition::new(0, 1, 9), &grid)
//!     .unwrap();
//!
//! let schedule = state.schedule(1).unwrap();
//! assert!(!placement::can_place(schedule, 0, 1, 13, 1.0));
//! assert!(placement::can_place(schedule, 0, 1, 14, 1.0));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod placement;
pub mod state;
pub mod summary;
pub mod validation;

pub use error::{PlacementError, PlannerError};
