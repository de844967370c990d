//! Placement engine.
//!
//! Enforces the non-overlap invariant over one period's [`VisitSchedule`]
//! and answers the point queries the grid renderer issues per cell.
//!
//! # Invariant
//! For any two visits on the same week and day, their half-open windows
//! `[start_hour, start_hour + hours)` never intersect. Visits on different
//! weeks, days or periods never interact.
//!
//! # Protocol
//! [`place`] does not re-validate. A caller commits a visit only after
//! [`can_place`] returned `true` in the same synchronous step, and does
//! nothing (no pool consumption either) when it returned `false`.
//!
//! # Preconditions
//! Week, day and hour arguments are assumed to lie inside the active
//! period's grid ([`GridBounds`]). Out-of-range queries simply find
//! nothing; use [`GridBounds::admits`] to reject such input up front.

use serde::{Deserialize, Serialize};

use crate::models::{HourWindow, PlacedVisit, VisitPosition, VisitSchedule, DAYS_PER_WEEK};

/// First bookable hour (8 AM).
pub const FIRST_HOUR: u32 = 8;

/// Last bookable hour slot (10 PM).
pub const LAST_HOUR: u32 = 22;

/// Whether a visit of `hours` may start at `start_hour` on `week`/`day`.
pub fn can_place(
    schedule: &VisitSchedule,
    week: usize,
    day: u8,
    start_hour: u32,
    hours: f64,
) -> bool {
    can_place_window(
        schedule,
        week,
        day,
        HourWindow::from_duration(f64::from(start_hour), hours),
    )
}

/// Whether `window` is free on `week`/`day`.
pub fn can_place_window(schedule: &VisitSchedule, week: usize, day: u8, window: HourWindow) -> bool {
    !schedule
        .iter()
        .any(|v| v.is_on(week, day) && v.window().overlaps(&window))
}

/// Appends `visit` to the schedule without checking for collisions.
pub fn place(schedule: &mut VisitSchedule, visit: PlacedVisit) {
    schedule.push(visit);
}

/// The visit covering `hour` on `week`/`day`, if any.
pub fn find_at(schedule: &VisitSchedule, week: usize, day: u8, hour: u32) -> Option<&PlacedVisit> {
    let hour = f64::from(hour);
    schedule
        .iter()
        .find(|v| v.is_on(week, day) && v.window().contains(hour))
}

/// Removes the visit with `visit_id`.
///
/// Returns whether a visit was removed. Removing an unknown id leaves the
/// schedule unchanged.
pub fn remove(schedule: &mut VisitSchedule, visit_id: &str) -> bool {
    let before = schedule.len();
    schedule.retain(|v| v.id != visit_id);
    schedule.len() != before
}

/// Render state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridCell<'a> {
    /// No visit covers the cell.
    Empty,
    /// The visit starts in this cell; the tile is drawn here.
    Anchor(&'a PlacedVisit),
    /// The cell is covered by a visit that started earlier.
    Continuation(&'a PlacedVisit),
}

impl<'a> GridCell<'a> {
    /// The covering visit, anchor or continuation.
    pub fn visit(&self) -> Option<&'a PlacedVisit> {
        match *self {
            GridCell::Empty => None,
            GridCell::Anchor(v) | GridCell::Continuation(v) => Some(v),
        }
    }
}

/// Classifies a grid cell for rendering.
pub fn cell_at(schedule: &VisitSchedule, week: usize, day: u8, hour: u32) -> GridCell<'_> {
    match find_at(schedule, week, day, hour) {
        None => GridCell::Empty,
        Some(v) if v.start_hour == hour => GridCell::Anchor(v),
        Some(v) => GridCell::Continuation(v),
    }
}

/// Visits on `week`/`day` in start-time order.
pub fn visits_on(schedule: &VisitSchedule, week: usize, day: u8) -> Vec<&PlacedVisit> {
    let mut visits: Vec<&PlacedVisit> = schedule.iter().filter(|v| v.is_on(week, day)).collect();
    visits.sort_by_key(|v| v.start_hour);
    visits
}

/// Shape of one period's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Weeks in the active period.
    pub weeks: usize,
    /// First hour slot (inclusive).
    pub first_hour: u32,
    /// Last hour slot (inclusive). Visits must end by `last_hour + 1`.
    pub last_hour: u32,
}

impl GridBounds {
    /// Standard 8 AM to 10 PM grid for a period of `weeks` weeks.
    pub fn new(weeks: usize) -> Self {
        Self {
            weeks,
            first_hour: FIRST_HOUR,
            last_hour: LAST_HOUR,
        }
    }

    /// Overrides the hour range.
    pub fn with_hours(mut self, first_hour: u32, last_hour: u32) -> Self {
        self.first_hour = first_hour;
        self.last_hour = last_hour;
        self
    }

    /// Hour slots rendered as grid rows.
    pub fn hour_slots(&self) -> impl Iterator<Item = u32> {
        self.first_hour..=self.last_hour
    }

    /// Whether the cell at `position` exists.
    pub fn contains(&self, position: VisitPosition) -> bool {
        position.week < self.weeks
            && (1..=DAYS_PER_WEEK).contains(&position.day)
            && (self.first_hour..=self.last_hour).contains(&position.hour)
    }

    /// Whether a visit of `hours` starting at `position` fits on the grid.
    pub fn admits(&self, position: VisitPosition, hours: f64) -> bool {
        hours > 0.0
            && self.contains(position)
            && f64::from(position.hour) + hours <= f64::from(self.last_hour) + 1.0
    }
}

/// Formats an hour slot as a 12-hour clock label (`8:00 AM`, `12:00 PM`).
pub fn format_time_slot(hour: u32) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        12 => "12:00 PM".to_string(),
        h if h < 12 => format!("{h}:00 AM"),
        h => format!("{}:00 PM", h - 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorPair;

    fn visit(id: &str, week: usize, day: u8, hour: u32, hours: f64) -> PlacedVisit {
        PlacedVisit {
            id: id.into(),
            visit_type: "cash-audit".into(),
            source_instance: None,
            week,
            day,
            start_hour: hour,
            hours,
            entity_name: None,
            name: "Cash Audit".into(),
            colors: ColorPair::new("#80ceff", "black"),
        }
    }

    fn schedule_with(visits: Vec<PlacedVisit>) -> VisitSchedule {
        visits.into_iter().collect()
    }

    #[test]
    fn test_touching_intervals_are_legal() {
        // [10,12) next to [8,10)
        let s = schedule_with(vec![visit("a", 0, 1, 8, 2.0)]);
        assert!(can_place(&s, 0, 1, 10, 2.0));

        // [10,12) next to [12,14)
        let s = schedule_with(vec![visit("b", 0, 1, 12, 2.0)]);
        assert!(can_place(&s, 0, 1, 10, 2.0));
    }

    #[test]
    fn test_overlap_orderings_are_rejected() {
        let s = schedule_with(vec![visit("a", 0, 1, 10, 2.0)]);

        // ends inside existing: [9,11)
        assert!(!can_place(&s, 0, 1, 9, 2.0));
        // starts inside existing: [11,13)
        assert!(!can_place(&s, 0, 1, 11, 2.0));
        // contains existing: [9,13)
        assert!(!can_place(&s, 0, 1, 9, 4.0));
        // contained by existing: [10.5,11)
        assert!(!can_place_window(&s, 0, 1, HourWindow::new(10.5, 11.0)));
        // same start
        assert!(!can_place(&s, 0, 1, 10, 1.0));
    }

    #[test]
    fn test_other_days_and_weeks_do_not_interact() {
        let s = schedule_with(vec![visit("a", 0, 1, 10, 2.0)]);
        assert!(can_place(&s, 0, 2, 10, 2.0));
        assert!(can_place(&s, 1, 1, 10, 2.0));
    }

    #[test]
    fn test_fractional_duration_blocks_partial_hour() {
        // 1.5h at 10 occupies [10, 11.5)
        let s = schedule_with(vec![visit("a", 0, 3, 10, 1.5)]);
        assert!(!can_place(&s, 0, 3, 11, 1.0));
        assert!(can_place(&s, 0, 3, 12, 1.0));
        assert_eq!(find_at(&s, 0, 3, 11).map(|v| v.id.as_str()), Some("a"));
    }

    #[test]
    fn test_find_at_and_remove_round_trip() {
        let mut s = VisitSchedule::new();
        let other = visit("keep", 0, 2, 8, 1.0);
        place(&mut s, other.clone());
        place(&mut s, visit("v", 0, 1, 9, 5.0));

        assert_eq!(find_at(&s, 0, 1, 9).map(|v| v.id.as_str()), Some("v"));
        assert_eq!(find_at(&s, 0, 1, 13).map(|v| v.id.as_str()), Some("v"));
        assert!(find_at(&s, 0, 1, 14).is_none());

        assert!(remove(&mut s, "v"));
        assert!(find_at(&s, 0, 1, 9).is_none());

        let snapshot = s.clone();
        assert!(!remove(&mut s, "v"));
        assert_eq!(s, snapshot);
        assert_eq!(s.visit("keep"), Some(&other));
    }

    #[test]
    fn test_cell_classification() {
        let s = schedule_with(vec![visit("a", 0, 1, 9, 3.0)]);
        assert_eq!(cell_at(&s, 0, 1, 8), GridCell::Empty);
        assert!(matches!(cell_at(&s, 0, 1, 9), GridCell::Anchor(v) if v.id == "a"));
        assert!(matches!(cell_at(&s, 0, 1, 10), GridCell::Continuation(v) if v.id == "a"));
        assert!(matches!(cell_at(&s, 0, 1, 11), GridCell::Continuation(_)));
        assert_eq!(cell_at(&s, 0, 1, 12), GridCell::Empty);
        assert_eq!(cell_at(&s, 0, 1, 11).visit().map(|v| v.start_hour), Some(9));
    }

    #[test]
    fn test_visits_on_is_time_ordered() {
        let s = schedule_with(vec![
            visit("late", 0, 1, 15, 1.0),
            visit("early", 0, 1, 8, 1.0),
            visit("other-day", 0, 2, 9, 1.0),
            visit("mid", 0, 1, 11, 1.0),
        ]);
        let ids: Vec<&str> = visits_on(&s, 0, 1).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "mid", "late"]);
    }

    #[test]
    fn test_grid_bounds() {
        let grid = GridBounds::new(4);
        assert_eq!(grid.hour_slots().count(), 15);
        assert!(grid.contains(VisitPosition::new(3, 7, 22)));
        assert!(!grid.contains(VisitPosition::new(4, 1, 9)));
        assert!(!grid.contains(VisitPosition::new(0, 0, 9)));
        assert!(!grid.contains(VisitPosition::new(0, 8, 9)));
        assert!(!grid.contains(VisitPosition::new(0, 1, 7)));

        assert!(grid.admits(VisitPosition::new(0, 1, 18), 5.0));
        assert!(!grid.admits(VisitPosition::new(0, 1, 19), 5.0));
        assert!(!grid.admits(VisitPosition::new(0, 1, 9), 0.0));
    }

    #[test]
    fn test_grid_bounds_at_hour_limit() {
        let grid = GridBounds::new(1).with_hours(0, u32::MAX);
        assert!(grid.admits(VisitPosition::new(0, 1, u32::MAX), 1.0));
        assert!(!grid.admits(VisitPosition::new(0, 1, u32::MAX), 1.5));
    }

    #[test]
    fn test_format_time_slot() {
        assert_eq!(format_time_slot(8), "8:00 AM");
        assert_eq!(format_time_slot(12), "12:00 PM");
        assert_eq!(format_time_slot(13), "1:00 PM");
        assert_eq!(format_time_slot(22), "10:00 PM");
    }
}
