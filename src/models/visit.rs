//! Generated and placed visits.
//!
//! A [`GeneratedVisitInstance`] is an obligation in a period's pool.
//! A [`PlacedVisit`] is that obligation committed to a grid slot. Display
//! attributes are copied at commit time so later catalog changes never
//! alter visits that are already on the calendar.

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{ColorPair, HourWindow, VisitScope};

/// Length of generated placed-visit ids.
const VISIT_ID_LEN: usize = 21;

/// One placeable obligation for a specific period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVisitInstance {
    /// Deterministic id: `{rule key}-{entity id}` or `{rule key}-garden`.
    pub id: String,
    /// Key of the rule this instance was expanded from.
    pub visit_type: String,
    /// Resolved display name including entity and duration.
    pub name: String,
    /// Duration in hours.
    pub hours: f64,
    /// Tile colors.
    pub colors: ColorPair,
    /// Entity this visit is owed to. `None` for roster-wide visits.
    pub entity_name: Option<String>,
    /// Cardinality scope of the source rule.
    pub scope: VisitScope,
    /// Uses left in this period.
    pub remaining: u32,
    /// Uses owed in this period.
    pub total: u32,
}

impl GeneratedVisitInstance {
    /// Whether at least one use is left.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.remaining > 0
    }
}

/// Grid coordinates of a visit's anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisitPosition {
    /// 0-based index into the period's week list.
    pub week: usize,
    /// Day of week, 1..=7 with Monday = 1.
    pub day: u8,
    /// Start hour (24h clock).
    pub hour: u32,
}

impl VisitPosition {
    pub fn new(week: usize, day: u8, hour: u32) -> Self {
        Self { week, day, hour }
    }
}

/// A visit committed to the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedVisit {
    /// Opaque unique id.
    pub id: String,
    /// Visit type key.
    pub visit_type: String,
    /// Pool instance this visit consumed, if it came from a pool.
    pub source_instance: Option<String>,
    /// 0-based week index.
    pub week: usize,
    /// Day of week, 1..=7 with Monday = 1.
    pub day: u8,
    /// Start hour (24h clock).
    pub start_hour: u32,
    /// Duration in hours.
    pub hours: f64,
    /// Entity the visit belongs to, if any.
    pub entity_name: Option<String>,
    /// Display name copied from the instance.
    pub name: String,
    /// Colors copied from the instance.
    pub colors: ColorPair,
}

impl PlacedVisit {
    /// Commits `instance` at `position`, copying its display attributes.
    pub fn from_instance(instance: &GeneratedVisitInstance, position: VisitPosition) -> Self {
        Self {
            id: new_visit_id(),
            visit_type: instance.visit_type.clone(),
            source_instance: Some(instance.id.clone()),
            week: position.week,
            day: position.day,
            start_hour: position.hour,
            hours: instance.hours,
            entity_name: instance.entity_name.clone(),
            name: instance.name.clone(),
            colors: instance.colors.clone(),
        }
    }

    /// Occupied interval `[start_hour, start_hour + hours)`.
    #[inline]
    pub fn window(&self) -> HourWindow {
        HourWindow::from_duration(f64::from(self.start_hour), self.hours)
    }

    /// Whether the visit sits on the given week and day.
    #[inline]
    pub fn is_on(&self, week: usize, day: u8) -> bool {
        self.week == week && self.day == day
    }

    /// Anchor position of this visit.
    pub fn position(&self) -> VisitPosition {
        VisitPosition::new(self.week, self.day, self.start_hour)
    }
}

/// Generates a collision-resistant alphanumeric id.
pub fn new_visit_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(VISIT_ID_LEN)
        .map(char::from)
        .collect()
}
