//! Schedule models.
//!
//! [`VisitSchedule`] is one period's calendar: placed visits in insertion
//! order. Time order is derived at query time (see
//! [`crate::placement::visits_on`]). [`PeriodSchedule`] maps period
//! numbers to their calendars; periods never interact.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::PlacedVisit;

/// Placed visits for a single period, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitSchedule {
    visits: Vec<PlacedVisit>,
}

impl VisitSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates visits in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlacedVisit> {
        self.visits.iter()
    }

    /// Visits as a slice, in insertion order.
    pub fn as_slice(&self) -> &[PlacedVisit] {
        &self.visits
    }

    /// Number of placed visits.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Finds a visit by id.
    pub fn visit(&self, visit_id: &str) -> Option<&PlacedVisit> {
        self.visits.iter().find(|v| v.id == visit_id)
    }

    /// All visits in a week.
    pub fn visits_in_week(&self, week: usize) -> Vec<&PlacedVisit> {
        self.visits.iter().filter(|v| v.week == week).collect()
    }

    /// Total scheduled hours.
    pub fn scheduled_hours(&self) -> f64 {
        self.visits.iter().map(|v| v.hours).sum()
    }

    /// Number of placed visits per visit type key.
    pub fn count_by_type(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for v in &self.visits {
            *counts.entry(v.visit_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub(crate) fn push(&mut self, visit: PlacedVisit) {
        self.visits.push(visit);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&PlacedVisit) -> bool) {
        self.visits.retain(keep);
    }

    /// Removes every visit.
    pub fn clear(&mut self) {
        self.visits.clear();
    }
}

impl<'a> IntoIterator for &'a VisitSchedule {
    type Item = &'a PlacedVisit;
    type IntoIter = std::slice::Iter<'a, PlacedVisit>;

    fn into_iter(self) -> Self::IntoIter {
        self.visits.iter()
    }
}

impl FromIterator<PlacedVisit> for VisitSchedule {
    fn from_iter<I: IntoIterator<Item = PlacedVisit>>(iter: I) -> Self {
        Self {
            visits: iter.into_iter().collect(),
        }
    }
}

/// Calendars for every period a session has touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodSchedule {
    periods: BTreeMap<u32, VisitSchedule>,
}

impl PeriodSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// The calendar for `period`, if any visit was ever recorded there.
    pub fn period(&self, period: u32) -> Option<&VisitSchedule> {
        self.periods.get(&period)
    }

    /// Mutable calendar for `period`, created empty on first access.
    pub fn period_mut(&mut self, period: u32) -> &mut VisitSchedule {
        self.periods.entry(period).or_default()
    }

    /// Clears one period's calendar. Other periods are untouched.
    pub fn clear_period(&mut self, period: u32) {
        if let Some(schedule) = self.periods.get_mut(&period) {
            schedule.clear();
        }
    }

    /// Iterates `(period, calendar)` pairs in period order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &VisitSchedule)> {
        self.periods.iter().map(|(p, s)| (*p, s))
    }

    /// Total placed visits across all periods.
    pub fn total_visits(&self) -> usize {
        self.periods.values().map(VisitSchedule::len).sum()
    }
}
