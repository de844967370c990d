//! Session scheduling state.
//!
//! [`SchedulingState`] owns everything one planning session mutates: the
//! catalog, the roster, each period's visit pool and each period's
//! calendar. It is threaded explicitly through every call; nothing is
//! global. The whole structure is serializable so a session store can
//! persist it as one record.
//!
//! # Pool policy
//! - A period's pool is generated on first access, reconciled against any
//!   visits already on that period's calendar.
//! - Committing a drop consumes one use of the dragged instance.
//! - Removing a visit rebuilds the pool (regenerate, then consume once per
//!   remaining placed visit) rather than incrementing a counter.
//! - Resetting a period clears its calendar and regenerates a fully
//!   available pool.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::PlacementError;
use crate::generator::{self, available_only, find_instance};
use crate::models::{
    GeneratedVisitInstance, PeriodSchedule, PlacedVisit, RosterEntity, VisitPosition,
    VisitSchedule,
};
use crate::placement::{self, GridBounds};
use crate::summary::PeriodSummary;

/// State of one planning session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulingState {
    catalog: Catalog,
    roster: Vec<RosterEntity>,
    pools: BTreeMap<u32, Vec<GeneratedVisitInstance>>,
    schedules: PeriodSchedule,
}

impl SchedulingState {
    /// Creates a session over the reference catalog.
    pub fn new(roster: Vec<RosterEntity>) -> Self {
        Self::with_catalog(Catalog::reference(), roster)
    }

    /// Creates a session over a custom catalog.
    pub fn with_catalog(catalog: Catalog, roster: Vec<RosterEntity>) -> Self {
        Self {
            catalog,
            roster,
            pools: BTreeMap::new(),
            schedules: PeriodSchedule::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn roster(&self) -> &[RosterEntity] {
        &self.roster
    }

    /// Replaces the roster.
    ///
    /// Generated pools are discarded and rebuilt lazily; placed visits stay.
    pub fn set_roster(&mut self, roster: Vec<RosterEntity>) {
        debug!(sites = roster.len(), "roster replaced, dropping generated pools");
        self.roster = roster;
        self.pools.clear();
    }

    /// Every period's calendar.
    pub fn schedules(&self) -> &PeriodSchedule {
        &self.schedules
    }

    /// The calendar for `period`, if it has ever held a visit.
    pub fn schedule(&self, period: u32) -> Option<&VisitSchedule> {
        self.schedules.period(period)
    }

    /// The visit pool for `period`, generating it on first access.
    pub fn pool(&mut self, period: u32) -> &[GeneratedVisitInstance] {
        self.ensure_pool(period)
    }

    /// Pool instances with uses left.
    pub fn available(&mut self, period: u32) -> impl Iterator<Item = &GeneratedVisitInstance> {
        available_only(self.ensure_pool(period))
    }

    fn ensure_pool(&mut self, period: u32) -> &mut Vec<GeneratedVisitInstance> {
        let Self {
            catalog,
            roster,
            pools,
            schedules,
        } = self;
        pools.entry(period).or_insert_with(|| {
            let placed = schedules.period(period).into_iter().flatten();
            generator::reconcile(catalog, period, roster, placed)
        })
    }

    /// Commits the pool instance `instance_id` at `position`.
    ///
    /// The instance is matched by exact id. Every check runs before any
    /// mutation: on error the calendar and the pool are unchanged.
    pub fn drop_visit(
        &mut self,
        period: u32,
        instance_id: &str,
        position: VisitPosition,
        grid: &GridBounds,
    ) -> Result<PlacedVisit, PlacementError> {
        let placed = match self.check_drop(period, instance_id, position, grid) {
            Ok(placed) => placed,
            Err(err) => {
                warn!(period, instance_id, %err, "rejected visit drop");
                return Err(err);
            }
        };

        placement::place(self.schedules.period_mut(period), placed.clone());
        generator::consume(self.ensure_pool(period), instance_id);
        debug!(
            period,
            instance_id,
            visit_id = %placed.id,
            week = position.week,
            day = position.day,
            hour = position.hour,
            "visit placed"
        );
        Ok(placed)
    }

    fn check_drop(
        &mut self,
        period: u32,
        instance_id: &str,
        position: VisitPosition,
        grid: &GridBounds,
    ) -> Result<PlacedVisit, PlacementError> {
        self.ensure_pool(period);
        let instance = self
            .pools
            .get(&period)
            .and_then(|pool| find_instance(pool, instance_id))
            .ok_or_else(|| PlacementError::UnknownInstance(instance_id.to_string()))?;

        if !instance.is_available() {
            return Err(PlacementError::Exhausted(instance_id.to_string()));
        }

        let VisitPosition { week, day, hour } = position;
        if !grid.admits(position, instance.hours) {
            return Err(PlacementError::OutOfRange { week, day, hour });
        }

        let free = self
            .schedules
            .period(period)
            .map_or(true, |s| placement::can_place(s, week, day, hour, instance.hours));
        if !free {
            return Err(PlacementError::Occupied { week, day, hour });
        }

        Ok(PlacedVisit::from_instance(instance, position))
    }

    /// Removes a placed visit and returns its capacity to the pool.
    ///
    /// Returns whether a visit was removed. Unknown ids are a no-op.
    pub fn remove_visit(&mut self, period: u32, visit_id: &str) -> bool {
        let Some(schedule) = self.schedules_mut(period) else {
            return false;
        };
        if !placement::remove(schedule, visit_id) {
            return false;
        }

        let pool = generator::reconcile(
            &self.catalog,
            period,
            &self.roster,
            self.schedules.period(period).into_iter().flatten(),
        );
        self.pools.insert(period, pool);
        debug!(period, visit_id, "visit removed");
        true
    }

    fn schedules_mut(&mut self, period: u32) -> Option<&mut VisitSchedule> {
        self.schedules.period(period)?;
        Some(self.schedules.period_mut(period))
    }

    /// Clears the period's calendar and restores a fully available pool.
    pub fn reset_period(&mut self, period: u32) {
        self.schedules.clear_period(period);
        let pool = generator::generate(&self.catalog, period, &self.roster);
        self.pools.insert(period, pool);
        debug!(period, "period reset");
    }

    /// Summary of `period` over `week_count` weeks.
    pub fn summary(&mut self, period: u32, week_count: usize) -> PeriodSummary {
        self.ensure_pool(period);
        let empty = VisitSchedule::new();
        let schedule = self.schedules.period(period).unwrap_or(&empty);
        let pool = self.pools.get(&period).map(Vec::as_slice).unwrap_or_default();
        PeriodSummary::calculate(period, schedule, pool, week_count)
    }
}
