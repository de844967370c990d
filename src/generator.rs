//! Visit pool generation.
//!
//! Expands a catalog against a period number and a roster into the pool of
//! placeable instances, and tracks their consumption.
//!
//! # Algorithm
//!
//! 1. For each roster entity (roster order), emit one instance per
//!    per-entity rule owed in the period, period-restricted rules first,
//!    then the all-period rules, each group in catalog order.
//! 2. Emit one instance per roster-wide rule owed in the period.
//!
//! Generation is deterministic: the same inputs always yield the same ids,
//! names and counters, so a period can be regenerated at any time.

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{
    Applicability, GeneratedVisitInstance, PlacedVisit, RosterEntity, VisitScope, VisitTypeRule,
};

/// Id suffix for roster-wide instances.
const ROSTER_SENTINEL: &str = "garden";

/// Uses owed per instance in every current rule.
const USES_PER_INSTANCE: u32 = 1;

/// Builds the pool of visits owed in `period` for `roster`.
///
/// Never fails: an empty roster yields only the roster-wide visits.
/// `period` is assumed to be known to the active period calendar.
pub fn generate(
    catalog: &Catalog,
    period: u32,
    roster: &[RosterEntity],
) -> Vec<GeneratedVisitInstance> {
    let owed: Vec<&VisitTypeRule> = catalog.rules_for_period(period).collect();
    let restricted = owed
        .iter()
        .filter(|r| r.scope == VisitScope::PerEntity)
        .filter(|r| matches!(r.applicability, Applicability::Periods(_)));
    let universal = owed
        .iter()
        .filter(|r| r.scope == VisitScope::PerEntity)
        .filter(|r| r.applicability == Applicability::AllPeriods);
    let per_entity: Vec<&VisitTypeRule> = restricted.chain(universal).copied().collect();

    let mut pool = Vec::with_capacity(roster.len() * per_entity.len() + owed.len());

    for entity in roster {
        for rule in &per_entity {
            pool.push(entity_instance(rule, entity));
        }
    }

    for rule in owed.iter().filter(|r| r.scope == VisitScope::PerRoster) {
        pool.push(roster_instance(rule));
    }

    debug!(period, roster = roster.len(), instances = pool.len(), "generated visit pool");
    pool
}

fn entity_instance(rule: &VisitTypeRule, entity: &RosterEntity) -> GeneratedVisitInstance {
    GeneratedVisitInstance {
        id: format!("{}-{}", rule.key, entity.id),
        visit_type: rule.key.clone(),
        name: format!("{} - {} ({})", rule.name, entity.name, rule.hours_label()),
        hours: rule.hours,
        colors: rule.colors.clone(),
        entity_name: Some(entity.name.clone()),
        scope: VisitScope::PerEntity,
        remaining: USES_PER_INSTANCE,
        total: USES_PER_INSTANCE,
    }
}

fn roster_instance(rule: &VisitTypeRule) -> GeneratedVisitInstance {
    GeneratedVisitInstance {
        id: format!("{}-{}", rule.key, ROSTER_SENTINEL),
        visit_type: rule.key.clone(),
        name: format!("{} ({})", rule.name, rule.hours_label()),
        hours: rule.hours,
        colors: rule.colors.clone(),
        entity_name: None,
        scope: VisitScope::PerRoster,
        remaining: USES_PER_INSTANCE,
        total: USES_PER_INSTANCE,
    }
}

/// Uses one unit of `instance_id`.
///
/// Floors at zero. Unknown ids and exhausted instances are a no-op.
pub fn consume(pool: &mut [GeneratedVisitInstance], instance_id: &str) {
    if let Some(instance) = pool.iter_mut().find(|v| v.id == instance_id) {
        instance.remaining = instance.remaining.saturating_sub(1);
    }
}

/// Instances with at least one use left.
///
/// A plain filter over the slice: call it again to restart.
pub fn available_only(
    pool: &[GeneratedVisitInstance],
) -> impl Iterator<Item = &GeneratedVisitInstance> + '_ {
    pool.iter().filter(|v| v.is_available())
}

/// Finds a pool instance by exact id.
pub fn find_instance<'a>(
    pool: &'a [GeneratedVisitInstance],
    instance_id: &str,
) -> Option<&'a GeneratedVisitInstance> {
    pool.iter().find(|v| v.id == instance_id)
}

/// Regenerates the pool, then consumes one use per placed visit.
///
/// A placed visit is charged to an instance with the same visit type and
/// entity name. Its recorded source instance is preferred when it still
/// matches; instance ids are positional, so after a roster edit the same id
/// may name a different site. Placed visits with no matching instance left
/// (site dropped from the roster, type not owed this period) are ignored.
pub fn reconcile<'a, I>(
    catalog: &Catalog,
    period: u32,
    roster: &[RosterEntity],
    placed: I,
) -> Vec<GeneratedVisitInstance>
where
    I: IntoIterator<Item = &'a PlacedVisit>,
{
    let mut pool = generate(catalog, period, roster);
    for visit in placed {
        let charges = |v: &GeneratedVisitInstance| {
            v.is_available() && v.visit_type == visit.visit_type && v.entity_name == visit.entity_name
        };
        let slot = visit
            .source_instance
            .as_deref()
            .and_then(|source| pool.iter().position(|v| v.id == source && charges(v)))
            .or_else(|| pool.iter().position(|v| charges(v)));
        if let Some(idx) = slot {
            pool[idx].remaining -= 1;
        }
    }
    pool
}
