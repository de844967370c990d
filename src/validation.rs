//! Input and output validation.
//!
//! Checks structural integrity of the data the planner consumes and hands
//! out. Detects:
//! - Duplicate rule keys and non-positive durations in a catalog
//! - Rules that can never apply
//! - Empty site names, duplicate site ids and out-of-bounds roster sizes
//! - Overlapping or off-grid visits in a finished schedule
//!
//! Every check runs; all problems found are reported together.

use std::collections::{HashMap, HashSet};

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::models::{Applicability, PlacedVisit, RosterEntity, VisitSchedule};
use crate::placement::GridBounds;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two rules or two sites share the same identifier.
    DuplicateId,
    /// A rule has a zero, negative or non-finite duration.
    InvalidDuration,
    /// A rule is restricted to an empty set of periods.
    EmptyApplicability,
    /// A site has a blank name.
    EmptyName,
    /// Roster size is outside the configured bounds.
    RosterSize,
    /// Two visits on the same day overlap.
    Overlap,
    /// A visit lies outside the calendar grid.
    OutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a visit catalog.
///
/// Checks:
/// 1. No duplicate rule keys
/// 2. Every duration is finite and positive
/// 3. No rule is restricted to an empty period list
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();
    let mut keys = HashSet::new();

    for rule in catalog.rules() {
        if !keys.insert(rule.key.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate visit type key: {}", rule.key),
            ));
        }

        if !rule.hours.is_finite() || rule.hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Visit type '{}' has invalid duration {}", rule.key, rule.hours),
            ));
        }

        if matches!(&rule.applicability, Applicability::Periods(p) if p.is_empty()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyApplicability,
                format!("Visit type '{}' applies to no period", rule.key),
            ));
        }
    }

    into_result(errors)
}

/// Validates a roster against the configured size bounds.
pub fn validate_roster(roster: &[RosterEntity], config: &PlannerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if roster.len() < config.min_roster || roster.len() > config.max_roster {
        errors.push(ValidationError::new(
            ValidationErrorKind::RosterSize,
            format!(
                "Roster has {} sites, expected {} to {}",
                roster.len(),
                config.min_roster,
                config.max_roster
            ),
        ));
    }

    let mut ids = HashSet::new();
    for (i, entity) in roster.iter().enumerate() {
        if entity.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Site #{} has an empty name", i + 1),
            ));
        }
        if !ids.insert(entity.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate site ID: {}", entity.id),
            ));
        }
    }

    into_result(errors)
}

/// Validates a finished period schedule before export.
///
/// Checks:
/// 1. Every visit fits on the grid
/// 2. No two visits on the same week and day overlap
pub fn validate_schedule(schedule: &VisitSchedule, grid: &GridBounds) -> ValidationResult {
    let mut errors = Vec::new();

    for v in schedule {
        if !grid.admits(v.position(), v.hours) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Visit '{}' at week {}, day {}, {}:00 ({}h) is outside the grid",
                    v.id, v.week, v.day, v.start_hour, v.hours
                ),
            ));
        }
    }

    let mut by_day: HashMap<(usize, u8), Vec<&PlacedVisit>> = HashMap::new();
    for v in schedule {
        by_day.entry((v.week, v.day)).or_default().push(v);
    }

    // Sweep each day in start order, tracking the latest end seen so far.
    for visits in by_day.values_mut() {
        visits.sort_by_key(|v| v.start_hour);
        let mut latest: Option<&PlacedVisit> = None;
        for &v in visits.iter() {
            if let Some(prev) = latest {
                if v.window().overlaps(&prev.window()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::Overlap,
                        format!(
                            "Visits '{}' and '{}' overlap on week {}, day {}",
                            prev.id, v.id, v.week, v.day
                        ),
                    ));
                }
                if v.window().end <= prev.window().end {
                    continue;
                }
            }
            latest = Some(v);
        }
    }

    into_result(errors)
}
