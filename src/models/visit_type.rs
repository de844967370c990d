//! Visit type rules.
//!
//! A visit type is a category of obligation (audit, coaching, workshop)
//! with a fixed duration, a set of periods in which it applies, and a
//! cardinality scope deciding whether one instance is owed per site or
//! one per roster.

use serde::{Deserialize, Serialize};

/// Background/foreground color pair used when rendering a visit tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Tile background (CSS color string).
    pub background: String,
    /// Tile text color (CSS color string).
    pub text: String,
}

impl ColorPair {
    pub fn new(background: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            text: text.into(),
        }
    }
}

/// Periods in which a visit type is owed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Applicability {
    /// Only the listed period numbers.
    Periods(Vec<u32>),
    /// Every period of the fiscal year.
    AllPeriods,
}

impl Applicability {
    /// Whether the rule applies in `period`.
    pub fn includes(&self, period: u32) -> bool {
        match self {
            Self::Periods(periods) => periods.contains(&period),
            Self::AllPeriods => true,
        }
    }
}

/// How many instances of a visit type are owed per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitScope {
    /// One instance per roster entity.
    PerEntity,
    /// One instance for the whole roster, regardless of its size.
    PerRoster,
}

/// A catalog entry describing one visit type.
///
/// Rules are immutable once the catalog is built. `key` must be unique
/// across a catalog and `hours` must be positive; see
/// [`crate::validation::validate_catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitTypeRule {
    /// Unique rule key (e.g. `"qra"`).
    pub key: String,
    /// Display name.
    pub name: String,
    /// Duration in hours (fractional allowed).
    pub hours: f64,
    /// Tile colors.
    pub colors: ColorPair,
    /// Periods in which this visit is owed.
    pub applicability: Applicability,
    /// Cardinality scope.
    pub scope: VisitScope,
    /// Grouped with the fixed once-per-period visits in the visit bank.
    pub is_static: bool,
}

impl VisitTypeRule {
    /// Creates a per-entity rule applicable in every period.
    pub fn new(key: impl Into<String>, name: impl Into<String>, hours: f64) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            hours,
            colors: ColorPair::new("#009ef4", "white"),
            applicability: Applicability::AllPeriods,
            scope: VisitScope::PerEntity,
            is_static: false,
        }
    }

    /// Sets the tile colors.
    pub fn with_colors(mut self, background: impl Into<String>, text: impl Into<String>) -> Self {
        self.colors = ColorPair::new(background, text);
        self
    }

    /// Restricts the rule to the listed periods.
    pub fn in_periods(mut self, periods: &[u32]) -> Self {
        self.applicability = Applicability::Periods(periods.to_vec());
        self
    }

    /// Makes the rule owed once per roster, and groups it with static visits.
    pub fn per_roster(mut self) -> Self {
        self.scope = VisitScope::PerRoster;
        self.is_static = true;
        self
    }

    /// Whether this rule is owed in `period`.
    #[inline]
    pub fn applies_to(&self, period: u32) -> bool {
        self.applicability.includes(period)
    }

    /// Duration label as shown on tiles: `5h`, `1.5h`.
    pub fn hours_label(&self) -> String {
        format!("{}h", self.hours)
    }
}
