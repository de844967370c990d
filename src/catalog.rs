//! Visit type catalog.
//!
//! A catalog is a closed, immutable set of [`VisitTypeRule`]s. The
//! reference configuration encodes the field-manager obligations:
//!
//! | key | hours | periods | scope |
//! |-----|-------|---------|-------|
//! | `qra` | 5 | audit periods | per site |
//! | `coaching` | 2 | coaching periods | per site |
//! | `guest-experience` | 1.5 | all | per site |
//! | `cash-audit` | 1 | all | per site |
//! | `gm-impact` | 1 | all | per site |
//! | `station-training` | 2 | all | per roster |
//! | `competency-champion` | 1 | all | per roster |
//!
//! Audit and coaching periods are complementary: every period owes
//! exactly one of the two per site.

use serde::{Deserialize, Serialize};

use crate::models::{VisitScope, VisitTypeRule};

/// Periods in which the 5-hour quality audit is owed.
pub const AUDIT_PERIODS: [u32; 4] = [1, 5, 8, 11];

/// Periods in which the 2-hour coaching visit is owed.
pub const COACHING_PERIODS: [u32; 9] = [2, 3, 4, 6, 7, 9, 10, 12, 13];

/// An ordered, immutable set of visit type rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    rules: Vec<VisitTypeRule>,
}

impl Catalog {
    /// Creates a catalog from rules, preserving their order.
    ///
    /// Keys are expected to be unique; check with
    /// [`crate::validation::validate_catalog`] when the rules come from
    /// an untrusted source.
    pub fn new(rules: Vec<VisitTypeRule>) -> Self {
        Self { rules }
    }

    /// The reference field-visit configuration.
    pub fn reference() -> Self {
        Self::new(vec![
            VisitTypeRule::new("qra", "QRA", 5.0)
                .with_colors("#009ef4", "white")
                .in_periods(&AUDIT_PERIODS),
            VisitTypeRule::new("coaching", "Coaching Visit", 2.0)
                .with_colors("#e8b2ee", "black")
                .in_periods(&COACHING_PERIODS),
            VisitTypeRule::new("guest-experience", "Guest Experience", 1.5)
                .with_colors("#f9d000", "black"),
            VisitTypeRule::new("cash-audit", "Cash Audit", 1.0).with_colors("#80ceff", "black"),
            VisitTypeRule::new("gm-impact", "GM Impact", 1.0).with_colors("#da3d9d", "white"),
            VisitTypeRule::new("station-training", "Station Training Workshop", 2.0)
                .with_colors("#959502", "white")
                .per_roster(),
            VisitTypeRule::new("competency-champion", "Competency Champion", 1.0)
                .with_colors("#bcdaff", "black")
                .per_roster(),
        ])
    }

    /// All rules in catalog order.
    pub fn rules(&self) -> &[VisitTypeRule] {
        &self.rules
    }

    /// Looks up a rule by key. A miss means the caller used a key from
    /// outside this catalog.
    pub fn rule(&self, key: &str) -> Option<&VisitTypeRule> {
        self.rules.iter().find(|r| r.key == key)
    }

    /// Rules owed in `period`, in catalog order.
    pub fn rules_for_period(&self, period: u32) -> impl Iterator<Item = &VisitTypeRule> + '_ {
        self.rules.iter().filter(move |r| r.applies_to(period))
    }

    /// Rules grouped with the fixed once-per-period visits.
    pub fn static_rules(&self) -> impl Iterator<Item = &VisitTypeRule> + '_ {
        self.rules.iter().filter(|r| r.is_static)
    }

    /// Rules with the given scope, in catalog order.
    pub fn rules_with_scope(&self, scope: VisitScope) -> impl Iterator<Item = &VisitTypeRule> + '_ {
        self.rules.iter().filter(move |r| r.scope == scope)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}
