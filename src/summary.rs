//! Period and week summaries.
//!
//! Figures derived from a period's schedule and pool, as printed in the
//! export footer and shown next to the visit bank.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Visit count | Placed visits in the week |
//! | Scheduled hours | Sum of placed durations |
//! | By type | Placed visits per visit type key |
//! | Owed | Sum of `total` over the pool |
//! | Outstanding | Sum of `remaining` over the pool |
//! | Completion rate | `(owed - outstanding) / owed` |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{GeneratedVisitInstance, VisitSchedule};

/// Figures for one week of a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// 0-based week index.
    pub week: usize,
    pub visit_count: usize,
    pub scheduled_hours: f64,
    /// Placed visits per visit type key.
    pub by_type: BTreeMap<String, usize>,
}

impl WeekSummary {
    /// Summarizes week `week` of `schedule`.
    pub fn calculate(schedule: &VisitSchedule, week: usize) -> Self {
        let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
        let mut scheduled_hours = 0.0;
        let mut visit_count = 0;

        for v in schedule.iter().filter(|v| v.week == week) {
            visit_count += 1;
            scheduled_hours += v.hours;
            *by_type.entry(v.visit_type.clone()).or_insert(0) += 1;
        }

        Self {
            week,
            visit_count,
            scheduled_hours,
            by_type,
        }
    }
}

/// Figures for a whole period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period: u32,
    /// One entry per week, in order.
    pub weeks: Vec<WeekSummary>,
    /// Visits owed this period.
    pub owed: u32,
    /// Visits still waiting in the bank.
    pub outstanding: u32,
    /// Fraction of owed visits placed (0.0..1.0). `1.0` when nothing is owed.
    pub completion_rate: f64,
}

impl PeriodSummary {
    /// Computes the summary for a period of `week_count` weeks.
    pub fn calculate(
        period: u32,
        schedule: &VisitSchedule,
        pool: &[GeneratedVisitInstance],
        week_count: usize,
    ) -> Self {
        let weeks = (0..week_count)
            .map(|w| WeekSummary::calculate(schedule, w))
            .collect();
        let owed: u32 = pool.iter().map(|v| v.total).sum();
        let outstanding: u32 = pool.iter().map(|v| v.remaining).sum();

        let completion_rate = if owed == 0 {
            1.0
        } else {
            f64::from(owed - outstanding) / f64::from(owed)
        };

        Self {
            period,
            weeks,
            owed,
            outstanding,
            completion_rate,
        }
    }

    /// Whether every owed visit has been placed.
    pub fn is_complete(&self) -> bool {
        self.outstanding == 0
    }

    /// Total placed visits across the period's weeks.
    pub fn visit_count(&self) -> usize {
        self.weeks.iter().map(|w| w.visit_count).sum()
    }
}
