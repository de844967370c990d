//! Planner configuration.
//!
//! All fields have defaults matching the standard field-visit setup, so an
//! empty JSON object is a valid configuration:
//!
//! ```
//! use visit_planner::config::PlannerConfig;
//!
//! let config = PlannerConfig::from_json_str(r#"{ "last_hour": 20 }"#).unwrap();
//! assert_eq!(config.first_hour, 8);
//! assert_eq!(config.last_hour, 20);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{FiscalCalendar, PeriodCalendar, MAX_WEEKS_PER_YEAR};
use crate::placement::{GridBounds, FIRST_HOUR, LAST_HOUR};

/// Planner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// First hour slot of the grid (24h clock).
    pub first_hour: u32,
    /// Last hour slot of the grid (24h clock, inclusive).
    pub last_hour: u32,
    /// Smallest roster accepted by [`crate::validation::validate_roster`].
    pub min_roster: usize,
    /// Largest roster accepted by [`crate::validation::validate_roster`].
    pub max_roster: usize,
    /// First day of the fiscal year (a Monday).
    pub fiscal_year_start: NaiveDate,
    /// Periods per fiscal year.
    pub periods: u32,
    /// Weeks per period.
    pub weeks_per_period: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            first_hour: FIRST_HOUR,
            last_hour: LAST_HOUR,
            min_roster: 1,
            max_roster: 20,
            fiscal_year_start: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default(),
            periods: 13,
            weeks_per_period: 4,
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "loaded planner configuration");
        Ok(config)
    }

    /// Checks that the values are mutually consistent.
    pub fn validate(&self) -> Result<()> {
        if self.first_hour > self.last_hour || self.last_hour > 23 {
            return Err(PlannerError::InvalidConfig(format!(
                "hour range {}..={} is not within a day",
                self.first_hour, self.last_hour
            )));
        }
        if self.min_roster > self.max_roster {
            return Err(PlannerError::InvalidConfig(format!(
                "roster bounds {}..={} are empty",
                self.min_roster, self.max_roster
            )));
        }
        if !self.fiscal_calendar().is_valid_layout() {
            return Err(PlannerError::InvalidConfig(format!(
                "{} periods of {} weeks do not fit a fiscal year of 1 to {} weeks",
                self.periods, self.weeks_per_period, MAX_WEEKS_PER_YEAR
            )));
        }
        Ok(())
    }

    /// Grid shape for a period of `weeks` weeks.
    pub fn grid(&self, weeks: usize) -> GridBounds {
        GridBounds::new(weeks).with_hours(self.first_hour, self.last_hour)
    }

    /// Fiscal calendar described by this configuration.
    pub fn fiscal_calendar(&self) -> FiscalCalendar {
        FiscalCalendar::new(self.fiscal_year_start).with_layout(self.periods, self.weeks_per_period)
    }

    /// Grid shape of `period`, sized from the fiscal calendar.
    pub fn grid_for_period(&self, period: u32) -> Result<GridBounds> {
        let descriptor = self
            .fiscal_calendar()
            .period(period)
            .ok_or(PlannerError::UnknownPeriod(period))?;
        Ok(self.grid(descriptor.week_count()))
    }
}
