//! Fiscal periods and their weeks.
//!
//! The placement engine only needs the number of weeks in the active
//! period, but export and navigation need dates. [`PeriodCalendar`] is the
//! provider seam; [`FiscalCalendar`] is the standard 13 x 4-week layout.
//!
//! # Layout
//! Period `p` (1-based) starts `(p - 1) * weeks_per_period` weeks after the
//! fiscal-year start. Week numbers run 1.. across the whole year.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days in a grid week.
pub const DAYS_PER_WEEK: u8 = 7;

/// Most weeks a fiscal year can hold.
pub const MAX_WEEKS_PER_YEAR: u32 = 53;

/// One week of a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDescriptor {
    /// Week number within the fiscal year (1-based).
    pub number: u32,
    /// First day (Monday).
    pub start: NaiveDate,
    /// Last day (Sunday).
    pub end: NaiveDate,
    /// Dates for Monday through Sunday.
    pub days: Vec<NaiveDate>,
}

impl WeekDescriptor {
    /// Date of a grid day (1..=7, Monday = 1).
    pub fn date_of(&self, day: u8) -> Option<NaiveDate> {
        let idx = usize::from(day).checked_sub(1)?;
        self.days.get(idx).copied()
    }
}

/// A fiscal period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDescriptor {
    /// Period number (1-based).
    pub id: u32,
    /// Display name (`"Period 3"`).
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Weeks in order. Placement week indices address this list.
    pub weeks: Vec<WeekDescriptor>,
}

impl PeriodDescriptor {
    /// Number of weeks in this period.
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Whether `date` falls inside the period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Source of period descriptors.
pub trait PeriodCalendar {
    /// Looks up a period by number.
    fn period(&self, id: u32) -> Option<PeriodDescriptor>;

    /// Number of periods in the fiscal year.
    fn period_count(&self) -> u32;

    /// The period containing `today`, if any.
    fn current_period(&self, today: NaiveDate) -> Option<u32> {
        (1..=self.period_count()).find(|&p| self.period(p).is_some_and(|d| d.contains(today)))
    }

    /// Whether `period` ended before `today`.
    fn is_past_period(&self, period: u32, today: NaiveDate) -> bool {
        self.period(period).is_some_and(|d| d.end < today)
    }
}

/// Fixed-length fiscal calendar (13 periods of 4 weeks by default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalCalendar {
    /// First day of period 1, week 1. Expected to be a Monday.
    pub year_start: NaiveDate,
    pub periods: u32,
    pub weeks_per_period: u32,
}

impl FiscalCalendar {
    /// Creates a 13-period, 4-week calendar starting at `year_start`.
    pub fn new(year_start: NaiveDate) -> Self {
        Self {
            year_start,
            periods: 13,
            weeks_per_period: 4,
        }
    }

    /// Whether the layout fits in one fiscal year.
    pub fn is_valid_layout(&self) -> bool {
        self.periods > 0
            && self.weeks_per_period > 0
            && self
                .periods
                .checked_mul(self.weeks_per_period)
                .is_some_and(|weeks| weeks <= MAX_WEEKS_PER_YEAR)
    }

    /// Overrides the period layout.
    pub fn with_layout(mut self, periods: u32, weeks_per_period: u32) -> Self {
        self.periods = periods;
        self.weeks_per_period = weeks_per_period;
        self
    }

    fn week(&self, number: u32) -> Option<WeekDescriptor> {
        let offset = u64::from(number.checked_sub(1)?) * 7;
        let start = self.year_start.checked_add_days(Days::new(offset))?;
        let days = (0..u64::from(DAYS_PER_WEEK))
            .map(|d| start.checked_add_days(Days::new(d)))
            .collect::<Option<Vec<NaiveDate>>>()?;
        Some(WeekDescriptor {
            number,
            start,
            end: *days.last()?,
            days,
        })
    }
}

impl PeriodCalendar for FiscalCalendar {
    fn period(&self, id: u32) -> Option<PeriodDescriptor> {
        if id == 0 || id > self.periods || !self.is_valid_layout() {
            return None;
        }
        let first_week = (id - 1).checked_mul(self.weeks_per_period)?.checked_add(1)?;
        let last_week = first_week.checked_add(self.weeks_per_period - 1)?;
        let weeks = (first_week..=last_week)
            .map(|n| self.week(n))
            .collect::<Option<Vec<WeekDescriptor>>>()?;
        let start = weeks.first()?.start;
        let end = weeks.last()?.end;

        Some(PeriodDescriptor {
            id,
            name: format!("Period {id}"),
            start,
            end,
            weeks,
        })
    }

    fn period_count(&self) -> u32 {
        self.periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> FiscalCalendar {
        // 2026-01-05 is a Monday
        FiscalCalendar::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_layout() {
        let cal = calendar();
        let p1 = cal.period(1).unwrap();
        assert_eq!(p1.name, "Period 1");
        assert_eq!(p1.week_count(), 4);
        assert_eq!(p1.start, date(2026, 1, 5));
        assert_eq!(p1.end, date(2026, 2, 1));
        assert_eq!(p1.weeks[0].number, 1);
        assert_eq!(p1.weeks[0].days.len(), 7);

        let p2 = cal.period(2).unwrap();
        assert_eq!(p2.weeks[0].number, 5);
        assert_eq!(p2.start, date(2026, 2, 2));
    }

    #[test]
    fn test_unknown_period() {
        let cal = calendar();
        assert!(cal.period(0).is_none());
        assert!(cal.period(14).is_none());
        assert!(cal.period(13).is_some());
    }

    #[test]
    fn test_week_dates() {
        let week = calendar().period(1).unwrap().weeks[1].clone();
        assert_eq!(week.date_of(1), Some(date(2026, 1, 12)));
        assert_eq!(week.date_of(7), Some(date(2026, 1, 18)));
        assert_eq!(week.date_of(0), None);
        assert_eq!(week.date_of(8), None);
    }

    #[test]
    fn test_current_and_past_period() {
        let cal = calendar();
        let today = date(2026, 2, 10);
        assert_eq!(cal.current_period(today), Some(2));
        assert!(cal.is_past_period(1, today));
        assert!(!cal.is_past_period(2, today));
        assert_eq!(cal.current_period(date(2025, 12, 1)), None);
    }

    #[test]
    fn test_oversized_layout_yields_no_period() {
        let cal = calendar().with_layout(2, u32::MAX);
        assert!(!cal.is_valid_layout());
        assert!(cal.period(1).is_none());
        assert!(cal.period(2).is_none());
        assert!(!calendar().with_layout(u32::MAX, 2).is_valid_layout());
        assert!(calendar().with_layout(1, 53).period(1).is_some());

        let far = FiscalCalendar::new(NaiveDate::MAX).with_layout(13, 4);
        assert!(far.period(2).is_none());
    }
}
