//! Hour-granular time windows.
//!
//! # Time Model
//! Times are clock hours in 24h form (`8.0` = 8 AM). Durations may be
//! fractional (`1.5` = ninety minutes), so windows use `f64`.
//!
//! All windows are half-open: a window that ends at `12.0` and a window
//! that starts at `12.0` touch but do not overlap.

use serde::{Deserialize, Serialize};

/// A time interval `[start, end)` measured in clock hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HourWindow {
    /// Interval start (hours, inclusive).
    pub start: f64,
    /// Interval end (hours, exclusive).
    pub end: f64,
}

impl HourWindow {
    /// Creates a window from explicit bounds.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Creates the window `[start, start + duration)`.
    pub fn from_duration(start: f64, duration: f64) -> Self {
        Self::new(start, start + duration)
    }

    /// Length of this window (hours).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether an hour falls within this window.
    #[inline]
    pub fn contains(&self, hour: f64) -> bool {
        hour >= self.start && hour < self.end
    }

    /// Whether two windows share any instant.
    ///
    /// Covers every relation at once: start inside, end inside, and
    /// containment in either direction. Touching endpoints do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_window() {
        let w = HourWindow::from_duration(9.0, 5.0);
        assert_eq!(w.end, 14.0);
        assert_eq!(w.duration(), 5.0);
        assert!(w.contains(9.0));
        assert!(w.contains(13.0));
        assert!(w.contains(13.5));
        assert!(!w.contains(14.0)); // exclusive end
        assert!(!w.contains(8.0));
    }

    #[test]
    fn test_overlap_relations() {
        let existing = HourWindow::new(10.0, 12.0);

        // starts inside
        assert!(HourWindow::new(11.0, 13.0).overlaps(&existing));
        // ends inside
        assert!(HourWindow::new(9.0, 11.0).overlaps(&existing));
        // contains existing
        assert!(HourWindow::new(9.0, 13.0).overlaps(&existing));
        // contained by existing
        assert!(HourWindow::new(10.5, 11.0).overlaps(&existing));
        // identical
        assert!(existing.overlaps(&existing));
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        let a = HourWindow::new(8.0, 10.0);
        let b = HourWindow::new(10.0, 12.0);
        let c = HourWindow::new(12.0, 14.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(!b.overlaps(&c));
        assert!(!c.overlaps(&b));
    }
}
