//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// The span of days an activity covers.
///
/// Prints `start → end`, or a single date for one-day activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Number of calendar days covered, both ends included.
    ///
    /// Zero when the range is inverted.
    pub fn days(&self) -> i64 {
        match self.start.until(self.end) {
            Ok(span) if self.end >= self.start => i64::from(span.get_days()) + 1,
            _ => 0,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} → {}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_single_day() {
        let range = DateRange::new(date(2025, 3, 14), date(2025, 3, 14));
        assert_eq!(range.to_string(), "2025-03-14");
        assert_eq!(range.days(), 1);
    }

    #[test]
    fn test_multi_day_across_months() {
        let range = DateRange::new(date(2025, 1, 30), date(2025, 2, 2));
        assert_eq!(range.to_string(), "2025-01-30 → 2025-02-02");
        assert_eq!(range.days(), 4);
    }

    #[test]
    fn test_inverted_range_has_no_days() {
        let range = DateRange::new(date(2025, 2, 2), date(2025, 1, 30));
        assert_eq!(range.days(), 0);
    }
}
