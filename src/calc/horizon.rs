//! Projection horizons
//!
//! Every projected quantity is the daily figure scaled by a per-horizon
//! number of days. Months and years use the 365.25-day average year so
//! that leap years do not skew long projections.

use num_derive::FromPrimitive;
use std::fmt;

/// Average number of days in a year, leap years included
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// The four periods a projection is reported over
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive)]
pub enum Horizon {
    Day = 0,
    Week,
    Month,
    Year,
}

impl Horizon {
    pub const COUNT: usize = 4;

    /// How many days this horizon spans
    ///
    /// `Month` is the average month (`365.25 / 12`), not any calendar month
    pub fn days(self) -> f64 {
        use Horizon::*;
        match self {
            Day => 1.0,
            Week => 7.0,
            Month => DAYS_PER_YEAR / MONTHS_PER_YEAR,
            Year => DAYS_PER_YEAR,
        }
    }

    /// Row header for this horizon
    pub fn label(self) -> &'static str {
        use Horizon::*;
        match self {
            Day => "Daily",
            Week => "Weekly",
            Month => "Monthly",
            Year => "Yearly",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod test {
    use super::{Horizon::*, *};
    use num_traits::FromPrimitive;

    #[test]
    fn spans() {
        assert_eq!(Day.days(), 1.0);
        assert_eq!(Week.days(), 7.0);
        assert_eq!(Month.days(), 30.4375);
        assert_eq!(Year.days(), 365.25);
    }

    #[test]
    fn indexing() {
        for i in 0..Horizon::COUNT {
            let h = Horizon::from_usize(i).unwrap();
            assert_eq!(h as usize, i);
        }
        assert!(Horizon::from_usize(Horizon::COUNT).is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(Day.label(), "Daily");
        assert_eq!(Year.label(), "Yearly");
    }
}
