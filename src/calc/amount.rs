//! Fixed-point money
//!
//! Costs are manipulated as an integer amount of hundredths of a currency
//! unit, so that once rounded they stay rounded. Conversion from floating
//! point happens in exactly one place (`Amount::from_units`) and applies
//! one rule: round half away from zero.

use std::fmt;
use std::ops;

/// A monetary value in hundredths of a currency unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(pub i64);

impl Amount {
    /// Round a value in currency units to the nearest hundredth,
    /// halves away from zero
    pub fn from_units(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

}

/// Round to the nearest hundredth, halves away from zero
///
/// Same rule as `Amount::from_units`, for quantities that are not money
/// (e.g. cigarette counts averaged over a month)
pub fn round_hundredths(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl ops::Add for Amount {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl ops::AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl ops::Sub for Amount {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{}{}.{:02}E", sign, cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! amt {
        ( $units:expr => $cents:expr ) => {
            assert_eq!(Amount::from_units($units), Amount($cents));
        };
    }

    #[test]
    fn unit_conversion() {
        amt!(7.15 => 715);
        amt!(50.05 => 5005);
        amt!(0.0 => 0);
        amt!(0.004 => 0);
        amt!(0.006 => 1);
        amt!(-2.47 => -247);
        amt!(2611.5375 => 261154);
    }

    macro_rules! shows {
        ( $cents:expr => $repr:expr ) => {
            assert_eq!(&format!("{}", Amount($cents)), $repr);
        };
    }

    #[test]
    fn formatting() {
        shows!(715 => "7.15E");
        shows!(5005 => "50.05E");
        shows!(0 => "0.00E");
        shows!(7 => "0.07E");
        shows!(-247 => "-2.47E");
        shows!(261154 => "2611.54E");
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Amount(715) + Amount(285), Amount(1000));
        assert_eq!(Amount(715) - Amount(247), Amount(468));
        let mut a = Amount(100);
        a += Amount(23);
        assert_eq!(a, Amount(123));
    }

    #[test]
    fn hundredths() {
        assert_eq!(round_hundredths(882.6875), 882.69);
        assert_eq!(round_hundredths(10592.25), 10592.25);
        assert_eq!(round_hundredths(29.0), 29.0);
    }
}
