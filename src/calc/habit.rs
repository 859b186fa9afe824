//! Validated calculator inputs
//!
//! A `Habit` can only be obtained through `Habit::new`, which checks every
//! domain rule. Callers that parsed their own numbers still go through the
//! same validation, there is no unchecked constructor.

use crate::calc::error::InvalidInput;
use crate::calc::projection::Projection;

/// A smoking habit and the pricing it is subject to
///
/// All three fields are in principle real numbers: fractional prices are
/// the normal case, and fractional consumptions ("half a cigarette less
/// every day") are accepted rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Habit {
    pack_price: f64,
    per_pack: f64,
    per_day: f64,
}

impl Habit {
    /// Validate price and consumption into a habit
    pub fn new(pack_price: f64, per_pack: f64, per_day: f64) -> Result<Self, InvalidInput> {
        if !pack_price.is_finite() || pack_price <= 0.0 {
            Err(InvalidInput::PackPrice(pack_price))
        } else if !per_pack.is_finite() || per_pack <= 0.0 {
            Err(InvalidInput::PackSize(per_pack))
        } else if !per_day.is_finite() || per_day < 0.0 {
            Err(InvalidInput::DailyCount(per_day))
        } else {
            Ok(Self { pack_price, per_pack, per_day })
        }
    }

    /// `self.per_day` accessor
    pub fn per_day(&self) -> f64 {
        self.per_day
    }

    /// Cost of one day of smoking, in currency units
    ///
    /// Fractional packs are priced linearly: this is unrounded,
    /// rounding only happens when a projection is built
    pub fn daily_cost(&self) -> f64 {
        if self.per_day == 0.0 {
            0.0
        } else {
            self.per_day / self.per_pack * self.pack_price
        }
    }

    /// Same habit with a different daily consumption
    ///
    /// Used to build the reduced-consumption target of a comparison
    pub fn with_per_day(&self, per_day: f64) -> Result<Self, InvalidInput> {
        Self::new(self.pack_price, self.per_pack, per_day)
    }

    pub fn project(&self) -> Projection {
        Projection::of(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! ok {
        ( $p:expr, $n:expr, $d:expr ) => {
            assert!(Habit::new($p, $n, $d).is_ok());
        };
    }
    // matches! rather than assert_eq! so that NaN payloads compare
    macro_rules! price {
        ( $p:expr, $n:expr, $d:expr ) => {
            assert!(matches!(Habit::new($p, $n, $d), Err(InvalidInput::PackPrice(_))));
        };
    }
    macro_rules! size {
        ( $p:expr, $n:expr, $d:expr ) => {
            assert!(matches!(Habit::new($p, $n, $d), Err(InvalidInput::PackSize(_))));
        };
    }
    macro_rules! count {
        ( $p:expr, $n:expr, $d:expr ) => {
            assert!(matches!(Habit::new($p, $n, $d), Err(InvalidInput::DailyCount(_))));
        };
    }

    #[test]
    fn accepted_domains() {
        ok!(7.15, 29.0, 29.0);
        ok!(7.15, 29.0, 0.0);
        ok!(0.01, 1.0, 0.5);
        ok!(100.0, 20.0, 80.0);
    }

    #[test]
    fn rejected_prices() {
        price!(-5.0, 20.0, 10.0);
        price!(0.0, 20.0, 10.0);
        price!(f64::NAN, 20.0, 10.0);
        price!(f64::INFINITY, 20.0, 10.0);
    }

    #[test]
    fn rejected_sizes() {
        size!(7.15, 0.0, 10.0);
        size!(7.15, -20.0, 10.0);
        size!(7.15, f64::NAN, 10.0);
        size!(7.15, f64::NEG_INFINITY, 10.0);
    }

    #[test]
    fn rejected_counts() {
        count!(7.15, 20.0, -1.0);
        count!(7.15, 20.0, -0.001);
        count!(7.15, 20.0, f64::NAN);
        count!(7.15, 20.0, f64::INFINITY);
    }

    #[test]
    fn rules_check_independently() {
        // the first broken rule is the one reported
        price!(-5.0, 0.0, -1.0);
        size!(7.15, 0.0, -1.0);
        count!(7.15, 20.0, -1.0);
    }

    #[test]
    fn daily_cost_is_linear_in_packs() {
        // one pack per day costs one pack
        let habit = Habit::new(7.15, 29.0, 29.0).unwrap();
        assert_eq!(habit.daily_cost(), 7.15);
        // half a pack per day costs half a pack
        let habit = Habit::new(7.15, 29.0, 14.5).unwrap();
        assert_eq!(habit.daily_cost(), 7.15 / 2.0);
        // no smoking costs nothing
        let habit = Habit::new(7.15, 29.0, 0.0).unwrap();
        assert_eq!(habit.daily_cost(), 0.0);
    }

    #[test]
    fn retargeting_revalidates() {
        let habit = Habit::new(7.15, 29.0, 29.0).unwrap();
        assert_eq!(habit.with_per_day(10.0).unwrap().per_day(), 10.0);
        assert!(matches!(habit.with_per_day(-3.0), Err(InvalidInput::DailyCount(_))));
    }
}
