//! Spending and consumption projected over each horizon
//!
//! A `Projection` is a pure snapshot computed from a `Habit`: no state is
//! kept between calls and nothing outside the returned value is touched.
//! All scaling starts from the unrounded daily figures, so the projected
//! values relate exactly (week = day x 7, year = day x 365.25) before the
//! final rounding to hundredths.

use num_traits::FromPrimitive;

use crate::calc::{
    amount::{round_hundredths, Amount},
    habit::Habit,
    horizon::Horizon,
};

/// Projected costs and cigarette counts, one entry per horizon
///
/// Costs are rounded to the cent. Daily and weekly counts are exact
/// multiples of the input and stay unrounded; monthly and yearly counts
/// involve the fractional average-month multiplier and are rounded to
/// hundredths like the costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    costs: [Amount; Horizon::COUNT],
    counts: [f64; Horizon::COUNT],
}

impl Projection {
    /// Project a habit over all horizons
    pub fn of(habit: &Habit) -> Self {
        let daily_cost = habit.daily_cost();
        let daily_count = habit.per_day();
        let mut costs = [Amount::default(); Horizon::COUNT];
        let mut counts = [0.0; Horizon::COUNT];
        for i in 0..Horizon::COUNT {
            let h = Horizon::from_usize(i).unwrap();
            costs[i] = Amount::from_units(daily_cost * h.days());
            counts[i] = match h {
                Horizon::Day | Horizon::Week => daily_count * h.days(),
                Horizon::Month | Horizon::Year => round_hundredths(daily_count * h.days()),
            };
        }
        Self { costs, counts }
    }

    /// Projected cost over the given horizon
    pub fn cost(&self, h: Horizon) -> Amount {
        self.costs[h as usize]
    }

    /// Projected number of cigarettes smoked over the given horizon
    pub fn cigarettes(&self, h: Horizon) -> f64 {
        self.counts[h as usize]
    }

    /// How much less the target projection costs over the given horizon
    ///
    /// Negative if the target actually smokes more
    pub fn savings_over(&self, target: &Projection, h: Horizon) -> Amount {
        self.cost(h) - target.cost(h)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use Horizon::*;

    macro_rules! proj {
        ( $p:expr, $n:expr, $d:expr ) => {
            Habit::new($p, $n, $d).unwrap().project()
        };
    }

    macro_rules! costs {
        ( $proj:expr => $d:expr, $w:expr, $m:expr, $y:expr ) => {
            assert_eq!($proj.cost(Day), Amount($d));
            assert_eq!($proj.cost(Week), Amount($w));
            assert_eq!($proj.cost(Month), Amount($m));
            assert_eq!($proj.cost(Year), Amount($y));
        };
    }

    macro_rules! counts {
        ( $proj:expr => $d:expr, $w:expr, $m:expr, $y:expr ) => {
            assert_eq!($proj.cigarettes(Day), $d);
            assert_eq!($proj.cigarettes(Week), $w);
            assert_eq!($proj.cigarettes(Month), $m);
            assert_eq!($proj.cigarettes(Year), $y);
        };
    }

    #[test]
    fn one_pack_per_day() {
        // 7.15 x 30.4375 = 217.628125, 7.15 x 365.25 = 2611.5375
        let proj = proj!(7.15, 29.0, 29.0);
        costs!(proj => 715, 5005, 21763, 261154);
        counts!(proj => 29.0, 203.0, 882.69, 10592.25);
    }

    #[test]
    fn reduced_consumption() {
        let proj = proj!(7.15, 29.0, 10.0);
        assert_eq!(proj.cost(Day), Amount(247));
        assert_eq!(proj.cost(Week), Amount(1726));
        assert_eq!(proj.cost(Month), Amount(7504));
        assert_eq!(proj.cost(Year), Amount(90053));
        counts!(proj => 10.0, 70.0, 304.38, 3652.5);
    }

    #[test]
    fn no_smoking() {
        let proj = proj!(7.15, 29.0, 0.0);
        costs!(proj => 0, 0, 0, 0);
        counts!(proj => 0.0, 0.0, 0.0, 0.0);
    }

    #[test]
    fn scaling_happens_before_rounding() {
        // weekly and yearly costs come from the unrounded daily cost,
        // not from the already-rounded cent value
        let habit = Habit::new(9.99, 23.0, 17.0).unwrap();
        let proj = habit.project();
        let daily = habit.daily_cost();
        assert_eq!(proj.cost(Week), Amount::from_units(daily * 7.0));
        assert_eq!(proj.cost(Month), Amount::from_units(daily * 30.4375));
        assert_eq!(proj.cost(Year), Amount::from_units(daily * 365.25));
    }

    #[test]
    fn daily_and_weekly_counts_are_exact() {
        let proj = proj!(4.5, 19.0, 7.5);
        assert_eq!(proj.cigarettes(Day), 7.5);
        assert_eq!(proj.cigarettes(Week), 7.5 * 7.0);
    }

    #[test]
    fn monotone_in_consumption() {
        let mut prev = proj!(7.15, 29.0, 0.0);
        for d in 1..=60 {
            let next = proj!(7.15, 29.0, d as f64);
            for i in 0..Horizon::COUNT {
                let h = Horizon::from_usize(i).unwrap();
                assert!(next.cost(h) >= prev.cost(h));
                assert!(next.cigarettes(h) >= prev.cigarettes(h));
            }
            prev = next;
        }
    }

    #[test]
    fn savings_against_reduction() {
        let current = proj!(7.15, 29.0, 29.0);
        let reduced = proj!(7.15, 29.0, 10.0);
        assert_eq!(current.savings_over(&reduced, Day), Amount(715 - 247));
        assert_eq!(current.savings_over(&reduced, Year), Amount(261154 - 90053));
        assert!(current.savings_over(&reduced, Month) >= Amount(0));
    }

    #[test]
    fn quitting_saves_everything() {
        let current = proj!(7.15, 29.0, 29.0);
        let quit = proj!(7.15, 29.0, 0.0);
        for i in 0..Horizon::COUNT {
            let h = Horizon::from_usize(i).unwrap();
            assert_eq!(current.savings_over(&quit, h), current.cost(h));
        }
    }

    #[test]
    fn savings_can_go_negative() {
        let current = proj!(7.15, 29.0, 10.0);
        let heavier = proj!(7.15, 29.0, 29.0);
        assert_eq!(current.savings_over(&heavier, Day), Amount(247 - 715));
    }
}
