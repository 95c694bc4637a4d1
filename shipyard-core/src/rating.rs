//! Rating derivation.

use chrono::{Datelike, NaiveDateTime};

use crate::validator::MAX_PRODUCTION_YEAR;

const RATING_SCALE: f64 = 80.0;
const USED_DISCOUNT: f64 = 0.5;

/// Derive a ship's rating from its speed, used flag and production date.
///
/// Newer ships rate higher; used ships get half the score. The result is
/// rounded half-up to two decimals.
pub fn compute_rating(speed: f64, is_used: bool, prod_date: NaiveDateTime) -> f64 {
    let discount = if is_used { USED_DISCOUNT } else { 1.0 };
    let age = f64::from(MAX_PRODUCTION_YEAR - prod_date.year() + 1);
    round2(RATING_SCALE * speed * discount / age)
}

fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn produced(year: i32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, 3, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn new_ship_from_year_3000() {
        assert_eq!(compute_rating(0.5, false, produced(3000)), 2.0);
        assert_eq!(compute_rating(0.5, true, produced(3000)), 1.0);
    }

    #[test]
    fn used_discount_halves_rating() {
        for (speed, year) in [(0.8, 3019), (0.5, 3015), (0.25, 3011), (0.99, 3019)] {
            let fresh = compute_rating(speed, false, produced(year));
            let used = compute_rating(speed, true, produced(year));
            assert_eq!(used, fresh / 2.0, "speed {speed} year {year}");
        }
    }

    #[test]
    fn rating_has_two_decimals_and_is_deterministic() {
        for year in [2800, 2900, 3000, 3018, 3019] {
            for speed in [0.01, 0.13, 0.37, 0.5, 0.77, 0.99] {
                for is_used in [false, true] {
                    let rating = compute_rating(speed, is_used, produced(year));
                    let scaled = rating * 100.0;
                    assert!((scaled - scaled.round()).abs() < 1e-6);
                    assert_eq!(rating, compute_rating(speed, is_used, produced(year)));
                }
            }
        }
    }

    #[test]
    fn rounds_half_up() {
        // 80 * 0.01 / 32 = 0.025
        assert_eq!(compute_rating(0.01, false, produced(2988)), 0.03);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.124), 0.12);
    }

    #[test]
    fn oldest_ships_rate_lowest() {
        assert_eq!(compute_rating(0.99, false, produced(2800)), 0.36);
        assert_eq!(compute_rating(0.99, false, produced(3019)), 79.2);
    }
}
