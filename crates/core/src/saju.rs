use crate::domain::Element;
use chrono::{Datelike, NaiveDate};

/// Maps a birth date to its element.
///
/// Only the day of month is used: `Element::ALL[day % 5]`. This is a
/// deterministic toy rule, not an astrological computation.
pub fn classify(birth_date: NaiveDate) -> Element {
    Element::ALL[(birth_date.day() % 5) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        // January has 31 days, so every day of month is constructible.
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn every_day_of_month_maps_to_day_mod_5() {
        for day in 1..=31 {
            assert_eq!(classify(date(day)), Element::ALL[(day % 5) as usize], "day {day}");
        }
    }

    #[test]
    fn known_days() {
        assert_eq!(classify(date(5)), Element::Wood);
        assert_eq!(classify(date(7)), Element::Earth);
        assert_eq!(classify(date(31)), Element::Fire);
    }

    #[test]
    fn ignores_month_and_year() {
        let a = NaiveDate::from_ymd_opt(1950, 6, 14).unwrap();
        let b = NaiveDate::from_ymd_opt(2031, 11, 14).unwrap();
        assert_eq!(classify(a), classify(b));
        assert_eq!(classify(a), Element::Water);
    }

    #[test]
    fn is_deterministic() {
        let d = NaiveDate::from_ymd_opt(1993, 8, 23).unwrap();
        assert_eq!(classify(d), classify(d));
    }
}
