//! Calendar age arithmetic for the date-of-birth rules.

use chrono::{Datelike, NaiveDate};

/// Format produced by an HTML date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date-of-birth string as entered in the form.
pub fn parse_dob(dob: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(dob, DATE_FORMAT).ok()
}

/// Completed years between `birth` and `today`.
///
/// The year difference is reduced by one while this year's birthday is still
/// ahead. A birthday falling on `today` counts as completed. Birth dates in
/// the future yield negative ages.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    let month_diff = today.month() as i32 - birth.month() as i32;

    if month_diff < 0 || (month_diff == 0 && today.day() < birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        parse_dob(s).unwrap()
    }

    #[rstest]
    #[case("2006-06-16", 17)]
    #[case("2006-06-15", 18)]
    #[case("2006-06-14", 18)]
    #[case("2006-07-01", 17)]
    #[case("2006-05-31", 18)]
    #[case("1924-06-13", 100)]
    #[case("1923-06-16", 100)]
    #[case("1923-06-15", 101)]
    #[case("2024-06-15", 0)]
    #[case("2025-01-01", -1)]
    fn test_age_on_fixed_day(#[case] dob: &str, #[case] expected: i32) {
        assert_eq!(calculate_age(date(dob), date("2024-06-15")), expected);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date("2004-02-29");
        assert_eq!(calculate_age(birth, date("2022-02-28")), 17);
        assert_eq!(calculate_age(birth, date("2022-03-01")), 18);
        assert_eq!(calculate_age(birth, date("2024-02-29")), 20);
    }

    #[test]
    fn test_parse_dob() {
        assert!(parse_dob("1990-12-31").is_some());
        assert!(parse_dob(" 1990-12-31 ").is_none());
        assert!(parse_dob("1990-02-30").is_none());
        assert!(parse_dob("31/12/1990").is_none());
        assert!(parse_dob("").is_none());
    }
}
