// File: src/validator.rs
// Purpose: Rule table for the registration form

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::age::{calculate_age, parse_dob};
use crate::field::Field;
use crate::values::FormValues;

/// Field to message for every field that currently fails. Absent means valid.
pub type ErrorMap = BTreeMap<Field, String>;

pub const NAME_MIN_CHARS: usize = 4;
pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 100;

pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required.";
    pub const NAME_TOO_SHORT: &str = "Name must be at least 4 characters long.";
    pub const NAME_CHARSET: &str = "Name can only contain letters and spaces.";
    pub const EMAIL_REQUIRED: &str = "Email is required.";
    pub const EMAIL_INVALID: &str = "Email is invalid.";
    pub const MOBILE_REQUIRED: &str = "Mobile number is required.";
    pub const MOBILE_INVALID: &str =
        "Mobile number must start with 6, 7, 8, or 9 and be 10 digits long. '+91' is also valid.";
    pub const DOB_REQUIRED: &str = "Date of Birth is required.";
    pub const DOB_INVALID: &str = "Date of Birth is invalid.";
    pub const DOB_TOO_YOUNG: &str = "You must be at least 18 years old.";
    pub const DOB_TOO_OLD: &str = "Age must be less than or equal to 100 years.";
    pub const GENDER_REQUIRED: &str = "Gender is required.";
    pub const CITY_REQUIRED: &str = "City is required.";
    pub const AGREED_REQUIRED: &str = "You must agree to proceed.";
}

// ECMAScript whitespace. Unlike Unicode `\s` it includes U+FEFF and leaves out U+0085.
const JS_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^[a-zA-Z{}]+$", JS_WHITESPACE)).unwrap());

// Unanchored: any `x@y.z` run of non-space characters inside the value matches.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let word = format!(r"[^{}]+", JS_WHITESPACE);
    Regex::new(&format!(r"{w}@{w}\.{w}", w = word)).unwrap()
});

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+91)?[6789][0-9]{9}$").unwrap());

/// Outcome of validating a full snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: ErrorMap,
}

impl ValidationResult {
    pub fn from_errors(errors: ErrorMap) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message for a specific field, if it fails
    pub fn get_error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Validate every field of `values` as of `today`.
pub fn validate(values: &FormValues, today: NaiveDate) -> ValidationResult {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, values, today).map(|msg| (field, msg.to_string())))
        .collect();
    ValidationResult::from_errors(errors)
}

/// First failing rule for one field, or `None` when it passes.
pub fn validate_field(field: Field, values: &FormValues, today: NaiveDate) -> Option<&'static str> {
    match field {
        Field::Name => check_name(&values.name),
        Field::Email => check_email(&values.email),
        Field::Mobile => check_mobile(&values.mobile),
        Field::Dob => check_dob(&values.dob, today),
        Field::Gender => values.gender.is_none().then_some(messages::GENDER_REQUIRED),
        Field::City => values.city.is_none().then_some(messages::CITY_REQUIRED),
        Field::Agreed => (!values.agreed).then_some(messages::AGREED_REQUIRED),
    }
}

pub fn check_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some(messages::NAME_REQUIRED)
    } else if name.chars().count() < NAME_MIN_CHARS {
        Some(messages::NAME_TOO_SHORT)
    } else if !NAME_REGEX.is_match(name) {
        Some(messages::NAME_CHARSET)
    } else {
        None
    }
}

pub fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(messages::EMAIL_REQUIRED)
    } else if !EMAIL_REGEX.is_match(email) {
        Some(messages::EMAIL_INVALID)
    } else {
        None
    }
}

pub fn check_mobile(mobile: &str) -> Option<&'static str> {
    if mobile.is_empty() {
        Some(messages::MOBILE_REQUIRED)
    } else if !MOBILE_REGEX.is_match(mobile) {
        Some(messages::MOBILE_INVALID)
    } else {
        None
    }
}

pub fn check_dob(dob: &str, today: NaiveDate) -> Option<&'static str> {
    if dob.is_empty() {
        return Some(messages::DOB_REQUIRED);
    }
    let Some(birth) = parse_dob(dob) else {
        return Some(messages::DOB_INVALID);
    };

    let age = calculate_age(birth, today);
    if age < MIN_AGE {
        Some(messages::DOB_TOO_YOUNG)
    } else if age > MAX_AGE {
        Some(messages::DOB_TOO_OLD)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{City, Gender};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_values() -> FormValues {
        FormValues {
            name: "Asha Patel".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9123456789".to_string(),
            dob: "1990-04-01".to_string(),
            gender: Some(Gender::Female),
            city: Some(City::Anand),
            agreed: true,
        }
    }

    #[test]
    fn test_all_valid() {
        let result = validate(&valid_values(), today());
        assert!(result.is_valid);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let result = validate(&FormValues::default(), today());
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), Field::ALL.len());
        assert_eq!(result.get_error(Field::Name), Some(messages::NAME_REQUIRED));
        assert_eq!(result.get_error(Field::Dob), Some(messages::DOB_REQUIRED));
        assert_eq!(result.get_error(Field::Agreed), Some(messages::AGREED_REQUIRED));
    }

    #[rstest]
    #[case("", Some(messages::NAME_REQUIRED))]
    #[case("Bob", Some(messages::NAME_TOO_SHORT))]
    #[case("Bob123", Some(messages::NAME_CHARSET))]
    #[case("12", Some(messages::NAME_TOO_SHORT))]
    #[case("Anne-Marie", Some(messages::NAME_CHARSET))]
    #[case("Bobby", None)]
    #[case("Mary Jane", None)]
    #[case("    ", None)]
    fn test_name_rules(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(check_name(name), expected);
    }

    #[rstest]
    #[case("", Some(messages::EMAIL_REQUIRED))]
    #[case("a@b", Some(messages::EMAIL_INVALID))]
    #[case("plainaddress", Some(messages::EMAIL_INVALID))]
    #[case("a b@c.d", None)]
    #[case("a@b.com", None)]
    #[case("first.last@sub.example.org", None)]
    fn test_email_rules(#[case] email: &str, #[case] expected: Option<&str>) {
        assert_eq!(check_email(email), expected);
    }

    #[rstest]
    #[case("", Some(messages::MOBILE_REQUIRED))]
    #[case("5123456789", Some(messages::MOBILE_INVALID))]
    #[case("912345678", Some(messages::MOBILE_INVALID))]
    #[case("91234567890", Some(messages::MOBILE_INVALID))]
    #[case("+91 9123456789", Some(messages::MOBILE_INVALID))]
    #[case("919123456789", Some(messages::MOBILE_INVALID))]
    #[case("9123456789", None)]
    #[case("6000000000", None)]
    #[case("+919123456789", None)]
    fn test_mobile_rules(#[case] mobile: &str, #[case] expected: Option<&str>) {
        assert_eq!(check_mobile(mobile), expected);
    }

    #[test]
    fn test_whitespace_follows_browser_definition() {
        assert_eq!(check_name("Bob\u{FEFF}"), None);
        assert_eq!(check_name("Ann\u{3000}Lee"), None);
        assert_eq!(check_name("Bob\u{0085}"), Some(messages::NAME_CHARSET));
        assert_eq!(check_email("a\u{FEFF}@b.c"), Some(messages::EMAIL_INVALID));
        assert_eq!(check_email("a\u{0085}@b.c"), None);
    }

    #[test]
    fn test_mobile_rejects_non_ascii_digits() {
        assert_eq!(check_mobile("९१२३४५६७८९"), Some(messages::MOBILE_INVALID));
        assert_eq!(check_mobile("9١23456789"), Some(messages::MOBILE_INVALID));
    }

    #[rstest]
    #[case("", Some(messages::DOB_REQUIRED))]
    #[case("not-a-date", Some(messages::DOB_INVALID))]
    #[case(" 1990-12-31 ", Some(messages::DOB_INVALID))]
    #[case("   ", Some(messages::DOB_INVALID))]
    #[case("2006-06-16", Some(messages::DOB_TOO_YOUNG))]
    #[case("2030-01-01", Some(messages::DOB_TOO_YOUNG))]
    #[case("2006-06-15", None)]
    #[case("1924-06-14", None)]
    #[case("1923-06-16", None)]
    #[case("1923-06-15", Some(messages::DOB_TOO_OLD))]
    fn test_dob_rules(#[case] dob: &str, #[case] expected: Option<&str>) {
        assert_eq!(check_dob(dob, today()), expected);
    }

    #[test]
    fn test_dob_validity_moves_with_today() {
        let values = FormValues {
            dob: "2006-06-16".to_string(),
            ..valid_values()
        };
        assert!(!validate(&values, today()).is_valid);
        let next_day = today().succ_opt().unwrap();
        assert!(validate(&values, next_day).is_valid);
    }

    #[test]
    fn test_only_failing_fields_reported() {
        let values = FormValues {
            mobile: "5123456789".to_string(),
            city: None,
            ..valid_values()
        };
        let result = validate(&values, today());
        let failing: Vec<Field> = result.errors.keys().copied().collect();
        assert_eq!(failing, vec![Field::Mobile, Field::City]);
    }

    #[test]
    fn test_errors_serialize_by_field_name() {
        let values = FormValues {
            agreed: false,
            ..valid_values()
        };
        let json = serde_json::to_value(validate(&values, today())).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["errors"]["agreed"], messages::AGREED_REQUIRED);
    }
}
