// File: src/values.rs
// Purpose: Snapshot of everything the user has entered

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::field::{City, Field, Gender};

/// Raw value coming out of an input event: text for text-like controls,
/// a checked flag for the checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Checked(bool),
    Text(String),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Checked(checked)
    }
}

/// Current contents of the form.
///
/// `Default` is the initial state: every text field empty, no gender or city
/// chosen, agreement unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    /// As produced by a date input: `YYYY-MM-DD`, or empty.
    #[serde(default)]
    pub dob: String,
    #[serde(default, with = "empty_as_none")]
    pub gender: Option<Gender>,
    #[serde(default, with = "empty_as_none")]
    pub city: Option<City>,
    #[serde(default)]
    pub agreed: bool,
}

impl FormValues {
    /// Apply one raw input value to `field`.
    ///
    /// An empty string clears gender and city back to "nothing selected".
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<()> {
        match (field, value) {
            (Field::Agreed, FieldValue::Checked(checked)) => self.agreed = checked,
            (Field::Agreed, FieldValue::Text(_)) => {
                return Err(FormError::WrongKind {
                    field,
                    expected: "checkbox",
                })
            }
            (_, FieldValue::Checked(_)) => {
                return Err(FormError::WrongKind {
                    field,
                    expected: "text",
                })
            }
            (Field::Name, FieldValue::Text(s)) => self.name = s,
            (Field::Email, FieldValue::Text(s)) => self.email = s,
            (Field::Mobile, FieldValue::Text(s)) => self.mobile = s,
            (Field::Dob, FieldValue::Text(s)) => self.dob = s,
            (Field::Gender, FieldValue::Text(s)) => {
                self.gender = if s.is_empty() { None } else { Some(s.parse()?) };
            }
            (Field::City, FieldValue::Text(s)) => {
                self.city = if s.is_empty() { None } else { Some(s.parse()?) };
            }
        }
        Ok(())
    }

    /// Read a field back in its raw form.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::Mobile => FieldValue::Text(self.mobile.clone()),
            Field::Dob => FieldValue::Text(self.dob.clone()),
            Field::Gender => FieldValue::Text(self.gender.map(Gender::code).unwrap_or_default().to_string()),
            Field::City => FieldValue::Text(self.city.map(City::code).unwrap_or_default().to_string()),
            Field::Agreed => FieldValue::Checked(self.agreed),
        }
    }

    pub fn is_pristine(&self) -> bool {
        *self == FormValues::default()
    }
}

/// Select and radio controls report "" for no selection.
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(code) => code.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
