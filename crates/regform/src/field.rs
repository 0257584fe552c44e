// File: src/field.rs
// Purpose: Field catalogue and the fixed option lists for gender and city

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Every input on the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Mobile,
    Dob,
    Gender,
    City,
    Agreed,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Mobile,
        Field::Dob,
        Field::Gender,
        Field::City,
        Field::Agreed,
    ];

    /// The `name` attribute used on the rendered input.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Dob => "dob",
            Field::Gender => "gender",
            Field::City => "city",
            Field::Agreed => "agreed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Mobile => "Mobile Number",
            Field::Dob => "Date of Birth",
            Field::Gender => "Gender",
            Field::City => "City",
            Field::Agreed => "I Agree to proceed",
        }
    }

    /// Element id of the rendered control.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "inputName",
            Field::Email => "inputEmail",
            Field::Mobile => "inputMoNum",
            Field::Dob => "inputDob",
            Field::Gender => "inputGender",
            Field::City => "inputCity",
            Field::Agreed => "gridCheck",
        }
    }

    /// Element id of the div holding this field's error text.
    pub fn error_id(self) -> String {
        format!("error-{}", self.as_str())
    }

    /// The checkbox is the only boolean field.
    pub fn is_checkbox(self) -> bool {
        matches!(self, Field::Agreed)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.code() == s)
            .ok_or_else(|| FormError::UnknownOption {
                field: Field::Gender,
                value: s.to_string(),
            })
    }
}

/// The six cities offered by the selector. Serialized by their option code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "Ahm")]
    Ahmedabad,
    #[serde(rename = "And")]
    Anand,
    #[serde(rename = "ganNgr")]
    Gandhinagar,
    #[serde(rename = "st")]
    Surat,
    #[serde(rename = "nvs")]
    Navsari,
    #[serde(rename = "gdv")]
    Gandevi,
}

impl City {
    pub const ALL: [City; 6] = [
        City::Ahmedabad,
        City::Anand,
        City::Gandhinagar,
        City::Surat,
        City::Navsari,
        City::Gandevi,
    ];

    pub fn code(self) -> &'static str {
        match self {
            City::Ahmedabad => "Ahm",
            City::Anand => "And",
            City::Gandhinagar => "ganNgr",
            City::Surat => "st",
            City::Navsari => "nvs",
            City::Gandevi => "gdv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            City::Ahmedabad => "Ahmedabad",
            City::Anand => "Anand",
            City::Gandhinagar => "Gandhinagar",
            City::Surat => "Surat",
            City::Navsari => "Navsari",
            City::Gandevi => "Gandevi",
        }
    }
}

impl FromStr for City {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| FormError::UnknownOption {
                field: Field::City,
                value: s.to_string(),
            })
    }
}
