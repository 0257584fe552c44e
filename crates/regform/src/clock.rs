// File: src/clock.rs
// Purpose: Source of "today" for the age rules

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
///
/// Age limits are relative to today, so the same date of birth can move from
/// invalid to valid as days pass. Tests pin the date with [`FixedClock`].
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
