// File: src/state.rs
// Purpose: Form state holder mediating between UI events and the validator

use serde::Serialize;
use std::collections::BTreeSet;

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::field::Field;
use crate::validator::{validate, ErrorMap};
use crate::values::{FieldValue, FormValues};

/// Fields whose errors are eligible for display.
///
/// A field enters the set on blur or when a submit is attempted and only
/// leaves it when the whole form resets after an accepted submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TouchedSet(BTreeSet<Field>);

impl TouchedSet {
    pub fn touch(&mut self, field: Field) {
        self.0.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.0.extend(Field::ALL);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; carries the snapshot that was accepted.
    Accepted(FormValues),
    /// At least one field failed; carries the full error map.
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Values, touched flags and the error map for one form instance.
///
/// `errors` is recomputed from scratch after every handler and is never
/// edited piecemeal.
#[derive(Debug, Clone)]
pub struct FormState<C = SystemClock> {
    values: FormValues,
    touched: TouchedSet,
    errors: ErrorMap,
    clock: C,
}

impl FormState<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FormState<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FormState<C> {
    /// Start from an empty form. Nothing has been validated yet, so the
    /// error map is empty until the first event.
    pub fn with_clock(clock: C) -> Self {
        Self {
            values: FormValues::default(),
            touched: TouchedSet::default(),
            errors: ErrorMap::new(),
            clock,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Store a new value for `field` and re-validate the whole form.
    ///
    /// Values that cannot be applied (unknown option, wrong kind) leave the
    /// state untouched.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<()> {
        self.values.set(field, value.into())?;
        tracing::debug!("{} changed", field);
        self.revalidate();
        Ok(())
    }

    /// Mark `field` touched and re-validate the current values.
    pub fn on_field_blur(&mut self, field: Field) {
        self.touched.touch(field);
        tracing::debug!("{} touched", field);
        self.revalidate();
    }

    /// Force every field visible and validate. On success the snapshot is
    /// returned and the form goes back to its initial state.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.touched.touch_all();
        self.revalidate();

        if !self.errors.is_empty() {
            tracing::debug!("submit rejected with {} invalid field(s)", self.errors.len());
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let accepted = std::mem::take(&mut self.values);
        tracing::info!(
            name = %accepted.name,
            email = %accepted.email,
            "registration submitted, resetting form"
        );
        self.reset();
        SubmitOutcome::Accepted(accepted)
    }

    /// Back to empty values, nothing touched, no errors.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched = TouchedSet::default();
        self.errors.clear();
    }

    /// Error text to show for `field`: present only once touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    /// Whether the control should carry invalid styling.
    pub fn is_invalid(&self, field: Field) -> bool {
        self.visible_error(field).is_some()
    }

    /// All errors currently eligible for display.
    pub fn visible_errors(&self) -> ErrorMap {
        self.errors
            .iter()
            .filter(|(field, _)| self.touched.contains(**field))
            .map(|(field, msg)| (*field, msg.clone()))
            .collect()
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values, self.clock.today()).errors;
    }
}
