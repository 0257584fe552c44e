// File: src/event.rs
// Purpose: Serializable UI events and their dispatch onto FormState

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::Result;
use crate::field::Field;
use crate::state::{FormState, SubmitOutcome};
use crate::values::FieldValue;

/// One discrete interaction with the form.
///
/// ```json
/// [
///   {"type": "change", "field": "name", "value": "Asha Patel"},
///   {"type": "blur", "field": "name"},
///   {"type": "change", "field": "agreed", "value": true},
///   {"type": "submit"}
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormEvent {
    Change { field: Field, value: FieldValue },
    Blur { field: Field },
    Submit,
}

impl<C: Clock> FormState<C> {
    /// Dispatch `event` to the matching handler. Only submits produce an
    /// outcome.
    pub fn apply(&mut self, event: FormEvent) -> Result<Option<SubmitOutcome>> {
        match event {
            FormEvent::Change { field, value } => {
                self.on_field_change(field, value)?;
                Ok(None)
            }
            FormEvent::Blur { field } => {
                self.on_field_blur(field);
                Ok(None)
            }
            FormEvent::Submit => Ok(Some(self.on_submit())),
        }
    }
}
