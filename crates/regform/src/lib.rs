// regform - registration form validation
// Rule engine, form state and Maud rendering shared by the CLI and the WASM client

pub mod age;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod render;
pub mod sink;
pub mod state;
pub mod validator;
pub mod values;

// Re-export core types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::FormError;
pub use event::FormEvent;
pub use field::{City, Field, Gender};
pub use render::{render_form, render_page};
pub use sink::{JsonLinesSink, SubmissionSink, TracingSink};
pub use state::{FormState, SubmitOutcome, TouchedSet};
pub use validator::{validate, validate_field, ErrorMap, ValidationResult};
pub use values::{FieldValue, FormValues};

// Re-export Maud for callers embedding the form
pub use maud::{Markup, PreEscaped, DOCTYPE};
