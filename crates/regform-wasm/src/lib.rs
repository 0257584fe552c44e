//! Registration Form WASM
//!
//! WebAssembly bindings for the registration form.
//! Runs the same rule engine and form state in the browser that the CLI uses,
//! so feedback appears as the user types without a round trip.

use chrono::NaiveDate;
use regform::age::parse_dob;
use regform::{validate, validate_field, Clock, Field, FieldValue, FormState, FormValues, SubmitOutcome, SystemClock};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Today's date from the browser, unless pinned by the page.
#[derive(Debug, Clone, Copy, Default)]
struct PageClock(Option<NaiveDate>);

impl Clock for PageClock {
    fn today(&self) -> NaiveDate {
        self.0.unwrap_or_else(|| SystemClock.today())
    }
}

/// Display state for one field, consumed by the page script
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FieldFeedback {
    pub field: &'static str,
    pub input_id: &'static str,
    pub error_id: String,
    pub message: Option<String>,
    pub invalid: bool,
}

/// Live form state owned by the page
#[wasm_bindgen]
pub struct RegistrationForm {
    state: FormState<PageClock>,
}

#[wasm_bindgen]
impl RegistrationForm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RegistrationForm {
        RegistrationForm {
            state: FormState::with_clock(PageClock::default()),
        }
    }

    /// Form whose age rules use a fixed `YYYY-MM-DD` date instead of the clock.
    #[wasm_bindgen(js_name = withToday)]
    pub fn with_today(today: &str) -> Result<RegistrationForm, JsValue> {
        let date = parse_today(today)?;
        Ok(RegistrationForm {
            state: FormState::with_clock(PageClock(Some(date))),
        })
    }

    /// Store a new value (string, or boolean for the checkbox) and re-validate.
    #[wasm_bindgen(js_name = onFieldChange)]
    pub fn on_field_change(&mut self, field: &str, value: JsValue) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        let value = field_value(&value)?;
        self.state
            .on_field_change(field, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = onFieldBlur)]
    pub fn on_field_blur(&mut self, field: &str) -> Result<(), JsValue> {
        self.state.on_field_blur(parse_field(field)?);
        Ok(())
    }

    /// Attempt a submit. Returns the accepted values, or `null` when any
    /// field fails.
    #[wasm_bindgen(js_name = onSubmit)]
    pub fn on_submit(&mut self) -> Result<JsValue, JsValue> {
        match self.state.on_submit() {
            SubmitOutcome::Accepted(values) => {
                let accepted = to_js(&values)?;
                web_sys::console::log_2(&JsValue::from_str("Form submitted:"), &accepted);
                Ok(accepted)
            }
            SubmitOutcome::Rejected(_) => Ok(JsValue::NULL),
        }
    }

    /// Current values as a plain object
    pub fn values(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.values())
    }

    /// Every failing field, touched or not
    pub fn errors(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.errors())
    }

    /// Failing fields the user should currently see
    #[wasm_bindgen(js_name = visibleErrors)]
    pub fn visible_errors(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.visible_errors())
    }

    /// One entry per field with element ids, visible message and styling flag
    pub fn feedback(&self) -> Result<JsValue, JsValue> {
        to_js(&self.field_feedback())
    }

    /// Re-render the whole form as HTML
    #[wasm_bindgen(js_name = renderForm)]
    pub fn render_form(&self) -> String {
        regform::render_form(&self.state).into_string()
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl RegistrationForm {
    fn field_feedback(&self) -> Vec<FieldFeedback> {
        Field::ALL
            .into_iter()
            .map(|field| {
                let message = self.state.visible_error(field).map(str::to_string);
                FieldFeedback {
                    field: field.as_str(),
                    input_id: field.input_id(),
                    error_id: field.error_id(),
                    invalid: message.is_some(),
                    message,
                }
            })
            .collect()
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a complete values object
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateValues({ name: 'Bob', email: 'a@b.com', agreed: true });
/// // { is_valid: false, errors: { name: 'Name must be at least 4 characters long.', ... } }
/// ```
#[wasm_bindgen(js_name = validateValues)]
pub fn validate_values(values: JsValue, today: Option<String>) -> Result<JsValue, JsValue> {
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    let today = resolve_today(today.as_deref())?;
    to_js(&validate(&values, today))
}

/// Check one field in isolation. Returns the message of the first failing
/// rule, or `undefined` when it passes.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(field: &str, value: JsValue, today: Option<String>) -> Result<Option<String>, JsValue> {
    let field = parse_field(field)?;
    let mut values = FormValues::default();
    values
        .set(field, field_value(&value)?)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let today = resolve_today(today.as_deref())?;
    Ok(validate_field(field, &values, today).map(str::to_string))
}

/// Completed years for a `YYYY-MM-DD` date of birth
#[wasm_bindgen(js_name = calculateAge)]
pub fn calculate_age_js(dob: &str, today: Option<String>) -> Result<i32, JsValue> {
    let birth = parse_dob(dob).ok_or_else(|| JsValue::from_str(&format!("Invalid date: {}", dob)))?;
    let today = resolve_today(today.as_deref())?;
    Ok(regform::age::calculate_age(birth, today))
}

fn parse_field(name: &str) -> Result<Field, JsValue> {
    name.parse().map_err(|e: regform::FormError| JsValue::from_str(&e.to_string()))
}

fn parse_today(today: &str) -> Result<NaiveDate, JsValue> {
    parse_dob(today).ok_or_else(|| JsValue::from_str(&format!("Invalid date: {}", today)))
}

fn resolve_today(today: Option<&str>) -> Result<NaiveDate, JsValue> {
    match today {
        Some(s) => parse_today(s),
        None => Ok(SystemClock.today()),
    }
}

fn field_value(value: &JsValue) -> Result<FieldValue, JsValue> {
    if let Some(checked) = value.as_bool() {
        Ok(FieldValue::Checked(checked))
    } else if let Some(text) = value.as_string() {
        Ok(FieldValue::Text(text))
    } else {
        Err(JsValue::from_str("Field value must be a string or boolean"))
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_feedback_hidden_until_blur() {
        let mut form = RegistrationForm::with_today("2024-06-15").unwrap();
        form.on_field_change("name", JsValue::from_str("Bob")).unwrap();
        assert!(form.field_feedback().iter().all(|f| !f.invalid));

        form.on_field_blur("name").unwrap();
        let name = &form.field_feedback()[0];
        assert!(name.invalid);
        assert_eq!(name.error_id, "error-name");
        assert_eq!(name.message.as_deref(), Some("Name must be at least 4 characters long."));
    }

    #[wasm_bindgen_test]
    fn test_submit_returns_null_when_invalid() {
        let mut form = RegistrationForm::with_today("2024-06-15").unwrap();
        assert!(form.on_submit().unwrap().is_null());
        assert!(form.field_feedback().iter().all(|f| f.invalid));
    }

    #[wasm_bindgen_test]
    fn test_submit_accepts_and_resets() {
        let mut form = RegistrationForm::with_today("2024-06-15").unwrap();
        for (field, value) in [
            ("name", "Arjun Mehta"),
            ("email", "arjun@example.com"),
            ("mobile", "9988776655"),
            ("dob", "1999-12-31"),
            ("gender", "male"),
            ("city", "nvs"),
        ] {
            form.on_field_change(field, JsValue::from_str(value)).unwrap();
        }
        form.on_field_change("agreed", JsValue::from_bool(true)).unwrap();

        assert!(!form.on_submit().unwrap().is_null());
        assert!(form.render_form().contains(r#"value="""#));
    }

    #[wasm_bindgen_test]
    fn test_bad_input_is_reported() {
        let mut form = RegistrationForm::new();
        assert!(form.on_field_change("phone", JsValue::from_str("1")).is_err());
        assert!(form.on_field_change("city", JsValue::from_str("Mumbai")).is_err());
        assert!(form.on_field_change("agreed", JsValue::from_f64(1.0)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_single_field_helpers() {
        let today = Some("2024-06-15".to_string());
        assert_eq!(
            validate_field_js("mobile", JsValue::from_str("+919123456789"), today.clone()).unwrap(),
            None
        );
        assert_eq!(
            validate_field_js("dob", JsValue::from_str("2006-06-16"), today.clone()).unwrap(),
            Some("You must be at least 18 years old.".to_string())
        );
        assert_eq!(calculate_age_js("2006-06-15", today).unwrap(), 18);
    }
}
