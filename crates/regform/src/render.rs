// File: src/render.rs
// Purpose: Maud markup for the registration form and its standalone page

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::clock::Clock;
use crate::config::PageConfig;
use crate::field::{City, Field, Gender};
use crate::state::FormState;

// Wires DOM events to the wasm RegistrationForm. `__MODULE__` is replaced
// with the JSON-quoted module path.
const CLIENT_SCRIPT: &str = r#"
import init, { RegistrationForm } from __MODULE__;

await init();

const form = document.getElementById("Form");
const state = new RegistrationForm();

const refresh = () => {
  for (const item of state.feedback()) {
    const error = document.getElementById(item.errorId);
    if (error) error.textContent = item.message ?? "";
    const input = document.getElementById(item.inputId);
    if (input) input.classList.toggle("is-invalid", item.invalid);
  }
};

const valueOf = (el) => (el.type === "checkbox" ? el.checked : el.value);

const onChange = (e) => {
  if (!e.target.name) return;
  state.onFieldChange(e.target.name, valueOf(e.target));
  refresh();
};

form.addEventListener("input", onChange);
form.addEventListener("change", onChange);
form.addEventListener("focusout", (e) => {
  if (!e.target.name) return;
  state.onFieldBlur(e.target.name);
  refresh();
});
form.addEventListener("submit", (e) => {
  e.preventDefault();
  if (state.onSubmit()) form.reset();
  refresh();
});
"#;

/// The form itself, reflecting current values and visible errors.
pub fn render_form<C: Clock>(state: &FormState<C>) -> Markup {
    let values = state.values();

    html! {
        section class="container w-50 rounded" {
            form #Form name="myForm" class="row g-3 needs-validation my-5 mainForm px-sm-4 py-sm-5 pt-sm-0 rounded-5" novalidate {
                h1.text-white { "Form" }

                div class="col-md-12 pt-0 mt-2" {
                    (text_input(state, Field::Name, "text", "Enter Your Name", &values.name))
                }
                div class="col-12" {
                    (text_input(state, Field::Email, "email", "Enter Your Email", &values.email))
                }
                div class="col-12" {
                    (text_input(state, Field::Mobile, "text", "Enter Mobile Number", &values.mobile))
                }
                div class="col-12" {
                    (text_input(state, Field::Dob, "date", "", &values.dob))
                }

                (field_label(Field::Gender))
                div #inputGender class="form-group d-flex flex-wrap gap-4" {
                    @for gender in Gender::ALL {
                        div.form-check {
                            input.form-check-input
                                type="radio"
                                name=(Field::Gender.as_str())
                                value=(gender.code())
                                id=(format!("opt-{}", gender.code()))
                                checked[values.gender == Some(gender)];
                            label.form-check-label.text-light for=(format!("opt-{}", gender.code())) {
                                (gender.label())
                            }
                        }
                    }
                    (error_text(state, Field::Gender))
                }

                div class="col-md-12" {
                    (field_label(Field::City))
                    (error_text(state, Field::City))
                    select.form-select.text-black.bgWhite.is-invalid[state.is_invalid(Field::City)]
                        name=(Field::City.as_str())
                        id=(Field::City.input_id()) {
                        option value="" selected[values.city.is_none()] { "--Select City--" }
                        @for city in City::ALL {
                            option value=(city.code()) selected[values.city == Some(city)] {
                                (city.label())
                            }
                        }
                    }
                }

                div class="col-12" {
                    div.form-check {
                        input.form-check-input.is-invalid[state.is_invalid(Field::Agreed)]
                            type="checkbox"
                            name=(Field::Agreed.as_str())
                            id=(Field::Agreed.input_id())
                            checked[values.agreed];
                        label.form-check-label.text-light for=(Field::Agreed.input_id()) {
                            (Field::Agreed.label())
                        }
                        (error_text(state, Field::Agreed))
                    }
                }

                div class="col-12" {
                    button.btn.btn-light.bgWhite.text-dark.fw-bold type="submit" { "Submit" }
                }
            }
        }
    }
}

/// Complete HTML document hosting the form.
pub fn render_page<C: Clock>(state: &FormState<C>, page: &PageConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) }
                link rel="stylesheet" href=(page.stylesheet);
            }
            body.bg-dark {
                (render_form(state))
                @if page.client_validation {
                    script type="module" { (PreEscaped(client_script(&page.script))) }
                }
            }
        }
    }
}

fn client_script(module: &str) -> String {
    let quoted = serde_json::to_string(module).unwrap_or_else(|_| "\"\"".to_string());
    CLIENT_SCRIPT.replace("__MODULE__", &quoted)
}

fn field_label(field: Field) -> Markup {
    html! {
        label.form-label.text-light for=(field.input_id()) {
            (field.label()) " " span.text-danger { "*" }
        }
    }
}

fn error_text<C: Clock>(state: &FormState<C>, field: Field) -> Markup {
    html! {
        div.text-danger id=(field.error_id()) {
            @if let Some(message) = state.visible_error(field) {
                (message)
            }
        }
    }
}

fn text_input<C: Clock>(
    state: &FormState<C>,
    field: Field,
    input_type: &str,
    placeholder: &str,
    value: &str,
) -> Markup {
    html! {
        (field_label(field))
        (error_text(state, field))
        input.form-control.bgWhite.is-invalid[state.is_invalid(field)]
            type=(input_type)
            name=(field.as_str())
            id=(field.input_id())
            placeholder=[(!placeholder.is_empty()).then_some(placeholder)]
            value=(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn form() -> FormState<FixedClock> {
        FormState::with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
    }

    #[test]
    fn test_empty_form_has_no_error_text() {
        let html = render_form(&form()).into_string();
        assert!(html.contains(r#"id="inputName""#));
        assert!(html.contains(r#"id="inputMoNum""#));
        assert!(html.contains(r#"id="gridCheck""#));
        assert!(!html.contains("is-invalid"));
        assert!(!html.contains("is required"));
    }

    #[test]
    fn test_city_options_in_order() {
        let html = render_form(&form()).into_string();
        let positions: Vec<usize> = ["--Select City--", "Ahmedabad", "Anand", "Gandhinagar", "Surat", "Navsari", "Gandevi"]
            .iter()
            .map(|label| html.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(r#"<option value="ganNgr">Gandhinagar</option>"#));
    }

    #[test]
    fn test_touched_error_is_rendered() {
        let mut state = form();
        state.on_field_change(Field::Name, "Bob").unwrap();
        state.on_field_blur(Field::Name);

        let html = render_form(&state).into_string();
        assert!(html.contains("Name must be at least 4 characters long."));
        assert!(html.contains(r#"class="form-control bgWhite is-invalid""#));
        assert!(html.contains(r#"value="Bob""#));
        assert!(!html.contains("Email is required."));
    }

    #[test]
    fn test_selected_values_are_rendered() {
        let mut state = form();
        state.on_field_change(Field::Gender, "female").unwrap();
        state.on_field_change(Field::City, "st").unwrap();
        state.on_field_change(Field::Agreed, true).unwrap();

        let html = render_form(&state).into_string();
        assert!(html.contains(r#"id="opt-female" checked"#));
        assert!(html.contains(r#"<option value="st" selected>Surat</option>"#));
        assert!(html.contains(r#"id="gridCheck" checked"#));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut state = form();
        state.on_field_change(Field::Name, "<b>x</b>").unwrap();
        let html = render_form(&state).into_string();
        assert!(!html.contains("<b>x</b>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_page_script_toggle() {
        let mut page = PageConfig::default();
        let html = render_page(&form(), &page).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"from "/pkg/regform_wasm.js""#));

        page.client_validation = false;
        let html = render_page(&form(), &page).into_string();
        assert!(!html.contains("<script"));
    }
}
