use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use regform::{validate, Clock, FormValues, SystemClock, ValidationResult};
use std::path::Path;

use super::read_input;

pub fn execute(input: &Path, today: Option<NaiveDate>) -> Result<()> {
    let content = read_input(input)?;
    let values: FormValues = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse form values: {:?}", input))?;

    let today = today.unwrap_or_else(|| SystemClock.today());
    let result = validate(&values, today);
    print_result(&result);

    if !result.is_valid {
        anyhow::bail!("{} field(s) failed validation", result.errors.len());
    }
    Ok(())
}

fn print_result(result: &ValidationResult) {
    if result.is_valid {
        println!("{}", "✓ All fields valid".green().bold());
        return;
    }

    for (field, message) in &result.errors {
        println!("  {} {}: {}", "✗".red(), field.label().bold(), message);
    }
}
