use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use regform::{
    Clock, FixedClock, FormEvent, FormState, JsonLinesSink, SubmissionSink, SubmitOutcome,
};
use std::io::Write;
use std::path::Path;

use super::read_input;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub skipped: usize,
    pub accepted: usize,
    pub rejected: usize,
}

pub fn execute(input: &Path, today: Option<NaiveDate>) -> Result<()> {
    let content = read_input(input)?;
    let events: Vec<FormEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse event list: {:?}", input))?;

    let mut sink = JsonLinesSink::new(std::io::stdout().lock());
    let mut report = std::io::stderr().lock();

    let summary = match today {
        Some(date) => replay(FormState::with_clock(FixedClock(date)), events, &mut sink, &mut report)?,
        None => replay(FormState::new(), events, &mut sink, &mut report)?,
    };

    writeln!(
        report,
        "{} {} event(s), {} skipped, {} accepted, {} rejected",
        "Replayed".cyan().bold(),
        summary.applied,
        summary.skipped,
        summary.accepted,
        summary.rejected
    )?;
    Ok(())
}

/// Apply `events` in order. Accepted submissions go to `sink`; the errors
/// visible after each step are written to `report`.
pub fn replay<C, S, W>(
    mut state: FormState<C>,
    events: Vec<FormEvent>,
    sink: &mut S,
    report: &mut W,
) -> Result<ReplaySummary>
where
    C: Clock,
    S: SubmissionSink + ?Sized,
    W: Write,
{
    let mut summary = ReplaySummary::default();

    for (step, event) in events.into_iter().enumerate() {
        let step = step + 1;
        let label = describe(&event);

        let outcome = match event {
            FormEvent::Submit => Some(state.submit_to(sink)?),
            event => match state.apply(event) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Skipping event {}: {}", step, e);
                    summary.skipped += 1;
                    continue;
                }
            },
        };
        summary.applied += 1;

        match outcome {
            Some(SubmitOutcome::Accepted(_)) => {
                summary.accepted += 1;
                writeln!(report, "{:>3}. {} {}", step, label, "accepted".green())?;
                continue;
            }
            Some(SubmitOutcome::Rejected(_)) => {
                summary.rejected += 1;
                writeln!(report, "{:>3}. {} {}", step, label, "rejected".red())?;
            }
            None => writeln!(report, "{:>3}. {}", step, label)?,
        }

        for (field, message) in state.visible_errors() {
            writeln!(report, "       {} {}: {}", "✗".red(), field, message)?;
        }
    }

    Ok(summary)
}

fn describe(event: &FormEvent) -> String {
    match event {
        FormEvent::Change { field, .. } => format!("change {}", field),
        FormEvent::Blur { field } => format!("blur {}", field),
        FormEvent::Submit => "submit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regform::FormValues;

    fn state() -> FormState<FixedClock> {
        FormState::with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
    }

    #[test]
    fn test_replay_counts_and_reports() {
        let events: Vec<FormEvent> = serde_json::from_str(
            r#"[
                {"type": "change", "field": "name", "value": "Bob"},
                {"type": "blur", "field": "name"},
                {"type": "change", "field": "city", "value": "Mumbai"},
                {"type": "submit"}
            ]"#,
        )
        .unwrap();

        let mut accepted: Vec<FormValues> = Vec::new();
        let mut report = Vec::new();
        let summary = replay(state(), events, &mut accepted, &mut report).unwrap();

        assert_eq!(
            summary,
            ReplaySummary { applied: 3, skipped: 1, accepted: 0, rejected: 1 }
        );
        assert!(accepted.is_empty());

        let report = String::from_utf8(report).unwrap();
        assert!(report.contains("Name must be at least 4 characters long."));
        assert!(report.contains("City is required."));
    }

    #[test]
    fn test_replay_forwards_accepted_submission() {
        let events: Vec<FormEvent> = serde_json::from_str(
            r#"[
                {"type": "change", "field": "name", "value": "Vikram Rao"},
                {"type": "change", "field": "email", "value": "vikram@example.com"},
                {"type": "change", "field": "mobile", "value": "+916123456789"},
                {"type": "change", "field": "dob", "value": "1970-02-02"},
                {"type": "change", "field": "gender", "value": "male"},
                {"type": "change", "field": "city", "value": "And"},
                {"type": "change", "field": "agreed", "value": true},
                {"type": "submit"}
            ]"#,
        )
        .unwrap();

        let mut accepted: Vec<FormValues> = Vec::new();
        let summary = replay(state(), events, &mut accepted, &mut std::io::sink()).unwrap();

        assert_eq!(summary.accepted, 1);
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].mobile, "+916123456789");
    }
}
