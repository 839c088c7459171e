//! Terminal rendering for examboard types.
//!
//! Extension trait adding colored rendering to core types, plus the board
//! layout helpers: clock header, source line, one row per record in store
//! order.

use chrono::NaiveDateTime;
use examboard_core::{ExamRecord, ExamStatus, LoadOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ExamStatus {
    fn render(&self) -> String {
        match self {
            ExamStatus::Upcoming => "upcoming".cyan().to_string(),
            ExamStatus::Ongoing => "ongoing".green().bold().to_string(),
            ExamStatus::Completed => "completed".dimmed().to_string(),
        }
    }
}

impl Render for LoadOutcome {
    fn render(&self) -> String {
        match self {
            LoadOutcome::Loaded { source, count } => format!(
                "{} Loaded {} {} from {}",
                "✓".green(),
                count,
                pluralize("record", *count),
                source
            ),
            LoadOutcome::Fallback { source, error } => format!(
                "{} {}",
                "✗".red(),
                format!("Failed to load {}: {} (showing sample data)", source, error).red()
            ),
        }
    }
}

/// Render the clock and data-source header lines.
pub fn render_header(
    display_date: &str,
    display_time: &str,
    source_label: Option<&str>,
    last_update: Option<NaiveDateTime>,
) -> String {
    let mut lines = vec![format!("{}  {}", display_date.bold(), display_time.bold())];

    if let Some(label) = source_label {
        let mut line = format!("source: {}", label);
        if let Some(updated) = last_update {
            line.push_str(&format!("   updated: {}", updated.format("%Y-%m-%d %H:%M")));
        }
        lines.push(line.dimmed().to_string());
    }

    lines.join("\n")
}

/// Render one row per record, in store order.
pub fn render_rows(records: &[ExamRecord], statuses: &[ExamStatus]) -> String {
    if records.is_empty() {
        return "No exams".dimmed().to_string();
    }

    records
        .iter()
        .zip(statuses)
        .map(|(record, status)| {
            format!(
                "  {} {}-{}  {}  {}  {}",
                record.date,
                record.start_time,
                record.end_time,
                record.subject.bold(),
                status.render(),
                record.paper_info.dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Spinner shown while a source fetch is in flight.
pub fn loading_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
