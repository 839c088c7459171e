use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Input;
use examboard_core::ExamRecord;
use owo_colors::OwoColorize;

use super::{build_session, load_start};
use crate::config::GlobalConfig;
use crate::render::{self, Render, pluralize};

/// Raw field values from flags; missing ones are prompted for.
pub struct Fields {
    pub subject: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub paper_info: Option<String>,
}

pub async fn run(
    config: &GlobalConfig,
    fields: Fields,
    source: Option<&str>,
    out: &Path,
) -> Result<()> {
    let mut session = build_session(config);

    let spinner = render::loading_spinner(format!("Loading {}", config.resolve_source(source)));
    let outcome = load_start(&mut session, config, source).await;
    spinner.finish_and_clear();
    println!("{}", outcome.render());

    let record = ExamRecord {
        subject: prompt_if_missing(fields.subject, "Subject")?,
        date: prompt_if_missing(fields.date, "Date (YYYY-M-D)")?,
        start_time: prompt_if_missing(fields.start_time, "Start time (HH:MM)")?,
        end_time: prompt_if_missing(fields.end_time, "End time (HH:MM)")?,
        paper_info: prompt_if_missing(fields.paper_info, "Paper info")?,
    };
    let subject = record.subject.clone();

    // Incomplete records are rejected whole, never partially appended.
    session.add_record(record)?;

    let bytes = session.export_current()?;
    tokio::fs::write(out, bytes)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "{} Added \"{}\": {} {} written to {}",
        "✓".green(),
        subject,
        session.records().len(),
        pluralize("record", session.records().len()),
        out.display()
    );

    Ok(())
}

fn prompt_if_missing(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?),
    }
}
