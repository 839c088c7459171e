use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::{build_session, load_start};
use crate::config::GlobalConfig;
use crate::render::{self, Render, pluralize};

pub async fn run(config: &GlobalConfig, source: Option<&str>, out: &Path) -> Result<()> {
    let mut session = build_session(config);

    let spinner = render::loading_spinner(format!("Loading {}", config.resolve_source(source)));
    let outcome = load_start(&mut session, config, source).await;
    spinner.finish_and_clear();
    println!("{}", outcome.render());

    let bytes = session.export_current()?;
    tokio::fs::write(out, bytes)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "{} Exported {} {} to {}",
        "✓".green(),
        session.records().len(),
        pluralize("record", session.records().len()),
        out.display()
    );

    Ok(())
}
