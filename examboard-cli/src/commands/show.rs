use anyhow::Result;

use super::{build_session, load_start};
use crate::config::GlobalConfig;
use crate::render::{self, Render};

pub async fn run(config: &GlobalConfig, source: Option<&str>) -> Result<()> {
    let mut session = build_session(config);

    let spinner = render::loading_spinner(format!("Loading {}", config.resolve_source(source)));
    let outcome = load_start(&mut session, config, source).await;
    spinner.finish_and_clear();

    println!("{}", outcome.render());
    println!();

    let tick = session.tick().await;
    println!(
        "{}",
        render::render_header(
            &tick.display_date,
            &tick.display_time,
            session.source_label(),
            session.last_update(),
        )
    );
    println!("{}", render::render_rows(session.records(), &tick.statuses));

    Ok(())
}
