use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::time::{Instant, MissedTickBehavior, interval};

use super::{build_session, load_start};
use crate::config::GlobalConfig;
use crate::render::{self, Render};

pub async fn run(
    config: &GlobalConfig,
    source: Option<&str>,
    interval_secs: u64,
    refresh_every: Option<u64>,
) -> Result<()> {
    let mut session = build_session(config);

    let outcome = load_start(&mut session, config, source).await;
    let mut status_line = outcome.render();

    let mut ticker = interval(Duration::from_secs(interval_secs.max(1)));
    // A slow network-time lookup must not queue up a burst of ticks.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_refresh = Instant::now();

    loop {
        ticker.tick().await;

        if let Some(secs) = refresh_every {
            if last_refresh.elapsed() >= Duration::from_secs(secs.max(1)) {
                match session.refresh().await {
                    Ok(outcome) => status_line = outcome.render(),
                    Err(e) => status_line = e.to_string().red().to_string(),
                }
                last_refresh = Instant::now();
            }
        }

        let tick = session.tick().await;

        // Repaint the whole board in place.
        print!("\x1b[2J\x1b[H");
        println!(
            "{}",
            render::render_header(
                &tick.display_date,
                &tick.display_time,
                session.source_label(),
                session.last_update(),
            )
        );
        println!();
        println!("{}", render::render_rows(session.records(), &tick.statuses));
        println!();
        println!("{}", status_line);
        println!("{}", "Ctrl-C to exit".dimmed());
        io::stdout().flush()?;
    }
}
