pub mod add;
pub mod export;
pub mod show;
pub mod watch;

use examboard_core::{LoadOutcome, Session};

use crate::clock::NetworkClock;
use crate::config::GlobalConfig;
use crate::fetch::SourceFetcher;

/// A session wired to the real network fetcher and clock.
pub type BoardSession = Session<SourceFetcher, NetworkClock>;

/// Build the session every command drives.
pub fn build_session(config: &GlobalConfig) -> BoardSession {
    Session::new(
        SourceFetcher::new(),
        NetworkClock::new(&config.time_endpoint),
    )
}

/// First load of a command: an explicit --source is a user-directed load,
/// otherwise start from the configured default.
pub async fn load_start(
    session: &mut BoardSession,
    config: &GlobalConfig,
    source: Option<&str>,
) -> LoadOutcome {
    match source {
        Some(s) => session.load_from(s).await,
        None => session.initial_load(&config.default_source).await,
    }
}
