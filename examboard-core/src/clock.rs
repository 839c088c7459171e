//! Time sources.
//!
//! All of examboard works in local wall time; a provider resolves "now" to
//! a `NaiveDateTime` in the host's timezone. Providers never fail;
//! degraded sources fall back internally (see the CLI's network clock).

use chrono::{Local, NaiveDateTime};

/// Produces the current instant in local wall time.
#[allow(async_fn_in_trait)]
pub trait TimeProvider {
    async fn now(&self) -> NaiveDateTime;
}

/// The host system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeProvider for LocalClock {
    async fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl TimeProvider for FixedClock {
    async fn now(&self) -> NaiveDateTime {
        self.0
    }
}
