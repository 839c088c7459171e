//! The in-memory exam session: the boundary the UI adapter drives.

use chrono::{Local, NaiveDateTime};

use crate::clock::TimeProvider;
use crate::error::{ExamBoardError, ExamBoardResult};
use crate::export::export_json;
use crate::loader::{RecordFetcher, parse_records};
use crate::record::ExamRecord;
use crate::status::{ExamStatus, classify};
use crate::store::Store;

/// What the data-source line shows after a fallback.
pub const SAMPLE_SOURCE_LABEL: &str = "sample data";

/// Result of a load attempt, ready to surface to the user.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The source replaced the dataset.
    Loaded { source: String, count: usize },
    /// The source failed; the placeholder dataset is installed instead.
    Fallback { source: String, error: ExamBoardError },
}

/// One clock tick: what a renderer needs to repaint the board.
#[derive(Debug, Clone)]
pub struct Tick {
    pub now: NaiveDateTime,
    pub display_date: String,
    pub display_time: String,
    /// One status per stored record, in store order.
    pub statuses: Vec<ExamStatus>,
}

/// A single-user exam board session.
///
/// Owns the record store and the retained source identifier. All reads and
/// writes go through the operations here; the fetcher and clock are
/// injected so the session runs identically against the network, local
/// files, or test stubs. A load and an append issued back-to-back are not
/// serialized against each other beyond last-write-wins on the store.
pub struct Session<F, C> {
    store: Store,
    fetcher: F,
    clock: C,
    last_source: Option<String>,
    source_label: Option<String>,
    last_update: Option<NaiveDateTime>,
}

impl<F: RecordFetcher, C: TimeProvider> Session<F, C> {
    pub fn new(fetcher: F, clock: C) -> Self {
        Session {
            store: Store::new(),
            fetcher,
            clock,
            last_source: None,
            source_label: None,
            last_update: None,
        }
    }

    /// Load the startup dataset from the configured default source.
    pub async fn initial_load(&mut self, default_source: &str) -> LoadOutcome {
        self.load_from(default_source).await
    }

    /// Load a dataset from a user-specified source.
    ///
    /// On success the fetched records wholly replace the store and the
    /// source is retained for `refresh`. On any failure the store becomes
    /// the one-record placeholder dataset and the retained source is left
    /// unchanged, so a retry can target the original.
    pub async fn load_from(&mut self, source: &str) -> LoadOutcome {
        match self.try_load(source).await {
            Ok(records) => {
                let count = records.len();
                self.store.replace_all(records);
                self.last_source = Some(source.to_string());
                self.source_label = Some(source.to_string());
                self.last_update = Some(Local::now().naive_local());
                LoadOutcome::Loaded {
                    source: source.to_string(),
                    count,
                }
            }
            Err(error) => {
                self.store.replace_all(vec![ExamRecord::placeholder()]);
                self.source_label = Some(SAMPLE_SOURCE_LABEL.to_string());
                self.last_update = Some(Local::now().naive_local());
                LoadOutcome::Fallback {
                    source: source.to_string(),
                    error,
                }
            }
        }
    }

    /// Repeat the most recent successful load.
    pub async fn refresh(&mut self) -> ExamBoardResult<LoadOutcome> {
        let source = self.last_source.clone().ok_or(ExamBoardError::NoSource)?;
        Ok(self.load_from(&source).await)
    }

    /// Append one user-entered record, strictly validated. The store is
    /// unchanged when validation fails.
    pub fn add_record(&mut self, record: ExamRecord) -> ExamBoardResult<()> {
        self.store.append(record)?;
        self.last_update = Some(Local::now().naive_local());
        Ok(())
    }

    /// Serialize the current dataset for download.
    pub fn export_current(&self) -> ExamBoardResult<Vec<u8>> {
        export_json(self.store.all())
    }

    /// Read the clock and classify every stored record against it.
    pub async fn tick(&self) -> Tick {
        let now = self.clock.now().await;
        Tick {
            now,
            display_date: now.format("%Y-%m-%d %A").to_string(),
            display_time: now.format("%H:%M:%S").to_string(),
            statuses: self.store.all().iter().map(|r| classify(r, now)).collect(),
        }
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[ExamRecord] {
        self.store.all()
    }

    /// What the data-source line should show, once anything was loaded.
    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    /// Local time of the most recent successful load, fallback, or append.
    pub fn last_update(&self) -> Option<NaiveDateTime> {
        self.last_update
    }

    async fn try_load(&self, source: &str) -> ExamBoardResult<Vec<ExamRecord>> {
        let raw = self.fetcher.fetch(source).await?;
        parse_records(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    const GOOD: &str = "good.json";
    const OTHER: &str = "other.json";

    fn dataset(subject: &str) -> String {
        format!(
            r#"[{{"subject": "{}", "date": "2099-01-01", "startTime": "09:00", "endTime": "11:00", "paperInfo": "4 pages"}}]"#,
            subject
        )
    }

    /// Serves canned bodies per source; everything else is unreachable.
    struct StubFetcher {
        responses: HashMap<String, String>,
    }

    impl StubFetcher {
        fn new() -> Self {
            StubFetcher {
                responses: HashMap::new(),
            }
        }

        fn with(mut self, source: &str, body: &str) -> Self {
            self.responses.insert(source.to_string(), body.to_string());
            self
        }
    }

    impl RecordFetcher for StubFetcher {
        async fn fetch(&self, source: &str) -> ExamBoardResult<String> {
            self.responses
                .get(source)
                .cloned()
                .ok_or_else(|| ExamBoardError::Transport {
                    resource: source.to_string(),
                    reason: "unreachable".to_string(),
                })
        }
    }

    fn noon() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2099, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    fn session(fetcher: StubFetcher) -> Session<StubFetcher, FixedClock> {
        Session::new(fetcher, noon())
    }

    #[tokio::test]
    async fn test_load_replaces_store_and_retains_source() {
        let mut session = session(StubFetcher::new().with(GOOD, &dataset("Math")));

        let outcome = session.load_from(GOOD).await;
        assert!(matches!(outcome, LoadOutcome::Loaded { count: 1, .. }));
        assert_eq!(session.records()[0].subject, "Math");
        assert_eq!(session.source_label(), Some(GOOD));
        assert!(session.last_update().is_some());
    }

    #[tokio::test]
    async fn test_failed_load_installs_the_placeholder() {
        let mut session = session(StubFetcher::new());

        let outcome = session.load_from("missing.json").await;
        assert!(matches!(
            outcome,
            LoadOutcome::Fallback {
                error: ExamBoardError::Transport { .. },
                ..
            }
        ));
        assert_eq!(session.records(), &[ExamRecord::placeholder()]);
        assert_eq!(session.source_label(), Some(SAMPLE_SOURCE_LABEL));
    }

    #[tokio::test]
    async fn test_schema_failure_also_falls_back() {
        let mut session = session(StubFetcher::new().with(GOOD, r#"{"not": "an array"}"#));

        let outcome = session.load_from(GOOD).await;
        assert!(matches!(
            outcome,
            LoadOutcome::Fallback {
                error: ExamBoardError::Schema(_),
                ..
            }
        ));
        assert_eq!(session.records(), &[ExamRecord::placeholder()]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_the_retained_source() {
        let mut session = session(StubFetcher::new().with(GOOD, &dataset("Math")));

        session.load_from(GOOD).await;
        session.load_from("missing.json").await;

        // Refresh retries the last good source, not the failed one.
        let outcome = session.refresh().await.unwrap();
        assert!(matches!(outcome, LoadOutcome::Loaded { count: 1, .. }));
        assert_eq!(session.records()[0].subject, "Math");
    }

    #[tokio::test]
    async fn test_refresh_without_a_source_errors() {
        let mut session = session(StubFetcher::new());
        assert!(matches!(
            session.refresh().await,
            Err(ExamBoardError::NoSource)
        ));
    }

    #[tokio::test]
    async fn test_append_then_load_last_write_wins() {
        let mut session = session(
            StubFetcher::new()
                .with(GOOD, &dataset("Math"))
                .with(OTHER, &dataset("English")),
        );

        session.load_from(GOOD).await;
        session.add_record(ExamRecord::placeholder()).unwrap();
        session.load_from(OTHER).await;

        // The later load wins wholesale; never a hybrid.
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].subject, "English");
    }

    #[tokio::test]
    async fn test_invalid_append_leaves_the_store_unchanged() {
        let mut session = session(StubFetcher::new().with(GOOD, &dataset("Math")));
        session.load_from(GOOD).await;

        let mut record = ExamRecord::placeholder();
        record.subject = String::new();
        record.date = String::new();

        let err = session.add_record(record).unwrap_err();
        match err {
            ExamBoardError::Validation { fields } => {
                assert_eq!(fields, vec!["subject", "date"]);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].subject, "Math");
    }

    #[tokio::test]
    async fn test_export_round_trips_the_session_dataset() {
        let mut session = session(StubFetcher::new().with(GOOD, &dataset("Math")));
        session.load_from(GOOD).await;
        session.add_record(ExamRecord::placeholder()).unwrap();

        let bytes = session.export_current().unwrap();
        let reparsed = parse_records(&String::from_utf8(bytes).unwrap()).unwrap();
        assert_eq!(reparsed, session.records());
    }

    #[tokio::test]
    async fn test_tick_classifies_in_store_order() {
        let raw = r#"[
            {"subject": "Past", "date": "1999-01-01", "startTime": "09:00", "endTime": "11:00", "paperInfo": "x"},
            {"subject": "Now", "date": "2099-01-01", "startTime": "09:00", "endTime": "11:00", "paperInfo": "x"},
            {"subject": "Future", "date": "2099-06-01", "startTime": "09:00", "endTime": "11:00", "paperInfo": "x"}
        ]"#;
        let mut session = session(StubFetcher::new().with(GOOD, raw));
        session.load_from(GOOD).await;

        let tick = session.tick().await;
        assert_eq!(
            tick.statuses,
            vec![
                ExamStatus::Completed,
                ExamStatus::Ongoing,
                ExamStatus::Upcoming
            ]
        );
        assert_eq!(tick.display_time, "10:00:00");
        assert!(tick.display_date.starts_with("2099-01-01"));
    }
}
