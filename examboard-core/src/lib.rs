//! Core types and logic for the examboard exam schedule board.
//!
//! This crate provides everything except I/O: the record model, the
//! temporal status classifier, the in-memory store, dataset parsing and
//! validation, JSON export, and the `Session` boundary that ties them
//! together. Fetching and clocks are injected through the `RecordFetcher`
//! and `TimeProvider` traits so the whole pipeline runs identically
//! against the network, local files, or test stubs.

pub mod clock;
pub mod error;
pub mod export;
pub mod loader;
pub mod record;
pub mod session;
pub mod status;
pub mod store;

pub use clock::{FixedClock, LocalClock, TimeProvider};
pub use error::{ExamBoardError, ExamBoardResult};
pub use export::{EXPORT_FILENAME, export_json};
pub use loader::{RecordFetcher, parse_records};
pub use record::ExamRecord;
pub use session::{LoadOutcome, SAMPLE_SOURCE_LABEL, Session, Tick};
pub use status::{ExamStatus, classify};
pub use store::Store;
