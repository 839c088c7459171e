//! The in-memory record store.

use crate::error::{ExamBoardError, ExamBoardResult};
use crate::record::ExamRecord;

/// Insertion-ordered collection of exam records.
///
/// The single source of truth for rendering and export. Records carry no
/// identity beyond their position; mutation is limited to wholesale
/// replacement and validated appends.
#[derive(Debug, Clone, Default)]
pub struct Store {
    records: Vec<ExamRecord>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// Swap in a complete new dataset. Readers never observe a partial
    /// update.
    pub fn replace_all(&mut self, records: Vec<ExamRecord>) {
        self.records = records;
    }

    /// Append one record after checking that all five fields are present.
    ///
    /// Fails with `Validation` naming every empty field; the store is
    /// untouched on failure.
    pub fn append(&mut self, record: ExamRecord) -> ExamBoardResult<()> {
        let missing = missing_fields(&record);
        if !missing.is_empty() {
            return Err(ExamBoardError::Validation {
                fields: missing.into_iter().map(String::from).collect(),
            });
        }

        self.records.push(record);
        Ok(())
    }

    /// Read-only view of the records in insertion order.
    pub fn all(&self) -> &[ExamRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Wire names of the fields that are empty or whitespace-only.
fn missing_fields(record: &ExamRecord) -> Vec<&'static str> {
    [
        ("subject", &record.subject),
        ("date", &record.date),
        ("startTime", &record.start_time),
        ("endTime", &record.end_time),
        ("paperInfo", &record.paper_info),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect()
}
