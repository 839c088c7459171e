//! JSON export of the current dataset.

use crate::error::{ExamBoardError, ExamBoardResult};
use crate::record::ExamRecord;

/// Default filename for exported datasets.
pub const EXPORT_FILENAME: &str = "exam_data.json";

/// Serialize records as a pretty-printed JSON array (2-space indent),
/// mirroring the wire field names and order. Exporting and re-parsing
/// through the loader reproduces an equivalent dataset.
pub fn export_json(records: &[ExamRecord]) -> ExamBoardResult<Vec<u8>> {
    serde_json::to_vec_pretty(records).map_err(|e| ExamBoardError::Serialization(e.to_string()))
}
