//! The exam record model.
//!
//! Records arrive from untrusted JSON sources and are deliberately not
//! deep-validated on load: missing or null fields become empty strings and
//! scalar values keep their text form, so a sloppy upstream document still
//! renders and classifies deterministically. Strict field validation only
//! applies to interactively added records (see `Store::append`).

use serde::{Deserialize, Deserializer, Serialize};

/// One exam entry.
///
/// Field names and order mirror the JSON wire format exactly:
/// `subject`, `date`, `startTime`, `endTime`, `paperInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub subject: String,

    /// Calendar date, `YYYY-M-D` (zero-padding optional) or ISO.
    /// No inherent timezone; interpreted in the host's local time.
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,

    /// Time of day, `HH:MM` (24h).
    #[serde(deserialize_with = "lenient_string")]
    pub start_time: String,

    /// Time of day, `HH:MM` (24h). May sort before `start_time`; the
    /// classifier applies the literal window either way.
    #[serde(deserialize_with = "lenient_string")]
    pub end_time: String,

    /// Free-text description of the paper, opaque to the core.
    #[serde(deserialize_with = "lenient_string")]
    pub paper_info: String,
}

impl ExamRecord {
    /// The built-in sample record installed when loading fails, so the
    /// board never shows an empty, unexplained state.
    pub fn placeholder() -> Self {
        ExamRecord {
            subject: "示例".to_string(),
            date: "1145-1-4".to_string(),
            start_time: "00:00".to_string(),
            end_time: "23:59".to_string(),
            paper_info: "该试卷共xx张xx页xx道大题".to_string(),
        }
    }
}

/// Accept any JSON scalar where a string is expected.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
