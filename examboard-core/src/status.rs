//! Temporal status classification.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::record::ExamRecord;

/// Where an exam sits relative to the current instant.
///
/// Never stored; recomputed on every tick because "now" keeps moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExamStatus::Upcoming => "upcoming",
            ExamStatus::Ongoing => "ongoing",
            ExamStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

/// Classify a record against `now`, both in local wall time.
///
/// The window comparison is literal: `Upcoming` strictly before `start`,
/// `Ongoing` within `[start, end]`, `Completed` after. An inverted window
/// (`end < start`) can therefore never be `Ongoing` and flips straight
/// from `Upcoming` to `Completed` at `now == start`. A record whose date
/// or times cannot be parsed classifies as `Completed`.
pub fn classify(record: &ExamRecord, now: NaiveDateTime) -> ExamStatus {
    let start = combine(&record.date, &record.start_time);
    let end = combine(&record.date, &record.end_time);

    let (Some(start), Some(end)) = (start, end) else {
        return ExamStatus::Completed;
    };

    if now < start {
        ExamStatus::Upcoming
    } else if now <= end {
        ExamStatus::Ongoing
    } else {
        ExamStatus::Completed
    }
}

/// Build the local instant for a record's date plus one of its times.
pub fn combine(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(parse_date(date)?.and_time(parse_time(time)?))
}

/// Parse `YYYY-M-D`, or take the date part of a full ISO datetime.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(|dt| dt.date())
    })
}

/// Parse `HH:MM`, zero-padding optional.
fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}
