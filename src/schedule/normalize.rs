//! Normalization of the two schedule serializations into one canonical sequence.
//!
//! Rendering never sees the mapping shape: both parsers sit behind
//! [`normalize_schedule`], which produces an ordered `Vec<DayEntry>` (or a
//! "missing" marker) plus the per-day failures it skipped over. A malformed
//! day record is recorded and logged by the caller; it never aborts the batch.

use crate::error::{PlanviewError, Result};
use crate::schedule::model::{DayEntry, DaySites, ScheduleShape};
use chrono::{Datelike, NaiveDate};

/// Weekday labels indexed by days-from-Sunday, matching the dashboard locale.
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// The year/month that mapping-shaped day keys are anchored to.
///
/// The production endpoint serves exactly one month and identifies days only
/// by their day-of-month key, so the anchor must be supplied from outside.
/// The default is the month the deployed dashboard serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthAnchor {
    pub year: i32,
    pub month: u32,
}

impl Default for MonthAnchor {
    fn default() -> Self {
        Self {
            year: 2025,
            month: 9,
        }
    }
}

impl MonthAnchor {
    /// Parse a "YYYY-MM" argument into an anchor.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || PlanviewError::invalid_argument(format!("month must be YYYY-MM: {text}"));
        let (year, month) = text.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }

    /// Calendar date for a day-of-month within this anchor, if it exists.
    pub fn date_for_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Display name used when the payload carries no `month_name`.
    pub fn display_name(&self) -> String {
        format!("{}년 {}월", self.year, self.month)
    }
}

/// Localized weekday label for a date.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// Canonical form of the schedule after normalization.
#[derive(Debug)]
pub enum NormalizedSchedule {
    /// One entry per day; may be empty (an empty grid is not "missing")
    Days(Vec<DayEntry>),
    /// The payload carried no schedule at all
    Missing,
}

/// Normalization output: the canonical schedule plus the day records that
/// could not be used.
#[derive(Debug)]
pub struct Normalized {
    pub schedule: NormalizedSchedule,
    pub failures: Vec<PlanviewError>,
}

/// Collapse either serialization into one ordered day sequence.
///
/// Mapping-shaped input is re-sorted ascending by date (day keys are strings,
/// so "10" would otherwise sort before "2"); array-shaped input keeps its
/// order. Each malformed record becomes a `DayRender` failure and is skipped.
pub fn normalize_schedule(shape: Option<ScheduleShape>, anchor: MonthAnchor) -> Normalized {
    let mut failures = Vec::new();

    let schedule = match shape {
        None => NormalizedSchedule::Missing,
        Some(ScheduleShape::ByDay(by_day)) => {
            let mut entries = Vec::with_capacity(by_day.len());
            for (key, value) in by_day {
                match day_entry_for_key(&key, value, anchor) {
                    Ok(entry) => entries.push(entry),
                    Err(err) => failures.push(err),
                }
            }
            entries.sort_by_key(|entry| entry.date);
            NormalizedSchedule::Days(entries)
        }
        Some(ScheduleShape::Days(values)) => {
            let mut entries = Vec::with_capacity(values.len());
            for (index, value) in values.into_iter().enumerate() {
                match serde_json::from_value::<DayEntry>(value) {
                    Ok(entry) => entries.push(entry),
                    Err(err) => failures.push(PlanviewError::day_render(format!(
                        "entry {index}: {err}"
                    ))),
                }
            }
            NormalizedSchedule::Days(entries)
        }
    };

    Normalized { schedule, failures }
}

fn day_entry_for_key(
    key: &str,
    value: serde_json::Value,
    anchor: MonthAnchor,
) -> Result<DayEntry> {
    let day: u32 = key
        .trim()
        .parse()
        .map_err(|_| PlanviewError::day_render(format!("invalid day key '{key}'")))?;
    let date = anchor.date_for_day(day).ok_or_else(|| {
        PlanviewError::day_render(format!(
            "day {day} does not exist in {}-{:02}",
            anchor.year, anchor.month
        ))
    })?;
    let sites: DaySites = serde_json::from_value(value)
        .map_err(|err| PlanviewError::day_render(format!("day {day}: {err}")))?;
    Ok(DayEntry {
        date,
        day_name: weekday_label(date).to_string(),
        sites: Some(sites),
    })
}
