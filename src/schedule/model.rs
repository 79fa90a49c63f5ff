//! Serde model for the monthly schedule payload.
//!
//! Untagged enums absorb the differences between the two deployment
//! serializations so callers never branch on JSON types themselves.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level payload returned by `GET /api/schedule/monthly`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    /// Display name for the month, e.g. "2025년 9월"
    #[serde(default)]
    pub month_name: Option<String>,
    /// Application-level error reported by the endpoint
    #[serde(default)]
    pub error: Option<String>,
    /// The schedule itself; absent or null means "no data"
    #[serde(default)]
    pub schedule: Option<ScheduleShape>,
}

/// The two serializations of a monthly schedule.
///
/// Day values stay as raw JSON in both shapes so one malformed day record can
/// be skipped during normalization without poisoning the whole batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScheduleShape {
    /// Local deployment: ordered array of day records, assumed pre-sorted
    Days(Vec<serde_json::Value>),
    /// Production deployment: day-of-month string keys ("1".."31") to sites
    ByDay(BTreeMap<String, serde_json::Value>),
}

/// One calendar day's schedule record in canonical form.
#[derive(Debug, Clone, Deserialize)]
pub struct DayEntry {
    /// Calendar date of this entry
    pub date: NaiveDate,
    /// Localized weekday label, e.g. "월"
    pub day_name: String,
    /// Planned topics per site; absent or empty renders as a holiday
    #[serde(default)]
    pub sites: Option<DaySites>,
}

/// Mapping from site identifier to that site's plan for the day.
///
/// A null plan is preserved as `None` and skipped during rendering.
pub type DaySites = BTreeMap<String, Option<SitePlan>>;

/// A single site's planned topics for one day.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SitePlan {
    /// Production shape: fixed primary/secondary pair
    Pair { primary: Topic, secondary: Topic },
    /// Local shape: ordered topic list
    Sequence(Vec<Topic>),
    /// Anything else renders the site label with no topic lines
    Other(serde_json::Value),
}

/// A planned content item: either an object with a `topic` field or, in the
/// degenerate case, a bare string standing in for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Topic {
    Detailed { topic: String },
    Plain(String),
}

impl Topic {
    /// The display title of this topic.
    pub fn title(&self) -> &str {
        match self {
            Topic::Detailed { topic } => topic,
            Topic::Plain(text) => text,
        }
    }
}

impl DayEntry {
    /// Whether this day has at least one site planned.
    pub fn has_schedule(&self) -> bool {
        self.sites.as_ref().is_some_and(|sites| !sites.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_decodes_mapping_shape() {
        let body = r#"{
            "month_name": "2025년 9월",
            "schedule": {
                "1": {"naver": {"primary": {"topic": "A"}, "secondary": {"topic": "B"}}}
            }
        }"#;
        let response: ScheduleResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.month_name.as_deref(), Some("2025년 9월"));
        match response.schedule {
            Some(ScheduleShape::ByDay(days)) => {
                let sites: DaySites = serde_json::from_value(days["1"].clone()).unwrap();
                match sites["naver"].as_ref().unwrap() {
                    SitePlan::Pair { primary, secondary } => {
                        assert_eq!(primary.title(), "A");
                        assert_eq!(secondary.title(), "B");
                    }
                    other => panic!("expected Pair, got {other:?}"),
                }
            }
            other => panic!("expected ByDay, got {other:?}"),
        }
    }

    #[test]
    fn response_decodes_array_shape() {
        let body = r#"{
            "schedule": [
                {"date": "2025-09-01", "day_name": "월", "sites": {"tistory": ["간헐적 단식", {"topic": "가을 여행"}]}}
            ]
        }"#;
        let response: ScheduleResponse = serde_json::from_str(body).unwrap();
        let days = match response.schedule {
            Some(ScheduleShape::Days(days)) => days,
            other => panic!("expected Days, got {other:?}"),
        };
        let entry: DayEntry = serde_json::from_value(days[0].clone()).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert!(entry.has_schedule());
        match entry.sites.unwrap()["tistory"].as_ref().unwrap() {
            SitePlan::Sequence(topics) => {
                assert_eq!(topics[0].title(), "간헐적 단식");
                assert_eq!(topics[1].title(), "가을 여행");
            }
            other => panic!("expected Sequence, got {other:?}"),
        }
    }

    #[test]
    fn null_schedule_is_absent() {
        let response: ScheduleResponse = serde_json::from_str(r#"{"schedule": null}"#).unwrap();
        assert!(response.schedule.is_none());
    }

    #[test]
    fn null_site_plan_is_preserved() {
        let sites: DaySites = serde_json::from_str(r#"{"naver": null}"#).unwrap();
        assert!(sites["naver"].is_none());
    }

    #[test]
    fn partial_pair_falls_back_to_other() {
        let plan: SitePlan = serde_json::from_str(r#"{"primary": {"topic": "A"}}"#).unwrap();
        assert!(matches!(plan, SitePlan::Other(_)));
    }

    #[test]
    fn day_without_sites_is_holiday() {
        let entry: DayEntry =
            serde_json::from_str(r#"{"date": "2025-09-07", "day_name": "일"}"#).unwrap();
        assert!(!entry.has_schedule());

        let entry: DayEntry =
            serde_json::from_str(r#"{"date": "2025-09-07", "day_name": "일", "sites": {}}"#)
                .unwrap();
        assert!(!entry.has_schedule());
    }
}
