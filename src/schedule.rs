//! Schedule data model and shape normalization.
//!
//! The schedule endpoint is served by two deployments that serialize the same
//! logical month in different shapes: the production deployment keys days by
//! day-of-month strings, the local deployment sends an ordered array of day
//! records. Everything downstream of [`normalize::normalize_schedule`] sees a
//! single canonical sequence of [`DayEntry`] values.

pub mod model;
pub mod normalize;

pub use model::{DayEntry, DaySites, ScheduleResponse, ScheduleShape, SitePlan, Topic};
pub use normalize::{normalize_schedule, MonthAnchor, Normalized, NormalizedSchedule};
