//! Schedule source abstraction.
//!
//! This module defines the `ScheduleSource` trait that decouples the render
//! lifecycle from where the payload comes from: the live dashboard endpoint
//! ([`http::HttpScheduleSource`]) or a JSON document already in hand
//! ([`StaticScheduleSource`], used by the CLI's `--input` mode and by tests).

pub mod http;

use crate::error::Result;
use crate::schedule::ScheduleResponse;
use async_trait::async_trait;

pub use http::HttpScheduleSource;

/// Provider of a monthly schedule payload.
///
/// Implementations must be thread-safe; the app holds the source behind an
/// `Arc` so a retry can re-issue the fetch without rebuilding anything.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetch and decode one monthly schedule payload.
    ///
    /// This is the render lifecycle's single suspension point. Transport and
    /// decode failures map onto `Network`/`Transport`/`Decode` errors; an
    /// application-level `error` field is left in the payload for the caller
    /// to judge.
    async fn fetch_monthly(&self) -> Result<ScheduleResponse>;
}

/// Source backed by a raw JSON document held in memory.
///
/// Decodes on every fetch so it exercises the same decode path (and decode
/// errors) as the HTTP source.
pub struct StaticScheduleSource {
    body: String,
}

impl StaticScheduleSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl ScheduleSource for StaticScheduleSource {
    async fn fetch_monthly(&self) -> Result<ScheduleResponse> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
