//! Application orchestration layer.
//!
//! [`ScheduleApp`] coordinates the source and the sink without owning any of
//! their internals: it drives the `Idle → Loading → {Rendered | Errored}`
//! lifecycle, logs failures, and leaves the committed markup in the sink.

use crate::error::{PlanviewError, Result};
use crate::render::{html, ViewSink};
use crate::schedule::{normalize_schedule, MonthAnchor};
use crate::source::ScheduleSource;
use std::sync::Arc;

/// Where the lifecycle currently stands.
///
/// `Errored` offers a manual transition back to `Loading` via [`ScheduleApp::retry`];
/// there is no automatic retry, timeout, or in-flight cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Rendered,
    Errored,
}

/// Schedule modal orchestrator: one operation, `show_schedule`.
pub struct ScheduleApp {
    source: Arc<dyn ScheduleSource>,
    sink: Box<dyn ViewSink>,
    anchor: MonthAnchor,
    phase: ViewPhase,
}

impl ScheduleApp {
    /// Wire a source and a sink together with the default month anchor.
    pub fn new(source: Arc<dyn ScheduleSource>, sink: Box<dyn ViewSink>) -> Self {
        Self::with_anchor(source, sink, MonthAnchor::default())
    }

    /// Wire a source and a sink together with an explicit month anchor for
    /// mapping-shaped responses.
    pub fn with_anchor(
        source: Arc<dyn ScheduleSource>,
        sink: Box<dyn ViewSink>,
        anchor: MonthAnchor,
    ) -> Self {
        Self {
            source,
            sink,
            anchor,
            phase: ViewPhase::Idle,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Run the full lifecycle: loading placeholder, modal open, fetch,
    /// normalize, render, commit.
    ///
    /// Terminal failures (network, non-OK status, decode, payload error) are
    /// not propagated: they are logged and committed to the sink as the error
    /// panel, and the app settles in `Errored`. Only sink writes can return
    /// `Err` here.
    pub async fn show_schedule(&mut self) -> Result<()> {
        self.phase = ViewPhase::Loading;
        self.sink.replace_content(&html::loading_panel())?;
        // The modal opens immediately; it does not wait for data.
        self.sink.open_modal()?;

        match self.load_and_render().await {
            Ok(markup) => {
                self.sink.replace_content(&markup)?;
                self.phase = ViewPhase::Rendered;
            }
            Err(err) => {
                log::error!("schedule load failed: {err}");
                self.sink.replace_content(&html::error_panel(&err.to_string()))?;
                self.phase = ViewPhase::Errored;
            }
        }
        Ok(())
    }

    /// Manual retry: re-runs the whole lifecycle from the loading state.
    pub async fn retry(&mut self) -> Result<()> {
        self.show_schedule().await
    }

    async fn load_and_render(&self) -> Result<String> {
        log::debug!("fetching monthly schedule");
        let response = self.source.fetch_monthly().await?;

        if let Some(message) = response.error {
            return Err(PlanviewError::payload(message));
        }

        let normalized = normalize_schedule(response.schedule, self.anchor);
        // Day-level failures are logged, never terminal: the valid days render.
        for failure in &normalized.failures {
            log::error!("day entry skipped: {failure}");
        }

        Ok(html::schedule_grid(
            response.month_name.as_deref(),
            &normalized.schedule,
            self.anchor,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BufferSink;
    use crate::source::StaticScheduleSource;
    use async_trait::async_trait;
    use crate::schedule::ScheduleResponse;

    fn app_for(body: &str) -> (ScheduleApp, BufferSink) {
        let sink = BufferSink::new();
        let app = ScheduleApp::new(
            Arc::new(StaticScheduleSource::new(body)),
            Box::new(sink.clone()),
        );
        (app, sink)
    }

    #[tokio::test]
    async fn successful_lifecycle_settles_rendered() {
        let (mut app, sink) = app_for(
            r#"{"schedule": {"1": {"naver": {"primary": {"topic": "A"}, "secondary": {"topic": "B"}}}}}"#,
        );
        assert_eq!(app.phase(), ViewPhase::Idle);

        app.show_schedule().await.unwrap();

        assert_eq!(app.phase(), ViewPhase::Rendered);
        assert!(sink.modal_opened());
        // Loading panel was written first, then the grid replaced it.
        assert_eq!(sink.write_count(), 2);
        assert!(sink.content().contains("1. A"));
        assert!(!sink.content().contains("불러오는 중"));
    }

    #[tokio::test]
    async fn payload_error_settles_errored_with_panel() {
        let (mut app, sink) = app_for(r#"{"error": "locked"}"#);

        app.show_schedule().await.unwrap();

        assert_eq!(app.phase(), ViewPhase::Errored);
        assert!(sink.content().contains("오류: locked"));
        assert!(sink.content().contains("다시 시도"));
    }

    #[tokio::test]
    async fn retry_reruns_the_lifecycle() {
        let (mut app, sink) = app_for(r#"{"error": "locked"}"#);
        app.show_schedule().await.unwrap();
        assert_eq!(app.phase(), ViewPhase::Errored);

        app.retry().await.unwrap();
        assert_eq!(app.phase(), ViewPhase::Errored);
        // Two lifecycles, two writes each
        assert_eq!(sink.write_count(), 4);
    }

    #[tokio::test]
    async fn transport_failure_renders_status_code() {
        struct FailingSource;

        #[async_trait]
        impl crate::source::ScheduleSource for FailingSource {
            async fn fetch_monthly(&self) -> crate::error::Result<ScheduleResponse> {
                Err(PlanviewError::transport(500))
            }
        }

        let sink = BufferSink::new();
        let mut app = ScheduleApp::new(Arc::new(FailingSource), Box::new(sink.clone()));

        app.show_schedule().await.unwrap();

        assert_eq!(app.phase(), ViewPhase::Errored);
        assert!(sink.content().contains("500"));
    }
}
