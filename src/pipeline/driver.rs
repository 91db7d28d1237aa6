//! Pipeline driver — one hotkey press in, one panel out.
//!
//! [`PipelineDriver`] owns the capture controller, the enrichment coordinator
//! and the presentation sink, and responds to [`CaptureRequest`]s received
//! over a `tokio::sync::mpsc` channel.
//!
//! # Run flow
//!
//! ```text
//! CaptureRequest
//!   └─▶ capture.capture()                        [Capturing]
//!         ├─ Err → record discard, nothing shown  [Idle]
//!         └─ Ok  → enrich.enrich(text)            [Enriching]
//!                    └─▶ sink.show(romaji, english) [Presenting] → [Idle]
//! ```
//!
//! Requests are handled one at a time.  Presses that queued up while a run
//! was in flight are drained and dropped once it finishes.

use std::sync::{Arc, PoisonError};

use tokio::sync::mpsc;

use crate::capture::{CaptureController, CaptureError};
use crate::enrich::{EnrichmentCoordinator, EnrichmentResult};
use crate::hotkey::CaptureRequest;
use crate::present::PresentationSink;

use super::state::{AppState, PipelineState, SharedState};

/// How a single run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The pair reached the presentation sink.
    Presented(EnrichmentResult),
    /// Nothing usable was captured; nothing was shown.
    Discarded(CaptureError),
}

// ---------------------------------------------------------------------------
// PipelineDriver
// ---------------------------------------------------------------------------

/// Drives capture → enrichment → presentation.
///
/// Create with [`PipelineDriver::new`], then call [`run`](Self::run) inside a
/// tokio task.
pub struct PipelineDriver {
    state: SharedState,
    capture: Arc<CaptureController>,
    enrich: Arc<EnrichmentCoordinator>,
    sink: Arc<dyn PresentationSink>,
}

impl PipelineDriver {
    pub fn new(
        state: SharedState,
        capture: Arc<CaptureController>,
        enrich: Arc<EnrichmentCoordinator>,
        sink: Arc<dyn PresentationSink>,
    ) -> Self {
        Self {
            state,
            capture,
            enrich,
            sink,
        }
    }

    // -----------------------------------------------------------------------
    // Main async loop
    // -----------------------------------------------------------------------

    /// Run until every sender of `requests` is dropped.
    pub async fn run(self, mut requests: mpsc::Receiver<CaptureRequest>) {
        while let Some(CaptureRequest) = requests.recv().await {
            self.run_once().await;

            let mut ignored = 0u64;
            while requests.try_recv().is_ok() {
                ignored += 1;
            }
            if ignored > 0 {
                log::debug!("pipeline: ignored {ignored} request(s) received while busy");
                self.update(|st| st.requests_ignored += ignored);
            }
        }

        log::info!("pipeline: request channel closed, driver shutting down");
    }

    /// Perform one complete run, whatever its outcome.
    pub async fn run_once(&self) -> RunOutcome {
        self.set_pipeline(PipelineState::Capturing);

        let text = match self.capture.capture().await {
            Ok(text) => text,
            Err(e) => {
                log::debug!("pipeline: capture produced nothing ({e}), discarding run");
                self.update(|st| {
                    st.pipeline = PipelineState::Idle;
                    st.last_discard = Some(e.clone());
                    st.runs_discarded += 1;
                });
                return RunOutcome::Discarded(e);
            }
        };

        log::debug!("pipeline: captured {} chars", text.as_str().chars().count());
        self.set_pipeline(PipelineState::Enriching);

        let result = self.enrich.enrich(text).await;

        self.set_pipeline(PipelineState::Presenting);
        self.sink.show(&result.transliteration, &result.translation);

        self.update(|st| {
            st.pipeline = PipelineState::Idle;
            st.last_result = Some(result.clone());
            st.runs_presented += 1;
        });
        log::info!("pipeline: result presented");

        RunOutcome::Presented(result)
    }

    // -----------------------------------------------------------------------
    // State helpers
    // -----------------------------------------------------------------------

    fn set_pipeline(&self, pipeline: PipelineState) {
        log::debug!("pipeline: {}", pipeline.label());
        self.update(|st| st.pipeline = pipeline);
    }

    /// Mutate the shared state.  A poisoned lock still holds valid counters,
    /// so it is recovered rather than propagated.
    fn update(&self, f: impl FnOnce(&mut AppState)) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut st);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
