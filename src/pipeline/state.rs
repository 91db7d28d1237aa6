//! Pipeline state machine and shared application state.
//!
//! [`PipelineState`] tracks where the current run is.  Status surfaces (tray
//! tooltip, logs) read it via [`SharedState`].
//!
//! [`AppState`] also keeps the last presented result, the reason the last
//! run was discarded, and run counters.
//!
//! [`SharedState`] is a type alias for `Arc<Mutex<AppState>>`, cheap to clone
//! and safe to share across threads.

use std::sync::{Arc, Mutex};

use crate::capture::CaptureError;
use crate::enrich::EnrichmentResult;

// ---------------------------------------------------------------------------
// PipelineState
// ---------------------------------------------------------------------------

/// States of one hotkey-to-display run.
///
/// ```text
/// Idle ──request──▶ Capturing ──no text──▶ Idle        (discarded silently)
///                             ──text────▶ Enriching ──both joined──▶ Presenting ──▶ Idle
/// ```
///
/// Requests that arrive while the state is not `Idle` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// Waiting for the next hotkey press.
    #[default]
    Idle,

    /// Clipboard cleared, copy sent, polling for text.
    Capturing,

    /// Transliteration and translation are running.
    Enriching,

    /// The result is being handed to the presentation sink.
    Presenting,
}

impl PipelineState {
    /// Returns `true` while a run is in flight.
    ///
    /// ```
    /// use kanji_read_assist::pipeline::PipelineState;
    ///
    /// assert!(!PipelineState::Idle.is_busy());
    /// assert!(PipelineState::Capturing.is_busy());
    /// assert!(PipelineState::Enriching.is_busy());
    /// assert!(PipelineState::Presenting.is_busy());
    /// ```
    pub fn is_busy(&self) -> bool {
        !matches!(self, PipelineState::Idle)
    }

    /// A short human-readable label suitable for a status line.
    pub fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "Ready",
            PipelineState::Capturing => "Copying selection",
            PipelineState::Enriching => "Converting",
            PipelineState::Presenting => "Showing result",
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Shared application state.
///
/// Held behind [`SharedState`] (`Arc<Mutex<AppState>>`).  The pipeline
/// driver mutates it; status surfaces read it.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current phase of the pipeline.
    pub pipeline: PipelineState,

    /// The most recently presented result.
    pub last_result: Option<EnrichmentResult>,

    /// Why the most recent discarded run produced nothing.
    pub last_discard: Option<CaptureError>,

    /// Runs that reached the presentation sink.
    pub runs_presented: u64,

    /// Runs dropped because the capture failed.
    pub runs_discarded: u64,

    /// Hotkey presses ignored because a run was already in flight.
    pub requests_ignored: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line status for logs: the current phase plus the run counters.
    pub fn summary(&self) -> String {
        format!(
            "{}; {} presented, {} discarded, {} ignored",
            self.pipeline.label(),
            self.runs_presented,
            self.runs_discarded,
            self.requests_ignored
        )
    }
}

// ---------------------------------------------------------------------------
// SharedState
// ---------------------------------------------------------------------------

/// Thread-safe handle to [`AppState`].
///
/// Lock for a short critical section only; never hold the lock across
/// `.await` points.
pub type SharedState = Arc<Mutex<AppState>>;

/// Construct a new [`SharedState`] wrapping a default [`AppState`].
pub fn new_shared_state() -> SharedState {
    Arc::new(Mutex::new(AppState::new()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
