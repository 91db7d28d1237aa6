//! Pipeline module: hotkey request → capture → enrichment → presentation.
//!
//! # Architecture
//!
//! ```text
//! CaptureRequest (mpsc)
//!        │
//!        ▼
//! PipelineDriver::run()  ← async tokio task
//!        │
//!        ├─ CaptureController::capture      → Capturing
//!        ├─ EnrichmentCoordinator::enrich   → Enriching
//!        └─ PresentationSink::show          → Presenting → Idle
//!
//! SharedState (Arc<Mutex<AppState>>) ←─── read by status surfaces
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//! use kanji_read_assist::capture::{CaptureController, EnigoSimulator, SystemClipboard};
//! use kanji_read_assist::config::AppConfig;
//! use kanji_read_assist::enrich::EnrichmentCoordinator;
//! use kanji_read_assist::pipeline::{new_shared_state, PipelineDriver};
//! use kanji_read_assist::present::ConsoleSink;
//! use kanji_read_assist::romaji::RomajiTransliterator;
//! use kanji_read_assist::translate::AggregateTranslator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::default();
//!     let capture = CaptureController::new(
//!         Arc::new(SystemClipboard::new()),
//!         Arc::new(EnigoSimulator::new()),
//!         config.capture.clone(),
//!     );
//!     let enrich = EnrichmentCoordinator::new(
//!         Arc::new(RomajiTransliterator::from_config(&config.romaji)?),
//!         Arc::new(AggregateTranslator::from_config(&config.translation)),
//!         config.translation.target_language.clone(),
//!         config.enrichment.provider_timeout(),
//!     );
//!
//!     let (request_tx, request_rx) = mpsc::channel(16);
//!     let driver = PipelineDriver::new(
//!         new_shared_state(),
//!         Arc::new(capture),
//!         Arc::new(enrich),
//!         Arc::new(ConsoleSink::new()),
//!     );
//!
//!     tokio::spawn(driver.run(request_rx));
//!
//!     // request_tx is passed to HotkeyListener::start(...)
//!     # drop(request_tx);
//!     Ok(())
//! }
//! ```

pub mod driver;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use driver::{PipelineDriver, RunOutcome};
pub use state::{new_shared_state, AppState, PipelineState, SharedState};
