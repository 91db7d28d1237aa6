//! Presentation sinks: where finished results go.
//!
//! The pipeline calls [`PresentationSink::show`] once per successful capture
//! and does not wait for anything afterwards.  How the pair is rendered is up
//! to the sink:
//!
//! * [`ConsoleSink`] prints a two-section panel to stdout.
//! * [`ChannelSink`] forwards the pair over a `tokio::sync::mpsc` channel, so
//!   a separate UI can own the window.

use std::io::Write;

use tokio::sync::mpsc;

use crate::enrich::EnrichmentResult;

/// One-shot, fire-and-forget display of a finished result.
pub trait PresentationSink: Send + Sync {
    fn show(&self, romaji: &str, english: &str);
}

// ---------------------------------------------------------------------------
// ConsoleSink
// ---------------------------------------------------------------------------

const ROMAJI_HEADING: &str = "ROMAJI (Inline):";
const ENGLISH_HEADING: &str = "ENGLISH TRANSLATION:";

/// Writes results to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    /// Render the panel text shown for one result.
    pub fn render(romaji: &str, english: &str) -> String {
        format!("{ROMAJI_HEADING}\n{romaji}\n\n{ENGLISH_HEADING}\n{english}\n")
    }
}

impl PresentationSink for ConsoleSink {
    fn show(&self, romaji: &str, english: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", Self::render(romaji, english)) {
            log::warn!("present: stdout write failed: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// ChannelSink
// ---------------------------------------------------------------------------

/// Forwards each result to a receiver owned by another component.
///
/// Uses `try_send`: when the receiver lags and the channel is full the result
/// is dropped rather than blocking the pipeline.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<EnrichmentResult>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<EnrichmentResult>) -> Self {
        Self { tx }
    }

    /// A sink plus the receiving end, with room for `capacity` results.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<EnrichmentResult>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }
}

impl PresentationSink for ChannelSink {
    fn show(&self, romaji: &str, english: &str) {
        let result = EnrichmentResult {
            transliteration: romaji.to_string(),
            translation: english.to_string(),
        };
        if let Err(e) = self.tx.try_send(result) {
            log::warn!("present: result dropped: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
