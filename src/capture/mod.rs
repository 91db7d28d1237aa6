//! Selection capture — turns "the user has text selected" into an owned string.
//!
//! # Overview
//!
//! There is no portable "read the current selection" API, so the capture goes
//! through the clipboard:
//!
//! 1. **Clear** the clipboard so stale content cannot be mistaken for the
//!    selection.
//! 2. **Settle** for a short delay.
//! 3. **Simulate** Ctrl+C (or ⌘C on macOS) in the focused window.
//! 4. **Poll** the clipboard until text lands or the poll budget runs out.
//! 5. **Trim** the text; blank text counts as no selection.
//!
//! The clipboard and the keystroke simulator are injected as trait objects
//! ([`ClipboardBridge`], [`InputSimulator`]) so the controller can run against
//! in-memory fakes.

pub mod clipboard;
pub mod controller;
pub mod keyboard;

#[cfg(test)]
pub mod testing;

pub use clipboard::{ClipboardBridge, ClipboardError, SystemClipboard};
pub use controller::CaptureController;
pub use keyboard::{EnigoSimulator, InputSimulator, KeySimulationError};

use thiserror::Error;

// ---------------------------------------------------------------------------
// CapturedText
// ---------------------------------------------------------------------------

/// Text obtained from a successful capture.
///
/// Always trimmed and never empty; the only constructor is
/// [`CapturedText::new`], which rejects blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedText(String);

impl CapturedText {
    /// Trim `raw` and wrap it, or return `None` when nothing but whitespace
    /// is left.
    ///
    /// ```
    /// use kanji_read_assist::capture::CapturedText;
    ///
    /// assert_eq!(CapturedText::new("  日本語\n").unwrap().as_str(), "日本語");
    /// assert!(CapturedText::new(" \t ").is_none());
    /// ```
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CapturedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CapturedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// CaptureError
// ---------------------------------------------------------------------------

/// Reasons a capture produced no text.
///
/// None of these are shown to the user: "nothing selected" is the common
/// case and the run is simply discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// The clipboard never gained text within the poll budget.
    #[error("no selection: clipboard stayed empty")]
    NoSelection,

    /// The clipboard held text, but only whitespace.
    #[error("selection is blank")]
    EmptyText,

    /// Another capture owns the clipboard right now.
    #[error("a capture is already in progress")]
    Busy,

    /// The clipboard could not be cleared or read.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
