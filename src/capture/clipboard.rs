//! Clipboard access behind the [`ClipboardBridge`] trait.
//!
//! [`SystemClipboard`] is the production implementation backed by `arboard`.
//! It opens a short-lived [`arboard::Clipboard`] handle per call rather than
//! sharing one, because `arboard::Clipboard` is not `Send` on all platforms
//! and the handle is cheap to create.

use arboard::Clipboard;
use thiserror::Error;

/// Errors raised by a clipboard backend.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Could not open the system clipboard.
    #[error("cannot access clipboard: {0}")]
    Access(String),

    /// Could not clear the clipboard.
    #[error("cannot clear clipboard: {0}")]
    Clear(String),

    /// The clipboard holds no plain text.
    #[error("clipboard holds no text: {0}")]
    Read(String),
}

/// Synchronous access to the single, process-shared clipboard buffer.
///
/// Every call is expected to return quickly; the capture controller calls
/// them directly from async code between its timed waits.
pub trait ClipboardBridge: Send + Sync {
    /// Empty the clipboard.
    fn clear(&self) -> Result<(), ClipboardError>;

    /// `true` when the clipboard currently holds plain text.
    fn contains_text(&self) -> bool;

    /// Read the clipboard's plain-text content.
    fn get_text(&self) -> Result<String, ClipboardError>;
}

// ---------------------------------------------------------------------------
// SystemClipboard
// ---------------------------------------------------------------------------

/// The OS clipboard via `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn open() -> Result<Clipboard, ClipboardError> {
        Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

impl ClipboardBridge for SystemClipboard {
    fn clear(&self) -> Result<(), ClipboardError> {
        Self::open()?
            .clear()
            .map_err(|e| ClipboardError::Clear(e.to_string()))
    }

    fn contains_text(&self) -> bool {
        // `get_text` fails for an empty clipboard and for non-text data alike.
        Self::open()
            .map(|mut clipboard| clipboard.get_text().is_ok())
            .unwrap_or(false)
    }

    fn get_text(&self) -> Result<String, ClipboardError> {
        Self::open()?
            .get_text()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }
}
