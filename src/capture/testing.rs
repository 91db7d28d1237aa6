//! In-memory stand-ins for the clipboard and the foreground application.
//!
//! [`MemoryClipboard`] models the clipboard slot plus the selection held by
//! the focused window.  [`CopyIntoClipboard`] plays the keystroke simulator:
//! each simulated Ctrl+C asks the clipboard to receive the selection, which
//! lands after a configurable number of `contains_text` checks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{ClipboardBridge, ClipboardError, InputSimulator, KeySimulationError};

#[derive(Default)]
struct Slots {
    content: Option<String>,
    selection: Option<String>,
    /// Checks left before a pending copy lands.
    pending: Option<u32>,
}

/// Fake clipboard that counts every operation.
#[derive(Default)]
pub struct MemoryClipboard {
    slots: Mutex<Slots>,
    lag_checks: u32,
    pub clears: AtomicUsize,
    pub checks: AtomicUsize,
    pub copies: AtomicUsize,
}

impl MemoryClipboard {
    /// A clipboard whose copies land immediately and whose foreground window
    /// has `selection` selected (`None` = nothing selected).
    pub fn with_selection(selection: Option<&str>) -> Arc<Self> {
        Self::lagging(selection, 0)
    }

    /// Like [`with_selection`](Self::with_selection), but the copied text only
    /// becomes visible on the `lag_checks`-th check after the keystroke.
    pub fn lagging(selection: Option<&str>, lag_checks: u32) -> Arc<Self> {
        let clipboard = Self {
            lag_checks,
            ..Self::default()
        };
        clipboard.slots.lock().unwrap().selection = selection.map(str::to_string);
        Arc::new(clipboard)
    }

    /// Put `text` straight into the clipboard slot, as an unrelated copy would.
    pub fn seed(&self, text: &str) {
        self.slots.lock().unwrap().content = Some(text.to_string());
    }

    /// Simulate the foreground application handling Ctrl+C.
    pub fn receive_copy(&self) {
        self.copies.fetch_add(1, Ordering::SeqCst);
        let mut slots = self.slots.lock().unwrap();
        if slots.selection.is_none() {
            return;
        }
        if self.lag_checks == 0 {
            slots.content = slots.selection.clone();
        } else {
            slots.pending = Some(self.lag_checks);
        }
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    pub fn check_count(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    pub fn copy_count(&self) -> usize {
        self.copies.load(Ordering::SeqCst)
    }
}

impl ClipboardBridge for MemoryClipboard {
    fn clear(&self) -> Result<(), ClipboardError> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.slots.lock().unwrap().content = None;
        Ok(())
    }

    fn contains_text(&self) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst);
        let mut slots = self.slots.lock().unwrap();
        if let Some(left) = slots.pending {
            if left <= 1 {
                slots.pending = None;
                slots.content = slots.selection.clone();
            } else {
                slots.pending = Some(left - 1);
            }
        }
        slots.content.is_some()
    }

    fn get_text(&self) -> Result<String, ClipboardError> {
        self.slots
            .lock()
            .unwrap()
            .content
            .clone()
            .ok_or_else(|| ClipboardError::Read("empty".into()))
    }
}

/// Keystroke simulator that delivers the selection into a [`MemoryClipboard`].
pub struct CopyIntoClipboard(pub Arc<MemoryClipboard>);

impl InputSimulator for CopyIntoClipboard {
    fn send_copy_combination(&self) -> Result<(), KeySimulationError> {
        self.0.receive_copy();
        Ok(())
    }
}

/// Keystroke simulator whose backend is unavailable.
pub struct BrokenKeyboard;

impl InputSimulator for BrokenKeyboard {
    fn send_copy_combination(&self) -> Result<(), KeySimulationError> {
        Err(KeySimulationError("no display".into()))
    }
}
