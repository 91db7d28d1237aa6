//! [`CaptureController`] — clear, settle, copy, poll.
//!
//! The simulated copy is handled by the foreground application's own event
//! loop, so there is no completion signal to wait on.  The controller clears
//! the clipboard first (so "text present" means "new text arrived") and then
//! polls a fixed number of times with a fixed interval between checks.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::CaptureConfig;

use super::{CaptureError, CapturedText, ClipboardBridge, InputSimulator};

/// Captures the current selection through the shared clipboard.
///
/// Holds the clipboard and keystroke handles explicitly so tests can swap in
/// fakes.  Share one controller (behind an `Arc`) per process: its internal
/// lock is what keeps two clear/copy sequences from interleaving.
pub struct CaptureController {
    clipboard: Arc<dyn ClipboardBridge>,
    input: Arc<dyn InputSimulator>,
    config: CaptureConfig,
    in_flight: Mutex<()>,
}

impl CaptureController {
    pub fn new(
        clipboard: Arc<dyn ClipboardBridge>,
        input: Arc<dyn InputSimulator>,
        config: CaptureConfig,
    ) -> Self {
        Self {
            clipboard,
            input,
            config,
            in_flight: Mutex::new(()),
        }
    }

    /// Run one capture.
    ///
    /// # Errors
    ///
    /// - [`CaptureError::Busy`] — another capture on this controller has not
    ///   finished; the clipboard is left untouched.
    /// - [`CaptureError::NoSelection`] — no text after `poll_attempts` checks.
    /// - [`CaptureError::EmptyText`] — the copied text was blank.
    /// - [`CaptureError::Clipboard`] — the clipboard could not be cleared or read.
    pub async fn capture(&self) -> Result<CapturedText, CaptureError> {
        let _guard = self.in_flight.try_lock().map_err(|_| CaptureError::Busy)?;

        self.clipboard
            .clear()
            .map_err(|e| CaptureError::Clipboard(e.to_string()))?;

        tokio::time::sleep(self.config.settle_delay()).await;

        if let Err(e) = self.input.send_copy_combination() {
            // The poll below still decides the outcome.
            log::warn!("capture: copy keystroke failed: {e}");
        }

        self.wait_for_text().await?;

        let raw = self
            .clipboard
            .get_text()
            .map_err(|e| CaptureError::Clipboard(e.to_string()))?;

        CapturedText::new(&raw).ok_or(CaptureError::EmptyText)
    }

    /// Check the clipboard up to `poll_attempts` times.
    async fn wait_for_text(&self) -> Result<(), CaptureError> {
        for attempt in 1..=self.config.poll_attempts {
            if self.clipboard.contains_text() {
                log::debug!("capture: text present after {attempt} check(s)");
                return Ok(());
            }
            tokio::time::sleep(self.config.poll_interval()).await;
        }
        Err(CaptureError::NoSelection)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;
    use crate::capture::testing::{BrokenKeyboard, CopyIntoClipboard, MemoryClipboard};

    fn controller(clipboard: &Arc<MemoryClipboard>) -> CaptureController {
        CaptureController::new(
            Arc::clone(clipboard) as Arc<dyn ClipboardBridge>,
            Arc::new(CopyIntoClipboard(Arc::clone(clipboard))),
            CaptureConfig::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn returns_the_selected_text() {
        for selection in ["日本語", "hello", "今日は いい天気", "a"] {
            let clipboard = MemoryClipboard::with_selection(Some(selection));
            let text = controller(&clipboard).capture().await.unwrap();
            assert_eq!(text.as_str(), selection);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn surrounding_whitespace_is_trimmed() {
        let clipboard = MemoryClipboard::with_selection(Some("\n  漢字\t "));
        let text = controller(&clipboard).capture().await.unwrap();
        assert_eq!(text.as_str(), "漢字");
    }

    #[tokio::test(start_paused = true)]
    async fn stale_clipboard_content_is_cleared_first() {
        let clipboard = MemoryClipboard::with_selection(None);
        clipboard.seed("copied an hour ago");

        let err = controller(&clipboard).capture().await.unwrap_err();

        assert_eq!(err, CaptureError::NoSelection);
        assert_eq!(clipboard.clear_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn no_selection_after_exactly_the_configured_checks() {
        let clipboard = MemoryClipboard::with_selection(None);
        let config = CaptureConfig {
            settle_delay_ms: 50,
            poll_interval_ms: 50,
            poll_attempts: 7,
        };
        let ctrl = CaptureController::new(
            Arc::clone(&clipboard) as Arc<dyn ClipboardBridge>,
            Arc::new(CopyIntoClipboard(Arc::clone(&clipboard))),
            config,
        );

        let start = Instant::now();
        let err = ctrl.capture().await.unwrap_err();

        assert_eq!(err, CaptureError::NoSelection);
        assert_eq!(clipboard.check_count(), 7);
        assert_eq!(clipboard.copy_count(), 1);
        // settle + one interval per failed check
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(50 + 7 * 50), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(50 + 8 * 50), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_copy_is_picked_up_by_a_later_check() {
        let clipboard = MemoryClipboard::lagging(Some("遅い"), 5);
        let text = controller(&clipboard).capture().await.unwrap();

        assert_eq!(text.as_str(), "遅い");
        assert_eq!(clipboard.check_count(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn copy_landing_after_the_budget_is_missed() {
        let clipboard = MemoryClipboard::lagging(Some("too late"), 21);
        let err = controller(&clipboard).capture().await.unwrap_err();

        assert_eq!(err, CaptureError::NoSelection);
        assert_eq!(clipboard.check_count(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn whitespace_selection_is_empty_text() {
        let clipboard = MemoryClipboard::with_selection(Some(" \n\t "));
        let err = controller(&clipboard).capture().await.unwrap_err();
        assert_eq!(err, CaptureError::EmptyText);
    }

    #[tokio::test(start_paused = true)]
    async fn keystroke_failure_still_polls_to_the_end() {
        let clipboard = MemoryClipboard::with_selection(Some("unused"));
        let ctrl = CaptureController::new(
            Arc::clone(&clipboard) as Arc<dyn ClipboardBridge>,
            Arc::new(BrokenKeyboard),
            CaptureConfig::default(),
        );

        let err = ctrl.capture().await.unwrap_err();

        assert_eq!(err, CaptureError::NoSelection);
        assert_eq!(clipboard.check_count(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_capture_is_rejected_without_touching_the_clipboard() {
        let clipboard = MemoryClipboard::with_selection(Some("一回だけ"));
        let ctrl = controller(&clipboard);

        let (first, second) = tokio::join!(ctrl.capture(), ctrl.capture());

        assert_eq!(first.unwrap().as_str(), "一回だけ");
        assert_eq!(second.unwrap_err(), CaptureError::Busy);
        assert_eq!(clipboard.clear_count(), 1);
        assert_eq!(clipboard.copy_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn controller_is_reusable_after_a_run() {
        let clipboard = MemoryClipboard::with_selection(Some("again"));
        let ctrl = controller(&clipboard);

        assert!(ctrl.capture().await.is_ok());
        assert!(ctrl.capture().await.is_ok());
        assert_eq!(clipboard.clear_count(), 2);
    }
}
