//! Dedicated OS-thread hotkey listener using `rdev::listen`.
//!
//! [`HotkeyListener`] owns the listening thread and a stop flag; dropping it
//! sets the flag so the callback ignores further events.
//!
//! `rdev::listen` cannot be interrupted.  After the flag is set the thread
//! stays parked in the OS event loop until the process exits.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::mpsc;

use super::{CaptureRequest, HotkeyCombo, Modifiers};

// ---------------------------------------------------------------------------
// HotkeyListener
// ---------------------------------------------------------------------------

/// Handle to a running hotkey listener thread.
pub struct HotkeyListener {
    stop: Arc<AtomicBool>,
    /// Never joined; `rdev::listen` does not return.
    _thread: std::thread::JoinHandle<()>,
}

impl HotkeyListener {
    /// Spawn the listener thread.  Each press of `combo` sends one
    /// [`CaptureRequest`] on `tx`.
    ///
    /// Sends use `try_send`: when the channel is full the driver is busy
    /// anyway, so the press is dropped instead of stalling the OS hook.
    pub fn start(combo: HotkeyCombo, tx: mpsc::Sender<CaptureRequest>) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let thread = std::thread::Builder::new()
            .name("hotkey-listener".into())
            .spawn(move || {
                let mut held = Modifiers::default();
                // Auto-repeat sends KeyPress repeatedly; only the first counts.
                let mut trigger_down = false;

                let result = rdev::listen(move |event| {
                    if stop_flag.load(Ordering::Relaxed) {
                        return;
                    }

                    match event.event_type {
                        rdev::EventType::KeyPress(key) => {
                            if held.update(key, true) {
                                return;
                            }
                            if combo.matches(key, held) && !trigger_down {
                                trigger_down = true;
                                if let Err(e) = tx.try_send(CaptureRequest) {
                                    log::debug!("hotkey-listener: request dropped: {e}");
                                }
                            }
                        }
                        rdev::EventType::KeyRelease(key) => {
                            if !held.update(key, false) && key == combo.key {
                                trigger_down = false;
                            }
                        }
                        _ => {}
                    }
                });

                if let Err(e) = result {
                    log::error!("hotkey-listener: rdev::listen exited with error: {:?}", e);
                }
            })?;

        Ok(Self {
            stop,
            _thread: thread,
        })
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
