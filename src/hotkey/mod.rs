//! Global hotkey trigger, backed by `rdev`.
//!
//! # Design
//!
//! `rdev::listen()` is a blocking OS-level call that never returns while the
//! process is alive.  It must run on a **dedicated OS thread**, not inside a
//! tokio task.
//!
//! [`HotkeyListener::start`] spawns that thread.  The callback tracks which
//! modifiers are held and, when the configured [`HotkeyCombo`] fires, pushes a
//! [`CaptureRequest`] into a `tokio::sync::mpsc` channel that the pipeline
//! driver consumes.
//!
//! # Usage
//!
//! ```no_run
//! use tokio::sync::mpsc;
//! use kanji_read_assist::hotkey::{parse_combo, HotkeyListener};
//!
//! let (tx, mut rx) = mpsc::channel(4);
//! let combo = parse_combo("Ctrl+F2").expect("bad hotkey");
//! let _listener = HotkeyListener::start(combo, tx).expect("listener thread");
//!
//! // In your async loop:
//! // while let Some(request) = rx.recv().await { ... }
//! ```

pub mod listener;

pub use listener::HotkeyListener;

use thiserror::Error;

// ---------------------------------------------------------------------------
// CaptureRequest
// ---------------------------------------------------------------------------

/// "The hotkey was pressed."  Carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRequest;

// ---------------------------------------------------------------------------
// Modifiers / HotkeyCombo
// ---------------------------------------------------------------------------

/// Modifier keys, either required by a combo or currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Record a press (`down = true`) or release of `key` if it is a
    /// modifier.  Returns `false` for any other key.
    pub fn update(&mut self, key: rdev::Key, down: bool) -> bool {
        use rdev::Key::*;
        match key {
            ControlLeft | ControlRight => self.ctrl = down,
            ShiftLeft | ShiftRight => self.shift = down,
            Alt | AltGr => self.alt = down,
            MetaLeft | MetaRight => self.meta = down,
            _ => return false,
        }
        true
    }
}

/// A main key plus the exact set of modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyCombo {
    pub modifiers: Modifiers,
    pub key: rdev::Key,
}

impl HotkeyCombo {
    /// `true` when `key` is pressed while exactly the required modifiers are
    /// held.
    pub fn matches(&self, key: rdev::Key, held: Modifiers) -> bool {
        key == self.key && held == self.modifiers
    }
}

/// Why a hotkey string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyParseError {
    #[error("hotkey is empty")]
    Empty,

    #[error("unknown key name: {0:?}")]
    UnknownKey(String),

    #[error("hotkey {0:?} has no main key")]
    MissingKey(String),

    #[error("hotkey {0:?} names more than one main key")]
    TooManyKeys(String),
}

// ---------------------------------------------------------------------------
// parse_combo
// ---------------------------------------------------------------------------

/// Parse a `+`-separated combination such as `"Ctrl+F2"` or
/// `"Ctrl+Shift+J"`.
///
/// Modifier names are case-insensitive (`Ctrl`/`Control`, `Shift`,
/// `Alt`/`Option`, `Meta`/`Cmd`/`Super`/`Win`); the main key uses
/// [`parse_key`].
///
/// ```
/// use kanji_read_assist::hotkey::parse_combo;
///
/// let combo = parse_combo("Ctrl+F2").unwrap();
/// assert!(combo.modifiers.ctrl);
/// assert_eq!(combo.key, rdev::Key::F2);
/// ```
pub fn parse_combo(combo_str: &str) -> Result<HotkeyCombo, HotkeyParseError> {
    if combo_str.trim().is_empty() {
        return Err(HotkeyParseError::Empty);
    }

    let mut modifiers = Modifiers::default();
    let mut key = None;

    for part in combo_str.split('+').map(str::trim) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.alt = true,
            "meta" | "cmd" | "super" | "win" => modifiers.meta = true,
            _ => {
                let parsed =
                    parse_key(part).ok_or_else(|| HotkeyParseError::UnknownKey(part.into()))?;
                if key.replace(parsed).is_some() {
                    return Err(HotkeyParseError::TooManyKeys(combo_str.into()));
                }
            }
        }
    }

    let key = key.ok_or_else(|| HotkeyParseError::MissingKey(combo_str.into()))?;
    Ok(HotkeyCombo { modifiers, key })
}

// ---------------------------------------------------------------------------
// parse_key
// ---------------------------------------------------------------------------

/// Parse a single key name into an [`rdev::Key`].
///
/// Accepts `F1`–`F12`, single ASCII letters and a handful of named keys, all
/// case-insensitive.  `C` is refused because the capture itself sends it.
pub fn parse_key(name: &str) -> Option<rdev::Key> {
    use rdev::Key;

    const FUNCTION_KEYS: [Key; 12] = [
        Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6,
        Key::F7, Key::F8, Key::F9, Key::F10, Key::F11, Key::F12,
    ];
    const LETTERS: [Key; 26] = [
        Key::KeyA, Key::KeyB, Key::KeyC, Key::KeyD, Key::KeyE, Key::KeyF,
        Key::KeyG, Key::KeyH, Key::KeyI, Key::KeyJ, Key::KeyK, Key::KeyL,
        Key::KeyM, Key::KeyN, Key::KeyO, Key::KeyP, Key::KeyQ, Key::KeyR,
        Key::KeyS, Key::KeyT, Key::KeyU, Key::KeyV, Key::KeyW, Key::KeyX,
        Key::KeyY, Key::KeyZ,
    ];

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let c = c.to_ascii_uppercase();
        if !c.is_ascii_uppercase() || c == 'C' {
            return None;
        }
        return LETTERS.get(usize::from(c as u8 - b'A')).copied();
    }

    let lower = name.to_ascii_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<usize>().ok()) {
        return FUNCTION_KEYS.get(n.checked_sub(1)?).copied();
    }

    match lower.as_str() {
        "escape" | "esc" => Some(Key::Escape),
        "space" => Some(Key::Space),
        "return" | "enter" => Some(Key::Return),
        "tab" => Some(Key::Tab),
        "insert" | "ins" => Some(Key::Insert),
        "home" => Some(Key::Home),
        "end" => Some(Key::End),
        "pageup" => Some(Key::PageUp),
        "pagedown" => Some(Key::PageDown),
        "printscreen" => Some(Key::PrintScreen),
        "pause" => Some(Key::Pause),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
