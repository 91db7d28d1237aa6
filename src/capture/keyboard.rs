//! Keyboard simulation backed by the `enigo` crate.
//!
//! [`EnigoSimulator`] sends the OS-appropriate copy shortcut to the currently
//! focused window:
//!
//! | Platform | Shortcut |
//! |----------|----------|
//! | macOS    | ⌘C (Meta + C) |
//! | Windows  | Ctrl+C |
//! | Linux    | Ctrl+C |

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use thiserror::Error;

/// A key event could not be delivered.
#[derive(Debug, Error)]
#[error("cannot simulate key press: {0}")]
pub struct KeySimulationError(pub String);

/// Sends the platform "copy" keystroke to whatever holds input focus.
pub trait InputSimulator: Send + Sync {
    fn send_copy_combination(&self) -> Result<(), KeySimulationError>;
}

/// Production [`InputSimulator`].
///
/// A new [`Enigo`] instance is created for each call because `Enigo` is not
/// `Send` and the handle is cheap to construct.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnigoSimulator;

impl EnigoSimulator {
    pub fn new() -> Self {
        Self
    }
}

impl InputSimulator for EnigoSimulator {
    fn send_copy_combination(&self) -> Result<(), KeySimulationError> {
        let mut enigo =
            Enigo::new(&Settings::default()).map_err(|e| KeySimulationError(e.to_string()))?;

        enigo
            .key(copy_modifier(), Direction::Press)
            .map_err(|e| KeySimulationError(e.to_string()))?;
        let clicked = enigo
            .key(Key::Unicode('c'), Direction::Click)
            .map_err(|e| KeySimulationError(e.to_string()));
        // Release the modifier even when the click failed, or it stays held.
        enigo
            .key(copy_modifier(), Direction::Release)
            .map_err(|e| KeySimulationError(e.to_string()))?;

        clicked
    }
}

#[cfg(target_os = "macos")]
fn copy_modifier() -> Key {
    Key::Meta
}

#[cfg(not(target_os = "macos"))]
fn copy_modifier() -> Key {
    Key::Control
}
