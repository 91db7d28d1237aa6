//! Kanji reading assistant.
//!
//! Press the hotkey over any selected Japanese text: the selection is copied
//! through the clipboard, transliterated to romaji and translated at the same
//! time, and both are shown side by side.

pub mod capture;
pub mod config;
pub mod enrich;
pub mod hotkey;
pub mod pipeline;
pub mod present;
pub mod romaji;
pub mod translate;
