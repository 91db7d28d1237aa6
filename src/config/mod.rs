//! Configuration module for Kanji Read-Assist.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for each subsystem,
//! `AppPaths` for cross-platform config locations, and TOML persistence via
//! `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{
    AppConfig, CaptureConfig, EnrichmentConfig, HotkeyConfig, LlmConfig, RomajiConfig,
    RomajiSystem, TranslationConfig, TranslatorKind, UiConfig,
};
