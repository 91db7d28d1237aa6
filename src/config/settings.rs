//! Settings file model.
//!
//! Every table is `#[serde(default)]`, so a partial `settings.toml` (or one
//! written by an older version) fills the gaps with defaults.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// CaptureConfig
// ---------------------------------------------------------------------------

/// Timing of the clear → copy → poll selection capture.
///
/// The poll budget is `poll_attempts × poll_interval_ms`; with the defaults a
/// capture gives up after roughly one second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Milliseconds to wait after clearing the clipboard before sending the
    /// copy keystroke.
    pub settle_delay_ms: u64,
    /// Milliseconds between two clipboard checks.
    pub poll_interval_ms: u64,
    /// Number of clipboard checks before the capture is abandoned.
    pub poll_attempts: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 50,
            poll_interval_ms: 50,
            poll_attempts: 20,
        }
    }
}

impl CaptureConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

// ---------------------------------------------------------------------------
// EnrichmentConfig
// ---------------------------------------------------------------------------

/// Settings for the concurrent transliteration + translation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Upper bound for each provider call in milliseconds.  `0` disables the
    /// bound, so a hung provider delays the result indefinitely.
    pub provider_timeout_ms: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            provider_timeout_ms: 10_000,
        }
    }
}

impl EnrichmentConfig {
    /// The per-provider timeout, or `None` when disabled.
    pub fn provider_timeout(&self) -> Option<Duration> {
        (self.provider_timeout_ms > 0).then(|| Duration::from_millis(self.provider_timeout_ms))
    }
}

// ---------------------------------------------------------------------------
// RomajiSystem / RomajiConfig
// ---------------------------------------------------------------------------

/// Romanization system used for the phonetic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RomajiSystem {
    /// Modified Hepburn (`shi`, `chi`, `tsu`).
    Hepburn,
    /// Kunrei-shiki (`si`, `ti`, `tu`).
    Kunrei,
}

impl Default for RomajiSystem {
    fn default() -> Self {
        Self::Hepburn
    }
}

/// Transliteration output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RomajiConfig {
    /// Romanization system.
    pub system: RomajiSystem,
    /// Inserted between the original run and its reading.
    pub open_bracket: String,
    /// Closes the inline reading.
    pub close_bracket: String,
}

impl Default for RomajiConfig {
    fn default() -> Self {
        Self {
            system: RomajiSystem::default(),
            open_bracket: "(".into(),
            close_bracket: ")".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// TranslatorKind / LlmConfig / TranslationConfig
// ---------------------------------------------------------------------------

/// A translation backend that can take part in the aggregate translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslatorKind {
    /// Public Google Translate web endpoint; needs no authentication.
    Google,
    /// Any OpenAI-compatible chat-completions API (Ollama, OpenAI, Groq …).
    OpenAiCompatible,
}

/// Connection details for the OpenAI-compatible translator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the API endpoint.
    ///
    /// - Ollama default: `http://localhost:11434`
    /// - OpenAI: `https://api.openai.com`
    pub base_url: String,
    /// API key, `None` for local providers.
    pub api_key: Option<String>,
    /// Model identifier sent to the API (e.g. `"qwen2.5:3b"`).
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".into(),
            api_key: None,
            model: "qwen2.5:3b".into(),
            temperature: 0.2,
        }
    }
}

/// Settings for the translation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// ISO-639-1 target language code.
    pub target_language: String,
    /// ISO-639-1 source language code, or `"auto"` to let the backend detect it.
    pub source_language: String,
    /// Backends tried in order; the first success wins.
    pub providers: Vec<TranslatorKind>,
    /// Base URL of the Google Translate web endpoint.
    pub google_base_url: String,
    /// HTTP timeout per backend request in seconds.
    pub timeout_secs: u64,
    /// OpenAI-compatible backend settings.
    pub llm: LlmConfig,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            target_language: "en".into(),
            source_language: "auto".into(),
            providers: vec![TranslatorKind::Google, TranslatorKind::OpenAiCompatible],
            google_base_url: "https://translate.googleapis.com".into(),
            timeout_secs: 10,
            llm: LlmConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// HotkeyConfig
// ---------------------------------------------------------------------------

/// Global hotkey binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Key combination that triggers a capture (e.g. `"Ctrl+F2"`).
    pub trigger: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            trigger: "Ctrl+F2".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Log the "select text, press the hotkey" hint on startup.
    pub show_ready_notice: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_ready_notice: true,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use kanji_read_assist::config::AppConfig;
///
/// let mut config = AppConfig::load()?;
/// config.hotkey.trigger = "Ctrl+Shift+J".into();
/// config.save()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Selection capture timing.
    pub capture: CaptureConfig,
    /// Enrichment step bounds.
    pub enrichment: EnrichmentConfig,
    /// Transliteration output format.
    pub romaji: RomajiConfig,
    /// Translation backends.
    pub translation: TranslationConfig,
    /// Global hotkey binding.
    pub hotkey: HotkeyConfig,
    /// Presentation settings.
    pub ui: UiConfig,
}

impl AppConfig {
    /// Read `settings.toml` from the platform config directory.  A missing
    /// file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text)
                .with_context(|| format!("invalid settings in {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
        }
    }

    /// Write `settings.toml`, creating the config directory on first save.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).context("cannot serialise settings")?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create {}", dir.display()))?;
        }
        std::fs::write(path, text).with_context(|| format!("cannot write {}", path.display()))
    }

    /// `true` until the first [`save`](Self::save).
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
