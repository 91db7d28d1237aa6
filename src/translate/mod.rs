//! Translation provider for Kanji Read-Assist.
//!
//! This module provides:
//! * [`Translator`] — async trait implemented by all translation backends.
//! * [`GoogleTranslator`] — public Google Translate web endpoint.
//! * [`ApiTranslator`] — any OpenAI-compatible chat-completions API.
//! * [`AggregateTranslator`] — tries several backends in order, first success
//!   wins.
//! * [`TranslateError`] — error variants for translation calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use kanji_read_assist::config::AppConfig;
//! use kanji_read_assist::translate::{AggregateTranslator, Translator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let translator = AggregateTranslator::from_config(&config.translation);
//!
//!     let result = translator.translate("日本語", "en").await.unwrap();
//!     println!("{}", result.translation);
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod google;

pub use aggregate::AggregateTranslator;
pub use api::ApiTranslator;
pub use google::GoogleTranslator;

use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// A successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The translated text.
    pub translation: String,
    /// Source language reported by the backend, when it reports one.
    pub source_language: Option<String>,
}

impl Translation {
    pub fn new(translation: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            source_language: None,
        }
    }
}

// ---------------------------------------------------------------------------
// TranslateError
// ---------------------------------------------------------------------------

/// Errors that can occur during translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("translation request timed out")]
    Timeout,

    /// The backend answered with a non-success HTTP status.
    #[error("translation service returned HTTP {0}")]
    Status(u16),

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse translation response: {0}")]
    Parse(String),

    /// The backend returned no usable text.
    #[error("translation service returned an empty result")]
    EmptyResponse,

    /// The aggregate translator has no backends.
    #[error("no translation provider configured")]
    NoProviders,

    /// Every backend of the aggregate translator failed.
    #[error("all translation providers failed: {0}")]
    AllFailed(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranslateError::Timeout
        } else if let Some(status) = e.status() {
            TranslateError::Status(status.as_u16())
        } else {
            TranslateError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Translator trait
// ---------------------------------------------------------------------------

/// Async trait for translation backends.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn Translator>`).
///
/// # Arguments
/// * `text`        – Text to translate.
/// * `target_lang` – ISO-639-1 code of the output language (e.g. `"en"`).
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str)
        -> Result<Translation, TranslateError>;

    /// Short backend name used in log lines.
    fn name(&self) -> &'static str;
}
