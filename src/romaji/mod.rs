//! Transliteration provider: Japanese text → inline romaji.
//!
//! This module provides:
//! * [`Transliterator`] — async trait implemented by every provider.
//! * [`RomajiTransliterator`] — offline provider: `lindera` IPADIC analysis
//!   with an optional user [`ReadingDictionary`] on top.
//! * [`ReadingAnalyzer`] — word segmentation and reading lookup.
//! * [`TransliterationError`] — failure variants.
//!
//! The output format is user-visible: each kanji run is followed by its
//! reading in brackets and kana stay as written, e.g. `日本語(nihongo)を話(hana)す`.

pub mod analyzer;
pub mod converter;
pub mod readings;
pub mod romanize;
pub mod script;
#[cfg(test)]
pub mod testing;

pub use analyzer::{IpadicAnalyzer, Morpheme, ReadingAnalyzer};
pub use converter::RomajiTransliterator;
pub use readings::ReadingDictionary;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during transliteration.
#[derive(Debug, Error)]
pub enum TransliterationError {
    /// Nothing to convert.
    #[error("input text is empty")]
    EmptyInput,

    /// The IPADIC or user reading dictionary could not be loaded.
    #[error("reading dictionary unavailable: {0}")]
    Dictionary(String),

    /// Any other backend failure.
    #[error("conversion failed: {0}")]
    Backend(String),
}

/// Converts source text into its inline-annotated phonetic form.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn Transliterator>`.
#[async_trait]
pub trait Transliterator: Send + Sync {
    async fn convert(&self, text: &str) -> Result<String, TransliterationError>;
}
