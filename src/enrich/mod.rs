//! Enrichment: transliteration and translation of captured text, side by side.
//!
//! [`EnrichmentCoordinator::enrich`] runs both providers concurrently and
//! joins them.  Each provider's outcome is captured separately, so a dead
//! network only costs the translation half; the romaji still shows up.
//!
//! Failures never leave a field empty: they are replaced by a short sentinel
//! string ([`EnrichmentFailure::sentinel`]) that is shown in place of the
//! missing value.

pub mod coordinator;

#[cfg(test)]
pub mod testing;

pub use coordinator::EnrichmentCoordinator;

use std::time::Duration;

use thiserror::Error;

/// Shown in the translation field whenever the translator failed.
pub const TRANSLATION_ERROR: &str = "Translation Error (Check Internet connection)";

// ---------------------------------------------------------------------------
// EnrichmentFailure
// ---------------------------------------------------------------------------

/// Why one half of the enrichment produced no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrichmentFailure {
    /// The transliteration provider returned an error.
    #[error("transliteration failed: {0}")]
    Transliteration(String),

    /// The translation provider returned an error.
    #[error("translation failed: {0}")]
    Translation(String),

    /// The transliteration provider did not answer within the bound.
    #[error("transliteration timed out after {0:?}")]
    TransliterationTimeout(Duration),

    /// The translation provider did not answer within the bound.
    #[error("translation timed out after {0:?}")]
    TranslationTimeout(Duration),
}

impl EnrichmentFailure {
    /// The in-band text displayed instead of the missing value.
    ///
    /// Conversion failures carry the provider's message; translation failures
    /// point at connectivity, the usual cause.
    ///
    /// ```
    /// use kanji_read_assist::enrich::EnrichmentFailure;
    ///
    /// let f = EnrichmentFailure::Transliteration("input text is empty".into());
    /// assert_eq!(f.sentinel(), "Error: input text is empty");
    /// ```
    pub fn sentinel(&self) -> String {
        match self {
            Self::Transliteration(msg) => format!("Error: {msg}"),
            Self::Translation(_) => TRANSLATION_ERROR.to_string(),
            Self::TransliterationTimeout(after) => format!(
                "Error: transliteration timed out after {} ms",
                after.as_millis()
            ),
            Self::TranslationTimeout(after) => format!(
                "Translation Error (timed out after {} ms)",
                after.as_millis()
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// EnrichmentResult
// ---------------------------------------------------------------------------

/// The pair handed to the presentation sink.  Both fields are always
/// populated, either with the provider's output or with a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentResult {
    pub transliteration: String,
    pub translation: String,
}

impl EnrichmentResult {
    /// Combine two independent provider outcomes.
    pub fn from_outcomes(
        transliteration: Result<String, EnrichmentFailure>,
        translation: Result<String, EnrichmentFailure>,
    ) -> Self {
        Self {
            transliteration: settle(transliteration),
            translation: settle(translation),
        }
    }
}

fn settle(outcome: Result<String, EnrichmentFailure>) -> String {
    match outcome {
        Ok(value) => value,
        Err(failure) => {
            log::warn!("enrich: {failure}");
            failure.sentinel()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
