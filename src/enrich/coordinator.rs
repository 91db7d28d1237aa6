//! [`EnrichmentCoordinator`] — concurrent transliteration + translation.
//!
//! # Flow
//!
//! ```text
//! CapturedText
//!   ├─▶ tokio::spawn(transliterator.convert)   ─┐
//!   └─▶ tokio::spawn(translator.translate)     ─┤ join (both must finish)
//!                                               ▼
//!                          EnrichmentResult { transliteration, translation }
//! ```
//!
//! Each call runs in its own task under its own timeout and is reduced to a
//! `Result<String, EnrichmentFailure>` before the join, so one provider's
//! error, timeout or panic cannot disturb the other.  Total latency is that
//! of the slower provider.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinError;

use super::{EnrichmentFailure, EnrichmentResult};
use crate::capture::CapturedText;
use crate::romaji::Transliterator;
use crate::translate::Translator;

pub struct EnrichmentCoordinator {
    transliterator: Arc<dyn Transliterator>,
    translator: Arc<dyn Translator>,
    target_language: String,
    provider_timeout: Option<Duration>,
}

impl EnrichmentCoordinator {
    /// # Arguments
    ///
    /// * `target_language`  — ISO-639-1 code passed to the translator.
    /// * `provider_timeout` — bound applied to each provider call separately;
    ///   `None` waits indefinitely.
    pub fn new(
        transliterator: Arc<dyn Transliterator>,
        translator: Arc<dyn Translator>,
        target_language: impl Into<String>,
        provider_timeout: Option<Duration>,
    ) -> Self {
        Self {
            transliterator,
            translator,
            target_language: target_language.into(),
            provider_timeout,
        }
    }

    /// Transliterate and translate `text` concurrently.
    ///
    /// Never fails: every provider failure is folded into the matching field
    /// as a sentinel string.
    pub async fn enrich(&self, text: CapturedText) -> EnrichmentResult {
        let text: Arc<str> = Arc::from(text.into_inner());
        let limit = self.provider_timeout;

        let romaji_task = {
            let provider = Arc::clone(&self.transliterator);
            let text = Arc::clone(&text);
            tokio::spawn(async move {
                match bounded(limit, provider.convert(&text)).await {
                    Some(Ok(out)) if !out.trim().is_empty() => Ok(out),
                    Some(Ok(_)) => Err(EnrichmentFailure::Transliteration(
                        "provider returned no output".into(),
                    )),
                    Some(Err(e)) => Err(EnrichmentFailure::Transliteration(e.to_string())),
                    None => Err(EnrichmentFailure::TransliterationTimeout(
                        limit.unwrap_or_default(),
                    )),
                }
            })
        };

        let english_task = {
            let provider = Arc::clone(&self.translator);
            let text = Arc::clone(&text);
            let target = self.target_language.clone();
            tokio::spawn(async move {
                match bounded(limit, provider.translate(&text, &target)).await {
                    Some(Ok(t)) if !t.translation.trim().is_empty() => Ok(t.translation),
                    Some(Ok(_)) => Err(EnrichmentFailure::Translation(
                        "provider returned no output".into(),
                    )),
                    Some(Err(e)) => Err(EnrichmentFailure::Translation(e.to_string())),
                    None => Err(EnrichmentFailure::TranslationTimeout(
                        limit.unwrap_or_default(),
                    )),
                }
            })
        };

        let (romaji, english) = tokio::join!(romaji_task, english_task);

        let romaji = romaji.unwrap_or_else(|e| {
            Err(EnrichmentFailure::Transliteration(aborted(&e)))
        });
        let english =
            english.unwrap_or_else(|e| Err(EnrichmentFailure::Translation(aborted(&e))));

        EnrichmentResult::from_outcomes(romaji, english)
    }
}

/// Await `fut`, giving up after `limit`.  `None` means it timed out.
async fn bounded<F: Future>(limit: Option<Duration>, fut: F) -> Option<F::Output> {
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut).await.ok(),
        None => Some(fut.await),
    }
}

fn aborted(e: &JoinError) -> String {
    if e.is_panic() {
        "provider panicked".into()
    } else {
        "provider task was cancelled".into()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
