//! Japanese → inline romaji transliterator.
//!
//! Each word keeps its original spelling; only the kanji in it get a bracketed
//! reading, and kana (okurigana, particles, katakana words) stay bare:
//!
//! ```text
//! 日本語を話す  →  日本語(nihongo)を話(hana)す
//! ```
//!
//! Words and readings come from the [`ReadingAnalyzer`].  Entries in the
//! user's [`ReadingDictionary`] take precedence over it.

use std::sync::Arc;

use async_trait::async_trait;
use wana_kana::ConvertJapanese;

use super::analyzer::{IpadicAnalyzer, ReadingAnalyzer};
use super::readings::ReadingDictionary;
use super::romanize::romanize;
use super::script::{is_kanji, segment, Run, Script};
use super::{TransliterationError, Transliterator};
use crate::config::RomajiConfig;

/// Analyzer-backed [`Transliterator`].
pub struct RomajiTransliterator {
    analyzer: Arc<dyn ReadingAnalyzer>,
    readings: ReadingDictionary,
    config: RomajiConfig,
}

impl RomajiTransliterator {
    pub fn new(
        analyzer: Arc<dyn ReadingAnalyzer>,
        readings: ReadingDictionary,
        config: RomajiConfig,
    ) -> Self {
        Self {
            analyzer,
            readings,
            config,
        }
    }

    /// Embedded IPADIC analyzer plus the user dictionary from disk.
    pub fn from_config(config: &RomajiConfig) -> Result<Self, TransliterationError> {
        let analyzer = IpadicAnalyzer::load()?;
        let readings = ReadingDictionary::load_or_default();
        log::info!("romaji: IPADIC loaded, {} user reading(s)", readings.len());
        Ok(Self::new(Arc::new(analyzer), readings, config.clone()))
    }

    /// Synchronous core of [`Transliterator::convert`].
    ///
    /// # Errors
    ///
    /// [`TransliterationError::EmptyInput`] when `text` is blank, or whatever
    /// the analyzer reports.
    pub fn transliterate(&self, text: &str) -> Result<String, TransliterationError> {
        if text.trim().is_empty() {
            return Err(TransliterationError::EmptyInput);
        }

        let mut out = String::with_capacity(text.len() * 2);
        let mut pending = 0;
        let mut at = 0;

        while at < text.len() {
            let rest = &text[at..];
            let override_word = rest
                .chars()
                .next()
                .filter(|c| is_kanji(*c))
                .and_then(|_| self.readings.longest_prefix(rest));

            match override_word {
                Some((word, reading)) => {
                    self.analyze_into(&mut out, &text[pending..at])?;
                    self.annotate_word(&mut out, word, Some(reading));
                    at += word.len();
                    pending = at;
                }
                None => at += rest.chars().next().map_or(1, char::len_utf8),
            }
        }
        self.analyze_into(&mut out, &text[pending..])?;

        Ok(out)
    }

    fn analyze_into(&self, out: &mut String, text: &str) -> Result<(), TransliterationError> {
        if text.is_empty() {
            return Ok(());
        }
        for word in self.analyzer.analyze(text)? {
            self.annotate_word(out, &word.surface, word.reading.as_deref());
        }
        Ok(())
    }

    /// Append `surface` with a reading after each of its kanji runs.
    fn annotate_word(&self, out: &mut String, surface: &str, reading: Option<&str>) {
        let reading = match reading {
            Some(r) if !r.trim().is_empty() && surface.chars().any(is_kanji) => r.to_hiragana(),
            _ => {
                out.push_str(surface);
                return;
            }
        };

        let runs = segment(surface);
        match split_reading(&runs, &reading) {
            Some(parts) => {
                let mut parts = parts.into_iter();
                for run in &runs {
                    out.push_str(run.text);
                    if run.script == Script::Kanji {
                        if let Some(part) = parts.next() {
                            self.push_reading(out, part);
                        }
                    }
                }
            }
            // Readings that do not line up with the spelling (ateji, digits)
            // go after the whole word.
            None => {
                out.push_str(surface);
                self.push_reading(out, &reading);
            }
        }
    }

    fn push_reading(&self, out: &mut String, kana: &str) {
        out.push_str(&self.config.open_bracket);
        out.push_str(&romanize(kana, self.config.system));
        out.push_str(&self.config.close_bracket);
    }
}

/// Divide `reading` among the kanji runs of a word, using its kana runs as
/// anchors.  Returns one slice per kanji run, or `None` if the kana in the
/// spelling cannot be found in the reading.
fn split_reading<'r>(runs: &[Run<'_>], reading: &'r str) -> Option<Vec<&'r str>> {
    let Some((first, rest)) = runs.split_first() else {
        return reading.is_empty().then(Vec::new);
    };

    match first.script {
        Script::Kana => {
            let kana = first.text.to_hiragana();
            split_reading(rest, reading.strip_prefix(kana.as_str())?)
        }
        Script::Kanji => reading
            .char_indices()
            .skip(1)
            .map(|(idx, _)| idx)
            .chain(std::iter::once(reading.len()))
            .filter(|&end| end > 0)
            .find_map(|end| {
                let mut parts = split_reading(rest, &reading[end..])?;
                parts.insert(0, &reading[..end]);
                Some(parts)
            }),
        Script::Other => None,
    }
}

#[async_trait]
impl Transliterator for RomajiTransliterator {
    async fn convert(&self, text: &str) -> Result<String, TransliterationError> {
        self.transliterate(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
