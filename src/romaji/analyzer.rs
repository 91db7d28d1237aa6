//! Morphological analysis: splits text into words and looks up each word's
//! reading.
//!
//! [`IpadicAnalyzer`] runs `lindera` with the IPADIC dictionary compiled into
//! the binary, so no dictionary files have to be installed.

use lindera::dictionary::{load_dictionary_from_kind, DictionaryKind};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;

use super::TransliterationError;

/// Index of the katakana reading in an IPADIC feature row
/// (`品詞,細分類1,細分類2,細分類3,活用型,活用形,原形,読み,発音`).
const IPADIC_READING: usize = 7;

/// One word as found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// The word exactly as written.
    pub surface: String,
    /// Kana reading, when the dictionary knows the word.
    pub reading: Option<String>,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, reading: Option<&str>) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.map(str::to_string),
        }
    }
}

/// Word segmentation plus reading lookup.
///
/// Concatenating the returned surfaces must reproduce the input.
pub trait ReadingAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, TransliterationError>;
}

// ---------------------------------------------------------------------------
// IpadicAnalyzer
// ---------------------------------------------------------------------------

pub struct IpadicAnalyzer {
    tokenizer: Tokenizer,
}

impl IpadicAnalyzer {
    /// Decompress the embedded dictionary.  Takes a noticeable moment, so
    /// build one analyzer and share it.
    pub fn load() -> Result<Self, TransliterationError> {
        let dictionary = load_dictionary_from_kind(DictionaryKind::IPADIC)
            .map_err(|e| TransliterationError::Dictionary(e.to_string()))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        Ok(Self {
            tokenizer: Tokenizer::new(segmenter),
        })
    }
}

impl ReadingAnalyzer for IpadicAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, TransliterationError> {
        let mut tokens = self
            .tokenizer
            .tokenize(text)
            .map_err(|e| TransliterationError::Backend(e.to_string()))?;

        let mut morphemes = Vec::with_capacity(tokens.len());
        let mut cursor = 0;
        for token in tokens.iter_mut() {
            let reading = token
                .details()
                .get(IPADIC_READING)
                .filter(|r| **r != "*")
                .map(|r| r.to_string());
            let surface = token.text.to_string();

            // Anything the tokenizer skipped (whitespace) is carried over
            // unread so the output keeps the input's layout.
            if let Some(at) = text[cursor..].find(surface.as_str()) {
                if at > 0 {
                    morphemes.push(Morpheme::new(&text[cursor..cursor + at], None));
                }
                cursor += at + surface.len();
            }
            morphemes.push(Morpheme { surface, reading });
        }
        if cursor < text.len() {
            morphemes.push(Morpheme::new(&text[cursor..], None));
        }

        Ok(morphemes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romaji::testing::ipadic;

    fn surfaces(morphemes: &[Morpheme]) -> String {
        morphemes.iter().map(|m| m.surface.as_str()).collect()
    }

    #[test]
    fn splits_sentence_into_words_with_readings() {
        let words = ipadic().analyze("日本語を話す").unwrap();

        assert_eq!(
            words,
            vec![
                Morpheme::new("日本語", Some("ニホンゴ")),
                Morpheme::new("を", Some("ヲ")),
                Morpheme::new("話す", Some("ハナス")),
            ]
        );
    }

    #[test]
    fn surfaces_reproduce_the_input() {
        let text = "東京駅で  Rust 2021 を勉強した。";
        assert_eq!(surfaces(&ipadic().analyze(text).unwrap()), text);
    }

    #[test]
    fn latin_text_has_no_reading() {
        let words = ipadic().analyze("Rust").unwrap();
        assert!(words.iter().all(|m| m.reading.is_none()), "{words:?}");
    }
}
