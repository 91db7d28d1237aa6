//! Japanese script classification and run segmentation.
//!
//! Text is split into maximal runs of the same [`Script`] so that each kanji
//! or kana run can be annotated with its reading while everything else
//! (Latin text, digits, punctuation, whitespace) passes through untouched.

// ---------------------------------------------------------------------------
// Unicode ranges
// ---------------------------------------------------------------------------

/// Hiragana block, U+3041 (ぁ) – U+309F (ゟ).
const HIRAGANA: (char, char) = ('\u{3041}', '\u{309F}');

/// Katakana block, U+30A1 (ァ) – U+30FF (ヿ); includes the prolonged sound
/// mark ー (U+30FC).
const KATAKANA: (char, char) = ('\u{30A1}', '\u{30FF}');

/// Half-width katakana, U+FF66 (ｦ) – U+FF9F.
const HALFWIDTH_KATAKANA: (char, char) = ('\u{FF66}', '\u{FF9F}');

/// CJK Unified Ideographs.
const CJK_UNIFIED: (char, char) = ('\u{4E00}', '\u{9FFF}');

/// CJK Unified Ideographs Extension A.
const CJK_EXT_A: (char, char) = ('\u{3400}', '\u{4DBF}');

/// CJK Compatibility Ideographs.
const CJK_COMPAT: (char, char) = ('\u{F900}', '\u{FAFF}');

/// Ideographic iteration mark 々; reads as a repeat of the previous kanji.
const ITERATION_MARK: char = '\u{3005}';

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

/// Coarse script class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Kanji,
    /// Hiragana or katakana.
    Kana,
    /// Anything without a Japanese reading.
    Other,
}

impl Script {
    pub fn of(c: char) -> Self {
        if is_kanji(c) {
            Script::Kanji
        } else if is_kana(c) {
            Script::Kana
        } else {
            Script::Other
        }
    }

    /// `true` for scripts that get an inline reading.
    pub fn is_japanese(self) -> bool {
        !matches!(self, Script::Other)
    }
}

#[inline]
fn in_range(c: char, (lo, hi): (char, char)) -> bool {
    (lo..=hi).contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    c == ITERATION_MARK
        || in_range(c, CJK_UNIFIED)
        || in_range(c, CJK_EXT_A)
        || in_range(c, CJK_COMPAT)
}

pub fn is_kana(c: char) -> bool {
    in_range(c, HIRAGANA) || in_range(c, KATAKANA) || in_range(c, HALFWIDTH_KATAKANA)
}

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

/// A maximal slice of text written in one [`Script`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub script: Script,
    pub text: &'a str,
}

/// Split `text` into consecutive runs; concatenating the run texts gives back
/// `text` exactly.
///
/// ```
/// use kanji_read_assist::romaji::script::{segment, Script};
///
/// let runs = segment("日本語を話す");
/// assert_eq!(runs.len(), 4);
/// assert_eq!(runs[0].text, "日本語");
/// assert_eq!(runs[1].script, Script::Kana);
/// ```
pub fn segment(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<Script> = None;

    for (idx, c) in text.char_indices() {
        let script = Script::of(c);
        match current {
            Some(prev) if prev == script => {}
            Some(prev) => {
                runs.push(Run {
                    script: prev,
                    text: &text[start..idx],
                });
                start = idx;
                current = Some(script);
            }
            None => current = Some(script),
        }
    }

    if let Some(script) = current {
        runs.push(Run {
            script,
            text: &text[start..],
        });
    }

    runs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_characters() {
        assert_eq!(Script::of('日'), Script::Kanji);
        assert_eq!(Script::of('々'), Script::Kanji);
        assert_eq!(Script::of('ひ'), Script::Kana);
        assert_eq!(Script::of('カ'), Script::Kana);
        assert_eq!(Script::of('ー'), Script::Kana);
        assert_eq!(Script::of('ｶ'), Script::Kana);
        assert_eq!(Script::of('a'), Script::Other);
        assert_eq!(Script::of('。'), Script::Other);
        assert_eq!(Script::of(' '), Script::Other);
    }

    #[test]
    fn empty_text_has_no_runs() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn runs_cover_the_whole_text() {
        let text = "東京タワーへ行きました。Nice!";
        let joined: String = segment(text).iter().map(|r| r.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn mixed_text_splits_on_script_changes() {
        let runs = segment("今日はRust");
        let scripts: Vec<_> = runs.iter().map(|r| (r.script, r.text)).collect();
        assert_eq!(
            scripts,
            vec![
                (Script::Kanji, "今日"),
                (Script::Kana, "は"),
                (Script::Other, "Rust"),
            ]
        );
    }

    #[test]
    fn hiragana_and_katakana_share_a_run() {
        let runs = segment("ですコーヒー");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].script, Script::Kana);
    }
}
