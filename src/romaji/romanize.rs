//! Kana → Latin letters in the configured [`RomajiSystem`].

use wana_kana::ConvertJapanese;

use crate::config::RomajiSystem;

/// Hepburn spellings rewritten for Kunrei-shiki, longest match first.
const KUNREI: [(&str, &str); 8] = [
    ("shi", "si"),
    ("chi", "ti"),
    ("tsu", "tu"),
    ("fu", "hu"),
    ("ji", "zi"),
    ("sh", "sy"),
    ("ch", "ty"),
    ("j", "zy"),
];

/// Romanize a kana reading.
///
/// ```
/// use kanji_read_assist::config::RomajiSystem;
/// use kanji_read_assist::romaji::romanize::romanize;
///
/// assert_eq!(romanize("ふじさん", RomajiSystem::Hepburn), "fujisan");
/// assert_eq!(romanize("ふじさん", RomajiSystem::Kunrei), "huzisan");
/// ```
pub fn romanize(kana: &str, system: RomajiSystem) -> String {
    // Both systems spell the object particle を as "o".
    let kana = kana.replace('を', "お").replace('ヲ', "オ");
    let hepburn = kana.as_str().to_romaji();

    match system {
        RomajiSystem::Hepburn => hepburn,
        RomajiSystem::Kunrei => KUNREI
            .iter()
            .fold(hepburn, |acc, (from, to)| acc.replace(from, to)),
    }
}
