//! The runic alphabet of the manuscript corpus and its break markers.
//!
//! Each rune carries the prime value assigned to it by the manuscript's
//! gematria and a single-choice Latin transliteration.

/// Break markers used by the transcription.
pub mod breaks {
    pub const WORD: char = '-';
    pub const CLAUSE: char = '.';
    pub const PARAGRAPH: char = '&';
    pub const SEGMENT: char = '$';
    pub const CHAPTER: char = '§';
    pub const LINE: char = '/';
    pub const PAGE: char = '%';

    /// Marks rendered as a separator dot in reports.
    pub const SEPARATORS: [char; 4] = [WORD, CLAUSE, PARAGRAPH, LINE];
}

/// rune, prime value, Latin transliteration
const TABLE: [(char, u32, &str); 29] = [
    ('ᚠ', 2, "F"),
    ('ᚢ', 3, "U"),
    ('ᚦ', 5, "TH"),
    ('ᚩ', 7, "O"),
    ('ᚱ', 11, "R"),
    ('ᚳ', 13, "C"),
    ('ᚷ', 17, "G"),
    ('ᚹ', 19, "W"),
    ('ᚻ', 23, "H"),
    ('ᚾ', 29, "N"),
    ('ᛁ', 31, "I"),
    ('ᛄ', 37, "J"),
    ('ᛇ', 41, "EO"),
    ('ᛈ', 43, "P"),
    ('ᛉ', 47, "X"),
    ('ᛋ', 53, "S"),
    ('ᛏ', 59, "T"),
    ('ᛒ', 61, "B"),
    ('ᛖ', 67, "E"),
    ('ᛗ', 71, "M"),
    ('ᛚ', 73, "L"),
    ('ᛝ', 79, "NG"),
    ('ᛟ', 83, "OE"),
    ('ᛞ', 89, "D"),
    ('ᚪ', 97, "A"),
    ('ᚫ', 101, "AE"),
    ('ᚣ', 103, "Y"),
    ('ᛡ', 107, "IA"),
    ('ᛠ', 109, "EA"),
];

/// Number of runes in the alphabet.
pub const ALPHABET_LEN: usize = TABLE.len();

/// All runes in canonical order.
pub fn alphabet() -> impl Iterator<Item = char> {
    TABLE.iter().map(|&(rune, _, _)| rune)
}

pub fn is_rune(c: char) -> bool {
    TABLE.iter().any(|&(rune, _, _)| rune == c)
}

/// Index of a rune in the canonical order.
pub fn index_of(c: char) -> Option<usize> {
    TABLE.iter().position(|&(rune, _, _)| rune == c)
}

/// Latin transliteration of a rune.
pub fn to_latin(c: char) -> Option<&'static str> {
    TABLE
        .iter()
        .find(|&&(rune, _, _)| rune == c)
        .map(|&(_, _, latin)| latin)
}

/// Prime value assigned to a rune by the manuscript's gematria.
pub fn prime_value(c: char) -> Option<u32> {
    TABLE
        .iter()
        .find(|&&(rune, _, _)| rune == c)
        .map(|&(_, prime, _)| prime)
}

/// Strips everything that is not a rune: break markers, whitespace, and
/// any stray characters.
pub fn clean(text: &str) -> Vec<char> {
    text.chars().filter(|&c| is_rune(c)).collect()
}

/// Number of runes in a raw transcription.
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|&c| is_rune(c)).count()
}

/// Splits a raw transcription into its segments.
pub fn segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(breaks::SEGMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_complete() {
        assert_eq!(alphabet().count(), 29);
        assert_eq!(ALPHABET_LEN, 29);
    }

    #[test]
    fn test_lookups() {
        assert_eq!(to_latin('ᚠ'), Some("F"));
        assert_eq!(to_latin('ᛠ'), Some("EA"));
        assert_eq!(prime_value('ᚠ'), Some(2));
        assert_eq!(prime_value('ᛠ'), Some(109));
        assert_eq!(index_of('ᚠ'), Some(0));
        assert_eq!(index_of('ᛠ'), Some(28));
        assert_eq!(to_latin('Q'), None);
    }

    #[test]
    fn test_clean_strips_breaks() {
        let raw = "ᚠᚢ-ᚦᚩ.ᚱ$ᚳ\nᚷ %ᚹ";
        let cleaned = clean(raw);
        assert_eq!(cleaned, vec!['ᚠ', 'ᚢ', 'ᚦ', 'ᚩ', 'ᚱ', 'ᚳ', 'ᚷ', 'ᚹ']);
        assert_eq!(letter_count(raw), 8);
    }

    #[test]
    fn test_segments() {
        let raw = "ᚠᚢ$ᚦᚩ$ᚱ";
        let parts: Vec<&str> = segments(raw).collect();
        assert_eq!(parts, vec!["ᚠᚢ", "ᚦᚩ", "ᚱ"]);
    }

    #[test]
    fn test_prime_values_ascend() {
        let primes: Vec<u32> = TABLE.iter().map(|&(_, p, _)| p).collect();
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }
}
