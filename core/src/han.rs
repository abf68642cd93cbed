//! Han script classification.
//!
//! Ranges follow the `Han` entries of Unicode `Scripts.txt` (15.1).

use std::cmp::Ordering;

/// Inclusive codepoint ranges with Script=Han, sorted and non-overlapping.
const HAN_RANGES: &[(u32, u32)] = &[
    (0x2E80, 0x2E99),   // CJK radicals supplement
    (0x2E9B, 0x2EF3),
    (0x2F00, 0x2FD5),   // Kangxi radicals
    (0x3005, 0x3005),   // ideographic iteration mark
    (0x3007, 0x3007),   // ideographic number zero
    (0x3021, 0x3029),   // Hangzhou numerals
    (0x3038, 0x303B),
    (0x3400, 0x4DBF),   // extension A
    (0x4E00, 0x9FFF),   // unified ideographs
    (0xF900, 0xFA6D),   // compatibility ideographs
    (0xFA70, 0xFAD9),
    (0x16FE2, 0x16FE3), // old Chinese hook and iteration marks
    (0x16FF0, 0x16FF1),
    (0x20000, 0x2A6DF), // extension B
    (0x2A700, 0x2B739), // extension C
    (0x2B740, 0x2B81D), // extension D
    (0x2B820, 0x2CEA1), // extension E
    (0x2CEB0, 0x2EBE0), // extension F
    (0x2EBF0, 0x2EE5D), // extension I
    (0x2F800, 0x2FA1D), // compatibility supplement
    (0x30000, 0x3134A), // extension G
    (0x31350, 0x323AF), // extension H
];

/// Whether `c` belongs to the Han script.
pub fn is_han(c: char) -> bool {
    let cp = c as u32;
    HAN_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Iterator over every codepoint classified as Han.
pub fn han_codepoints() -> impl Iterator<Item = char> {
    HAN_RANGES
        .iter()
        .flat_map(|&(lo, hi)| (lo..=hi).filter_map(char::from_u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_sorted() {
        for pair in HAN_RANGES.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0, "{:X?} overlaps {:X?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn common_ideographs() {
        for c in "中国人汉字〇々".chars() {
            assert!(is_han(c), "{c} should be Han");
        }
        assert!(is_han('\u{4E00}'));
        assert!(is_han('\u{9FFF}'));
        assert!(is_han('\u{20000}'));
        assert!(is_han('\u{2F00}'));
    }

    #[test]
    fn non_han() {
        for c in "aZ9 ,。、！ā日本語ひらがなカタカナ한국".chars() {
            let expected = matches!(c, '日' | '本' | '語');
            assert_eq!(is_han(c), expected, "char {c}");
        }
        assert!(!is_han('\u{3006}'));
        assert!(!is_han('\u{2E9A}'));
        assert!(!is_han('\u{FA6E}'));
    }

    #[test]
    fn codepoint_iteration_matches_classifier() {
        let mut count = 0usize;
        for c in han_codepoints() {
            assert!(is_han(c));
            count += 1;
        }
        assert!(count > 90_000);
    }
}
