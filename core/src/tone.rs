//! Tone-mark table for pinyin vowels.
//!
//! Pinyin tone marks are precomposed codepoints (`ā` is U+0101, not `a` plus
//! a combining macron), so stripping them is a per-codepoint substitution
//! rather than a normalization-form decomposition.
//!
//! `ü` strips to `v`, the usual ASCII spelling of the vowel (`nǚ` -> `nv`).

use phf::phf_map;

/// Toned vowel -> base vowel, four tones for a/e/i/o/u/ü in both cases.
static TONE_MARKS: phf::Map<char, char> = phf_map! {
    // first tone
    'ā' => 'a', 'ē' => 'e', 'ī' => 'i', 'ō' => 'o', 'ū' => 'u', 'ǖ' => 'v',
    'Ā' => 'A', 'Ē' => 'E', 'Ī' => 'I', 'Ō' => 'O', 'Ū' => 'U', 'Ǖ' => 'V',
    // second tone
    'á' => 'a', 'é' => 'e', 'í' => 'i', 'ó' => 'o', 'ú' => 'u', 'ǘ' => 'v',
    'Á' => 'A', 'É' => 'E', 'Í' => 'I', 'Ó' => 'O', 'Ú' => 'U', 'Ǘ' => 'V',
    // third tone
    'ǎ' => 'a', 'ě' => 'e', 'ǐ' => 'i', 'ǒ' => 'o', 'ǔ' => 'u', 'ǚ' => 'v',
    'Ǎ' => 'A', 'Ě' => 'E', 'Ǐ' => 'I', 'Ǒ' => 'O', 'Ǔ' => 'U', 'Ǚ' => 'V',
    // fourth tone
    'à' => 'a', 'è' => 'e', 'ì' => 'i', 'ò' => 'o', 'ù' => 'u', 'ǜ' => 'v',
    'À' => 'A', 'È' => 'E', 'Ì' => 'I', 'Ò' => 'O', 'Ù' => 'U', 'Ǜ' => 'V',
};

/// Immutable view over the tone-mark table.
///
/// The data is a compile-time perfect-hash map, so every engine owns a copy
/// of this handle without sharing any mutable state.
#[derive(Debug, Clone, Copy)]
pub struct ToneTable {
    marks: &'static phf::Map<char, char>,
}

impl Default for ToneTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneTable {
    pub fn new() -> Self {
        Self {
            marks: &TONE_MARKS,
        }
    }

    /// Base vowel for a tone-marked vowel, `None` for anything else.
    pub fn base_vowel_for(&self, c: char) -> Option<char> {
        self.marks.get(&c).copied()
    }

    /// Replace every tone-marked vowel in `syllable` with its base vowel.
    ///
    /// Codepoints outside the table are kept as-is, in order.
    pub fn strip(&self, syllable: &str) -> String {
        syllable
            .chars()
            .map(|c| self.base_vowel_for(c).unwrap_or(c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
