// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad classes the passes sort characters into.
///
/// Letters and diacritics form words; whitespace and punctuation separate
/// them; everything else is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Perso-Arabic consonant of the Southern Uzbek inventory.
    Consonant,
    /// Letter that reads as a vowel in the Southern Uzbek convention.
    VowelCarrier,
    /// U+200C ZERO WIDTH NON-JOINER, the morpheme-boundary control.
    Joiner,
    /// Combining mark that travels with the preceding letter.
    Diacritic,
    Whitespace,
    Punctuation,
    /// Outside the inventory; never touched by either pass.
    Other,
}

impl CharClass {
    /// Base letters are the unit both passes reason about.
    #[inline]
    pub fn is_letter(self) -> bool {
        matches!(self, CharClass::Consonant | CharClass::VowelCarrier)
    }

    /// Word characters form word segments; the rest form separators.
    #[inline]
    pub fn is_word_char(self) -> bool {
        self.is_letter() || matches!(self, CharClass::Joiner | CharClass::Diacritic)
    }
}

/// Arabic cursive joining behaviour, after the Unicode ArabicShaping data.
///
/// Only the distinctions the joiner pass needs are kept: whether a letter
/// connects to the following letter, to the preceding one, or to neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoiningType {
    /// Connects on both sides.
    Dual,
    /// Connects only to the preceding letter.
    Right,
    /// Never connects.
    NonJoining,
    /// Invisible to joining; the neighbours look through it.
    Transparent,
}

impl JoiningType {
    /// Whether a letter of this type connects to the letter after it.
    #[inline]
    pub fn joins_forward(self) -> bool {
        matches!(self, JoiningType::Dual)
    }

    /// Whether a letter of this type connects to the letter before it.
    #[inline]
    pub fn joins_backward(self) -> bool {
        matches!(self, JoiningType::Dual | JoiningType::Right)
    }

    /// Whether joining looks through this character entirely.
    #[inline]
    pub fn is_transparent(self) -> bool {
        matches!(self, JoiningType::Transparent)
    }
}

/// Where a grapheme sits within its word, as seen by the mapping pass.
///
/// `Any` only ever appears as a rule constraint; the mapper itself always
/// computes one of the three concrete positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterPosition {
    Initial,
    Medial,
    Final,
    Any,
}

impl LetterPosition {
    pub(crate) const COUNT: usize = 4;

    /// Stable slot index for per-position storage.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            LetterPosition::Initial => 0,
            LetterPosition::Medial => 1,
            LetterPosition::Final => 2,
            LetterPosition::Any => 3,
        }
    }
}

impl fmt::Display for LetterPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LetterPosition::Initial => "initial",
            LetterPosition::Medial => "medial",
            LetterPosition::Final => "final",
            LetterPosition::Any => "any",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_classes() {
        assert!(CharClass::Consonant.is_letter());
        assert!(CharClass::VowelCarrier.is_letter());
        assert!(!CharClass::Joiner.is_letter());
        assert!(!CharClass::Diacritic.is_letter());
        assert!(!CharClass::Other.is_letter());
    }

    #[test]
    fn word_char_classes() {
        assert!(CharClass::Consonant.is_word_char());
        assert!(CharClass::Joiner.is_word_char());
        assert!(CharClass::Diacritic.is_word_char());
        assert!(!CharClass::Whitespace.is_word_char());
        assert!(!CharClass::Punctuation.is_word_char());
    }

    #[test]
    fn joining_directions() {
        assert!(JoiningType::Dual.joins_forward());
        assert!(JoiningType::Dual.joins_backward());
        assert!(!JoiningType::Right.joins_forward());
        assert!(JoiningType::Right.joins_backward());
        assert!(!JoiningType::NonJoining.joins_forward());
        assert!(!JoiningType::NonJoining.joins_backward());
        assert!(JoiningType::Transparent.is_transparent());
        assert!(!JoiningType::Transparent.joins_forward());
        assert!(!JoiningType::Transparent.joins_backward());
    }

    #[test]
    fn position_slots_are_distinct() {
        let all = [
            LetterPosition::Initial,
            LetterPosition::Medial,
            LetterPosition::Final,
            LetterPosition::Any,
        ];
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                assert_eq!(i == j, a.index() == b.index());
            }
        }
        assert!(all.iter().all(|p| p.index() < LetterPosition::COUNT));
    }

    #[test]
    fn position_serde_names() {
        let json = serde_json::to_string(&LetterPosition::Initial).unwrap();
        assert_eq!(json, "\"initial\"");
        let back: LetterPosition = serde_json::from_str("\"any\"").unwrap();
        assert_eq!(back, LetterPosition::Any);
    }
}
