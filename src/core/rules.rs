// src/core/rules.rs
//! Rule data for both passes. Everything here is plain serde-serializable
//! data so a convention can be edited as JSON, compiled to a binary file,
//! and swapped in without touching code.

use serde::{Deserialize, Serialize};

use crate::core::types::LetterPosition;

/// One transliteration rule: a source grapheme of one or more characters,
/// the word position it applies at, and its Latin output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    pub source: String,
    pub position: LetterPosition,
    pub output: String,
}

impl MappingRule {
    pub fn new(
        source: impl Into<String>,
        position: LetterPosition,
        output: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            position,
            output: output.into(),
        }
    }
}

/// A morpheme-boundary rule for the joiner pass.
///
/// The boundary after a `stem_final` letter is a morpheme break when at
/// least `min_stem_letters` base letters precede it and the rest of the
/// word starts with one of `suffixes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryRule {
    /// Letter that ends the stem.
    pub stem_final: char,
    /// Base letters required before the boundary.
    pub min_stem_letters: usize,
    /// Suffix spellings that mark the break, matched as prefixes of the
    /// remainder of the word.
    pub suffixes: Vec<String>,
}

/// The complete joiner-insertion table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinerRules {
    pub boundaries: Vec<BoundaryRule>,
}

/// Everything one orthographic convention needs: boundary rules for the
/// joiner pass and mapping rules for the transliteration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub joiner: JoinerRules,
    pub mapping: Vec<MappingRule>,
}

impl RuleSet {
    /// The bundled Southern Uzbek convention.
    pub fn southern_uzbek() -> Self {
        Self {
            joiner: southern_uzbek_joiner(),
            mapping: southern_uzbek_mapping(),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::southern_uzbek()
    }
}

fn southern_uzbek_joiner() -> JoinerRules {
    let suffixes = [
        "لر",   // plural -lar
        "گه",   // dative -ga
        "ده",   // locative -da
        "دن",   // ablative -dan
        "نینگ", // genitive -ning
        "نی",   // accusative -ni
        "سی",   // possessive -si
        "جک",   // future -jak
        "جگ",   // future stem -jag-
        "گی",   // relational -gi
        "لیک",  // abstract -lik
        "چی",   // agentive -chi
        "می",   // interrogative -mi
    ];
    JoinerRules {
        boundaries: vec![BoundaryRule {
            // Word-final ه reads as a vowel; a suffix after it keeps its
            // final shape only across a ZWNJ break.
            stem_final: 'ه',
            min_stem_letters: 2,
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        }],
    }
}

fn southern_uzbek_mapping() -> Vec<MappingRule> {
    use LetterPosition::{Any, Final, Initial};
    let r = MappingRule::new;
    vec![
        // Word-initial vowels ride an alef carrier.
        r("ا\u{0650}ی", Initial, "i"),  /* alef kasra yeh */
        r("ا\u{064F}و", Initial, "u"),  /* alef damma waw */
        r("ا\u{064E}", Initial, "a"),   /* alef fatha */
        r("ا\u{0650}", Initial, "i"),   /* alef kasra */
        r("ا\u{064F}", Initial, "u"),   /* alef damma */
        r("اې", Initial, "e"),
        r("اۉ", Initial, "oʻ"),
        r("او", Initial, "u"),
        // Vocalised non-initial clusters.
        r("\u{064E}ه", Final, "a"),     /* fatha heh */
        r("\u{0650}ه", Final, "e"),     /* kasra heh */
        r("\u{0650}ی", Any, "i"),       /* kasra yeh */
        r("\u{064F}و", Any, "u"),       /* damma waw */
        // The one consonant digraph.
        r("نگ", Any, "ng"),
        // Vowel letters.
        r("ا", Initial, "a"),
        r("ا", Any, "o"),
        r("آ", Any, "o"),
        r("ې", Any, "e"),
        r("ۉ", Any, "oʻ"),
        r("ه", Final, "a"),
        r("ه", Any, "h"),
        r("ی", Initial, "y"), /* farsi yeh */
        r("ی", Any, "i"),
        r("ي", Any, "i"),     /* arabic yeh */
        // Hamza forms all surface as the turned comma.
        r("ء", Any, "ʻ"),
        r("أ", Any, "ʻ"),
        r("ؤ", Any, "ʻ"),
        r("ئ", Any, "ʻ"),
        // Consonants.
        r("ب", Any, "b"),
        r("پ", Any, "p"),
        r("ت", Any, "t"),
        r("ث", Any, "s"),
        r("ج", Any, "j"),
        r("چ", Any, "ch"),
        r("ح", Any, "h"),
        r("خ", Any, "x"),
        r("د", Any, "d"),
        r("ذ", Any, "z"),
        r("ر", Any, "r"),
        r("ز", Any, "z"),
        r("ژ", Any, "j"),
        r("س", Any, "s"),
        r("ش", Any, "sh"),
        r("ص", Any, "s"),
        r("ض", Any, "z"),
        r("ط", Any, "t"),
        r("ظ", Any, "z"),
        r("ع", Any, "ʻ"),
        r("غ", Any, "gʻ"),
        r("ف", Any, "f"),
        r("ق", Any, "q"),
        r("ک", Any, "k"),
        r("گ", Any, "g"),
        r("ل", Any, "l"),
        r("م", Any, "m"),
        r("ن", Any, "n"),
        r("و", Any, "v"),
        // Bare diacritics: the three short vowels, tanwin, and the silent
        // marks, so a vocalised text never trips the coverage check.
        r("\u{064E}", Any, "a"),  /* fatha */
        r("\u{0650}", Any, "i"),  /* kasra */
        r("\u{064F}", Any, "u"),  /* damma */
        r("\u{064B}", Any, "an"), /* fathatan */
        r("\u{064C}", Any, "un"), /* dammatan */
        r("\u{064D}", Any, "in"), /* kasratan */
        r("\u{0651}", Any, ""),   /* shadda */
        r("\u{0652}", Any, ""),   /* sukun */
        r("\u{0670}", Any, "o"),  /* superscript alef */
    ]
}
