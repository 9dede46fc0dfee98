// src/core/script.rs
//! Character-level knowledge of the Southern Uzbek Perso-Arabic script:
//! which characters are letters, how they join, and what counts as a word
//! character. Both passes sit on top of this module and nothing here
//! depends on the rule tables.

use crate::core::types::{CharClass, JoiningType};

/// U+200C ZERO WIDTH NON-JOINER.
pub const ZWNJ: char = '\u{200C}';

/// Every base letter of the Southern Uzbek Perso-Arabic inventory.
///
/// The inventory is closed on purpose: coverage checks enumerate it, and
/// Arabic letters outside it (e.g. ة or إ) classify as `Other` and pass
/// through both passes untouched.
pub const LETTERS: [char; 40] = [
    // Vowel carriers.
    '\u{0627}', // ا alef
    '\u{0622}', // آ alef with madda
    '\u{06D0}', // ې e
    '\u{06C9}', // ۉ o with damma
    // Hamza forms.
    '\u{0621}', // ء hamza
    '\u{0623}', // أ alef with hamza above
    '\u{0624}', // ؤ waw with hamza
    '\u{0626}', // ئ yeh with hamza
    // Consonants.
    '\u{0628}', // ب beh
    '\u{067E}', // پ peh
    '\u{062A}', // ت teh
    '\u{062B}', // ث theh
    '\u{062C}', // ج jeem
    '\u{0686}', // چ tcheh
    '\u{062D}', // ح hah
    '\u{062E}', // خ khah
    '\u{062F}', // د dal
    '\u{0630}', // ذ thal
    '\u{0631}', // ر reh
    '\u{0632}', // ز zain
    '\u{0698}', // ژ jeh
    '\u{0633}', // س seen
    '\u{0634}', // ش sheen
    '\u{0635}', // ص sad
    '\u{0636}', // ض dad
    '\u{0637}', // ط tah
    '\u{0638}', // ظ zah
    '\u{0639}', // ع ain
    '\u{063A}', // غ ghain
    '\u{0641}', // ف feh
    '\u{0642}', // ق qaf
    '\u{06A9}', // ک keheh
    '\u{06AF}', // گ gaf
    '\u{0644}', // ل lam
    '\u{0645}', // م meem
    '\u{0646}', // ن noon
    '\u{0648}', // و waw
    '\u{0647}', // ه heh
    '\u{06CC}', // ی farsi yeh
    '\u{064A}', // ي arabic yeh
];

/// Combining marks the inventory recognises. They attach to the preceding
/// letter and are transparent to joining.
pub const DIACRITICS: [char; 9] = [
    '\u{064B}', // fathatan
    '\u{064C}', // dammatan
    '\u{064D}', // kasratan
    '\u{064E}', // fatha
    '\u{064F}', // damma
    '\u{0650}', // kasra
    '\u{0651}', // shadda
    '\u{0652}', // sukun
    '\u{0670}', // superscript alef
];

#[inline]
fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

#[inline]
fn is_vowel_carrier(c: char) -> bool {
    matches!(c, '\u{0622}' | '\u{0627}' | '\u{06C9}' | '\u{06D0}')
}

#[inline]
fn is_consonant(c: char) -> bool {
    matches!(
        c,
        // Hamza forms.
        '\u{0621}' | '\u{0623}' | '\u{0624}' | '\u{0626}'
        // ب and the teh..zain run (skipping ة).
        | '\u{0628}' | '\u{062A}'..='\u{0632}'
        // seen..ghain.
        | '\u{0633}'..='\u{063A}'
        // ف ق and the lam..waw run.
        | '\u{0641}' | '\u{0642}' | '\u{0644}'..='\u{0648}'
        // ي and the extended letters پ چ ژ ک گ ی.
        | '\u{064A}' | '\u{067E}' | '\u{0686}' | '\u{0698}' | '\u{06A9}' | '\u{06AF}' | '\u{06CC}'
    )
}

#[inline]
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{060C}' // ، comma
            | '\u{061B}' // ؛ semicolon
            | '\u{061F}' // ؟ question mark
            | '\u{066A}' // ٪ percent
            | '\u{06D4}' // ۔ full stop
            | '\u{00AB}' | '\u{00BB}' // guillemets
            | '\u{2026}' // ellipsis
        )
}

/// Classify a character for segmentation and the two passes.
pub fn classify(c: char) -> CharClass {
    if c == ZWNJ {
        CharClass::Joiner
    } else if is_diacritic(c) {
        CharClass::Diacritic
    } else if is_vowel_carrier(c) {
        CharClass::VowelCarrier
    } else if is_consonant(c) {
        CharClass::Consonant
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else if is_punctuation(c) {
        CharClass::Punctuation
    } else {
        CharClass::Other
    }
}

/// Cursive joining type of a character, restricted to the inventory.
///
/// Characters outside the inventory report `NonJoining`, which makes every
/// joiner next to them meaningless and therefore removable.
pub fn joining_type(c: char) -> JoiningType {
    match c as u32 {
        // Combining marks are invisible to joining.
        0x064B..=0x0652 | 0x0670 => JoiningType::Transparent,
        // The alef family and د ذ ر ز ژ و ۉ connect leftwards only.
        0x0622 | 0x0623 | 0x0624 | 0x0627 => JoiningType::Right,
        0x062F | 0x0630 | 0x0631 | 0x0632 | 0x0698 => JoiningType::Right,
        0x0648 | 0x06C9 => JoiningType::Right,
        // Bare hamza never connects.
        0x0621 => JoiningType::NonJoining,
        // Every remaining inventory letter is dual-joining.
        _ if classify(c).is_letter() => JoiningType::Dual,
        _ => JoiningType::NonJoining,
    }
}
