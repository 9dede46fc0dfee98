// src/core/mapper.rs
//! The transliteration pass: greedy longest-match mapping of each word's
//! bare letter stream to Latin. Joiner controls are stripped before lookup
//! and never surface in the output; separators are copied verbatim.

use crate::core::rules::MappingRule;
use crate::core::script;
use crate::core::table::MappingTable;
use crate::core::types::{CharClass, LetterPosition};
use crate::core::word::{self, Segment};
use crate::error::{RulesError, UnmappedGraphemeError};

/// Context-sensitive Perso-Arabic to Latin mapper over a compiled table.
pub struct TransliterationMapper {
    table: MappingTable,
}

impl TransliterationMapper {
    pub fn new(rules: &[MappingRule]) -> Self {
        Self {
            table: MappingTable::from_rules(rules),
        }
    }

    /// Check the compiled table covers the whole inventory.
    pub fn validate(&self) -> Result<(), RulesError> {
        self.table.validate()
    }

    /// Map `text` to Latin. Fails on the first grapheme without a rule;
    /// nothing is returned for a failed input.
    pub fn transliterate(&self, text: &str) -> Result<String, UnmappedGraphemeError> {
        let mut out = String::with_capacity(text.len());
        let mut offset = 0;
        for seg in word::segment(text) {
            match seg {
                Segment::Separator(sep) => out.push_str(sep),
                Segment::Word(w) => self.map_word(w, offset, &mut out)?,
            }
            offset += seg.text().chars().count();
        }
        Ok(out)
    }

    fn map_word(
        &self,
        word: &str,
        word_offset: usize,
        out: &mut String,
    ) -> Result<(), UnmappedGraphemeError> {
        // Bare stream plus each character's offset in the original input,
        // so an error can point at the exact spot joiners included.
        let mut bare = Vec::new();
        let mut offsets = Vec::new();
        for (i, c) in word.chars().enumerate() {
            if script::classify(c) != CharClass::Joiner {
                bare.push(c);
                offsets.push(word_offset + i);
            }
        }

        let mut cursor = 0;
        while cursor < bare.len() {
            let position = position_at(&bare, cursor);
            match self.table.lookup(&bare[cursor..], position) {
                Some((consumed, output)) => {
                    out.push_str(output);
                    cursor += consumed;
                }
                None => {
                    log::debug!(
                        "no mapping for U+{:04X} at offset {}",
                        bare[cursor] as u32,
                        offsets[cursor]
                    );
                    return Err(UnmappedGraphemeError {
                        grapheme: bare[cursor].to_string(),
                        position,
                        offset: offsets[cursor],
                    });
                }
            }
        }
        Ok(())
    }
}

/// Position of the cursor within the bare word: initial at the start, final
/// when at most one base letter remains, medial otherwise. Diacritics do
/// not count towards the final check.
fn position_at(bare: &[char], cursor: usize) -> LetterPosition {
    if cursor == 0 {
        return LetterPosition::Initial;
    }
    let remaining_letters = bare[cursor..]
        .iter()
        .filter(|&&c| script::classify(c).is_letter())
        .count();
    if remaining_letters <= 1 {
        LetterPosition::Final
    } else {
        LetterPosition::Medial
    }
}
