// src/core/joiner.rs
//! The ZWNJ correction pass. Word by word, every joiner control is
//! stripped and the set the convention requires is reinserted, which makes
//! the pass idempotent and able to remove misplaced joiners and add
//! missing ones in the same sweep.

use crate::core::rules::JoinerRules;
use crate::core::script;
use crate::core::types::CharClass;
use crate::core::word::{self, Segment};

/// One candidate morpheme boundary examined by [`ZwnjCorrector::analyze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryDecision {
    /// Character offset of the stem-final letter in the input.
    pub offset: usize,
    /// The stem-final letter the rule anchored on.
    pub stem_final: char,
    /// Up to five characters of input context on either side.
    pub context: String,
    /// Whether the convention requires a joiner at this boundary.
    pub required: bool,
    /// The suffix spelling that matched, when one did.
    pub matched_suffix: Option<String>,
}

/// Rewrites joiner controls at morpheme boundaries. Total: there is no
/// input this pass can fail on.
pub struct ZwnjCorrector {
    rules: JoinerRules,
}

impl ZwnjCorrector {
    pub fn new(rules: JoinerRules) -> Self {
        Self { rules }
    }

    /// Correct every word of `text`; separators are copied verbatim.
    pub fn fix(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 8);
        for seg in word::segment(text) {
            match seg {
                Segment::Separator(sep) => out.push_str(sep),
                Segment::Word(w) => self.fix_word(w, &mut out),
            }
        }
        out
    }

    /// Report every candidate boundary with the verdict `fix` would apply.
    pub fn analyze(&self, text: &str) -> Vec<BoundaryDecision> {
        let mut decisions = Vec::new();
        let mut offset = 0;
        for seg in word::segment(text) {
            if let Segment::Word(w) = seg {
                self.analyze_word(w, offset, text, &mut decisions);
            }
            offset += seg.text().chars().count();
        }
        decisions
    }

    fn fix_word(&self, word: &str, out: &mut String) {
        let bare: Vec<char> = word
            .chars()
            .filter(|&c| script::classify(c) != CharClass::Joiner)
            .collect();
        if !bare.iter().any(|&c| script::classify(c).is_letter()) {
            // Nothing to anchor on; a stray joiner run stays as it was.
            out.push_str(word);
            return;
        }
        for (at, &c) in bare.iter().enumerate() {
            if at > 0 && script::classify(c).is_letter() {
                if let Some(suffix) = self.boundary_match(&bare, at) {
                    log::trace!("joiner inserted before suffix {:?}", suffix);
                    out.push(script::ZWNJ);
                }
            }
            out.push(c);
        }
    }

    /// Decide the boundary immediately before base letter `bare[at]`.
    /// Returns the matched suffix when the convention requires a joiner.
    fn boundary_match<'a>(&'a self, bare: &[char], at: usize) -> Option<&'a str> {
        let stem = &bare[..at];
        let rest = &bare[at..];

        // The left anchor is the stem's last base letter; trailing
        // diacritics are transparent to joining.
        let anchor = *stem
            .iter()
            .rev()
            .find(|&&c| !script::joining_type(c).is_transparent())?;

        // A joiner only means something where the script would otherwise
        // connect the two sides.
        if !script::joining_type(anchor).joins_forward() {
            return None;
        }
        if !script::joining_type(bare[at]).joins_backward() {
            return None;
        }

        let stem_letters = stem
            .iter()
            .filter(|&&c| script::classify(c).is_letter())
            .count();
        for rule in &self.rules.boundaries {
            if rule.stem_final != anchor || stem_letters < rule.min_stem_letters {
                continue;
            }
            if let Some(suffix) = rule
                .suffixes
                .iter()
                .find(|s| starts_with_chars(rest, s))
            {
                return Some(suffix);
            }
        }
        None
    }

    fn analyze_word(
        &self,
        word: &str,
        word_offset: usize,
        full_text: &str,
        out: &mut Vec<BoundaryDecision>,
    ) {
        let mut bare = Vec::new();
        let mut offsets = Vec::new();
        for (i, c) in word.chars().enumerate() {
            if script::classify(c) != CharClass::Joiner {
                bare.push(c);
                offsets.push(word_offset + i);
            }
        }
        for i in 0..bare.len() {
            let c = bare[i];
            if !script::classify(c).is_letter() {
                continue;
            }
            if !self.rules.boundaries.iter().any(|r| r.stem_final == c) {
                continue;
            }
            // The next base letter, if any, names the candidate boundary.
            let Some(next) = (i + 1..bare.len()).find(|&j| script::classify(bare[j]).is_letter())
            else {
                continue;
            };
            let matched = self.boundary_match(&bare, next).map(str::to_string);
            out.push(BoundaryDecision {
                offset: offsets[i],
                stem_final: c,
                context: context_window(full_text, offsets[i]),
                required: matched.is_some(),
                matched_suffix: matched,
            });
        }
    }
}

fn starts_with_chars(haystack: &[char], needle: &str) -> bool {
    let mut it = haystack.iter();
    needle.chars().all(|n| it.next().copied() == Some(n))
}

fn context_window(text: &str, offset: usize) -> String {
    let start = offset.saturating_sub(5);
    text.chars().skip(start).take(offset - start + 6).collect()
}
