// src/core/word.rs
//! Splits input into alternating word and separator runs. Both passes walk
//! the segment list, rewrite word runs, and copy separator runs verbatim,
//! which is what keeps punctuation and spacing stable end to end.

use crate::core::script;

/// One maximal run of the input text.
///
/// Concatenating the segments of [`segment`] in order reproduces the input
/// byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Letters, diacritics and joiner controls.
    Word(&'a str),
    /// Everything else: whitespace, punctuation, foreign characters.
    Separator(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Word(s) | Segment::Separator(s) => s,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Segment::Word(_))
    }
}

/// Split `text` into word and separator segments without copying.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut run_start = 0;
    let mut run_is_word = None;

    for (idx, ch) in text.char_indices() {
        let is_word = script::classify(ch).is_word_char();
        match run_is_word {
            Some(current) if current == is_word => {}
            Some(current) => {
                segments.push(make(current, &text[run_start..idx]));
                run_start = idx;
                run_is_word = Some(is_word);
            }
            None => run_is_word = Some(is_word),
        }
    }
    if let Some(current) = run_is_word {
        segments.push(make(current, &text[run_start..]));
    }
    segments
}

fn make(is_word: bool, text: &str) -> Segment<'_> {
    if is_word {
        Segment::Word(text)
    } else {
        Segment::Separator(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(bool, &str)> {
        segment(text).iter().map(|s| (s.is_word(), s.text())).collect()
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn single_word() {
        assert_eq!(kinds("دولت"), vec![(true, "دولت")]);
    }

    #[test]
    fn words_and_spaces_alternate() {
        assert_eq!(
            kinds("دولت دیر."),
            vec![(true, "دولت"), (false, " "), (true, "دیر"), (false, ".")]
        );
    }

    #[test]
    fn leading_and_trailing_separators() {
        assert_eq!(
            kinds("...دیر."),
            vec![(false, "..."), (true, "دیر"), (false, ".")]
        );
    }

    #[test]
    fn joiner_and_diacritics_stay_inside_the_word() {
        let text = "کېله\u{200C}جگی";
        assert_eq!(kinds(text), vec![(true, text)]);
        let text = "بَد";
        assert_eq!(kinds(text), vec![(true, text)]);
    }

    #[test]
    fn foreign_text_is_one_separator_run() {
        assert_eq!(kinds("hello 123!"), vec![(false, "hello 123!")]);
    }

    #[test]
    fn segments_reassemble_to_the_input() {
        let text = "اۉزبېکستان کېلهجگی، بویوک دولت دیر.\n";
        let rebuilt: String = segment(text).iter().map(|s| s.text()).collect();
        assert_eq!(rebuilt, text);
    }
}
