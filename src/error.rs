// src/error.rs
//! Typed errors at the crate boundary.
//!
//! The two passes fail differently on purpose: the joiner pass is total and
//! has no error type at all, while the mapping pass refuses to guess and
//! surfaces the first gap it meets.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::LetterPosition;

/// The transliteration mapper met a grapheme it has no rule for.
///
/// Always a rule-table gap, never a transient condition; callers get no
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no mapping for {grapheme:?} in {position} position at character offset {offset}")]
pub struct UnmappedGraphemeError {
    /// The source grapheme the lookup failed on.
    pub grapheme: String,
    /// Word position computed at the miss.
    pub position: LetterPosition,
    /// Character offset of the grapheme in the original input, joiner
    /// controls included.
    pub offset: usize,
}

/// Failures while loading, saving or validating rule sets.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The rule file does not exist.
    #[error("rule file not found: {0}")]
    NotFound(PathBuf),

    /// Reading or writing the rule file failed.
    #[error("rule file I/O failed for {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON rule file did not parse.
    #[error("malformed JSON rule file {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The binary rule file did not decode.
    #[error("malformed binary rule file {path:?}")]
    Binary {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// The mapping table leaves an inventory grapheme without a rule.
    #[error("mapping table has no rule for {letter:?} in {position} position")]
    Coverage {
        letter: char,
        position: LetterPosition,
    },
}
