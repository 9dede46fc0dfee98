// src/lib.rs
//! Southern Uzbek Perso-Arabic text processing.
//!
//! Two independent passes share one script-classification layer: a total
//! ZWNJ correction pass that rewrites U+200C joiner controls at morpheme
//! boundaries, and a context-sensitive transliteration pass that maps the
//! Perso-Arabic script to Uzbek Latin. Rule tables are plain data and can
//! be swapped at runtime.
//!
//! ```
//! use lutfiy_core::Lutfiy;
//!
//! let lutfiy = Lutfiy::new();
//! let fixed = lutfiy.fix_zwnj("کېلهجگی");
//! assert_eq!(fixed, "کېله\u{200C}جگی");
//! assert_eq!(lutfiy.transliterate("اۉزبېکستان").unwrap(), "oʻzbekston");
//! ```

pub mod core;
pub mod error;
pub mod persistence;

pub use crate::core::engine::{fix_zwnj, process_text, transliterate, Lutfiy, ProcessOptions};
pub use crate::core::joiner::BoundaryDecision;
pub use crate::core::rules::{BoundaryRule, JoinerRules, MappingRule, RuleSet};
pub use crate::error::{RulesError, UnmappedGraphemeError};
