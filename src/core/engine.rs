// src/core/engine.rs
//! The facade both binaries and library users talk to. A `Lutfiy` value
//! owns one corrector and one mapper built from the same rule set and
//! stays immutable afterwards, so it is `Send + Sync` and freely shared.

use crate::core::joiner::{BoundaryDecision, ZwnjCorrector};
use crate::core::mapper::TransliterationMapper;
use crate::core::rules::RuleSet;
use crate::error::{RulesError, UnmappedGraphemeError};

/// Which passes [`Lutfiy::process`] applies, in fixed order: joiner
/// correction first, transliteration second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOptions {
    pub fix_zwnj: bool,
    pub transliterate: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            fix_zwnj: true,
            transliterate: false,
        }
    }
}

/// Southern Uzbek text-processing engine.
pub struct Lutfiy {
    corrector: ZwnjCorrector,
    mapper: TransliterationMapper,
}

impl Lutfiy {
    /// Engine over the bundled Southern Uzbek rules.
    pub fn new() -> Self {
        let rules = RuleSet::southern_uzbek();
        Self {
            mapper: TransliterationMapper::new(&rules.mapping),
            corrector: ZwnjCorrector::new(rules.joiner),
        }
    }

    /// Engine over a custom rule set. Mapping coverage is checked here so
    /// a gap in a hand-edited table surfaces at load time, not mid-text.
    pub fn from_rules(rules: RuleSet) -> Result<Self, RulesError> {
        let mapper = TransliterationMapper::new(&rules.mapping);
        mapper.validate()?;
        Ok(Self {
            mapper,
            corrector: ZwnjCorrector::new(rules.joiner),
        })
    }

    /// Rewrite joiner controls at morpheme boundaries. Total.
    pub fn fix_zwnj(&self, text: &str) -> String {
        self.corrector.fix(text)
    }

    /// Map Perso-Arabic text to Latin.
    pub fn transliterate(&self, text: &str) -> Result<String, UnmappedGraphemeError> {
        self.mapper.transliterate(text)
    }

    /// Report every candidate morpheme boundary and its verdict.
    pub fn analyze_zwnj(&self, text: &str) -> Vec<BoundaryDecision> {
        self.corrector.analyze(text)
    }

    /// Apply the passes selected in `options`, correction first.
    pub fn process(
        &self,
        text: &str,
        options: ProcessOptions,
    ) -> Result<String, UnmappedGraphemeError> {
        if options.fix_zwnj {
            let corrected = self.corrector.fix(text);
            if options.transliterate {
                self.mapper.transliterate(&corrected)
            } else {
                Ok(corrected)
            }
        } else if options.transliterate {
            self.mapper.transliterate(text)
        } else {
            Ok(text.to_string())
        }
    }
}

impl Default for Lutfiy {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot joiner correction with the bundled rules.
pub fn fix_zwnj(text: &str) -> String {
    Lutfiy::new().fix_zwnj(text)
}

/// One-shot transliteration with the bundled rules.
pub fn transliterate(text: &str) -> Result<String, UnmappedGraphemeError> {
    Lutfiy::new().transliterate(text)
}

/// One-shot combined processing with the bundled rules.
pub fn process_text(text: &str, options: ProcessOptions) -> Result<String, UnmappedGraphemeError> {
    Lutfiy::new().process(text, options)
}
