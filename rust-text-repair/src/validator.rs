//! Word plausibility checks used by the segmenters.

use crate::config::ValidatorConfig;
use crate::dictionary::{Dictionary, dictionary};

/// Why a candidate was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Listed in the dictionary (includes the single letters `a` and `i`)
    Dictionary,
    /// Two dictionary words glued together ("cyber" + "crime")
    Compound,
    /// Known prefix or suffix around a remainder of at least the minimum length
    Affixed { stem_known: bool },
    /// Only the alphabetic length catch-all accepted it
    Plausible,
    Invalid,
}

impl Verdict {
    pub fn is_valid(self) -> bool {
        !matches!(self, Verdict::Invalid)
    }

    /// Accepted on dictionary evidence rather than a permissive rule.
    pub fn is_known(self) -> bool {
        matches!(
            self,
            Verdict::Dictionary | Verdict::Compound | Verdict::Affixed { stem_known: true }
        )
    }
}

/// Dictionary-backed word validator.
#[derive(Clone, Copy)]
pub struct WordValidator {
    dict: &'static Dictionary,
    config: ValidatorConfig,
}

impl WordValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            dict: dictionary(),
            config,
        }
    }

    pub fn dictionary(&self) -> &'static Dictionary {
        self.dict
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn is_valid_word(&self, candidate: &str) -> bool {
        self.verdict(candidate).is_valid()
    }

    /// Classify a candidate. Non-letters are stripped and case is folded first.
    pub fn verdict(&self, candidate: &str) -> Verdict {
        let word: String = candidate
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        self.verdict_normalized(&word)
    }

    /// Same as [`verdict`](Self::verdict) for input that is already lowercase ASCII letters.
    pub fn verdict_normalized(&self, word: &str) -> Verdict {
        let len = word.len();
        if len == 0 {
            return Verdict::Invalid;
        }
        if len == 1 {
            return if word == "a" || word == "i" {
                Verdict::Dictionary
            } else {
                Verdict::Invalid
            };
        }
        if self.dict.contains(word) {
            return Verdict::Dictionary;
        }

        let min_piece = self.config.affix_min_remainder;
        if len >= self.config.compound_min_len && self.is_compound(word, min_piece) {
            return Verdict::Compound;
        }

        // Several affixes can match; a dictionary stem from any of them wins.
        let stems = self
            .dict
            .prefixes()
            .filter_map(|prefix| word.strip_prefix(prefix))
            .chain(
                self.dict
                    .suffixes()
                    .filter_map(|suffix| word.strip_suffix(suffix)),
            )
            .filter(|stem| stem.len() >= min_piece);
        let mut affixed = None;
        for stem in stems {
            let known = self.dict.contains(stem);
            affixed = Some(affixed.unwrap_or(false) || known);
            if known {
                break;
            }
        }
        if let Some(stem_known) = affixed {
            return Verdict::Affixed { stem_known };
        }

        match self.config.fallback_min_len {
            Some(min) if len >= min => Verdict::Plausible,
            _ => Verdict::Invalid,
        }
    }

    fn is_compound(&self, word: &str, min_piece: usize) -> bool {
        if word.len() < 2 * min_piece {
            return false;
        }
        (min_piece..=word.len() - min_piece)
            .any(|split| self.dict.contains(&word[..split]) && self.dict.contains(&word[split..]))
    }
}

impl Default for WordValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

/// Check a candidate against the default validator.
pub fn is_valid_word(candidate: &str) -> bool {
    WordValidator::default().is_valid_word(candidate)
}
