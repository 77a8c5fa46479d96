//! Tuning knobs for the reconstruction pipeline.

use crate::error::{Error, Result};

/// Longest candidate word the optimal segmenter will consider.
pub const MAX_WORD_LEN: usize = 20;

/// Segmentation strategy for letter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Dynamic-programming segmentation, falling back to greedy when it cannot
    /// cover the whole run
    #[default]
    Optimal,
    /// Greedy best-scoring-match only
    Greedy,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Optimal => "optimal",
            Strategy::Greedy => "greedy",
        }
    }
}

/// Word validator thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Minimum length at which any alphabetic string counts as a plausible
    /// word. `None` disables the catch-all.
    pub fallback_min_len: Option<usize>,
    /// Candidates must be at least this long to be tried as compounds
    pub compound_min_len: usize,
    /// Minimum remainder after stripping an affix, also the minimum compound piece
    pub affix_min_remainder: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            fallback_min_len: Some(4),
            compound_min_len: 7,
            affix_min_remainder: 3,
        }
    }
}

/// Configuration for [`TextCleaner`](crate::TextCleaner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanerConfig {
    pub strategy: Strategy,
    /// Inputs with fewer alphabetic characters skip segmentation
    pub min_alpha_chars: usize,
    /// Apply NFKC before anything else (expands ligatures such as "ﬁ")
    pub unicode_normalize: bool,
    /// Window of the optimal segmenter, at most [`MAX_WORD_LEN`]
    pub max_word_len: usize,
    pub validator: ValidatorConfig,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Optimal,
            min_alpha_chars: 5,
            unicode_normalize: true,
            max_word_len: MAX_WORD_LEN,
            validator: ValidatorConfig::default(),
        }
    }
}

impl CleanerConfig {
    pub fn greedy() -> Self {
        Self {
            strategy: Strategy::Greedy,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_alpha_chars == 0 {
            return Err(invalid("min_alpha_chars", self.min_alpha_chars, "must be positive"));
        }
        if self.max_word_len == 0 || self.max_word_len > MAX_WORD_LEN {
            return Err(invalid("max_word_len", self.max_word_len, "must be within 1..=20"));
        }
        if self.validator.fallback_min_len == Some(0) {
            return Err(invalid("fallback_min_len", 0, "use None to disable the fallback"));
        }
        if self.validator.affix_min_remainder == 0 {
            return Err(invalid(
                "affix_min_remainder",
                self.validator.affix_min_remainder,
                "must be positive",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: usize, reason: &'static str) -> Error {
    Error::InvalidConfig {
        field,
        value: value.to_string(),
        reason,
    }
}
