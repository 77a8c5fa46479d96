//! The reconstruction pipeline: classify, segment, repair, normalize.

use std::borrow::Cow;

use lazy_static::lazy_static;
use rayon::prelude::*;

use crate::config::{CleanerConfig, Strategy};
use crate::error::Result;
use crate::normalize::{capitalize_sentences, collapse_whitespace, normalize_spacing, unicode_fold};
use crate::pattern::{TextPattern, detect_text_pattern};
use crate::rules::apply_rules;
use crate::segmenter::{Segmentation, Segmenter, segmenter_for};
use crate::validator::WordValidator;

lazy_static! {
    static ref DEFAULT_CLEANER: TextCleaner = TextCleaner::default();
}

/// Cleaned text plus what happened on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    pub text: String,
    pub pattern: TextPattern,
    /// Strategy used, `None` when nothing was segmented
    pub strategy: Option<Strategy>,
    /// Letter runs where the optimal pass fell back to greedy
    pub fallbacks: usize,
    /// Share of segmented letters backed by the dictionary
    pub confidence: Option<f64>,
    /// Repair rule substitutions
    pub substitutions: u64,
}

#[derive(Debug, Default)]
struct RunStats {
    letters: usize,
    known_letters: usize,
    runs: usize,
    fallbacks: usize,
}

impl RunStats {
    fn record(&mut self, segmentation: &Segmentation, configured: Strategy) {
        self.letters += segmentation.letters();
        self.known_letters += segmentation.known_letters();
        self.runs += 1;
        if segmentation.strategy != configured {
            self.fallbacks += 1;
        }
    }

    fn confidence(&self) -> Option<f64> {
        if self.letters == 0 {
            None
        } else {
            Some(self.known_letters as f64 / self.letters as f64)
        }
    }
}

/// How segmented runs are put back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Splice {
    /// Keep the surrounding characters exactly as they were
    InPlace,
    /// Every run and every non-letter chunk becomes its own space-separated piece
    Spaced,
}

/// Repairs text captured from PDF selections.
pub struct TextCleaner {
    config: CleanerConfig,
    validator: WordValidator,
    segmenter: Box<dyn Segmenter + Send + Sync>,
}

impl TextCleaner {
    pub fn new(config: CleanerConfig) -> Result<Self> {
        config.validate()?;
        let validator = WordValidator::new(config.validator);
        Ok(Self {
            config,
            validator,
            segmenter: segmenter_for(config.strategy, validator, config.max_word_len),
        })
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Best-effort reconstruction of `raw`. Never fails.
    pub fn clean(&self, raw: &str) -> String {
        self.reconstruct(raw).text
    }

    /// Clean many selections in parallel, keeping input order.
    pub fn clean_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.clean(t.as_ref())).collect()
    }

    pub fn reconstruct(&self, raw: &str) -> Reconstruction {
        let input: Cow<'_, str> = if self.config.unicode_normalize {
            Cow::Owned(unicode_fold(raw))
        } else {
            Cow::Borrowed(raw)
        };
        let trimmed = input.trim();
        let pattern = detect_text_pattern(trimmed);

        let alpha = trimmed.chars().filter(|c| c.is_ascii_alphabetic()).count();
        if alpha < self.config.min_alpha_chars {
            return Reconstruction {
                text: collapse_whitespace(trimmed),
                pattern,
                strategy: None,
                fallbacks: 0,
                confidence: None,
                substitutions: 0,
            };
        }

        let mut stats = RunStats::default();
        let segmented = match pattern {
            TextPattern::ExtremeSpacing => {
                let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
                self.splice_runs(&compact, Splice::Spaced, &mut stats)
            }
            TextPattern::MissingSpaces | TextPattern::Mixed => {
                self.splice_runs(trimmed, Splice::InPlace, &mut stats)
            }
            TextPattern::Normal => trimmed.to_string(),
        };
        log::debug!(
            "{} text, {} letter runs segmented, {} fallbacks",
            pattern,
            stats.runs,
            stats.fallbacks
        );

        let (repaired, substitutions) = apply_rules(&segmented);
        let text = capitalize_sentences(&normalize_spacing(&repaired));

        Reconstruction {
            text,
            pattern,
            strategy: (stats.runs > 0).then_some(self.config.strategy),
            fallbacks: stats.fallbacks,
            confidence: stats.confidence(),
            substitutions,
        }
    }

    /// Segment every ASCII letter run of `text` and splice the results back
    /// between the untouched non-letter chunks.
    fn splice_runs(&self, text: &str, splice: Splice, stats: &mut RunStats) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        for (is_letters, chunk) in letter_chunks(text) {
            if splice == Splice::Spaced && !out.is_empty() {
                out.push(' ');
            }
            if splice == Splice::InPlace && self.is_intact_word(chunk) {
                out.push_str(chunk);
            } else if is_letters {
                let stream = chunk.to_ascii_lowercase();
                let segmentation = self.segmenter.segment(&stream);
                stats.record(&segmentation, self.config.strategy);
                out.push_str(&segmentation.join_onto(chunk));
            } else {
                out.push_str(chunk);
            }
        }
        out
    }

    /// A run already spaced off from its neighbours that the validator knows,
    /// with no camelCase seam inside it.
    fn is_intact_word(&self, chunk: &str) -> bool {
        let bytes = chunk.as_bytes();
        if bytes.windows(2).any(|w| w[0].is_ascii_lowercase() && w[1].is_ascii_uppercase()) {
            return false;
        }
        chunk.bytes().all(|b| b.is_ascii_alphabetic())
            && self
                .validator
                .verdict_normalized(&chunk.to_ascii_lowercase())
                .is_known()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        let config = CleanerConfig::default();
        let validator = WordValidator::new(config.validator);
        Self {
            config,
            validator,
            segmenter: segmenter_for(config.strategy, validator, config.max_word_len),
        }
    }
}

/// Split text into maximal chunks of ASCII letters and of everything else.
fn letter_chunks(text: &str) -> Vec<(bool, &str)> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let is_letter = c.is_ascii_alphabetic();
        match current {
            Some(kind) if kind == is_letter => {}
            Some(kind) => {
                chunks.push((kind, &text[start..i]));
                start = i;
                current = Some(is_letter);
            }
            None => current = Some(is_letter),
        }
    }
    if let Some(kind) = current {
        chunks.push((kind, &text[start..]));
    }
    chunks
}

/// Clean a PDF selection with the default configuration.
pub fn clean_selected_text(raw: &str) -> String {
    DEFAULT_CLEANER.clean(raw)
}

/// [`clean_selected_text`] with diagnostics.
pub fn reconstruct(raw: &str) -> Reconstruction {
    DEFAULT_CLEANER.reconstruct(raw)
}

/// Clean many selections in parallel with the default configuration.
pub fn clean_batch<S>(texts: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    DEFAULT_CLEANER.clean_batch(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;

    #[test]
    fn test_letter_chunks() {
        assert_eq!(
            letter_chunks("ab, cd!"),
            vec![(true, "ab"), (false, ", "), (true, "cd"), (false, "!")]
        );
        assert!(letter_chunks("").is_empty());
        assert_eq!(letter_chunks("42"), vec![(false, "42")]);
    }

    #[test]
    fn test_short_input_skips_segmentation() {
        let result = reconstruct("  a  b c ");
        assert_eq!(result.text, "a b c");
        assert_eq!(result.strategy, None);
        assert_eq!(result.confidence, None);
    }

    #[test]
    fn test_extreme_spacing_keeps_punctuation() {
        let result = reconstruct("r a n s o m w a r e i s c o m m o n .");
        assert_eq!(result.pattern, TextPattern::ExtremeSpacing);
        assert_eq!(result.text, "Ransomware is common.");
        assert_eq!(result.confidence, Some(1.0));
    }

    #[test]
    fn test_missing_spaces_keeps_existing_layout() {
        let result = reconstruct("denialofservice attacks");
        assert_eq!(result.pattern, TextPattern::MissingSpaces);
        assert_eq!(result.text, "Denial-of-service attacks");
        assert_eq!(result.substitutions, 1);
        assert_eq!(result.strategy, Some(Strategy::Optimal));
    }

    #[test]
    fn test_known_words_are_not_resegmented() {
        let cleaner = TextCleaner::default();
        assert!(cleaner.is_intact_word("everywhere"));
        assert!(cleaner.is_intact_word("Exploited"));
        assert!(!cleaner.is_intact_word("phishingAttack"));
        assert!(!cleaner.is_intact_word("denialofservice"));

        // low whitespace ratio sends this down the mixed path
        let result = reconstruct("Attackers exploited outdated software everywhere.");
        assert_eq!(result.pattern, TextPattern::Mixed);
        assert_eq!(result.text, "Attackers exploited outdated software everywhere.");
    }

    #[test]
    fn test_case_is_restored_from_input() {
        assert_eq!(
            clean_selected_text("theRansomwaregroup"),
            "The Ransomware group"
        );
    }

    #[test]
    fn test_ligatures_are_folded() {
        assert_eq!(clean_selected_text("the ﬁrewall"), "The firewall");
    }

    #[test]
    fn test_greedy_configuration() {
        let cleaner = TextCleaner::new(CleanerConfig::greedy()).unwrap();
        let result = cleaner.reconstruct("theattackgroup");
        assert_eq!(result.text, "The attack group");
        assert_eq!(result.strategy, Some(Strategy::Greedy));
        assert_eq!(result.fallbacks, 0);
    }

    #[test]
    fn test_fallback_is_counted() {
        let cleaner = TextCleaner::new(CleanerConfig {
            validator: ValidatorConfig {
                fallback_min_len: None,
                ..ValidatorConfig::default()
            },
            ..CleanerConfig::default()
        })
        .unwrap();
        let result = cleaner.reconstruct("theattackxq data");
        assert_eq!(result.fallbacks, 1);
        assert_eq!(result.text, "The attack xq data");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = CleanerConfig {
            max_word_len: 0,
            ..CleanerConfig::default()
        };
        assert!(TextCleaner::new(config).is_err());
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs = vec!["denialofservice", "", "The quick brown fox."];
        assert_eq!(
            clean_batch(&inputs),
            vec!["Denial-of-service", "", "The quick brown fox."]
        );
    }
}
