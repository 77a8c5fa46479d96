//! Classification of extracted text by its spacing failure mode.
//!
//! PDF text layers either emit one glyph per text run, which leaves a space
//! between every character once runs are joined, or drop word-boundary
//! whitespace altogether. The repair differs per failure mode, so text is
//! classified before segmentation.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use whatlang::Script;

use crate::dictionary::Dictionary;
use crate::validator::WordValidator;

lazy_static! {
    // Eight or more single letters in a row, each followed by whitespace
    static ref SPACED_LETTERS: Regex = Regex::new(r"(?:\b[A-Za-z]\s+){8,}").unwrap();
    static ref CAMEL_CASE: Regex = Regex::new(r"[a-z][A-Z]").unwrap();
    static ref LETTER_RUN: Regex = Regex::new(r"[A-Za-z]{6,}").unwrap();
}

const EXTREME_SPACE_RATIO: f64 = 0.3;
const MIXED_SPACE_RATIO: f64 = 0.1;
const MIXED_MIN_LETTERS: usize = 20;
/// Shortest dictionary word that counts as evidence of a glued run
const GLUED_MIN_WORD: usize = 3;
const GLUED_MAX_WORD: usize = 20;

/// Spacing failure mode of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextPattern {
    /// Whitespace between most characters ("r a n s o m")
    ExtremeSpacing,
    /// Words run together ("denialofservice")
    MissingSpaces,
    /// Long text with very little whitespace
    Mixed,
    Normal,
}

impl TextPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            TextPattern::ExtremeSpacing => "extreme_spacing",
            TextPattern::MissingSpaces => "missing_spaces",
            TextPattern::Mixed => "mixed",
            TextPattern::Normal => "normal",
        }
    }
}

impl fmt::Display for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify already-trimmed text.
pub fn detect_text_pattern(text: &str) -> TextPattern {
    let mut whitespace = 0usize;
    let mut visible = 0usize;
    let mut letters = 0usize;
    for c in text.chars() {
        if c.is_whitespace() {
            whitespace += 1;
        } else {
            visible += 1;
            if c.is_ascii_alphabetic() {
                letters += 1;
            }
        }
    }
    if visible == 0 {
        return TextPattern::Normal;
    }
    if !is_latin(text) {
        return TextPattern::Normal;
    }

    let space_ratio = whitespace as f64 / visible as f64;
    if SPACED_LETTERS.is_match(text) || space_ratio > EXTREME_SPACE_RATIO {
        return TextPattern::ExtremeSpacing;
    }
    if CAMEL_CASE.is_match(text) || has_glued_run(text, &WordValidator::default()) {
        return TextPattern::MissingSpaces;
    }
    if space_ratio < MIXED_SPACE_RATIO && letters > MIXED_MIN_LETTERS {
        return TextPattern::Mixed;
    }
    TextPattern::Normal
}

/// Anything whatlang cannot place counts as Latin; segmentation only
/// understands Latin-script vocabulary.
fn is_latin(text: &str) -> bool {
    whatlang::detect_script(text).is_none_or(|script| script == Script::Latin)
}

/// A letter run the validator does not already know as a word, but which
/// holds two separate dictionary words, is most likely several words glued
/// together. Compounds and affixed forms of known stems are words.
fn has_glued_run(text: &str, validator: &WordValidator) -> bool {
    LETTER_RUN.find_iter(text).any(|m| {
        let run = m.as_str().to_ascii_lowercase();
        !validator.verdict_normalized(&run).is_known()
            && holds_two_words(&run, validator.dictionary())
    })
}

fn holds_two_words(run: &str, dict: &Dictionary) -> bool {
    let n = run.len();
    let mut first_end = usize::MAX;
    let mut last_start = 0usize;
    let mut found = false;
    for start in 0..n {
        let max_end = (start + GLUED_MAX_WORD).min(n);
        for end in (start + GLUED_MIN_WORD)..=max_end {
            // the whole run never counts as one of the two words
            if end - start == n {
                continue;
            }
            if dict.contains(&run[start..end]) {
                found = true;
                first_end = first_end.min(end);
                last_start = last_start.max(start);
            }
        }
    }
    found && first_end <= last_start
}
