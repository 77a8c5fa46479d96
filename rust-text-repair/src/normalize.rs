//! Whitespace, punctuation and capitalization cleanup.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"\s+([.,:;!?])").unwrap();
    static ref PUNCT_BEFORE_WORD: Regex = Regex::new(r"([.,:;!?])(\w)").unwrap();
    static ref AFTER_OPEN_PAREN: Regex = Regex::new(r"\(\s+").unwrap();
    static ref BEFORE_CLOSE_PAREN: Regex = Regex::new(r"\s+\)").unwrap();
    static ref AROUND_SLASH: Regex = Regex::new(r"\s*/\s*").unwrap();
    static ref AROUND_HYPHEN: Regex = Regex::new(r"\s*-\s*").unwrap();
    static ref FIRST_LETTER: Regex = Regex::new(r"^([^A-Za-z]*)([a-z])").unwrap();
    static ref SENTENCE_START: Regex = Regex::new(r"\. ([a-z])").unwrap();
}

/// NFKC-fold text; expands ligatures and full-width forms.
pub fn unicode_fold(text: &str) -> String {
    text.nfkc().collect()
}

/// Collapse whitespace runs to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Spacing cleanup around punctuation, parentheses, slashes and hyphens.
pub fn normalize_spacing(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let result = SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1");
    let result = space_after_punctuation(&result);
    let result = AFTER_OPEN_PAREN.replace_all(&result, "(");
    let result = BEFORE_CLOSE_PAREN.replace_all(&result, ")");
    let result = AROUND_SLASH.replace_all(&result, "/");
    let result = AROUND_HYPHEN.replace_all(&result, "-");
    result.into_owned()
}

/// One space after sentence punctuation that is directly followed by a word.
/// Numbers such as "3.14" or "1,000" are left alone.
fn space_after_punctuation(text: &str) -> String {
    PUNCT_BEFORE_WORD
        .replace_all(text, |caps: &Captures| {
            let Some(punct) = caps.get(1) else {
                return caps[0].to_string();
            };
            let prev = text[..punct.start()].chars().next_back();
            let next = caps[2].chars().next();
            let numeric = prev.is_some_and(|c| c.is_ascii_digit())
                && next.is_some_and(|c| c.is_ascii_digit());
            if numeric {
                caps[0].to_string()
            } else {
                format!("{} {}", &caps[1], &caps[2])
            }
        })
        .into_owned()
}

/// Uppercase the first letter (past any leading punctuation) and the first letter after each ". ".
pub fn capitalize_sentences(text: &str) -> String {
    let result = FIRST_LETTER.replace(text, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    });
    SENTENCE_START
        .replace_all(&result, |caps: &Captures| format!(". {}", caps[1].to_uppercase()))
        .into_owned()
}
