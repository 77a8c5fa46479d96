//! Word segmentation of glued letter streams.
//!
//! Two strategies share the [`Segmenter`] interface:
//!
//! - [`OptimalSegmenter`]: dynamic programming over every split of the stream
//!   (candidate words capped at [`MAX_WORD_LEN`] letters), scored by dictionary
//!   frequency and length heuristics. When no chain of valid words covers the
//!   whole stream it hands the stream to the greedy strategy untouched.
//! - [`GreedySegmenter`]: picks the best-scoring candidate at each position,
//!   longest first, and emits a stray character when nothing is valid. It
//!   always terminates after at most one step per input character.
//!
//! Input streams are lowercase ASCII letters; the caller strips everything else.

use crate::config::{MAX_WORD_LEN, Strategy};
use crate::dictionary::Dictionary;
use crate::validator::{Verdict, WordValidator};

/// Longest candidate the greedy strategy tries at a position.
pub const GREEDY_MAX_LEN: usize = 15;

/// How a token was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Backed by the dictionary
    Known,
    /// Accepted only by a permissive validator rule
    Guessed,
    /// Single character emitted because nothing matched
    Stray,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn from_verdict(text: &str, verdict: Verdict) -> Self {
        let kind = if verdict.is_known() {
            TokenKind::Known
        } else {
            TokenKind::Guessed
        };
        Self {
            text: text.to_string(),
            kind,
        }
    }

    fn stray(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: TokenKind::Stray,
        }
    }

    pub fn is_known(&self) -> bool {
        self.kind == TokenKind::Known
    }
}

/// Ordered tokens covering one stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub tokens: Vec<Token>,
    /// Strategy that produced `tokens`
    pub strategy: Strategy,
    /// Outer positions visited (greedy) or stream positions filled (optimal)
    pub steps: usize,
    /// Candidate substrings examined, across both strategies when the
    /// optimal pass fell back
    pub evaluations: usize,
}

impl Segmentation {
    /// Total letters covered.
    pub fn letters(&self) -> usize {
        self.tokens.iter().map(|t| t.text.len()).sum()
    }

    /// Letters covered by dictionary-backed tokens.
    pub fn known_letters(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.is_known())
            .map(|t| t.text.len())
            .sum()
    }

    /// Join tokens with single spaces. Adjacent tokens that are both
    /// unexplained (guessed or stray) stay glued together.
    pub fn join(&self) -> String {
        let mut out = String::with_capacity(self.letters() + self.tokens.len());
        let mut prev: Option<TokenKind> = None;
        for token in &self.tokens {
            if needs_space(prev, token.kind) {
                out.push(' ');
            }
            out.push_str(&token.text);
            prev = Some(token.kind);
        }
        out
    }

    /// Like [`join`](Self::join), but copies letters from `original`, which
    /// must have the same length as the segmented stream. Restores case.
    pub fn join_onto(&self, original: &str) -> String {
        debug_assert_eq!(original.len(), self.letters());
        let mut out = String::with_capacity(original.len() + self.tokens.len());
        let mut prev: Option<TokenKind> = None;
        let mut offset = 0;
        for token in &self.tokens {
            let end = offset + token.text.len();
            if needs_space(prev, token.kind) {
                out.push(' ');
            }
            out.push_str(original.get(offset..end).unwrap_or(&token.text));
            offset = end;
            prev = Some(token.kind);
        }
        out
    }
}

fn needs_space(prev: Option<TokenKind>, next: TokenKind) -> bool {
    match prev {
        None => false,
        Some(prev) => prev == TokenKind::Known || next == TokenKind::Known,
    }
}

/// A strategy that splits a letter stream into word tokens.
pub trait Segmenter {
    fn segment(&self, stream: &str) -> Segmentation;
}

/// Best-scoring-match segmentation.
#[derive(Clone, Copy)]
pub struct GreedySegmenter {
    validator: WordValidator,
}

impl GreedySegmenter {
    pub fn new(validator: WordValidator) -> Self {
        Self { validator }
    }
}

impl Segmenter for GreedySegmenter {
    fn segment(&self, stream: &str) -> Segmentation {
        let dict = self.validator.dictionary();
        let n = stream.len();
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut steps = 0;
        let mut evaluations = 0;

        while pos < n {
            steps += 1;
            let max_len = GREEDY_MAX_LEN.min(n - pos);
            let candidates = (1..=max_len).rev().filter_map(|len| {
                evaluations += 1;
                let word = &stream[pos..pos + len];
                let verdict = self.validator.verdict_normalized(word);
                verdict
                    .is_valid()
                    .then(|| (len, greedy_score(dict, word), verdict))
            });

            match longest_best(candidates) {
                Some((len, _, verdict)) => {
                    tokens.push(Token::from_verdict(&stream[pos..pos + len], verdict));
                    pos += len;
                }
                None => {
                    tokens.push(Token::stray(&stream[pos..pos + 1]));
                    pos += 1;
                }
            }
        }

        Segmentation {
            tokens,
            strategy: Strategy::Greedy,
            steps,
            evaluations,
        }
    }
}

/// Dynamic-programming segmentation with greedy fallback.
#[derive(Clone, Copy)]
pub struct OptimalSegmenter {
    validator: WordValidator,
    max_word_len: usize,
}

impl OptimalSegmenter {
    pub fn new(validator: WordValidator, max_word_len: usize) -> Self {
        Self {
            validator,
            max_word_len: max_word_len.clamp(1, MAX_WORD_LEN),
        }
    }

    /// Run only the optimal pass. `None` when the stream cannot be covered
    /// end to end by valid words.
    pub fn try_segment(&self, stream: &str) -> Option<Segmentation> {
        self.run(stream).0
    }

    fn run(&self, stream: &str) -> (Option<Segmentation>, usize) {
        let dict = self.validator.dictionary();
        let n = stream.len();
        let mut best: Vec<Option<i64>> = vec![None; n + 1];
        let mut parent = vec![0usize; n + 1];
        let mut chosen: Vec<Option<Verdict>> = vec![None; n + 1];
        let mut evaluations = 0;
        best[0] = Some(0);

        for i in 1..=n {
            for j in i.saturating_sub(self.max_word_len)..i {
                evaluations += 1;
                let Some(base) = best[j] else {
                    continue;
                };
                let word = &stream[j..i];
                let verdict = self.validator.verdict_normalized(word);
                if !verdict.is_valid() {
                    continue;
                }
                let total = base + optimal_score(dict, word, n);
                if best[i].is_none_or(|current| total > current) {
                    best[i] = Some(total);
                    parent[i] = j;
                    chosen[i] = Some(verdict);
                }
            }
        }

        if best[n].is_none() {
            return (None, evaluations);
        }

        let mut tokens = Vec::new();
        let mut i = n;
        while i > 0 {
            let j = parent[i];
            let Some(verdict) = chosen[i] else {
                return (None, evaluations);
            };
            tokens.push(Token::from_verdict(&stream[j..i], verdict));
            i = j;
        }
        tokens.reverse();

        let segmentation = Segmentation {
            tokens,
            strategy: Strategy::Optimal,
            steps: n,
            evaluations,
        };
        (Some(segmentation), evaluations)
    }
}

impl Segmenter for OptimalSegmenter {
    fn segment(&self, stream: &str) -> Segmentation {
        match self.run(stream) {
            (Some(segmentation), _) => segmentation,
            (None, evaluations) => {
                log::trace!("optimal pass could not cover {:?}, using greedy", stream);
                let mut fallback = GreedySegmenter::new(self.validator).segment(stream);
                fallback.evaluations += evaluations;
                fallback
            }
        }
    }
}

/// Build the segmenter for a strategy.
pub fn segmenter_for(
    strategy: Strategy,
    validator: WordValidator,
    max_word_len: usize,
) -> Box<dyn Segmenter + Send + Sync> {
    match strategy {
        Strategy::Optimal => Box::new(OptimalSegmenter::new(validator, max_word_len)),
        Strategy::Greedy => Box::new(GreedySegmenter::new(validator)),
    }
}

fn optimal_score(dict: &Dictionary, word: &str, stream_len: usize) -> i64 {
    let len = word.len() as i64;
    let frequency = dict.frequency(word);
    let mut score = match frequency {
        Some(f) => f as i64,
        None => (25 - 2 * len).max(1),
    };
    if frequency.is_some_and(|f| f > 60) {
        score += 20;
    }
    if (3..=8).contains(&len) {
        score += 15;
    }
    if (5..=7).contains(&len) {
        score += 10;
    }
    // tiny words inside long runs are usually mis-splits
    if len <= 2 && stream_len > 8 {
        score -= 15;
    }
    if len > 12 {
        score -= 10;
    }
    score
}

/// Highest-scoring candidate from a longest-first sequence. A later (shorter)
/// candidate must score strictly higher, so ties go to the longer word.
fn longest_best<I>(candidates: I) -> Option<(usize, i64, Verdict)>
where
    I: IntoIterator<Item = (usize, i64, Verdict)>,
{
    let mut best: Option<(usize, i64, Verdict)> = None;
    for candidate in candidates {
        if best.is_none_or(|(_, top, _)| candidate.1 > top) {
            best = Some(candidate);
        }
    }
    best
}

fn greedy_score(dict: &Dictionary, word: &str) -> i64 {
    let len = word.len() as i64;
    let mut score = match dict.frequency(word) {
        Some(f) => f as i64,
        None => (20 - len).max(1),
    };
    if (3..=8).contains(&len) {
        score += len * 3;
    }
    if (5..=7).contains(&len) {
        score += 10;
    }
    score
}
