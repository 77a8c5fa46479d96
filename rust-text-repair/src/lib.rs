//! Reconstruction of text captured from PDF selections.
//!
//! PDF text layers often hand back selections with a space between every
//! character ("r a n s o m w a r e") or with no spaces at all
//! ("denialofservice"). [`clean_selected_text`] classifies the damage,
//! re-segments letter runs against a compiled-in dictionary, applies a table
//! of known repairs, and normalizes spacing and capitalization.
//!
//! ```
//! use rust_text_repair::clean_selected_text;
//!
//! assert_eq!(clean_selected_text("denialofservice"), "Denial-of-service");
//! assert_eq!(clean_selected_text("The quick brown fox."), "The quick brown fox.");
//! ```
//!
//! Every call is independent and the static tables are read-only, so the
//! functions here are safe to call from many threads at once.

pub mod cleaner;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod normalize;
pub mod pattern;
pub mod rules;
pub mod segmenter;
pub mod validator;

#[cfg(feature = "python")]
mod python;

pub use cleaner::{Reconstruction, TextCleaner, clean_batch, clean_selected_text, reconstruct};
pub use config::{CleanerConfig, Strategy, ValidatorConfig};
pub use error::{Error, Result};
pub use pattern::{TextPattern, detect_text_pattern};
pub use segmenter::{GreedySegmenter, OptimalSegmenter, Segmentation, Segmenter, Token, TokenKind};
pub use validator::{Verdict, WordValidator, is_valid_word};
