use proptest::prelude::*;
use rust_text_repair::config::MAX_WORD_LEN;
use rust_text_repair::segmenter::GREEDY_MAX_LEN;
use rust_text_repair::{
    GreedySegmenter, OptimalSegmenter, Segmenter, TextPattern, ValidatorConfig, WordValidator,
    clean_selected_text, detect_text_pattern,
};

const SENTENCE_WORDS: &[&str] = &[
    "attack", "data", "system", "network", "security", "money", "group", "victims", "files",
    "online", "service", "business", "common", "asked",
];

fn letters(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn validators() -> [WordValidator; 2] {
    [
        WordValidator::default(),
        WordValidator::new(ValidatorConfig {
            fallback_min_len: None,
            ..ValidatorConfig::default()
        }),
    ]
}

proptest! {
    #[test]
    fn segmenters_cover_every_letter(stream in "[a-z]{0,40}") {
        for validator in validators() {
            let optimal = OptimalSegmenter::new(validator, MAX_WORD_LEN).segment(&stream);
            let greedy = GreedySegmenter::new(validator).segment(&stream);
            for segmentation in [optimal, greedy] {
                let joined: String = segmentation.tokens.iter().map(|t| t.text.as_str()).collect();
                prop_assert_eq!(&joined, &stream);
                prop_assert_eq!(segmentation.join().replace(' ', ""), stream.clone());
            }
        }
    }

    #[test]
    fn segmenters_stay_within_bounds(stream in "[a-z]{0,60}") {
        let n = stream.len();
        for validator in validators() {
            let greedy = GreedySegmenter::new(validator).segment(&stream);
            prop_assert!(greedy.steps <= n);
            prop_assert!(greedy.evaluations <= n * GREEDY_MAX_LEN);

            if let Some(optimal) = OptimalSegmenter::new(validator, MAX_WORD_LEN).try_segment(&stream) {
                prop_assert!(optimal.evaluations <= n * MAX_WORD_LEN);
            }
        }
    }

    #[test]
    fn cleaning_preserves_letters(text in "[a-zA-Z ,.()-]{0,60}") {
        let cleaned = clean_selected_text(&text);
        prop_assert_eq!(letters(&cleaned), letters(&text));
    }

    #[test]
    fn cleaning_never_panics(text in "\\PC{0,80}") {
        let _ = detect_text_pattern(text.trim());
        let _ = clean_selected_text(&text);
    }

    #[test]
    fn clean_sentences_are_fixed_points(
        words in prop::collection::vec(prop::sample::select(SENTENCE_WORDS), 1..8)
    ) {
        let sentence = format!("{}.", words.join(" "));
        let once = clean_selected_text(&sentence);
        let twice = clean_selected_text(&once);
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(letters(&once), letters(&sentence));
    }
}

#[test]
fn every_input_gets_exactly_one_pattern() {
    for input in ["", " ", "r a n s o m w a r e", "denialofservice", "The quick brown fox."] {
        let pattern = detect_text_pattern(input);
        assert!(matches!(
            pattern,
            TextPattern::ExtremeSpacing
                | TextPattern::MissingSpaces
                | TextPattern::Mixed
                | TextPattern::Normal
        ));
    }
}
