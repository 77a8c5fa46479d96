use rust_text_repair::{
    CleanerConfig, Strategy, TextCleaner, TextPattern, ValidatorConfig, clean_selected_text,
    detect_text_pattern, reconstruct,
};

#[test]
fn spaced_out_word_is_rebuilt() {
    let result = reconstruct("r a n s o m w a r e");
    assert_eq!(result.pattern, TextPattern::ExtremeSpacing);
    assert!(result.text.to_lowercase().contains("ransomware"));
    assert!(!result.text.contains(' '));
}

#[test]
fn spaced_out_sentence_is_rebuilt() {
    assert_eq!(
        clean_selected_text("T h e a t t a c k e r s a s k e d f o r a r a n s o m ."),
        "The attackers asked for a ransom."
    );
}

#[test]
fn glued_phrase_is_split_and_merged() {
    let result = reconstruct("denialofservice");
    assert_eq!(result.pattern, TextPattern::MissingSpaces);
    assert_eq!(result.text, "Denial-of-service");
}

#[test]
fn normal_text_is_unchanged() {
    let result = reconstruct("The quick brown fox.");
    assert_eq!(result.pattern, TextPattern::Normal);
    assert_eq!(result.text, "The quick brown fox.");
    assert_eq!(result.strategy, None);

    assert_eq!(
        clean_selected_text("Ransomware, which encrypts files, is common."),
        "Ransomware, which encrypts files, is common."
    );
}

#[test]
fn derived_and_compound_words_are_left_alone() {
    let result = reconstruct("Students need understanding of security.");
    assert_eq!(result.pattern, TextPattern::Normal);
    assert_eq!(result.text, "Students need understanding of security.");

    assert_eq!(
        clean_selected_text("Attackers exploited outdated software everywhere."),
        "Attackers exploited outdated software everywhere."
    );
}

#[test]
fn split_repair_also_runs_on_normal_text() {
    // "pass words" is indistinguishable from a split "passwords"
    let result = reconstruct("Use pass words wisely.");
    assert_eq!(result.pattern, TextPattern::Normal);
    assert_eq!(result.text, "Use passwords wisely.");
    assert_eq!(result.substitutions, 1);
}

#[test]
fn leading_punctuation_does_not_block_capitalization() {
    assert_eq!(
        clean_selected_text("(the attack is over)"),
        "(The attack is over)"
    );
}

#[test]
fn empty_input() {
    assert_eq!(clean_selected_text(""), "");
    assert_eq!(clean_selected_text("   \n\t"), "");
    assert_eq!(detect_text_pattern(""), TextPattern::Normal);
}

#[test]
fn punctuation_only_input() {
    assert_eq!(clean_selected_text(" ...  ,, !"), "... ,, !");
}

#[test]
fn unknown_letters_keep_their_compact_form() {
    assert_eq!(clean_selected_text("xzqwkxxzq"), "Xzqwkxxzq");

    // Without the length catch-all nothing validates and every letter is a
    // stray token; the joiner glues them back together.
    let cleaner = TextCleaner::new(CleanerConfig {
        validator: ValidatorConfig {
            fallback_min_len: None,
            ..ValidatorConfig::default()
        },
        ..CleanerConfig::default()
    })
    .unwrap();
    assert_eq!(cleaner.clean("x z q w k x x z q"), "Xzqwkxxzq");
}

#[test]
fn camel_case_glue_is_split() {
    assert_eq!(
        clean_selected_text("theRansomwaregroup asked for money"),
        "The Ransomware group asked for money"
    );
}

#[test]
fn cleaned_text_is_stable() {
    for input in [
        "denialofservice",
        "r a n s o m w a r e",
        "The quick brown fox.",
        "theattackgroup",
    ] {
        let once = clean_selected_text(input);
        assert_eq!(clean_selected_text(&once), once, "input {:?}", input);
    }
}

#[test]
fn greedy_and_optimal_agree_on_easy_input() {
    let greedy = TextCleaner::new(CleanerConfig::greedy()).unwrap();
    let optimal = TextCleaner::new(CleanerConfig::default()).unwrap();
    let input = "theattackgroup";
    assert_eq!(greedy.clean(input), optimal.clean(input));
    assert_eq!(greedy.reconstruct(input).strategy, Some(Strategy::Greedy));
}
