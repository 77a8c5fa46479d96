//! Repair rules for known mis-segmentations.
//!
//! Two ordered tables, applied merge rules first:
//!
//! - merge rules re-join tokens that belong to one unit ("denial of service"
//!   becomes "denial-of-service") or fix a boundary placed one letter off
//!   ("oft he" becomes "of the");
//! - split-repair rules glue a known word back together after it was cut
//!   into fragments ("ransom ware", "se rv ice").
//!
//! Split-repair rules only cover vocabulary anticipated in advance; they are
//! not a general fix.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Which table a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Merge,
    SplitRepair,
}

/// A single (pattern, replacement) pair.
#[derive(Debug, Clone)]
pub struct RepairRule {
    pub kind: RuleKind,
    pub pattern: Regex,
    pub replacement: &'static str,
}

/// Merge rules, in application order.
const MERGE_RULES: &[(&str, &str)] = &[
    // boundary one letter off around "the" / "be"
    (r"\boft\s+he\b", "of the"),
    (r"\bint\s+he\b", "in the"),
    (r"\bont\s+he\b", "on the"),
    (r"\batt\s+he\b", "at the"),
    (r"\bfort\s+he\b", "for the"),
    (r"\bandt\s+he\b", "and the"),
    (r"\btot\s+he\b", "to the"),
    (r"\btob\s+e\b", "to be"),
    // hyphenated compounds
    (r"\bbusiness\s+critical\b", "business-critical"),
    (r"\bmission\s+critical\b", "mission-critical"),
    (r"\bdistributed\s+denial\s+of\s+service\b", "distributed denial-of-service"),
    (r"\bdenial\s+of\s+service\b", "denial-of-service"),
    (r"\bman\s+in\s+the\s+middle\b", "man-in-the-middle"),
    (r"\bpeer\s+to\s+peer\b", "peer-to-peer"),
    (r"\bend\s+to\s+end\b", "end-to-end"),
    (r"\bzero\s+day\b", "zero-day"),
    (r"\breal\s+time\b", "real-time"),
    (r"\bthird\s+party\b", "third-party"),
    (r"\bmulti\s+factor\b", "multi-factor"),
    (r"\btwo\s+factor\b", "two-factor"),
];

/// Words reassembled when they show up in fragments.
const SPLIT_REPAIR_WORDS: &[&str] = &[
    "ransomware",
    "malware",
    "spyware",
    "adware",
    "service",
    "services",
    "business",
    "businesses",
    "phishing",
    "encryption",
    "encrypted",
    "authentication",
    "cybersecurity",
    "cybercrime",
    "vulnerability",
    "vulnerabilities",
    "perpetrator",
    "perpetrators",
    "organization",
    "organizations",
    "individual",
    "individuals",
    "malicious",
    "revenue",
    "critical",
    "technique",
    "techniques",
    "infrastructure",
    "cryptocurrency",
    "extortion",
    "keylogger",
    "botnet",
    "firewall",
    "password",
    "passwords",
    "credentials",
];

lazy_static! {
    /// Every rule in application order.
    pub static ref REPAIR_RULES: Vec<RepairRule> = {
        let mut rules: Vec<RepairRule> = MERGE_RULES
            .iter()
            .map(|&(pattern, replacement)| RepairRule {
                kind: RuleKind::Merge,
                pattern: Regex::new(&format!("(?i){}", pattern)).unwrap(),
                replacement,
            })
            .collect();

        // Longest first so "services" wins over "service"
        let mut words = SPLIT_REPAIR_WORDS.to_vec();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        rules.extend(words.into_iter().map(|word| RepairRule {
            kind: RuleKind::SplitRepair,
            pattern: Regex::new(&fragment_pattern(word)).unwrap(),
            replacement: word,
        }));
        rules
    };
}

/// Pattern matching `word` with optional whitespace between its letters.
fn fragment_pattern(word: &str) -> String {
    let letters: Vec<String> = word.chars().map(|c| c.to_string()).collect();
    format!(r"(?i)\b{}\b", letters.join(r"\s*"))
}

/// Apply every repair rule in order.
/// Returns the repaired text and the number of substitutions made.
pub fn apply_rules(text: &str) -> (String, u64) {
    apply_rule_set(text, REPAIR_RULES.iter())
}

/// Apply a subset of rules in the given order.
pub fn apply_rule_set<'a>(
    text: &str,
    rules: impl Iterator<Item = &'a RepairRule>,
) -> (String, u64) {
    let mut result = text.to_string();
    let mut total_subs: u64 = 0;

    for rule in rules {
        if !rule.pattern.is_match(&result) {
            continue;
        }
        result = rule
            .pattern
            .replace_all(&result, |caps: &Captures| {
                let matched = &caps[0];
                // an intact word needs no repair
                if !matched.chars().any(char::is_whitespace) {
                    return matched.to_string();
                }
                total_subs += 1;
                log::trace!("repair {:?} -> {:?}", matched, rule.replacement);
                match_leading_case(matched, rule.replacement)
            })
            .into_owned();
    }

    (result, total_subs)
}

/// Copy the capitalization of the first letter of `matched` onto `replacement`.
fn match_leading_case(matched: &str, replacement: &str) -> String {
    let leading_upper = matched.chars().next().is_some_and(|c| c.is_uppercase());
    if !leading_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_rules() {
        assert_eq!(
            apply_rules("a denial of service attack"),
            ("a denial-of-service attack".to_string(), 1)
        );
        assert_eq!(
            apply_rules("business critical systems"),
            ("business-critical systems".to_string(), 1)
        );
        assert_eq!(apply_rules("most oft he time").0, "most of the time");
    }

    #[test]
    fn test_distributed_variant_runs_first() {
        let (text, subs) = apply_rules("a distributed denial of service");
        assert_eq!(text, "a distributed denial-of-service");
        assert_eq!(subs, 1);
    }

    #[test]
    fn test_split_repair_rules() {
        assert_eq!(apply_rules("ransom ware").0, "ransomware");
        assert_eq!(apply_rules("the se rv ice is down").0, "the service is down");
        assert_eq!(apply_rules("many se rv ices").0, "many services");
        assert_eq!(apply_rules("en crypt ion keys").0, "encryption keys");
    }

    #[test]
    fn test_leading_case_is_kept() {
        assert_eq!(apply_rules("Ransom ware spreads").0, "Ransomware spreads");
        assert_eq!(apply_rules("Denial of service").0, "Denial-of-service");
    }

    #[test]
    fn test_split_repair_rewrites_real_phrases() {
        // A genuine "pass words" reads the same as a split "passwords".
        assert_eq!(
            apply_rules("Use pass words wisely."),
            ("Use passwords wisely.".to_string(), 1)
        );
    }

    #[test]
    fn test_intact_words_are_not_counted() {
        let (text, subs) = apply_rules("Ransomware and MALWARE");
        assert_eq!(text, "Ransomware and MALWARE");
        assert_eq!(subs, 0);
    }

    #[test]
    fn test_word_boundaries_respected() {
        // "is ervice" has no boundary before the "s"
        assert_eq!(apply_rules("this ervice").0, "this ervice");
    }

    #[test]
    fn test_rule_order() {
        let kinds: Vec<RuleKind> = REPAIR_RULES.iter().map(|r| r.kind).collect();
        let first_split = kinds
            .iter()
            .position(|k| *k == RuleKind::SplitRepair)
            .unwrap();
        assert!(kinds[..first_split].iter().all(|k| *k == RuleKind::Merge));
        assert!(kinds[first_split..].iter().all(|k| *k == RuleKind::SplitRepair));
        assert_eq!(REPAIR_RULES.len(), MERGE_RULES.len() + SPLIT_REPAIR_WORDS.len());
    }
}
