//! Compiled-in English dictionary for text reconstruction.
//!
//! Words are grouped into weighted tiers; a word's score is its tier weight
//! plus a length term, so long dictionary words outrank the same letters
//! split into shorter pieces. Scores are ranking weights only.
//!
//! The prefix and suffix tables extend coverage to inflected and derived
//! forms that are not listed explicitly.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Global dictionary instance (built once, reused)
static DICTIONARY: OnceLock<Dictionary> = OnceLock::new();

/// Tier weight for the two single-letter words.
const SINGLE_LETTER_WEIGHT: u32 = 10;
/// Tier weight for general vocabulary.
const COMMON_WEIGHT: u32 = 30;
/// Tier weight for course-material vocabulary (security, business, computing).
const DOMAIN_WEIGHT: u32 = 40;

const SINGLE_LETTER_WORDS: &[&str] = &["a", "i"];

const COMMON_WORDS: &[&str] = &[
    // Function words
    "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with", "or", "but", "not", "no",
    "so", "if", "do", "go", "up", "us", "we", "me", "my", "our", "your", "you", "she", "her",
    "his", "him", "they", "them", "their", "there", "this", "these", "those", "then", "than",
    "what", "when", "where", "who", "whom", "how", "why", "which", "while", "can", "could",
    "should", "would", "may", "might", "must", "shall", "been", "being", "have", "had", "does",
    "did", "were", "all", "any", "each", "every", "both", "few", "more", "most", "other",
    "others", "some", "such", "only", "same", "too", "very", "just", "also", "now", "into",
    "onto", "upon", "about", "above", "after", "again", "against", "along", "among", "around",
    "because", "before", "behind", "below", "between", "beyond", "during", "except", "inside",
    "outside", "over", "under", "until", "through", "throughout", "toward", "towards", "within",
    "without", "across", "although", "though", "however", "therefore", "thus", "whether",
    "either", "neither", "another", "many", "much", "several", "often", "always", "never",
    "sometimes", "usually", "already", "still", "even", "well", "here", "once", "twice",
    "first", "second", "third", "last", "next", "new", "old", "one", "two", "three", "four",
    "five", "six", "ten", "hundred", "thousand", "million", "billion",
    // Verbs
    "get", "got", "make", "made", "makes", "take", "taken", "takes", "come", "came", "know",
    "knew", "known", "think", "thought", "see", "saw", "seen", "look", "use", "used", "uses",
    "using", "find", "found", "give", "given", "tell", "ask", "asked", "work", "works", "seem",
    "feel", "try", "leave", "call", "called", "keep", "let", "begin", "help", "show", "shows",
    "hear", "play", "run", "move", "live", "believe", "hold", "bring", "happen", "write",
    "provide", "provides", "provided", "sit", "stand", "lose", "lost", "pay", "paid", "meet",
    "include", "includes", "including", "continue", "set", "learn", "change", "lead", "led",
    "understand", "watch", "follow", "stop", "create", "created", "speak", "read", "allow",
    "allows", "allowed", "add", "spend", "grow", "open", "walk", "win", "offer", "remember",
    "love", "consider", "appear", "buy", "wait", "serve", "die", "send", "sent", "expect",
    "build", "stay", "fall", "cut", "reach", "kill", "remain", "suggest", "raise", "pass",
    "sell", "require", "requires", "required", "report", "decide", "pull", "return", "describe",
    "describes", "explain", "define", "defined", "refer", "refers", "known", "become", "becomes",
    "occur", "occurs", "contain", "contains", "involve", "involves", "identify", "prevent",
    "protect", "protects", "detect", "respond", "manage", "reduce", "increase", "affect",
    "affects", "generate", "generating", "earn", "earning", "focused", "recovered", "disrupt",
    "ensure", "gain", "gained", "demand", "demands", "receive", "apply", "applied", "store",
    "stored", "transfer", "request", "access", "accessed", "launch", "launched", "target",
    "targeted", "targets", "steal", "stolen", "threaten", "restore", "restored", "release",
    // Nouns
    "way", "time", "year", "years", "day", "days", "week", "month", "life", "man", "woman",
    "child", "world", "school", "state", "family", "student", "students", "group", "groups",
    "country", "problem", "hand", "part", "place", "case", "company", "companies", "system",
    "systems", "program", "programs", "question", "right", "government", "number", "night",
    "point", "home", "water", "room", "mother", "area", "money", "story", "fact", "lot",
    "study", "book", "eye", "job", "word", "words", "issue", "side", "kind", "head", "house",
    "friend", "father", "power", "hour", "game", "line", "end", "member", "members", "law",
    "car", "city", "community", "name", "president", "team", "minute", "idea", "body",
    "information", "back", "parent", "face", "level", "office", "door", "health", "person",
    "people", "art", "war", "history", "party", "result", "results", "morning", "reason",
    "research", "food", "moment", "air", "teacher", "force", "education", "foot", "age",
    "policy", "policies", "everything", "something", "nothing", "anything", "someone",
    "anyone", "everyone", "process", "processes", "music", "human", "market", "markets",
    "sense", "nation", "plan", "plans", "college", "interest", "death", "course", "courses",
    "experience", "effect", "effects", "class", "control", "care", "field", "role", "rate",
    "heart", "leader", "light", "voice", "mind", "price", "value", "values", "cost", "costs",
    "example", "examples", "form", "forms", "type", "types", "term", "terms", "method",
    "methods", "technique", "techniques", "practice", "practices", "purpose", "order",
    "chapter", "section", "page", "pages", "figure", "table", "list", "key", "keys", "user",
    "users", "customer", "customers", "employee", "employees", "staff", "owner", "owners",
    "risk", "risks", "loss", "losses", "damage", "presence", "online", "internet", "website",
    "websites", "email", "emails", "message", "messages", "file", "files", "record", "records",
    "account", "accounts", "victim", "victims", "payment", "payments", "demand", "threat",
    "threats", "crime", "crimes", "criminal", "criminals", "incident", "incidents", "response",
    "recovery", "backup", "backups", "storage", "device", "devices", "computer", "computers",
    "machine", "machines", "server", "servers", "client", "clients", "application",
    "applications", "software", "hardware", "code", "link", "links", "site", "sites",
    "source", "sources", "target", "traffic", "request", "requests", "resource", "resources",
    "organization", "organizations", "individual", "individuals", "service", "services",
    "business", "businesses", "revenue", "data", "attack", "attacks", "attacker", "attackers",
    // Adjectives and adverbs
    "good", "great", "little", "own", "big", "high", "different", "small", "large", "long",
    "young", "important", "public", "private", "bad", "able", "early", "late", "hard", "major",
    "better", "best", "economic", "strong", "possible", "whole", "free", "military", "common",
    "typical", "critical", "local", "social", "national", "real", "full", "special", "easy",
    "clear", "recent", "certain", "personal", "open", "simple", "current", "general", "main",
    "major", "key", "legal", "illegal", "financial", "digital", "physical", "virtual",
    "secure", "safe", "unknown", "specific", "potential", "serious", "significant", "severe",
    "actually", "probably", "finally", "perhaps", "maybe", "enough", "quickly", "directly",
    "usually", "typically", "especially", "particularly", "quick", "brown", "fox", "lazy",
    "dog", "jumps",
];

const DOMAIN_WORDS: &[&str] = &[
    "ransom", "ransomware", "malware", "spyware", "adware", "virus", "viruses", "worm",
    "worms", "trojan", "trojans", "botnet", "botnets", "rootkit", "keylogger", "phishing",
    "spear", "whaling", "vishing", "smishing", "spam", "denial", "distributed", "cyber",
    "cybercrime", "cybersecurity", "security", "secure", "encrypted", "encryption", "encrypt",
    "decrypt", "decryption", "decrypted", "key", "password", "passwords", "credential",
    "credentials", "authentication", "authorization", "firewall", "firewalls", "network",
    "networks", "vulnerability", "vulnerabilities", "exploit", "exploits", "patch", "patches",
    "breach", "breaches", "intrusion", "detection", "prevention", "malicious", "perpetrator",
    "perpetrators", "hacker", "hackers", "extortion", "cryptocurrency", "bitcoin", "wallet",
    "infrastructure", "availability", "integrity", "confidentiality", "privacy", "identity",
    "theft", "fraud", "social", "engineering", "insider", "threat", "actor", "actors",
    "payload", "vector", "vectors", "zero", "exposure", "compliance", "regulation",
    "regulations", "governance", "audit", "monitoring", "incident", "forensics", "disruption",
    "operations", "operational", "continuity", "resilience", "mitigation", "countermeasure",
    "countermeasures", "stakeholder", "stakeholders", "strategy", "strategies", "management",
    "manager", "managers", "enterprise", "industry", "industries", "sector", "sectors",
    "profit", "profits", "income", "finance", "capital", "investment", "asset", "assets",
    "liability", "reputation", "brand", "definition", "definitions", "concept", "concepts",
    "glossary", "lecture", "lectures", "module", "modules", "assignment", "exam", "exams",
    "university", "protocol", "protocols", "database", "databases", "cloud", "platform",
    "platforms", "mobile", "wireless", "router", "routers", "packet", "packets", "domain",
    "address", "addresses", "flood", "flooding", "overload", "overwhelm", "bandwidth",
];

/// Prefixes recognized when validating derived forms.
const PREFIXES: &[&str] = &[
    "un", "re", "in", "im", "dis", "en", "non", "pre", "anti", "de", "over", "under", "mis",
    "sub", "inter", "cyber", "micro", "multi", "semi", "trans", "super", "auto", "counter",
    "co", "post", "out",
];

/// Suffixes recognized when validating inflected forms.
const SUFFIXES: &[&str] = &[
    "s", "es", "ed", "ing", "ly", "er", "ers", "est", "ion", "ions", "tion", "tions", "ment",
    "ments", "ness", "able", "ible", "al", "ity", "ive", "ful", "less", "ize", "ized", "ise",
    "ised", "ous", "ship", "ware",
];

/// Frequency-scored word table plus affix sets.
pub struct Dictionary {
    words: HashMap<&'static str, u32>,
    prefixes: HashSet<&'static str>,
    suffixes: HashSet<&'static str>,
}

impl Dictionary {
    /// Build the compiled-in dictionary.
    pub fn build() -> Self {
        let mut words = HashMap::new();
        insert_tier(&mut words, SINGLE_LETTER_WORDS, SINGLE_LETTER_WEIGHT);
        insert_tier(&mut words, COMMON_WORDS, COMMON_WEIGHT);
        insert_tier(&mut words, DOMAIN_WORDS, DOMAIN_WEIGHT);

        Self {
            words,
            prefixes: PREFIXES.iter().copied().collect(),
            suffixes: SUFFIXES.iter().copied().collect(),
        }
    }

    /// Score of a lowercase word, if listed.
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.prefixes.iter().copied()
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.suffixes.iter().copied()
    }

    /// Every listed word, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get stats about the loaded tables
    pub fn stats(&self) -> String {
        format!(
            "Dictionary loaded: words={}, prefixes={}, suffixes={}",
            self.words.len(),
            self.prefixes.len(),
            self.suffixes.len()
        )
    }
}

/// A word listed in more than one tier keeps its highest score.
fn insert_tier(words: &mut HashMap<&'static str, u32>, tier: &[&'static str], weight: u32) {
    for &word in tier {
        let score = word_score(word, weight);
        let entry = words.entry(word).or_insert(score);
        if *entry < score {
            *entry = score;
        }
    }
}

fn word_score(word: &str, weight: u32) -> u32 {
    let len = word.len() as u32;
    weight + 2 * len * len
}

/// Shared dictionary, built on first use.
pub fn dictionary() -> &'static Dictionary {
    DICTIONARY.get_or_init(|| {
        let dict = Dictionary::build();
        log::debug!("{}", dict.stats());
        dict
    })
}

/// Check if a lowercase word is listed in the dictionary
pub fn is_known_word(word: &str) -> bool {
    dictionary().contains(word)
}

/// Dictionary score for a lowercase word, if listed
pub fn word_frequency(word: &str) -> Option<u32> {
    dictionary().frequency(word)
}
