//! Real-time query detection
//!
//! Decides whether a user utterance needs live external information before
//! the completion provider can answer it. Two rule kinds: phrasing patterns
//! ("what is the current X in Y") and a keyword fallback ("weather", "stock").
//! Any hit wins. No negation handling: "what was the weather yesterday" still
//! matches on the "weather" keyword, an accepted heuristic imprecision.

use std::sync::LazyLock;

use regex::Regex;

/// A single classification rule
#[derive(Debug)]
pub enum Rule {
    /// Case-insensitive phrasing pattern matched anywhere in the utterance
    Pattern(Regex),
    /// Case-insensitive substring
    Keyword(&'static str),
}

impl Rule {
    /// Check whether the rule fires for an utterance
    #[must_use]
    pub fn matches(&self, utterance: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(utterance),
            Self::Keyword(kw) => utterance.to_lowercase().contains(kw),
        }
    }
}

/// Phrasing patterns recognizing requests for current-world state
const PATTERNS: &[&str] = &[
    r"(?i)(?:what|how) is (?:the )?(?:current|today'?s?|latest|present|right now) (.*?)(?: in | at | for | on )(.*?)(?:\?|$)",
    r"(?i)(?:what|how) (?:is|are) (?:the )?(?:current|today'?s?|latest|present|right now) (.*?)(?:\?|$)",
    r"(?i)what (?:is|are) (?:the )?(?:weather|temperature|forecast) (?:like )?(?:in|at|for) (.*?)(?:\?|$)",
    r"(?i)what time is it(?: in| at) (.*?)(?:\?|$)",
    r"(?i)what is happening(?: in| at) (.*?)(?:\?|$)",
    r"(?i)latest news(?: about| on| in| regarding) (.*?)(?:\?|$)",
];

/// Keyword fallback: any occurrence flags the utterance
const KEYWORDS: &[&str] = &[
    "weather",
    "temperature",
    "current",
    "today",
    "now",
    "latest",
    "news",
    "happening",
    "price",
    "stock",
    "score",
    "forecast",
];

/// Ordered rule table: patterns first, then keywords
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|p| Rule::Pattern(Regex::new(p).expect("valid regex")))
        .chain(KEYWORDS.iter().copied().map(Rule::Keyword))
        .collect()
});

/// The full rule table, for rule-by-rule inspection
#[must_use]
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Determine whether an utterance requires live external information
#[must_use]
pub fn needs_live_data(utterance: &str) -> bool {
    rules().iter().any(|rule| rule.matches(utterance))
}
