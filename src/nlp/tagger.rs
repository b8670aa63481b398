//! Grammatical tagging
//!
//! The pipeline only needs three facts per token: its surface text, whether
//! it is noun-like, and whether it is a stop word. The `Tagger` trait keeps
//! that boundary opaque; `LexiconTagger` is the built-in implementation,
//! combining a closed-class lexicon with suffix heuristics. Unknown
//! content words default to `Noun`, which is the right bias for resume and
//! job-posting vocabulary (tool names, frameworks, job titles).

use crate::error::Result;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosCategory {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Number,
    FunctionWord,
}

impl PosCategory {
    /// Noun-like categories qualify for keyword extraction.
    pub fn is_noun_like(&self) -> bool {
        matches!(self, PosCategory::Noun | PosCategory::ProperNoun)
    }
}

#[derive(Debug, Clone)]
pub struct TaggedToken {
    pub text: String,
    pub category: PosCategory,
    pub is_stop: bool,
}

pub trait Tagger {
    /// Tag a text string into an ordered token sequence.
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;
}

/// Common English stop words: function words plus high-frequency fillers.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "may", "me", "might", "more", "most", "must", "my", "myself", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "per", "same", "shall", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "upon", "us", "very", "was",
    "we", "were", "what", "when", "where", "whether", "which", "while", "who", "whom", "why",
    "will", "with", "within", "without", "would", "you", "your", "yours", "yourself",
];

/// "-ing" and "-ed" words that are nouns in hiring vocabulary, not verbs.
const NOUN_SUFFIX_EXCEPTIONS: &[&str] = &[
    "accounting",
    "advertising",
    "banking",
    "computing",
    "consulting",
    "engineering",
    "learning",
    "manufacturing",
    "marketing",
    "monitoring",
    "onboarding",
    "recruiting",
    "reporting",
    "staffing",
    "testing",
    "training",
];

pub struct LexiconTagger {
    stop_words: HashSet<&'static str>,
    noun_exceptions: HashSet<&'static str>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            noun_exceptions: NOUN_SUFFIX_EXCEPTIONS.iter().copied().collect(),
        }
    }

    fn categorize(&self, word: &str) -> PosCategory {
        let lower = word.to_lowercase();

        if self.stop_words.contains(lower.as_str()) {
            return PosCategory::FunctionWord;
        }
        if lower.chars().all(|c| c.is_numeric() || c == '.') {
            return PosCategory::Number;
        }
        if self.noun_exceptions.contains(lower.as_str()) {
            return PosCategory::Noun;
        }
        if lower.len() > 4 && lower.ends_with("ly") {
            return PosCategory::Adverb;
        }
        if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
            return PosCategory::Verb;
        }
        if lower.len() > 4
            && (lower.ends_with("ful")
                || lower.ends_with("ous")
                || lower.ends_with("less")
                || lower.ends_with("able")
                || lower.ends_with("ible"))
        {
            return PosCategory::Adjective;
        }
        // Callers lower-case before tagging, so this branch matters only
        // for raw-cased input.
        if word.chars().next().is_some_and(|c| c.is_uppercase()) {
            return PosCategory::ProperNoun;
        }

        PosCategory::Noun
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let tokens = text
            .unicode_words()
            .map(|word| {
                let category = self.categorize(word);
                let is_stop = self.stop_words.contains(word.to_lowercase().as_str());
                TaggedToken {
                    text: word.to_string(),
                    category,
                    is_stop,
                }
            })
            .collect();

        Ok(tokens)
    }
}
