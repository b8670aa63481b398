//! Keyword extraction
//!
//! A keyword is a noun-like, non-stop-word term longer than two characters
//! that is not on the generic-resume-filler ignore list. Extraction expects
//! text that has already been normalized and lower-cased by the caller.

use crate::error::Result;
use crate::nlp::tagger::Tagger;
use std::collections::HashSet;

/// Terms that appear in nearly every posting and resume; matching on them
/// says nothing about fit.
const IGNORED_TERMS: &[&str] = &[
    "team",
    "work",
    "skills",
    "experience",
    "role",
    "time",
    "services",
    "solutions",
    "environment",
];

pub fn extract_keywords(tagger: &dyn Tagger, text: &str) -> Result<HashSet<String>> {
    let tokens = tagger.tag(text)?;

    let keywords = tokens
        .into_iter()
        .filter(|token| {
            token.category.is_noun_like()
                && !token.is_stop
                && token.text.chars().count() > 2
                && !IGNORED_TERMS.contains(&token.text.as_str())
        })
        .map(|token| token.text)
        .collect();

    Ok(keywords)
}
