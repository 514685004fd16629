//! Sentence-level category extraction.
//!
//! Splits a comment into sentences on UAX#29 boundaries and matches each
//! sentence against the per-category keyword registry. Matching is
//! case-insensitive and whole-word (a keyword never fires inside a longer
//! word); the stored output keeps the sentence in its original case and
//! original order. A sentence can satisfy several categories at once.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::categories::Category;

/// One compiled whole-word alternation per category, built once for the
/// process lifetime from the static keyword registry.
static MATCHERS: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .map(|&category| {
            let alternation = category
                .keywords()
                .iter()
                .map(|kw| regex::escape(kw))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)\b(?:{alternation})\b");
            let matcher = Regex::new(&pattern).expect("static keyword pattern");
            (category, matcher)
        })
        .collect()
});

/// Extracts category-relevant sentences from comment text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryExtractor;

impl CategoryExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Map each category to the space-joined original-case sentences that
    /// mention at least one of its keywords.
    ///
    /// Categories with zero matching sentences are absent from the output;
    /// empty text yields an empty map.
    pub fn extract(&self, text: &str) -> BTreeMap<Category, String> {
        let mut out = BTreeMap::new();
        if text.trim().is_empty() {
            return out;
        }

        let sentences: Vec<&str> = text
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        for (category, matcher) in MATCHERS.iter() {
            let matched: Vec<&str> = sentences
                .iter()
                .copied()
                .filter(|sentence| matcher.is_match(sentence))
                .collect();
            if !matched.is_empty() {
                out.insert(*category, matched.join(" "));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_do_not_match_inside_longer_words() {
        let extractor = CategoryExtractor::new();
        // "card" is a racing keyword; "cardigan" must not trigger it.
        let out = extractor.extract("She wore a cardigan.");
        assert!(out.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_but_output_keeps_case() {
        let extractor = CategoryExtractor::new();
        let out = extractor.extract("The FOOD was exceptional.");
        assert_eq!(
            out.get(&Category::Food).map(String::as_str),
            Some("The FOOD was exceptional.")
        );
    }

    #[test]
    fn any_single_keyword_triggers_inclusion() {
        let extractor = CategoryExtractor::new();
        let out = extractor.extract("What a delicious dinner.");
        assert!(out.contains_key(&Category::Food));
    }

    #[test]
    fn empty_text_yields_empty_map() {
        let extractor = CategoryExtractor::new();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   ").is_empty());
    }
}
