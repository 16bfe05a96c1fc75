// 📝 Text Processor - Cleaning, tokenizing and simple text metrics
//
// Pipeline: clean_text → tokenize → remove_stop_words → word_frequency / top_keywords

use crate::error::AnalysisError;
use crate::statistics::round_to;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag regex"));
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(\\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+")
        .expect("url regex")
});
static SPECIAL_CHAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s']").expect("special char regex"));
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static SENTENCE_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence regex"));

pub const STOP_WORDS: [&str; 47] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "is", "was", "are", "were", "been",
    "be", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they",
];

// ============================================================================
// READABILITY REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub sentence_count: usize,
    pub word_count: usize,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,

    /// 0.4 * avg_sentence_length + 0.6 * avg_word_length (lower is easier)
    pub readability_score: f64,
}

// ============================================================================
// TEXT PROCESSOR
// ============================================================================

#[derive(Debug, Clone)]
pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
}

impl TextProcessor {
    pub fn new() -> Self {
        TextProcessor {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Strip markup and URLs, blank out punctuation, collapse whitespace
    pub fn clean_text(&self, text: &str) -> String {
        let text = TAG_REGEX.replace_all(text, "");
        let text = URL_REGEX.replace_all(&text, "");
        let text = SPECIAL_CHAR_REGEX.replace_all(&text, " ");
        let text = WHITESPACE_REGEX.replace_all(&text, " ");
        text.trim().to_string()
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn remove_stop_words(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| !self.is_stop_word(t))
            .cloned()
            .collect()
    }

    pub fn word_frequency(&self, tokens: &[String]) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Split on runs of terminal punctuation; empty fragments are dropped
    pub fn extract_sentences(&self, text: &str) -> Vec<String> {
        SENTENCE_END_REGEX
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn readability(&self, text: &str) -> Result<ReadabilityReport, AnalysisError> {
        let sentences = self.extract_sentences(text);
        let words = self.tokenize(text);

        if sentences.is_empty() || words.is_empty() {
            return Err(AnalysisError::InvalidText);
        }

        let avg_sentence_length = words.len() as f64 / sentences.len() as f64;
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let avg_word_length = total_chars as f64 / words.len() as f64;
        let score = avg_sentence_length * 0.4 + avg_word_length * 0.6;

        Ok(ReadabilityReport {
            sentence_count: sentences.len(),
            word_count: words.len(),
            avg_sentence_length: round_to(avg_sentence_length, 2),
            avg_word_length: round_to(avg_word_length, 2),
            readability_score: round_to(score, 2),
        })
    }

    /// Clean, tokenize and drop stop words in one go
    pub fn keywords(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean_text(text);
        let tokens = self.tokenize(&cleaned);
        self.remove_stop_words(&tokens)
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// The `n` most frequent tokens, count descending; ties keep first-seen order
pub fn top_keywords(tokens: &[String], n: usize) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        let count = counts.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.clone());
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|word| {
            let count = counts[word.as_str()];
            (word, count)
        })
        .collect();

    // Stable sort keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_clean_and_tokenize_markup() {
        let p = TextProcessor::new();
        let cleaned = p.clean_text("Hello, World! <b>test</b>");

        assert_eq!(cleaned, "Hello World test");
        assert_eq!(p.tokenize(&cleaned), strings(&["hello", "world", "test"]));
    }

    #[test]
    fn test_clean_removes_urls() {
        let p = TextProcessor::new();
        let cleaned = p.clean_text("Read more at https://example.com/a?b=1 today");
        assert_eq!(cleaned, "Read more at today");
    }

    #[test]
    fn test_clean_keeps_apostrophes() {
        let p = TextProcessor::new();
        assert_eq!(p.clean_text("It's   the   end...\n\tor is it?"), "It's the end or is it");
    }

    #[test]
    fn test_tokens_have_no_punctuation() {
        let p = TextProcessor::new();
        let tokens = p.tokenize(&p.clean_text("<p>Wait -- what?! (seriously) #1 @home</p>"));

        for token in &tokens {
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '\''), "{}", token);
        }
        assert_eq!(tokens, strings(&["wait", "what", "seriously", "1", "home"]));
    }

    #[test]
    fn test_remove_stop_words() {
        let p = TextProcessor::new();
        assert_eq!(
            p.remove_stop_words(&strings(&["the", "cat", "sat"])),
            strings(&["cat", "sat"])
        );
    }

    #[test]
    fn test_stop_word_set_is_closed() {
        let p = TextProcessor::new();
        assert!(p.is_stop_word("they"));
        assert!(!p.is_stop_word("The"));
        assert!(!p.is_stop_word("research"));
    }

    #[test]
    fn test_word_frequency() {
        let p = TextProcessor::new();
        let freq = p.word_frequency(&strings(&["a", "b", "a", "c", "a"]));

        assert_eq!(freq["a"], 3);
        assert_eq!(freq["b"], 1);
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn test_extract_sentences() {
        let p = TextProcessor::new();
        let sentences = p.extract_sentences("First one. Second!!  Third?... ");
        assert_eq!(sentences, strings(&["First one", "Second", "Third"]));
        assert!(p.extract_sentences("...!?").is_empty());
    }

    #[test]
    fn test_readability() {
        let p = TextProcessor::new();
        let report = p.readability("The cat sat. The dog ran far away.").unwrap();

        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.word_count, 8);
        assert_eq!(report.avg_sentence_length, 4.0);
        // the(3) cat(3) sat.(4) the(3) dog(3) ran(3) far(3) away.(5) = 27 / 8
        assert_eq!(report.avg_word_length, 3.38);
        assert_eq!(report.readability_score, round_to(4.0 * 0.4 + 3.375 * 0.6, 2));
    }

    #[test]
    fn test_readability_invalid_text() {
        let p = TextProcessor::new();
        assert_eq!(p.readability(""), Err(AnalysisError::InvalidText));
        assert_eq!(p.readability("?!."), Err(AnalysisError::InvalidText));
    }

    #[test]
    fn test_top_keywords_ties_keep_first_seen_order() {
        let tokens = strings(&["beta", "alpha", "beta", "gamma", "alpha", "delta"]);
        let top = top_keywords(&tokens, 3);

        assert_eq!(
            top,
            vec![
                ("beta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("gamma".to_string(), 1),
            ]
        );
        assert!(top_keywords(&tokens, 0).is_empty());
    }

    #[test]
    fn test_keywords_pipeline() {
        let p = TextProcessor::new();
        assert_eq!(
            p.keywords("The research has shown <i>significant</i> improvements."),
            strings(&["research", "shown", "significant", "improvements"])
        );
    }
}
