use serde::Serialize;
use std::collections::HashMap;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::tokenizer::tokenize;

/// Reading rate behind the reading-time estimate, in words per minute.
const READING_WPM: usize = 200;

/// Maximum number of keywords reported per analysis.
const MAX_KEYWORDS: usize = 5;

/// Keyword candidates must be longer than this many characters.
const MIN_KEYWORD_LEN: usize = 3;

/// The outcome of analyzing one block of text.
///
/// Field names and their order are the wire contract; serde emits struct
/// fields in declaration order, so this serializes to exactly
/// `{"wordCount":..,"keywordCount":..,"sentimentScore":..,"readingTime":..,"keywords":[..]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub word_count: usize,
    pub keyword_count: usize,
    pub sentiment_score: f64,
    pub reading_time: usize,
    pub keywords: Vec<String>,
}

/// Composes the tokenizer and lexicon into the full analysis pass.
pub struct Analyzer {
    lexicon: Lexicon,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
        }
    }

    /// Analyzes any input text; there is no failure mode. Empty text
    /// yields zero words, no keywords, a 0.0 sentiment score and a
    /// one-minute reading time.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokens = tokenize(text);
        let keywords = self.extract_keywords(&tokens);

        AnalysisResult {
            word_count: tokens.len(),
            keyword_count: keywords.len(),
            sentiment_score: self.sentiment_score(&tokens),
            reading_time: reading_time(tokens.len()),
            keywords,
        }
    }

    /// Top keywords by occurrence count. Stop words and tokens of three or
    /// fewer characters never qualify. Ties keep first-seen order: the
    /// sort is stable over the order in which distinct tokens first
    /// appeared in the text.
    fn extract_keywords(&self, tokens: &[String]) -> Vec<String> {
        let mut freq: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for token in tokens {
            if token.chars().count() <= MIN_KEYWORD_LEN || self.lexicon.is_stop_word(token) {
                continue;
            }

            let count = freq.entry(token).or_insert(0);
            if *count == 0 {
                first_seen.push(token);
            }
            *count += 1;
        }

        let mut ranked = first_seen;
        ranked.sort_by_key(|token| std::cmp::Reverse(freq.get(token).copied().unwrap_or(0)));
        ranked.truncate(MAX_KEYWORDS);

        ranked.into_iter().map(str::to_string).collect()
    }

    /// Mean weight over every token that matched either sentiment table,
    /// or 0.0 when nothing matched. Independent of the keyword filter:
    /// stop words and short tokens still count here.
    fn sentiment_score(&self, tokens: &[String]) -> f64 {
        let mut total = 0.0;
        let mut matched = 0usize;

        for token in tokens {
            if let Some(weight) = self.lexicon.sentiment_weight(token) {
                total += weight;
                matched += 1;
            }
        }

        if matched == 0 {
            0.0
        } else {
            total / matched as f64
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole minutes at 200 words per minute, never less than one.
fn reading_time(word_count: usize) -> usize {
    word_count.div_ceil(READING_WPM).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time(0), 1);
        assert_eq!(reading_time(200), 1);
        assert_eq!(reading_time(201), 2);
    }
}
