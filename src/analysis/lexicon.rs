use std::collections::{HashMap, HashSet};

/// Words excluded from keyword candidacy.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "this", "that", "these", "those", "i",
    "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

/// Positive sentiment weights.
const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 1.0),
    ("great", 1.5),
    ("excellent", 2.0),
    ("amazing", 2.0),
    ("wonderful", 1.8),
    ("love", 1.5),
    ("like", 1.0),
    ("enjoy", 1.2),
    ("happy", 1.3),
    ("beautiful", 1.4),
    ("perfect", 2.0),
    ("fantastic", 1.8),
    ("brilliant", 1.7),
    ("outstanding", 1.6),
    ("cool", 1.2),
    ("positive", 1.5),
    ("awesome", 1.8),
    ("superb", 1.7),
    ("terrific", 1.6),
    ("delightful", 1.4),
    ("pleased", 1.3),
    ("satisfied", 1.2),
    ("thrilled", 1.6),
    ("excited", 1.4),
];

/// Negative sentiment weights.
const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -1.0),
    ("terrible", -2.0),
    ("awful", -2.0),
    ("hate", -1.5),
    ("dislike", -1.0),
    ("horrible", -2.0),
    ("worst", -2.0),
    ("disappointing", -1.5),
    ("frustrated", -1.2),
    ("angry", -1.3),
    ("sad", -1.1),
    ("upset", -1.2),
    ("annoying", -1.1),
    ("boring", -1.0),
];

/// Fixed word tables: the stop-word set plus the positive and negative
/// sentiment weights. Built once at startup, never mutated, safe to share
/// across connection handlers without synchronization.
#[derive(Debug)]
pub struct Lexicon {
    stop_words: HashSet<&'static str>,
    positive: HashMap<&'static str, f64>,
    negative: HashMap<&'static str, f64>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }

    /// Exact match against the stop-word set. Tokens arrive already
    /// lower-cased, so this is effectively case-insensitive against the
    /// source text.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Looks the token up in the positive table, then the negative one.
    /// The tables are disjoint, so at most one can match. `None` means
    /// the token is not a sentiment word and does not count toward the
    /// sentiment denominator.
    pub fn sentiment_weight(&self, token: &str) -> Option<f64> {
        self.positive
            .get(token)
            .or_else(|| self.negative.get(token))
            .copied()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
