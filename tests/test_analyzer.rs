use textscope::analysis::Analyzer;

#[test]
fn test_word_count_matches_token_count() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("Hello, world!!");

    assert_eq!(result.word_count, 2);
}

#[test]
fn test_empty_text() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("");

    assert_eq!(result.word_count, 0);
    assert_eq!(result.keyword_count, 0);
    assert!(result.keywords.is_empty());
    assert_eq!(result.sentiment_score, 0.0);
    assert_eq!(result.reading_time, 1);
}

#[test]
fn test_reading_time_boundaries() {
    let analyzer = Analyzer::new();

    let short = vec!["word"; 200].join(" ");
    assert_eq!(analyzer.analyze(&short).reading_time, 1);

    let long = vec!["word"; 201].join(" ");
    assert_eq!(analyzer.analyze(&long).reading_time, 2);
}

#[test]
fn test_keyword_tie_break_is_first_seen_order() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("apple apple banana banana cherry");

    assert_eq!(result.keywords, vec!["apple", "banana", "cherry"]);
    assert_eq!(result.keyword_count, 3);
}

#[test]
fn test_keyword_ranking_is_frequency_descending() {
    let analyzer = Analyzer::new();
    // "wolf" appears after "bird" but twice as often
    let result = analyzer.analyze("bird wolf wolf");

    assert_eq!(result.keywords, vec!["wolf", "bird"]);
}

#[test]
fn test_keywords_exclude_stop_words_and_short_tokens() {
    let analyzer = Analyzer::new();
    // "the" is a stop word, "cat" is only 3 characters
    let result = analyzer.analyze("the the the cat cat running");

    assert_eq!(result.keywords, vec!["running"]);
    assert_eq!(result.word_count, 6);
}

#[test]
fn test_keywords_capped_at_five() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("alpha bravo charlie delta echoes foxtrot");

    assert_eq!(result.keyword_count, 5);
    assert_eq!(
        result.keywords,
        vec!["alpha", "bravo", "charlie", "delta", "echoes"]
    );
}

#[test]
fn test_sentiment_is_mean_of_matched_weights() {
    let analyzer = Analyzer::new();
    // good=1.0, bad=-1.0 → (1.0 + 1.0 - 1.0) / 3
    let result = analyzer.analyze("good good bad");

    assert!((result.sentiment_score - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_sentiment_ignores_keyword_filter() {
    let analyzer = Analyzer::new();
    // "i" and "it" are stop words and short, "love" still scores 1.5
    let result = analyzer.analyze("i love it");

    assert_eq!(result.sentiment_score, 1.5);
    assert_eq!(result.word_count, 3);
}

#[test]
fn test_sentiment_zero_when_nothing_matches() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("zebra quantum violin");

    assert_eq!(result.sentiment_score, 0.0);
}

#[test]
fn test_analysis_is_idempotent() {
    let analyzer = Analyzer::new();
    let text = "I love this wonderful language, even on bad days";

    let first = analyzer.analyze(text);
    let second = analyzer.analyze(text);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_serialized_field_names_and_order() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("I love this");

    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"wordCount":3,"keywordCount":1,"sentimentScore":1.5,"readingTime":1,"keywords":["love"]}"#
    );
}

#[test]
fn test_serialized_empty_result() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("");

    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"wordCount":0,"keywordCount":0,"sentimentScore":0.0,"readingTime":1,"keywords":[]}"#
    );
}
