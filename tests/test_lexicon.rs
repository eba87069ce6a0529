use textscope::analysis::Lexicon;

#[test]
fn test_stop_word_hits() {
    let lexicon = Lexicon::new();

    assert!(lexicon.is_stop_word("the"));
    assert!(lexicon.is_stop_word("is"));
    assert!(lexicon.is_stop_word("they"));
    assert!(lexicon.is_stop_word("can"));
}

#[test]
fn test_stop_word_misses() {
    let lexicon = Lexicon::new();

    assert!(!lexicon.is_stop_word("rust"));
    assert!(!lexicon.is_stop_word("analysis"));
}

#[test]
fn test_stop_word_match_is_case_sensitive() {
    // Tokens are lower-cased before lookup; the set itself never matches
    // upper-case input.
    let lexicon = Lexicon::new();

    assert!(!lexicon.is_stop_word("The"));
}

#[test]
fn test_positive_weights() {
    let lexicon = Lexicon::new();

    assert_eq!(lexicon.sentiment_weight("good"), Some(1.0));
    assert_eq!(lexicon.sentiment_weight("excellent"), Some(2.0));
    assert_eq!(lexicon.sentiment_weight("love"), Some(1.5));
    assert_eq!(lexicon.sentiment_weight("excited"), Some(1.4));
}

#[test]
fn test_negative_weights() {
    let lexicon = Lexicon::new();

    assert_eq!(lexicon.sentiment_weight("bad"), Some(-1.0));
    assert_eq!(lexicon.sentiment_weight("terrible"), Some(-2.0));
    assert_eq!(lexicon.sentiment_weight("boring"), Some(-1.0));
}

#[test]
fn test_non_sentiment_word_is_none() {
    let lexicon = Lexicon::new();

    assert_eq!(lexicon.sentiment_weight("table"), None);
    assert_eq!(lexicon.sentiment_weight("the"), None);
    assert_eq!(lexicon.sentiment_weight(""), None);
}

#[test]
fn test_sentiment_lookup_is_case_sensitive() {
    let lexicon = Lexicon::new();

    assert_eq!(lexicon.sentiment_weight("Good"), None);
}
