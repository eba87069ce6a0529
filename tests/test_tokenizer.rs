use textscope::analysis::tokenizer::tokenize;

#[test]
fn test_tokenize_strips_punctuation() {
    assert_eq!(tokenize("Hello, world!!"), vec!["hello", "world"]);
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(tokenize(""), Vec::<String>::new());
    assert_eq!(tokenize("   \t\n  "), Vec::<String>::new());
}

#[test]
fn test_tokenize_drops_punctuation_only_fragments() {
    assert_eq!(tokenize("--- !!! ... foo"), vec!["foo"]);
}

#[test]
fn test_tokenize_lowercases() {
    assert_eq!(tokenize("RUST Is GREAT"), vec!["rust", "is", "great"]);
}

#[test]
fn test_tokenize_preserves_order_and_duplicates() {
    assert_eq!(tokenize("b B a b"), vec!["b", "b", "a", "b"]);
}

#[test]
fn test_tokenize_strips_interior_punctuation() {
    assert_eq!(tokenize("don't stop-me now"), vec!["dont", "stopme", "now"]);
}

#[test]
fn test_tokenize_keeps_digits() {
    assert_eq!(tokenize("route 66!"), vec!["route", "66"]);
}

#[test]
fn test_tokenize_handles_non_ascii_letters() {
    assert_eq!(tokenize("Café!"), vec!["café"]);
}
