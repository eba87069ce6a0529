/// Splits raw text into normalized word tokens.
///
/// Fragments are whitespace-delimited. Every non-alphanumeric character is
/// stripped from a fragment and the remainder lower-cased; fragments that
/// strip down to nothing are dropped. Document order and duplicates are
/// preserved. Any input is accepted, including the empty string.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|fragment| {
            let token: String = fragment
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();

            if token.is_empty() { None } else { Some(token) }
        })
        .collect()
}
