use regex::Regex;
use std::collections::HashMap;

/// Counts how often each token occurs in a document body.
///
/// Tokens are lowercase alphabetic runs longer than two characters.
pub fn token_frequencies(text: &str) -> HashMap<String, u32> {
    let re = Regex::new(r"\b[a-zA-Z]+\b").unwrap();

    let mut frequencies = HashMap::new();
    for found in re.find_iter(&text.to_lowercase()) {
        let word = found.as_str();
        if word.len() > 2 {
            *frequencies.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    frequencies
}

/// Splits a query into ordered tokens, keeping duplicates.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}
