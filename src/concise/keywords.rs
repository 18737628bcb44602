use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// A letter followed by one or more letters, hyphens or apostrophes.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z][a-zA-Z\-']+").expect("static regex compile"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    "the a an and or of to in on for with is are was were be as by at from that this it its into over under than then but so if"
        .split_whitespace()
        .collect()
});

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Lowercases `text` and returns its word tokens in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns the most frequent non stop word of `text`, capitalized.
///
/// Ties go to the word seen first. Returns an empty string when `text` has
/// no countable words.
pub fn top_keyword(text: &str) -> String {
    let words = tokenize(text);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for word in words.iter().map(String::as_str).filter(|w| !is_stop_word(w)) {
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for word in first_seen {
        let count = counts[word];
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((word, count));
        }
    }

    best.map(|(word, _)| capitalize(word)).unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_most_frequent_word() {
        assert_eq!(top_keyword("Rust is fast. Rust is safe. Go is fast too."), "Rust");
    }

    #[test]
    fn ties_resolve_to_first_occurrence() {
        assert_eq!(top_keyword("zebra apple apple zebra mango"), "Zebra");
        assert_eq!(top_keyword("apple zebra zebra apple"), "Apple");
    }

    #[test]
    fn stop_words_are_ignored() {
        assert_eq!(top_keyword("the the the cat"), "Cat");
        assert_eq!(top_keyword("the and of if so"), "");
    }

    #[test]
    fn single_letters_and_punctuation_are_not_words() {
        assert_eq!(top_keyword("a I x -- '' 42"), "");
        assert_eq!(tokenize("I x ok"), vec!["ok"]);
    }

    #[test]
    fn hyphens_and_apostrophes_stay_inside_words() {
        assert_eq!(tokenize("State-of-the-art isn't NEW"), vec!["state-of-the-art", "isn't", "new"]);
        assert_eq!(top_keyword("don't don't stop"), "Don't");
    }

    #[test]
    fn digits_split_words() {
        assert_eq!(tokenize("abc1def x9yz"), vec!["abc", "def", "yz"]);
    }

    #[test]
    fn empty_text_has_no_keyword() {
        assert_eq!(top_keyword(""), "");
        assert_eq!(top_keyword("   "), "");
    }

    #[test]
    fn keyword_is_lowercased_then_capitalized() {
        assert_eq!(top_keyword("PARIS"), "Paris");
    }
}
