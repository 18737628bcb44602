use once_cell::sync::Lazy;
use regex::Regex;

use super::{keywords::tokenize, whitespace};

/// Longest answer, in whitespace-separated words.
pub const MAX_SENTENCE_WORDS: usize = 12;

/// Question words considered when ranking sentences.
const MAX_QUESTION_WORDS: usize = 5;

static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]").expect("static regex compile"));

/// Splits `text` into terminated sentences. Text without any terminated
/// sentence is returned whole.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let sentences: Vec<&str> = SENTENCE_RE.find_iter(text).map(|m| m.as_str()).collect();
    if sentences.is_empty() {
        vec![text]
    } else {
        sentences
    }
}

fn relevance(sentence: &str, question_words: &[String]) -> usize {
    let sentence = sentence.to_lowercase();
    question_words
        .iter()
        .filter(|word| sentence.contains(word.as_str()))
        .count()
}

/// Picks the sentence of `text` that best matches `question` (or the first
/// sentence) and shortens it to at most [`MAX_SENTENCE_WORDS`] words.
pub fn one_sentence(text: &str, question: &str) -> String {
    let sentences = split_sentences(text);
    let mut chosen = whitespace::trim(sentences[0]);

    if !question.is_empty() {
        let mut question_words = tokenize(question);
        question_words.truncate(MAX_QUESTION_WORDS);

        let mut scored: Vec<(&str, usize)> = sentences
            .iter()
            .map(|s| (whitespace::trim(s), relevance(s, &question_words)))
            .collect();
        // stable: equal scores keep document order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        if let Some(&(best, score)) = scored.first() {
            if score > 0 {
                chosen = best;
            }
        }
    }

    let mut short = whitespace::words(chosen)
        .take(MAX_SENTENCE_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    if !short.ends_with(&['.', '!', '?'][..]) {
        short.push('.');
    }
    short
}
