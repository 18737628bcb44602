//! Heuristic answers: either the dominant keyword of the input or one short
//! sentence taken from it.

mod keywords;
mod normalize;
mod sentence;
mod whitespace;

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

pub use keywords::{is_stop_word, tokenize, top_keyword};
pub use normalize::{effective_text, TEXT_FALLBACK_CHARS};
pub use sentence::{one_sentence, split_sentences, MAX_SENTENCE_WORDS};

/// Answer used when no keyword and no text is available.
pub const FALLBACK_ANSWER: &str = "OK";

/// Inputs with at most this many words are answered with a single keyword.
const SHORT_TEXT_WORDS: usize = 3;

static ONE_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(one\s*word|single\s*word)\b").expect("static regex compile")
});

/// Which rule produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    /// The question asked for a single word.
    OneWord,
    /// The text itself was only a few words long.
    ShortText,
    /// A sentence was selected and shortened.
    Sentence,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneWord => write!(f, "one-word"),
            Self::ShortText => write!(f, "short-text"),
            Self::Sentence => write!(f, "sentence"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub kind: AnswerKind,
    pub text: String,
}

pub fn asks_for_one_word(question: &str) -> bool {
    ONE_WORD_RE.is_match(question)
}

/// Answers `question` about `text`, where `text` is already the effective
/// text and `question` is already trimmed.
pub fn select_answer(text: &str, question: &str) -> Answer {
    if asks_for_one_word(question) {
        let keyword = top_keyword(text);
        return Answer {
            kind: AnswerKind::OneWord,
            text: non_empty_or(keyword, FALLBACK_ANSWER),
        };
    }

    if whitespace::words(text).count() <= SHORT_TEXT_WORDS {
        let keyword = top_keyword(text);
        let text = if !keyword.is_empty() {
            keyword
        } else {
            non_empty_or(text.to_string(), FALLBACK_ANSWER)
        };
        return Answer {
            kind: AnswerKind::ShortText,
            text,
        };
    }

    Answer {
        kind: AnswerKind::Sentence,
        text: one_sentence(text, question),
    }
}

/// Normalizes the raw request fields and answers them.
pub fn concise(selection: &str, title: &str, text: &str, question: &str) -> Answer {
    select_answer(effective_text(selection, title, text), whitespace::trim(question))
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
