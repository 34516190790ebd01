//! Streaming Tokenizer Module
//!
//! Turns raw document text into the ordered token sequence the index and the
//! scorer work with. The rules are a fixed contract, not an NLP subsystem:
//!
//! 1. Split on the single ASCII space (0x20). Tabs and newlines are *not*
//!    separators and stay inside the word, where step 2 drops them.
//! 2. Keep only letters (general category `L*`) and decimal digits (`Nd`),
//!    concatenating what remains of the word. Other numerics (`²`, `Ⅻ`) and
//!    combining marks are dropped.
//! 3. Drop words that end up empty.
//! 4. Lowercase every surviving token.
//!
//! ```text
//! "Ana  are mere!"  ->  ["ana", "are", "mere"]
//! "O(N) list’s"     ->  ["on", "lists"]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bm25plus_core::analyzer::tokenizer::{tokenize, Tokenizer};
//!
//! assert_eq!(tokenize("Hello, World"), vec!["hello", "world"]);
//!
//! // Streaming form: tokens are handed to a callback as they are produced.
//! let mut count = 0;
//! Tokenizer::new().tokenize("one two three", |_token| count += 1);
//! assert_eq!(count, 3);
//! ```

use memchr::memchr_iter;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Stateless document tokenizer.
///
/// Identical input always yields identical output; tokens are emitted in
/// the order their words appear in the input.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text`, emitting each normalized token in input order.
    #[inline]
    pub fn tokenize<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(String),
    {
        let bytes = text.as_bytes();
        let mut start = 0usize;

        // 0x20 is never a UTF-8 continuation byte, so every split point
        // is a char boundary.
        for i in memchr_iter(b' ', bytes) {
            if start < i {
                if let Some(token) = normalize_word(&text[start..i]) {
                    emit(token);
                }
            }
            start = i + 1;
        }

        if start < bytes.len() {
            if let Some(token) = normalize_word(&text[start..]) {
                emit(token);
            }
        }
    }

    /// Tokenizes `text` and appends the tokens to `out`.
    pub fn tokenize_into(&self, text: &str, out: &mut Vec<String>) {
        self.tokenize(text, |token| out.push(token));
    }
}

/// Tokenizes `text` into an owned token sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    Tokenizer::new().tokenize_into(text, &mut tokens);
    tokens
}

/// Normalizes a query term for index lookup.
///
/// Only lowercases: query terms are looked up as given, so a term carrying
/// punctuation (`"no-such-token"`) never matches a stored token.
#[inline]
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

/// Strips a word to its letters and digits and lowercases it.
#[inline]
fn normalize_word(word: &str) -> Option<String> {
    if word.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Some(word.to_ascii_lowercase());
    }

    let kept: String = word.chars().filter(|&c| is_letter_or_digit(c)).collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.to_lowercase())
    }
}

/// Letters of any case or kind, plus decimal digits.
#[inline]
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}
