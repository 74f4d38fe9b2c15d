//! Streaming Tokenizer Module
//!
//! This module splits normalized text into word and delimiter tokens. It's the
//! second stage of the parsing pipeline, taking the output of the
//! [`TextNormalizer`](super::TextNormalizer) and handing tokens to the
//! [`Segmenter`](super::Segmenter), which assembles sentences.
//!
//! ## What It Does
//!
//! Given normalized input like `"Hi, you."`, it emits, in order:
//!
//! ```text
//! Word("Hi")
//! Delimiter(',')
//! Delimiter(' ')
//! Word("you")
//! Delimiter('.')
//! ```
//!
//! A word is a maximal run of word characters (letters, digits, `'` and `’`).
//! Every other character is emitted on its own as a delimiter, including each
//! space.
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Word tokens are slices of the input, not new strings
//! - **Streaming**: Tokens go to a callback, no intermediate collection
//! - **Single Pass**: Each char is classified once
//!
//! ## The Input Contract
//!
//! The tokenizer expects **normalized** input:
//! - No leading or trailing whitespace
//! - No run of two or more spaces/tabs
//!
//! Violations panic in debug builds with a message naming the broken rule.

use crate::analyzer::classify::{is_horizontal_ws, CharClass};

/// A lexical unit borrowed from the normalized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'n> {
    /// A non-empty run of word characters.
    Word(&'n str),
    /// A single non-word character.
    Delimiter(char),
}

impl Token<'_> {
    /// Returns `true` for a delimiter that closes a sentence.
    #[inline(always)]
    pub fn is_terminator(self) -> bool {
        match self {
            Token::Word(_) => false,
            Token::Delimiter(ch) => CharClass::of(ch) == CharClass::Terminator,
        }
    }
}

/// Streaming tokenizer - splits normalized text into [`Token`]s.
///
/// The tokenizer keeps no state between calls. The only per-call state is the
/// start offset of the open word, held in a local.
///
/// ## Example
///
/// ```
/// use textum_core::analyzer::tokenizer::{Token, Tokenizer};
///
/// let mut tokens = Vec::new();
/// Tokenizer::new().tokenize("it’s 9.", |t| tokens.push(t));
///
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Word("it’s"),
///         Token::Delimiter(' '),
///         Token::Word("9"),
///         Token::Delimiter('.'),
///     ]
/// );
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer {
    _private: (),
}

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Tokenizes normalized input, emitting tokens left to right.
    ///
    /// A word still open when the input ends is flushed before returning.
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(Token<'n>),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| !is_horizontal_ws(b)),
            "tokenizer: leading whitespace: normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| !is_horizontal_ws(b)),
            "tokenizer: trailing whitespace: normalizer contract violated"
        );

        debug_assert!(
            !bytes
                .windows(2)
                .any(|w| is_horizontal_ws(w[0]) && is_horizontal_ws(w[1])),
            "tokenizer: consecutive spaces: normalizer contract violated"
        );

        let mut word_start: Option<usize> = None;

        for (i, ch) in normalized.char_indices() {
            if CharClass::of(ch) == CharClass::Word {
                word_start.get_or_insert(i);
                continue;
            }

            if let Some(start) = word_start.take() {
                emit(Token::Word(&normalized[start..i]));
            }
            emit(Token::Delimiter(ch));
        }

        if let Some(start) = word_start {
            emit(Token::Word(&normalized[start..]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Token<'_>> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |t| out.push(t));
        out
    }

    #[test]
    fn single_word() {
        assert_eq!(collect("hello"), vec![Token::Word("hello")]);
    }

    #[test]
    fn words_and_spaces() {
        assert_eq!(
            collect("Hello world."),
            vec![
                Token::Word("Hello"),
                Token::Delimiter(' '),
                Token::Word("world"),
                Token::Delimiter('.'),
            ]
        );
    }

    #[test]
    fn comma_then_space_are_two_delimiters() {
        assert_eq!(
            collect("Hello, world."),
            vec![
                Token::Word("Hello"),
                Token::Delimiter(','),
                Token::Delimiter(' '),
                Token::Word("world"),
                Token::Delimiter('.'),
            ]
        );
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn punctuation_only() {
        assert_eq!(
            collect("?!"),
            vec![Token::Delimiter('?'), Token::Delimiter('!')]
        );
    }

    #[test]
    fn contractions_stay_whole() {
        assert_eq!(
            collect("don't won’t"),
            vec![
                Token::Word("don't"),
                Token::Delimiter(' '),
                Token::Word("won’t"),
            ]
        );
    }

    #[test]
    fn digits_are_word_characters() {
        assert_eq!(
            collect("3.14"),
            vec![Token::Word("3"), Token::Delimiter('.'), Token::Word("14")]
        );
    }

    #[test]
    fn hyphen_splits_words() {
        assert_eq!(
            collect("five-letter"),
            vec![
                Token::Word("five"),
                Token::Delimiter('-'),
                Token::Word("letter"),
            ]
        );
    }

    #[test]
    fn newline_is_a_delimiter() {
        assert_eq!(
            collect("a\nb"),
            vec![Token::Word("a"), Token::Delimiter('\n'), Token::Word("b")]
        );
    }

    #[test]
    fn multibyte_word_slices() {
        assert_eq!(
            collect("naïve café"),
            vec![
                Token::Word("naïve"),
                Token::Delimiter(' '),
                Token::Word("café"),
            ]
        );
    }

    #[test]
    fn terminator_detection() {
        assert!(Token::Delimiter('.').is_terminator());
        assert!(Token::Delimiter('?').is_terminator());
        assert!(!Token::Delimiter(',').is_terminator());
        assert!(!Token::Word("end").is_terminator());
    }

    #[test]
    fn words_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |t| {
            if let Token::Word(text) = t {
                let ptr = text.as_ptr() as usize;
                assert!(ptr >= base && ptr < end);
            }
        });
    }

    #[test]
    fn reconstruction_matches_input() {
        let input = "Is it 5 o'clock? Yes, it is!";
        let rebuilt: String = collect(input)
            .into_iter()
            .map(|t| match t {
                Token::Word(w) => w.to_string(),
                Token::Delimiter(ch) => ch.to_string(),
            })
            .collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();

        let mut n = 0usize;
        t.tokenize("hello world", |_| n += 1);
        assert_eq!(n, 3);

        n = 0;
        t.tokenize("one two three", |_| n += 1);
        assert_eq!(n, 5);
    }
}
