//! Text analysis pipeline.
//!
//! This module provides the parsing stages, in order:
//! - **Classify**: Decides whether a char extends a word, is a delimiter, or ends a sentence
//! - **Normalizer**: Trims the input and collapses horizontal whitespace
//! - **Tokenizer**: Splits normalized text into word and delimiter tokens
//! - **Segmenter**: Groups tokens into sentences and builds the document

pub mod classify;
pub mod normalizer;
pub mod segmenter;
pub mod tokenizer;

pub use classify::CharClass;
pub use normalizer::TextNormalizer;
pub use segmenter::Segmenter;
pub use tokenizer::{Token, Tokenizer};
