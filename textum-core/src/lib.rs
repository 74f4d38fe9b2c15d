//! Parsing and transformation engine for the Textum text model.
//!
//! A raw string goes through three stages before it becomes a
//! [`Document`]:
//!
//! ```text
//! raw ──normalize──▶ normalized ──tokenize──▶ tokens ──segment──▶ Document
//! ```
//!
//! The resulting document is immutable. Transformations such as
//! [`replace_words_of_length`] return a new document and leave their input
//! alone.
//!
//! ```
//! use textum_core::{parse, replace_words_of_length, Word};
//!
//! let doc = parse("Write    tests first, then \t build the features.").unwrap();
//! assert_eq!(doc.to_string(), "Write tests first, then build the features.");
//!
//! let out = replace_words_of_length(&doc, 4, &Word::new("$$$")).unwrap();
//! assert_eq!(out.to_string(), "Write tests first, $$$ build the features.");
//! ```

pub mod analyzer;
pub mod parser;
pub mod stats;
pub mod transform;

pub use parser::TextParser;
pub use stats::TextStats;
pub use transform::{count_words_of_length, replace_words_of_length, replace_words_where};

pub use textum_types::{Document, Letter, Punctuation, Sentence, SentenceElement, TextError, Word};

/// Parses `text` with a default [`TextParser`].
///
/// # Errors
///
/// Returns `TextError::BlankInput` if `text` is empty or whitespace only.
pub fn parse(text: &str) -> Result<Document, TextError> {
    TextParser::new().parse(text)
}
