//! Raw string to [`Document`] parsing.

use textum_types::{Document, TextError};
use tracing::debug;

use crate::analyzer::classify::is_blank_char;
use crate::analyzer::{Segmenter, TextNormalizer, Tokenizer};

/// Parser that runs normalization, tokenization and segmentation.
///
/// The parser holds no per-parse state: every call to [`TextParser::parse`]
/// builds its own normalization buffer and [`Segmenter`]. One instance can be
/// shared freely, including across threads.
///
/// # Examples
///
/// ```
/// use textum_core::TextParser;
///
/// let doc = TextParser::new()
///     .parse("First sentence. Second one! Is this the third?")
///     .unwrap();
///
/// assert_eq!(doc.len(), 3);
/// assert_eq!(doc.sentences()[1].to_string(), " Second one!");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextParser {
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
}

impl TextParser {
    /// Creates a parser.
    pub const fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Parses `raw` into a document.
    ///
    /// # Errors
    ///
    /// Returns `TextError::BlankInput` if `raw` is empty or consists only of
    /// whitespace. No-break spaces are content, so `"\u{A0}"` parses into a
    /// single punctuation element.
    pub fn parse(&self, raw: &str) -> Result<Document, TextError> {
        if raw.chars().all(is_blank_char) {
            return Err(TextError::BlankInput);
        }

        let normalized = self.normalizer.normalize(raw);

        let mut segmenter = Segmenter::new();
        self.tokenizer
            .tokenize(&normalized, |token| segmenter.push(token));
        let document = segmenter.finish();

        debug!(
            input_bytes = raw.len(),
            normalized_bytes = normalized.len(),
            sentences = document.len(),
            "parsed document"
        );

        Ok(document)
    }
}
