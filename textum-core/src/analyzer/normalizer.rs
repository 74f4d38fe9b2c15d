use memchr::memchr2_iter;

use crate::analyzer::classify::{is_edge_trimmable, is_horizontal_ws};

/// Whitespace normalizer that runs ahead of the tokenizer.
///
/// Performs the following operations:
/// - Removes leading and trailing code points up to U+0020 (spaces, tabs,
///   line breaks and other ASCII controls)
/// - Collapses every run of spaces and horizontal tabs into a single space
///
/// Newlines inside the text are kept as they are, so a `\n` later becomes its
/// own punctuation element. Non-ASCII spaces such as U+00A0 are never trimmed.
///
/// # Performance
///
/// Space and tab are ASCII, so their positions are found with `memchr2` over
/// the raw bytes and the text between them is copied in whole slices.
///
/// # Examples
///
/// ```
/// use textum_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("  This   is \t a test.  "), "This is a test.");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer {
    _private: (),
}

impl TextNormalizer {
    /// Creates a normalizer.
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        let trimmed = input.trim_matches(is_edge_trimmable);
        out.reserve(trimmed.len());

        let bytes = trimmed.as_bytes();
        debug_assert!(
            bytes.first().is_none_or(|&b| !is_horizontal_ws(b)),
            "normalizer: trim left leading whitespace"
        );

        let mut start = 0usize;
        for i in memchr2_iter(b' ', b'\t', bytes) {
            if start < i {
                // Both ends sit next to an ASCII byte, so the slice is on a
                // char boundary.
                out.push_str(&trimmed[start..i]);
                out.push(' ');
            }
            start = i + 1;
        }

        out.push_str(&trimmed[start..]);
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
