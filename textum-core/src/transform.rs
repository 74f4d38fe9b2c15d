//! Structure-preserving transformations over a [`Document`].
//!
//! Every pass walks the whole tree and builds new sentences and a new
//! document. Elements that are not replaced are carried over as cheap clones
//! that share storage with the input, which is left untouched.

use textum_types::{Document, Sentence, SentenceElement, TextError, Word};
use tracing::debug;

/// Replaces every word of `length` letters with `replacement`.
///
/// All replaced positions receive clones of the same `replacement` instance.
/// Punctuation and words of other lengths are kept.
///
/// # Errors
///
/// Checked in order before any work is done:
/// - `TextError::EmptyDocument` if `document` reconstructs to the empty string.
/// - `TextError::InvalidLength` if `length` is zero.
///
/// # Example
///
/// ```
/// use textum_core::{parse, replace_words_of_length, Word};
///
/// let doc = parse("brown fox jumps over the lazy dog.").unwrap();
/// let out = replace_words_of_length(&doc, 5, &Word::new("#####")).unwrap();
/// assert_eq!(out.to_string(), "##### fox ##### over the lazy dog.");
/// ```
pub fn replace_words_of_length(
    document: &Document,
    length: usize,
    replacement: &Word,
) -> Result<Document, TextError> {
    if document.is_blank() {
        return Err(TextError::EmptyDocument);
    }
    if length == 0 {
        return Err(TextError::InvalidLength { length });
    }

    let mut replaced = 0usize;
    let result = replace_words_where(
        document,
        |word| {
            let hit = word.len() == length;
            replaced += usize::from(hit);
            hit
        },
        replacement,
    );

    debug!(
        length,
        replaced,
        replacement = %replacement,
        "replaced words by length"
    );

    Ok(result)
}

/// Replaces every word for which `predicate` returns `true`.
///
/// The predicate sees words in document order. Sentence count and each
/// sentence's element count are preserved.
pub fn replace_words_where<P>(document: &Document, mut predicate: P, replacement: &Word) -> Document
where
    P: FnMut(&Word) -> bool,
{
    let mut sentences = Vec::with_capacity(document.len());
    for sentence in document {
        sentences.push(replace_in_sentence(sentence, &mut predicate, replacement));
    }
    Document::new(sentences)
}

/// Counts the words of exactly `length` letters.
pub fn count_words_of_length(document: &Document, length: usize) -> usize {
    document
        .iter()
        .flat_map(Sentence::words)
        .filter(|word| word.len() == length)
        .count()
}

fn replace_in_sentence<P>(sentence: &Sentence, predicate: &mut P, replacement: &Word) -> Sentence
where
    P: FnMut(&Word) -> bool,
{
    let mut elements = Vec::with_capacity(sentence.len());
    for element in sentence {
        elements.push(replace_element(element, predicate, replacement));
    }
    Sentence::new(elements)
}

#[inline]
fn replace_element<P>(element: &SentenceElement, predicate: &mut P, replacement: &Word) -> SentenceElement
where
    P: FnMut(&Word) -> bool,
{
    match element {
        SentenceElement::Word(word) if predicate(word) => SentenceElement::Word(replacement.clone()),
        other => other.clone(),
    }
}
