//! Core types for the Textum text model.
//!
//! This crate provides the immutable value types that the rest of the
//! workspace builds and walks. The hierarchy has four levels:
//!
//! ```text
//! Document ─┬─ Sentence ─┬─ Word ── Letter
//!           │            └─ Punctuation
//!           └─ Sentence ...
//! ```
//!
//! Every container stores its children in a shared immutable slice
//! (`Arc<[T]>`). Cloning a value is an atomic increment and never copies
//! children, and there is no API that can change a value once it is built.
//! Transformations produce new containers instead.
//!
//! Each level implements [`fmt::Display`] as its canonical reconstruction:
//! the in-order concatenation of its children's reconstructions.

#![warn(missing_docs)]

use core::fmt;
use std::sync::Arc;

use thiserror::Error;

/// A single character of a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Letter(char);

impl Letter {
    /// Creates a letter wrapping `ch`.
    #[inline(always)]
    pub const fn new(ch: char) -> Self {
        Self(ch)
    }

    /// Returns the wrapped character.
    #[inline(always)]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Letter {
    #[inline(always)]
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.0)
    }
}

/// A delimiter inside a sentence: whitespace or a punctuation symbol.
///
/// Anything that is not part of a word ends up here, including the single
/// space left between words after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Punctuation(char);

impl Punctuation {
    /// Creates a punctuation element for `symbol`.
    #[inline(always)]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the wrapped symbol.
    #[inline(always)]
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.0)
    }
}

/// An ordered run of [`Letter`]s.
///
/// The letter buffer is shared between clones, so handing the same word to
/// many positions (as the replacement pass does) never copies letters.
/// [`Word::ptr_eq`] tells whether two words are the same instance.
///
/// # Examples
///
/// ```
/// use textum_types::Word;
///
/// let word = Word::new("don't");
/// assert_eq!(word.len(), 5);
/// assert_eq!(word.to_string(), "don't");
/// assert!(Word::new("").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Arc<[Letter]>,
}

impl Word {
    /// Builds a word with one letter per `char` of `text`.
    ///
    /// The empty string yields a zero-length word.
    pub fn new(text: &str) -> Self {
        Self {
            letters: text.chars().map(Letter::new).collect(),
        }
    }

    /// Builds a word directly from letters.
    pub fn from_letters<I>(letters: I) -> Self
    where
        I: IntoIterator<Item = Letter>,
    {
        Self {
            letters: letters.into_iter().collect(),
        }
    }

    /// Returns the letters in order.
    #[inline(always)]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` for a word with no letters.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterates over the letters.
    pub fn iter(&self) -> core::slice::Iter<'_, Letter> {
        self.letters.iter()
    }

    /// Returns `true` if both words share the same letter buffer.
    #[inline(always)]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.letters, &b.letters)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|letter| fmt::Display::fmt(letter, f))
    }
}

/// One unit of a [`Sentence`]: either a word or a delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SentenceElement {
    /// A run of word characters.
    Word(Word),
    /// A single non-word character.
    Punctuation(Punctuation),
}

impl SentenceElement {
    /// Returns the word if this element is one.
    #[inline]
    pub fn as_word(&self) -> Option<&Word> {
        match self {
            SentenceElement::Word(word) => Some(word),
            SentenceElement::Punctuation(_) => None,
        }
    }

    /// Returns `true` for [`SentenceElement::Word`].
    #[inline]
    pub fn is_word(&self) -> bool {
        matches!(self, SentenceElement::Word(_))
    }

    /// Returns `true` for [`SentenceElement::Punctuation`].
    #[inline]
    pub fn is_punctuation(&self) -> bool {
        matches!(self, SentenceElement::Punctuation(_))
    }

    /// Returns `true` if this element reconstructs to the empty string.
    ///
    /// Only an empty word does; punctuation always holds one character.
    #[inline]
    pub fn is_blank(&self) -> bool {
        match self {
            SentenceElement::Word(word) => word.is_empty(),
            SentenceElement::Punctuation(_) => false,
        }
    }
}

impl From<Word> for SentenceElement {
    fn from(word: Word) -> Self {
        SentenceElement::Word(word)
    }
}

impl From<Punctuation> for SentenceElement {
    fn from(punctuation: Punctuation) -> Self {
        SentenceElement::Punctuation(punctuation)
    }
}

impl fmt::Display for SentenceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceElement::Word(word) => fmt::Display::fmt(word, f),
            SentenceElement::Punctuation(punctuation) => fmt::Display::fmt(punctuation, f),
        }
    }
}

/// An ordered sequence of [`SentenceElement`]s.
///
/// A sentence carries every delimiter it was built from, including the
/// leading space that follows the previous sentence's terminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentence {
    elements: Arc<[SentenceElement]>,
}

impl Sentence {
    /// Builds a sentence from elements in order. An empty sequence is allowed.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = SentenceElement>,
    {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Returns the elements in order.
    #[inline(always)]
    pub fn elements(&self) -> &[SentenceElement] {
        &self.elements
    }

    /// Number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` for a sentence with no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, SentenceElement> {
        self.elements.iter()
    }

    /// Iterates over the words only, skipping punctuation.
    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.elements.iter().filter_map(SentenceElement::as_word)
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.elements.iter().try_for_each(|element| fmt::Display::fmt(element, f))
    }
}

/// The top-level ordered collection of [`Sentence`]s.
///
/// # Examples
///
/// ```
/// use textum_types::{Document, Punctuation, Sentence, SentenceElement, Word};
///
/// let sentence = Sentence::new([
///     SentenceElement::from(Word::new("Hi")),
///     SentenceElement::from(Punctuation::new('!')),
/// ]);
/// let doc = Document::new([sentence.clone(), sentence]);
/// assert_eq!(doc.to_string(), "Hi!Hi!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    sentences: Arc<[Sentence]>,
}

impl Document {
    /// Builds a document from sentences in order. An empty sequence is allowed.
    pub fn new<I>(sentences: I) -> Self
    where
        I: IntoIterator<Item = Sentence>,
    {
        Self {
            sentences: sentences.into_iter().collect(),
        }
    }

    /// Returns the sentences in order.
    #[inline(always)]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Returns `true` for a document with no sentences.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterates over the sentences.
    pub fn iter(&self) -> core::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    /// Returns `true` if the reconstruction is the empty string.
    ///
    /// Walks the tree without formatting it.
    pub fn is_blank(&self) -> bool {
        self.sentences
            .iter()
            .all(|sentence| sentence.iter().all(SentenceElement::is_blank))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sentences.iter().try_for_each(|sentence| fmt::Display::fmt(sentence, f))
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Sentence;
    type IntoIter = core::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a SentenceElement;
    type IntoIter = core::slice::Iter<'a, SentenceElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Input validation failures.
///
/// Every variant is raised at an operation boundary before any work is done,
/// so a caller never observes a partially built value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
    /// Parse input was empty or held only whitespace.
    #[error("input text cannot be empty or blank")]
    BlankInput,
    /// The document handed to a transformation reconstructs to nothing.
    #[error("input document cannot be empty")]
    EmptyDocument,
    /// A word-length argument was not strictly positive.
    #[error("word length must be positive, got {length}")]
    InvalidLength {
        /// The rejected length.
        length: usize,
    },
}

impl TextError {
    /// Returns `true` for input validation failures, which is every variant.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            TextError::BlankInput | TextError::EmptyDocument | TextError::InvalidLength { .. }
        )
    }
}
