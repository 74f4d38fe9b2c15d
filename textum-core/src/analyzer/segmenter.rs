//! Sentence assembly.
//!
//! The [`Segmenter`] is the stateful half of the parser. It receives tokens in
//! order and keeps the completed sentences plus the pending elements of the
//! open sentence. A terminator flushes the pending elements into a
//! [`Sentence`], but only when there is something pending: two terminators in
//! a row never produce an empty sentence.
//!
//! A segmenter lives for a single parse and is consumed by
//! [`Segmenter::finish`].

use smallvec::SmallVec;
use textum_types::{Document, Punctuation, Sentence, SentenceElement, Word};
use tracing::trace;

use crate::analyzer::tokenizer::Token;

/// Inline capacity of the pending sentence buffer.
const PENDING_INLINE: usize = 32;

/// Builds a [`Document`] out of a token stream.
#[derive(Debug, Default)]
pub struct Segmenter {
    sentences: Vec<Sentence>,
    pending: SmallVec<[SentenceElement; PENDING_INLINE]>,
}

impl Segmenter {
    /// Creates a segmenter with no sentences and nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one token.
    pub fn push(&mut self, token: Token<'_>) {
        match token {
            Token::Word(text) => {
                self.pending.push(SentenceElement::Word(Word::new(text)));
            }
            Token::Delimiter(ch) => {
                self.pending
                    .push(SentenceElement::Punctuation(Punctuation::new(ch)));
                if token.is_terminator() {
                    self.flush_sentence();
                }
            }
        }
    }

    /// Number of sentences completed so far.
    pub fn completed(&self) -> usize {
        self.sentences.len()
    }

    /// Number of elements waiting in the open sentence.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Flushes the open sentence and returns the document.
    pub fn finish(mut self) -> Document {
        self.flush_sentence();
        Document::new(self.sentences)
    }

    fn flush_sentence(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let sentence = Sentence::new(self.pending.drain(..));
        trace!(
            index = self.sentences.len(),
            elements = sentence.len(),
            "sentence flushed"
        );
        self.sentences.push(sentence);
    }
}
