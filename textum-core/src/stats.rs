//! Statistics and TextStats.

use core::fmt;

use rustc_hash::FxHashMap;
use textum_types::{Document, SentenceElement};

/// A snapshot of document statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of sentences.
    pub num_sentences: usize,
    /// Number of word elements.
    pub num_words: usize,
    /// Number of punctuation elements, spaces included.
    pub num_punctuation: usize,
    /// Letters across all words.
    pub num_letters: usize,
    /// Word count keyed by word length.
    pub length_histogram: FxHashMap<usize, usize>,
}

impl TextStats {
    /// Walks `document` once and gathers its statistics.
    pub fn collect(document: &Document) -> Self {
        let mut stats = Self {
            num_sentences: document.len(),
            ..Self::default()
        };

        for element in document.iter().flat_map(|sentence| sentence.iter()) {
            match element {
                SentenceElement::Word(word) => {
                    stats.num_words += 1;
                    stats.num_letters += word.len();
                    *stats.length_histogram.entry(word.len()).or_insert(0) += 1;
                }
                SentenceElement::Punctuation(_) => stats.num_punctuation += 1,
            }
        }

        stats
    }

    /// Number of words with exactly `length` letters.
    pub fn words_of_length(&self, length: usize) -> usize {
        self.length_histogram.get(&length).copied().unwrap_or(0)
    }

    /// The most frequent word length; ties go to the shorter length.
    pub fn most_common_length(&self) -> Option<usize> {
        self.length_histogram
            .iter()
            .max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then(lb.cmp(la)))
            .map(|(&length, _)| length)
    }

    /// Mean letters per word, or `None` when there are no words.
    pub fn mean_word_length(&self) -> Option<f32> {
        if self.num_words == 0 {
            return None;
        }
        Some(self.num_letters as f32 / self.num_words as f32)
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sentences, {} words, {} punctuation, {} letters",
            self.num_sentences, self.num_words, self.num_punctuation, self.num_letters
        )?;

        if let Some(mean) = self.mean_word_length() {
            write!(f, ", mean word length {:.2}", mean)?;
        }

        Ok(())
    }
}
