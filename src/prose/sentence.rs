use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

use crate::error::{InvalidInputError, Result};
use super::grammar::Grammar;
use super::letter::Letter;
use super::sentence_item::SentenceItem;

/// Ordered words and punctuation closed by a terminator
///
/// Trimming may yield an empty fragment (no items, no letters). Fragments only
/// exist as intermediates of text-level slicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    items: Vec<SentenceItem>,
    letter_count: usize,
}

impl Sentence {
    /// Parse one sentence span, e.g. `"Hello, world. "`
    pub fn parse(span: &str) -> Result<Self> {
        let grammar = Grammar::shared();
        if !grammar.is_single_sentence(span) {
            return Err(InvalidInputError::Malformed { offset: 0 });
        }

        let items = grammar
            .items(span)
            .into_iter()
            .map(SentenceItem::parse)
            .collect::<Result<Vec<_>>>()?;
        let letter_count = items.iter().map(SentenceItem::letter_count).sum();

        if letter_count == 0 {
            return Err(InvalidInputError::NoWords {
                sentence: span.trim_end().to_string(),
            });
        }

        debug!("Parsed sentence with {} items, {} letters", items.len(), letter_count);
        Ok(Self::from_parts(items, letter_count))
    }

    fn from_parts(items: Vec<SentenceItem>, letter_count: usize) -> Self {
        Self { items, letter_count }
    }

    fn empty() -> Self {
        Self::from_parts(Vec::new(), 0)
    }

    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    pub fn items(&self) -> &[SentenceItem] {
        &self.items
    }

    /// True only for fragments produced by trimming away every letter
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Letters of every word in order; punctuation contributes none
    pub fn letters(&self) -> Vec<Letter> {
        let mut letters = Vec::with_capacity(self.letter_count);
        for item in &self.items {
            if let SentenceItem::Word(word) = item {
                letters.extend_from_slice(word.letters());
            }
        }
        letters
    }

    /// Drop the first `n` letters
    ///
    /// Items before the word holding letter `n` are dropped. When `n` lands
    /// exactly on a word boundary the punctuation before the next word goes
    /// too, so the result starts with a word.
    pub fn trim_start_by_letter(&self, n: usize) -> Sentence {
        assert!(
            n <= self.letter_count,
            "cannot trim {n} letters from a sentence of {}",
            self.letter_count
        );

        let mut remaining = n;
        for (i, item) in self.items.iter().enumerate() {
            let SentenceItem::Word(word) = item else {
                continue;
            };

            match remaining.cmp(&word.len()) {
                Ordering::Less => {
                    let mut items = Vec::with_capacity(self.items.len() - i);
                    items.push(SentenceItem::Word(word.trim_start(remaining)));
                    items.extend_from_slice(&self.items[i + 1..]);
                    return Self::from_parts(items, self.letter_count - n);
                }
                Ordering::Equal => {
                    let next_word = self.items[i + 1..]
                        .iter()
                        .position(SentenceItem::is_word)
                        .map_or(self.items.len(), |offset| i + 1 + offset);
                    let items = self.items[next_word..].to_vec();
                    return Self::from_parts(items, self.letter_count - n);
                }
                Ordering::Greater => remaining -= word.len(),
            }
        }

        Self::empty()
    }

    /// Keep the first `n` letters
    ///
    /// Everything after the word holding letter `n - 1` is dropped, including
    /// the closing punctuation, and that word loses its trailing space.
    pub fn trim_end_by_letter(&self, n: usize) -> Sentence {
        assert!(
            n <= self.letter_count,
            "cannot keep {n} letters of a sentence of {}",
            self.letter_count
        );

        let mut count = self.letter_count;
        for (i, item) in self.items.iter().enumerate().rev() {
            let SentenceItem::Word(word) = item else {
                continue;
            };

            let before = count - word.len();
            if before < n {
                let mut items = Vec::with_capacity(i + 1);
                items.extend_from_slice(&self.items[..i]);
                items.push(SentenceItem::Word(word.trim_end(n - before)));
                return Self::from_parts(items, n);
            }
            count = before;
        }

        Self::empty()
    }

    /// Rendered character count; diagnostics only
    pub fn str_len(&self) -> usize {
        self.items.iter().map(SentenceItem::formatted_len).sum()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
