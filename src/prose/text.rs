use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{InvalidInputError, Result};
use super::grammar::Grammar;
use super::letter::Letter;
use super::normalization::normalize_whitespace;
use super::sentence::Sentence;

/// Root of the prose model: an immutable run of sentences
///
/// Letter index `k` is the `k`-th letter met walking sentences, then words,
/// left to right. Punctuation and spaces have no index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    sentences: Vec<Sentence>,
    letter_count: usize,
}

impl Text {
    /// Normalize whitespace, validate against the sentence grammar and build the tree
    pub fn parse(source: &str) -> Result<Self> {
        if source.is_empty() {
            return Err(InvalidInputError::EmptySource);
        }

        let normalized = normalize_whitespace(source);
        let sentences = Grammar::shared()
            .sentence_spans(&normalized)?
            .into_iter()
            .map(Sentence::parse)
            .collect::<Result<Vec<_>>>()?;
        let letter_count = sentences.iter().map(Sentence::letter_count).sum();

        debug!("Parsed text with {} sentences, {} letters", sentences.len(), letter_count);
        Ok(Self::from_parts(sentences, letter_count))
    }

    fn from_parts(sentences: Vec<Sentence>, letter_count: usize) -> Self {
        Self { sentences, letter_count }
    }

    fn empty() -> Self {
        Self::from_parts(Vec::new(), 0)
    }

    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// True for slices that cover no letters
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The letter-index space: every letter in document order
    pub fn letters(&self) -> Vec<Letter> {
        let mut letters = Vec::with_capacity(self.letter_count);
        for sentence in &self.sentences {
            letters.extend(sentence.letters());
        }
        letters
    }

    /// Drop the first `n` letters; `n == 0` returns an identical copy
    pub fn trim_start_by_letter(&self, n: usize) -> Text {
        assert!(
            n <= self.letter_count,
            "cannot trim {n} letters from a text of {}",
            self.letter_count
        );
        if n == 0 {
            return self.clone();
        }

        let mut remaining = n;
        for (i, sentence) in self.sentences.iter().enumerate() {
            match remaining.cmp(&sentence.letter_count()) {
                Ordering::Less => {
                    let mut sentences = Vec::with_capacity(self.sentences.len() - i);
                    sentences.push(sentence.trim_start_by_letter(remaining));
                    sentences.extend_from_slice(&self.sentences[i + 1..]);
                    return Self::from_parts(sentences, self.letter_count - n);
                }
                Ordering::Equal => {
                    let mut sentences = self.sentences[i + 1..].to_vec();
                    // the new first sentence must open on a word
                    if let Some(first) = sentences.first_mut() {
                        *first = first.trim_start_by_letter(0);
                    }
                    return Self::from_parts(sentences, self.letter_count - n);
                }
                Ordering::Greater => remaining -= sentence.letter_count(),
            }
        }

        Self::empty()
    }

    /// Keep the first `n` letters; `n == letter_count` returns an identical copy
    pub fn trim_end_by_letter(&self, n: usize) -> Text {
        assert!(
            n <= self.letter_count,
            "cannot keep {n} letters of a text of {}",
            self.letter_count
        );
        if n == self.letter_count {
            return self.clone();
        }

        let mut count = self.letter_count;
        for (i, sentence) in self.sentences.iter().enumerate().rev() {
            let before = count - sentence.letter_count();
            if before < n {
                let mut sentences = Vec::with_capacity(i + 1);
                sentences.extend_from_slice(&self.sentences[..i]);
                sentences.push(sentence.trim_end_by_letter(n - before));
                return Self::from_parts(sentences, n);
            }
            count = before;
        }

        Self::empty()
    }

    /// Formatted slice covering letters `[from, to)`
    ///
    /// End trimming never shifts indices counted from the start, so `from`
    /// stays valid on the end-trimmed text.
    ///
    /// Edges render by position: a slice starting at letter 0 keeps any
    /// leading punctuation of the text, and one ending at `letter_count`
    /// keeps the closing punctuation. Interior edges drop the punctuation
    /// between the cut and the nearest kept word.
    pub fn substring(&self, from: usize, to: usize) -> Text {
        assert!(
            from <= to && to <= self.letter_count,
            "invalid letter range {from}..{to} for a text of {}",
            self.letter_count
        );
        self.trim_end_by_letter(to).trim_start_by_letter(from)
    }

    /// Rendered character count; diagnostics only
    pub fn str_len(&self) -> usize {
        self.sentences.iter().map(Sentence::str_len).sum()
    }
}

impl FromStr for Text {
    type Err = InvalidInputError;

    fn from_str(source: &str) -> Result<Self> {
        Self::parse(source)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sentence in &self.sentences {
            write!(f, "{sentence}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spelled(text: &Text) -> String {
        text.letters().iter().map(|l| l.as_char()).collect()
    }

    #[test]
    fn test_parse_normalizes_and_renders() {
        let text = Text::parse("Hello   world.\n\nHow are\tyou?").unwrap();
        assert_eq!(text.to_string(), "Hello world. How are you?");
        assert_eq!(text.sentences().len(), 2);
        assert_eq!(text.letter_count(), 19);
        assert_eq!(text.str_len(), text.to_string().len());
    }

    #[test]
    fn test_parse_via_from_str() {
        let text: Text = "Wow! Such fun.".parse().unwrap();
        assert_eq!(text.letter_count(), 10);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Text::parse(""), Err(InvalidInputError::EmptySource));
        assert_eq!(Text::parse("   "), Err(InvalidInputError::Malformed { offset: 0 }));
        assert_eq!(
            Text::parse("Fine. Broken"),
            Err(InvalidInputError::Malformed { offset: 6 })
        );
        assert_eq!(
            Text::parse("Fine. ...!"),
            Err(InvalidInputError::NoWords { sentence: "...!".to_string() })
        );
    }

    #[test]
    fn test_letter_count_is_sum_of_sentences() {
        let text = Text::parse("One two. Three! Four five six?").unwrap();
        let sum: usize = text.sentences().iter().map(Sentence::letter_count).sum();
        assert_eq!(text.letter_count(), sum);
        assert_eq!(text.letters().len(), sum);
        assert_eq!(spelled(&text), "OnetwoThreeFourfivesix");
    }

    #[test]
    fn test_identity_trims() {
        let text = Text::parse("\"Quoted,\" she said. Done!").unwrap();
        assert_eq!(text.trim_start_by_letter(0).to_string(), text.to_string());
        assert_eq!(
            text.trim_end_by_letter(text.letter_count()).to_string(),
            text.to_string()
        );
        assert_eq!(text.substring(0, text.letter_count()), text);
    }

    #[test]
    fn test_trim_start_across_sentences() {
        let text = Text::parse("Ab cd. Ef gh.").unwrap();
        assert_eq!(text.trim_start_by_letter(5).to_string(), "f gh.");
        assert_eq!(text.trim_start_by_letter(4).to_string(), "Ef gh.");
        assert_eq!(text.trim_start_by_letter(8).to_string(), "");
    }

    #[test]
    fn test_trim_start_on_sentence_boundary_drops_leading_punctuation() {
        let text = Text::parse("Ab cd. 'Ef' gh.").unwrap();
        assert_eq!(text.trim_start_by_letter(4).to_string(), "Ef' gh.");
    }

    #[test]
    fn test_trim_end_across_sentences() {
        let text = Text::parse("Ab cd. Ef gh.").unwrap();
        assert_eq!(text.trim_end_by_letter(5).to_string(), "Ab cd. E");
        assert_eq!(text.trim_end_by_letter(4).to_string(), "Ab cd");
        assert_eq!(text.trim_end_by_letter(0).to_string(), "");
    }

    #[test]
    fn test_substring_extracts_formatted_span() {
        let text = Text::parse("He said: Madam, in Eden, I'm Adam. Then left.").unwrap();
        let slice = text.substring(6, 23);
        assert_eq!(slice.to_string(), "Madam, in Eden, I'm Adam");
        assert_eq!(slice.letter_count(), 17);
    }

    #[test]
    fn test_substring_letters_match_letter_slice() {
        let text = Text::parse("The quick, brown fox. Jumps over; the lazy dog!").unwrap();
        let letters = text.letters();
        for from in 0..=text.letter_count() {
            for to in from..=text.letter_count() {
                let slice = text.substring(from, to);
                assert_eq!(slice.letter_count(), to - from);
                assert_eq!(slice.letters(), letters[from..to].to_vec());
            }
        }
    }

    #[test]
    fn test_substring_edges_depend_on_position() {
        let text = Text::parse("'Wow', she said.").unwrap();
        assert_eq!(text.substring(0, 3).to_string(), "'Wow");

        let text = Text::parse("She said 'wow', no.").unwrap();
        assert_eq!(text.substring(7, 10).to_string(), "wow");

        let text = Text::parse("Hi. Wow.").unwrap();
        assert_eq!(text.substring(2, 5).to_string(), "Wow.");

        let text = Text::parse("Wow. Hi.").unwrap();
        assert_eq!(text.substring(0, 3).to_string(), "Wow");
    }

    #[test]
    fn test_empty_substring() {
        let text = Text::parse("Ab cd.").unwrap();
        let slice = text.substring(2, 2);
        assert!(slice.is_empty());
        assert_eq!(slice.to_string(), "");
    }

    #[test]
    #[should_panic(expected = "invalid letter range")]
    fn test_substring_out_of_range_panics() {
        Text::parse("Ab cd.").unwrap().substring(1, 5);
    }
}
