// WHY: closed sum type so "only words carry letters" is checked by exhaustive matching

use std::fmt;

use crate::error::{InvalidInputError, Result};
use super::grammar::Grammar;
use super::letter::Letter;

/// A run of letters plus whether a space followed it in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Vec<Letter>,
    trailing_space: bool,
}

impl Word {
    /// Parse a raw `letter+ " "?` token
    pub fn parse(token: &str) -> Result<Self> {
        let trailing_space = token.ends_with(' ');
        let body = token.strip_suffix(' ').unwrap_or(token);
        if body.is_empty() {
            return Err(InvalidInputError::EmptySource);
        }

        let letters = body.chars().map(Letter::new).collect::<Result<Vec<_>>>()?;
        Ok(Self { letters, trailing_space })
    }

    fn from_parts(letters: Vec<Letter>, trailing_space: bool) -> Self {
        Self { letters, trailing_space }
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn has_trailing_space(&self) -> bool {
        self.trailing_space
    }

    /// Keep letters `[n, len)`; the trailing space survives
    pub fn trim_start(&self, n: usize) -> Word {
        assert!(n <= self.len(), "trim_start({n}) past word of {} letters", self.len());
        Self::from_parts(self.letters[n..].to_vec(), self.trailing_space)
    }

    /// Keep letters `[0, n)`; a word cut before its end never trailed a space
    pub fn trim_end(&self, n: usize) -> Word {
        assert!(n <= self.len(), "trim_end({n}) past word of {} letters", self.len());
        Self::from_parts(self.letters[..n].to_vec(), false)
    }

    /// Rendered character count including the trailing space
    pub fn formatted_len(&self) -> usize {
        self.letters.len() + usize::from(self.trailing_space)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        if self.trailing_space {
            f.write_str(" ")?;
        }
        Ok(())
    }
}

/// One punctuation mark plus whether a space followed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Punctuation {
    mark: char,
    trailing_space: bool,
}

impl Punctuation {
    /// Parse a raw `mark " "?` token
    pub fn parse(token: &str) -> Result<Self> {
        let mark = token.chars().next().ok_or(InvalidInputError::EmptySource)?;
        if !Grammar::shared().is_punctuation(mark) {
            return Err(InvalidInputError::NotPunctuation { found: mark });
        }
        Ok(Self {
            mark,
            trailing_space: token.ends_with(' '),
        })
    }

    pub fn mark(&self) -> char {
        self.mark
    }

    pub fn has_trailing_space(&self) -> bool {
        self.trailing_space
    }

    pub fn formatted_len(&self) -> usize {
        1 + usize::from(self.trailing_space)
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark)?;
        if self.trailing_space {
            f.write_str(" ")?;
        }
        Ok(())
    }
}

/// Element of a sentence: a word or an atomic punctuation mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceItem {
    Word(Word),
    Punctuation(Punctuation),
}

impl SentenceItem {
    /// Classify a raw token by its first character
    pub fn parse(token: &str) -> Result<Self> {
        match token.chars().next() {
            Some(ch) if Grammar::is_letter(ch) => Word::parse(token).map(SentenceItem::Word),
            Some(_) => Punctuation::parse(token).map(SentenceItem::Punctuation),
            None => Err(InvalidInputError::EmptySource),
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, SentenceItem::Word(_))
    }

    pub fn letter_count(&self) -> usize {
        match self {
            SentenceItem::Word(word) => word.len(),
            SentenceItem::Punctuation(_) => 0,
        }
    }

    pub fn formatted_len(&self) -> usize {
        match self {
            SentenceItem::Word(word) => word.formatted_len(),
            SentenceItem::Punctuation(punct) => punct.formatted_len(),
        }
    }
}

impl fmt::Display for SentenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceItem::Word(word) => fmt::Display::fmt(word, f),
            SentenceItem::Punctuation(punct) => fmt::Display::fmt(punct, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spelled(word: &Word) -> String {
        word.letters().iter().map(|l| l.as_char()).collect()
    }

    #[test]
    fn test_word_parse_and_render() {
        let word = Word::parse("Hello ").unwrap();
        assert_eq!(word.len(), 5);
        assert!(word.has_trailing_space());
        assert_eq!(word.formatted_len(), 6);
        assert_eq!(word.to_string(), "Hello ");

        let bare = Word::parse("Hi").unwrap();
        assert!(!bare.has_trailing_space());
        assert_eq!(bare.to_string(), "Hi");
    }

    #[test]
    fn test_word_rejects_non_letters() {
        assert_eq!(Word::parse("ab1"), Err(InvalidInputError::NotALetter { found: '1' }));
        assert_eq!(Word::parse(" "), Err(InvalidInputError::EmptySource));
    }

    #[test]
    fn test_word_trim_start_keeps_separator() {
        let word = Word::parse("Madam ").unwrap();
        let trimmed = word.trim_start(2);
        assert_eq!(spelled(&trimmed), "dam");
        assert!(trimmed.has_trailing_space());
        assert_eq!(word.trim_start(0), word);
        assert!(word.trim_start(5).is_empty());
    }

    #[test]
    fn test_word_trim_end_drops_separator() {
        let word = Word::parse("Madam ").unwrap();
        let trimmed = word.trim_end(3);
        assert_eq!(trimmed.to_string(), "Mad");
        assert!(!trimmed.has_trailing_space());

        let full = word.trim_end(5);
        assert_eq!(full.to_string(), "Madam");
    }

    #[test]
    #[should_panic(expected = "past word")]
    fn test_word_trim_past_end_panics() {
        Word::parse("abc").unwrap().trim_start(4);
    }

    #[test]
    fn test_punctuation_parse_and_render() {
        let comma = Punctuation::parse(", ").unwrap();
        assert_eq!(comma.mark(), ',');
        assert_eq!(comma.formatted_len(), 2);
        assert_eq!(comma.to_string(), ", ");

        let quote = Punctuation::parse("'").unwrap();
        assert_eq!(quote.formatted_len(), 1);
        assert_eq!(quote.to_string(), "'");

        assert_eq!(Punctuation::parse("x"), Err(InvalidInputError::NotPunctuation { found: 'x' }));
    }

    #[test]
    fn test_item_classification() {
        let word = SentenceItem::parse("dad ").unwrap();
        assert!(word.is_word());
        assert_eq!(word.letter_count(), 3);
        assert_eq!(word.formatted_len(), 4);

        let mark = SentenceItem::parse("!").unwrap();
        assert!(!mark.is_word());
        assert_eq!(mark.letter_count(), 0);
        assert_eq!(mark.to_string(), "!");
    }
}
