use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{InvalidInputError, Result};
use super::grammar::Grammar;

/// A single alphabetic character; equality, ordering and hashing ignore case
#[derive(Debug, Clone, Copy)]
pub struct Letter(char);

impl Letter {
    pub fn new(ch: char) -> Result<Self> {
        if Grammar::is_letter(ch) {
            Ok(Self(ch))
        } else {
            Err(InvalidInputError::NotALetter { found: ch })
        }
    }

    /// Build a letter from the first character of `source`
    pub fn parse(source: &str) -> Result<Self> {
        let ch = source.chars().next().ok_or(InvalidInputError::EmptySource)?;
        Self::new(ch)
    }

    /// The character exactly as it appeared in the source
    pub fn as_char(self) -> char {
        self.0
    }

    fn folded(self) -> impl Iterator<Item = char> {
        self.0.to_lowercase()
    }
}

impl PartialEq for Letter {
    fn eq(&self, other: &Self) -> bool {
        self.folded().eq(other.folded())
    }
}

impl Eq for Letter {}

impl PartialOrd for Letter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Letter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl Hash for Letter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for ch in self.folded() {
            ch.hash(state);
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
