// WHY: one error kind for every construction failure so callers report and abort uniformly

use thiserror::Error;

/// Raised when a raw string cannot be turned into a prose structure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// Null-equivalent input: nothing to parse
    #[error("source text is empty")]
    EmptySource,

    /// The normalized text stops matching the sentence grammar
    #[error("text does not match the sentence grammar at byte offset {offset}")]
    Malformed {
        /// Byte offset in the whitespace-normalized text
        offset: usize,
    },

    /// A sentence span made only of punctuation
    #[error("no words in sentence {sentence:?}")]
    NoWords {
        /// The offending sentence as it appeared after normalization
        sentence: String,
    },

    #[error("expected a letter, found {found:?}")]
    NotALetter { found: char },

    #[error("expected a punctuation mark, found {found:?}")]
    NotPunctuation { found: char },
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
