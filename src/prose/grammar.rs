// WHY: data-driven sentence grammar compiled once with regex-automata
// Validation and sentence splitting share one anchored walk so they can never disagree

use regex_automata::{meta::{BuildError, Regex}, Anchored, Input};
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{InvalidInputError, Result};

/// One alphabetic character
pub const LETTER_PATTERN: &str = r"\p{Alphabetic}";

/// Unicode punctuation plus the ASCII punctuation/symbol set
pub const PUNCTUATION_PATTERN: &str = r"[\p{P}[:punct:]]";

/// Characters that may close a sentence
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

static SHARED_GRAMMAR: OnceLock<Grammar> = OnceLock::new();

/// Compiled patterns for sentences, sentence items and punctuation marks
#[derive(Debug)]
pub struct Grammar {
    /// `(letter | punctuation | " ")*? terminator (" " | EOF)`, shortest first
    sentence: Regex,
    /// `(letter+ | punctuation) " "?`
    item: Regex,
    /// exactly one punctuation mark
    punctuation: Regex,
}

impl Grammar {
    /// Compile the built-in patterns
    pub fn compile() -> std::result::Result<Self, BuildError> {
        let sentence = format!(r"(?:{LETTER_PATTERN}|{PUNCTUATION_PATTERN}| )*?[.!?](?: |$)");
        let item = format!(r"(?:{LETTER_PATTERN}+|{PUNCTUATION_PATTERN}) ?");
        let punctuation = format!(r"^{PUNCTUATION_PATTERN}$");

        debug!("Compiling sentence grammar: {}", sentence);

        Ok(Self {
            sentence: Regex::new(&sentence)?,
            item: Regex::new(&item)?,
            punctuation: Regex::new(&punctuation)?,
        })
    }

    /// Process-wide grammar instance, compiled on first use
    pub fn shared() -> &'static Grammar {
        SHARED_GRAMMAR.get_or_init(|| {
            Self::compile().expect("built-in grammar patterns are valid regular expressions")
        })
    }

    /// Split a normalized text into consecutive sentence spans
    ///
    /// Every span must start exactly where the previous one ended; the first
    /// position where no sentence can be matched is reported as `Malformed`.
    pub fn sentence_spans<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let input = Input::new(text).range(pos..).anchored(Anchored::Yes);
            match self.sentence.search(&input) {
                Some(found) => {
                    spans.push(&text[found.range()]);
                    pos = found.end();
                }
                None => return Err(InvalidInputError::Malformed { offset: pos }),
            }
        }

        if spans.is_empty() {
            return Err(InvalidInputError::Malformed { offset: 0 });
        }

        Ok(spans)
    }

    /// True when `span` is exactly one sentence under the grammar
    pub fn is_single_sentence(&self, span: &str) -> bool {
        let input = Input::new(span).anchored(Anchored::Yes);
        self.sentence
            .search(&input)
            .is_some_and(|found| found.end() == span.len())
    }

    /// Tokenize a sentence span into raw item strings (word or mark, plus optional space)
    pub fn items<'s>(&self, sentence: &'s str) -> Vec<&'s str> {
        self.item
            .find_iter(sentence)
            .map(|found| &sentence[found.range()])
            .collect()
    }

    pub fn is_letter(ch: char) -> bool {
        ch.is_alphabetic()
    }

    pub fn is_punctuation(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.punctuation.is_match(ch.encode_utf8(&mut buf).as_bytes())
    }
}
