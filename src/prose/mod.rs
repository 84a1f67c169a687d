// WHY: layered immutable prose model (text -> sentence -> word -> letter)
// Each level owns its children outright and every trim builds a fresh subtree

pub mod grammar;
pub mod letter;
pub mod normalization;
pub mod sentence;
pub mod sentence_item;
pub mod text;

pub use grammar::Grammar;
pub use letter::Letter;
pub use normalization::normalize_whitespace;
pub use sentence::Sentence;
pub use sentence_item::{Punctuation, SentenceItem, Word};
pub use text::Text;
