pub mod error;
pub mod palindrome;
pub mod parallel_processing;
pub mod prose;
pub mod reader;

// Re-export main types for convenient access
pub use error::{InvalidInputError, Result};
pub use prose::{Letter, Punctuation, Sentence, SentenceItem, Text, Word};

pub use palindrome::{
    find_longest_palindrome, longest_palindrome,
    LetterRange, PalindromeMatch
};

// Re-export batch processing types for the CLI and benchmarks
pub use parallel_processing::{
    BatchConfig, InputText, PalindromeReport,
    process_inputs_parallel, search_input, write_stats_file
};
