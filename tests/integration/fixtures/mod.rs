// Test fixtures with known texts and their expected longest palindromes
// WHY: golden input/output pairs pin both the letter range and the rendering

/// Several palindromic words of different lengths in one sentence
pub const MIXED_WORDS_TEXT: &str = "hello madam tattarrattat dad blablabla.";
pub const MIXED_WORDS_EXPECTED: &str = "tattarrattat";

/// Letters-only palindrome spanning punctuation and capitals
pub const EDEN_TEXT: &str = "Madam, in Eden, I'm Adam.";

/// The same palindrome embedded between other sentences
pub const EMBEDDED_EDEN_TEXT: &str = "He said: Madam, in Eden, I'm Adam. Then left.";
pub const EMBEDDED_EDEN_EXPECTED: &str = "Madam, in Eden, I'm Adam";

/// No run of matching letters anywhere
pub const SINGLE_LETTERS_TEXT: &str = "A. B! C? D.";

/// Demonstration passage with line breaks, quotes and dashes
pub const SAMPLE_PASSAGE: &str = "On a warm day in a quiet town, Eve saw her reflection in a lake. 'Wow', she whispered.
Bob, her friend, laughed. No lemon, no melon - he exclaimed.
Eve smiled. Radar shows that level of calm.
Later, she walked by the racecar parked by the street,
noting the sign: \"A man, a plan, a canal, Panama\".
As they strolled back, she spotted an owl.
Eve knew some things could only be seen in reverse.";
pub const SAMPLE_PASSAGE_EXPECTED: &str = "A man, a plan, a canal, Panama";

/// Inputs that must be rejected at construction
pub const MALFORMED_TEXTS: &[&str] = &[
    "no terminator at all",
    "Ends fine. then trails off",
    "Digits like 42 are not prose.",
];
pub const NO_WORD_TEXTS: &[&str] = &["?!", "... !", "Fine. - ?"];
