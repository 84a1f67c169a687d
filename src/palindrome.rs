// WHY: expand-around-center search over the flattened letter stream
// Matching ignores case, punctuation and spacing; the winner is rendered back through Text::substring

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prose::{Letter, Text};

/// Half-open range `[start, end)` in letter-index space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LetterRange {
    pub start: usize,
    pub end: usize,
}

impl LetterRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Longest palindrome of a text: its letter bounds plus the formatted slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeMatch {
    pub range: LetterRange,
    pub text: Text,
}

/// Bounds of the longest case-insensitive palindromic run of `letters`
///
/// Odd and even centers are tried at every position; a candidate replaces the
/// best so far only when strictly longer, so the earliest maximal run wins.
pub fn find_longest_palindrome(letters: &[Letter]) -> LetterRange {
    if letters.len() < 2 {
        return LetterRange::new(0, letters.len());
    }

    let mut best = LetterRange::default();
    for center in 0..letters.len() {
        let odd = expand_around_center(letters, center, center);
        let even = expand_around_center(letters, center, center + 1);

        let longer = if even.len() > odd.len() { even } else { odd };
        if longer.len() > best.len() {
            best = longer;
        }
    }

    best
}

/// Grow outwards from `letters[left..=right]` while the ends match
fn expand_around_center(letters: &[Letter], left: usize, right: usize) -> LetterRange {
    // start/end are the bounds of the palindrome confirmed so far
    let mut start = left + 1;
    let mut end = right;

    while start > 0 && end < letters.len() && letters[start - 1] == letters[end] {
        start -= 1;
        end += 1;
    }

    LetterRange::new(start, end)
}

/// Find the longest palindrome in `text` and slice it out with original formatting
pub fn longest_palindrome(text: &Text) -> PalindromeMatch {
    let letters = text.letters();
    let range = find_longest_palindrome(&letters);

    debug!(
        "Longest palindrome spans letters {}..{} of {}",
        range.start,
        range.end,
        letters.len()
    );

    PalindromeMatch {
        range,
        text: text.substring(range.start, range.end),
    }
}
