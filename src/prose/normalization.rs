// WHY: the grammar only knows single spaces, so every whitespace run is collapsed first

/// Collapse every run of whitespace (spaces, tabs, `\r\n`, `\n`) into a single space
///
/// Leading and trailing runs are collapsed but kept; the grammar accepts a
/// single space at either edge.
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }

    result
}
