use crate::units::Pt;

/// The prefix of `word` holding its first `count` characters.
pub(crate) fn char_prefix(word: &str, count: usize) -> &str {
    match word.char_indices().nth(count) {
        Some((index, _)) => &word[..index],
        None => word,
    }
}

/// What remains of `word` after its first `count` characters.
pub(crate) fn char_suffix(word: &str, count: usize) -> &str {
    match word.char_indices().nth(count) {
        Some((index, _)) => &word[index..],
        None => "",
    }
}

/// Finds the longest character prefix of `word` that fits in `space_left`,
/// returning the character count and the measured width of that prefix.
///
/// `width` is the measured width of the whole of `word`. The initial guess
/// interpolates a character count from the token's average character width,
/// then is corrected one character at a time: measured widths are monotonic
/// in character count, so shrinking and growing both converge. Returns a
/// count of 0 when nothing fits; the caller decides whether that means
/// breaking the line first or forcing a one-character piece.
///
/// The forced minimum: when not even one character fits a completely fresh
/// line (`space_left == line_width`), one character is taken anyway so the
/// split always makes progress. The resulting piece may overflow.
pub(crate) fn max_fit_chars(
    word: &str,
    width: Pt,
    space_left: Pt,
    line_width: Pt,
    mut measure: impl FnMut(&str) -> Pt,
) -> (usize, Pt) {
    let length = word.chars().count();
    if width <= space_left {
        return (length, width);
    }

    let average = width / length as f32;
    let mut count = ((space_left / average).ceil() as usize).min(length);
    let mut measured = measure(char_prefix(word, count));
    let mut might_grow = measured <= space_left && count < length;

    while measured > space_left && count > 0 {
        count -= 1;
        measured = measure(char_prefix(word, count));
    }
    while might_grow {
        let grown = measure(char_prefix(word, count + 1));
        if grown <= space_left && count + 1 < length {
            count += 1;
            measured = grown;
        } else {
            might_grow = false;
        }
    }

    if count == 0 && space_left == line_width {
        count = 1;
        measured = measure(char_prefix(word, 1));
    }

    (count, measured)
}
