use super::whitespace;

/// Character budget applied to the raw page text when neither a selection
/// nor a title is available.
pub const TEXT_FALLBACK_CHARS: usize = 500;

/// Picks the text the answer is computed from.
///
/// Precedence is trimmed `selection`, then trimmed `title`, then the first
/// [`TEXT_FALLBACK_CHARS`] characters of `text`. The last tier is not trimmed.
pub fn effective_text<'a>(selection: &'a str, title: &'a str, text: &'a str) -> &'a str {
    let selection = whitespace::trim(selection);
    if !selection.is_empty() {
        return selection;
    }

    let title = whitespace::trim(title);
    if !title.is_empty() {
        return title;
    }

    match text.char_indices().nth(TEXT_FALLBACK_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
