//! Whitespace used for trimming and word splitting: Unicode `White_Space`
//! plus the ASCII information separators U+001C..=U+001F.

pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Splits on runs of [`is_space`], skipping empty pieces.
pub fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(is_space).filter(|word| !word.is_empty())
}
