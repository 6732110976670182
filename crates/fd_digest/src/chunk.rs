/// Split `text` into chunks of at most `limit` characters, breaking after a
/// blank line when one falls inside the window and mid-paragraph otherwise.
/// Concatenating the chunks yields `text` unchanged.
pub fn chunk_message(text: &str, limit: usize) -> Vec<String> {
    assert!(limit > 0, "chunk limit must be positive");

    if text.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.chars().count() > limit {
        let hard = char_boundary(rest, limit);
        let cut = match rest[..hard].rfind("\n\n") {
            Some(p) => p + 2,
            None => hard,
        };
        chunks.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }

    chunks.push(rest.to_string());
    chunks
}

/// Byte index after the first `nth` characters.
fn char_boundary(text: &str, nth: usize) -> usize {
    text.char_indices()
        .nth(nth)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
