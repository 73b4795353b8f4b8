//! Splitting long text into message-sized chunks

/// Split `text` into consecutive chunks of at most `max_chars` characters
///
/// Boundaries fall on character positions regardless of words, so joining
/// the chunks gives back `text` exactly. Empty input yields no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let split = rest
            .char_indices()
            .nth(max_chars)
            .map(|(index, _)| index)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(split);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}
