use std::borrow::Cow;

/// Decodes UTF-8, silently dropping byte sequences that are not valid.
///
/// Valid input is borrowed as is.
pub fn decode_lenient(bytes: &[u8]) -> Cow<'_, str> {
    let mut chunks = bytes.utf8_chunks();
    let Some(first) = chunks.next() else {
        return Cow::Borrowed("");
    };
    if first.invalid().is_empty() {
        return Cow::Borrowed(first.valid());
    }

    let mut text = String::with_capacity(bytes.len());
    text.push_str(first.valid());
    for chunk in chunks {
        text.push_str(chunk.valid());
    }
    Cow::Owned(text)
}
