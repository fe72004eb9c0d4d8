/// Joins `words` with `separator`, keeping the result within `max_length`
/// characters.
///
/// The first word is always taken. Each later word is appended only if the
/// result still fits; a word that does not fit is skipped and the following
/// ones are still tried, so short trailing words can fill the remaining room.
/// The result is finally clamped to `max_length` characters, which only bites
/// when the first word alone is too long. `max_length == 0` means unbounded.
pub fn join_words<S: AsRef<str>>(words: &[S], separator: &str, max_length: usize) -> String {
    let mut words = words.iter().map(AsRef::as_ref);

    if max_length == 0 {
        return words.collect::<Vec<_>>().join(separator);
    }

    let Some(first) = words.next() else {
        return String::new();
    };

    let separator_len = separator.chars().count();
    let mut text = String::from(first);
    let mut text_len = first.chars().count();

    for word in words {
        let word_len = word.chars().count();
        let joined_len = text_len + separator_len + word_len;
        if joined_len <= max_length {
            text.push_str(separator);
            text.push_str(word);
            text_len = joined_len;
        }
    }

    if text_len > max_length {
        if let Some((idx, _)) = text.char_indices().nth(max_length) {
            text.truncate(idx);
        }
    }
    text
}
