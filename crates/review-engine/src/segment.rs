//! Sentence segmentation

/// Split text into trimmed sentences.
///
/// A boundary is a `.`, `!` or `?` followed by whitespace and then an ASCII
/// capital, a digit, `[` or `(`. Punctuation stays with its sentence and the
/// separating whitespace is dropped. Text without any boundary comes back as a
/// single sentence; blank text yields no sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = i + c.len_utf8();

        let mut next_start = end;
        let mut saw_space = false;
        while let Some(&(j, w)) = chars.peek() {
            if !w.is_whitespace() {
                break;
            }
            saw_space = true;
            next_start = j + w.len_utf8();
            chars.next();
        }

        if !saw_space {
            continue;
        }
        let opens_sentence = text[next_start..]
            .chars()
            .next()
            .is_some_and(starts_sentence);
        if opens_sentence {
            push_trimmed(&mut sentences, &text[start..end]);
            start = next_start;
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn starts_sentence(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '[' || c == '('
}

fn push_trimmed(sentences: &mut Vec<String>, slice: &str) {
    let trimmed = slice.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
