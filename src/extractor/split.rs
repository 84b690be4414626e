//! Long-text splitting into pseudo-paragraphs.
//!
//! Used by whole-body fallback extraction, where a single div often holds an
//! entire article with no paragraph markup.

/// Sentence terminators, full-width and ASCII.
pub const SENTENCE_TERMINATORS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

/// Split text after each terminator. Terminators stay with their sentence.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        current.push(c);
        if SENTENCE_TERMINATORS.contains(&c) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let rest = current.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

/// Greedily pack sentences into chunks of at most `max_chars` chars.
///
/// A sentence longer than `max_chars` becomes a chunk on its own.
#[must_use]
pub fn chunk_paragraphs(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in split_sentences(text) {
        let len = sentence.chars().count();
        if current_len > 0 && current_len + len > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 && needs_space(&current, &sentence) {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&sentence);
        current_len += len;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// ASCII prose needs a space between joined sentences; CJK does not.
fn needs_space(left: &str, right: &str) -> bool {
    let ends_ascii = left.chars().last().is_some_and(|c| c.is_ascii());
    let starts_ascii = right.chars().next().is_some_and(|c| c.is_ascii());
    ends_ascii || starts_ascii
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_mixed_terminators() {
        let sentences = split_sentences("第一句。第二句！Third one? Fourth. tail");
        assert_eq!(sentences, vec!["第一句。", "第二句！", "Third one?", "Fourth.", "tail"]);
    }

    #[test]
    fn chunks_respect_cap() {
        let text = "这是一个用于测试的句子。".repeat(40);
        let chunks = chunk_paragraphs(&text, 200);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 200);
        }
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn oversized_sentence_is_own_chunk() {
        let long = "a".repeat(300);
        let text = format!("Short one. {long}. Another short.");
        let chunks = chunk_paragraphs(&text, 200);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].chars().count(), 301);
    }

    #[test]
    fn ascii_sentences_joined_with_space() {
        let chunks = chunk_paragraphs("One. Two. Three.", 200);
        assert_eq!(chunks, vec!["One. Two. Three."]);
    }

    #[test]
    fn empty_text_gives_no_chunks() {
        assert!(chunk_paragraphs("   ", 200).is_empty());
    }
}
