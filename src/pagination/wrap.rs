//! Greedy word wrapping and per-chapter flattening.
//!
//! Both functions are pure folds: they take text in and hand back lines, with
//! no state surviving between calls.

/// Greedily pack `words` into lines of at most `width` characters.
///
/// A word is placed on the current line when it fits together with its
/// separating space; otherwise the line is closed and the word starts the
/// next one. A word longer than `width` ends up alone on its own line and is
/// left untruncated; the renderer clips it.
pub fn wrap<'a, I>(words: I, width: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let (mut lines, tail) = words.into_iter().fold(
        (Vec::new(), String::new()),
        |(mut lines, mut buffer), word| {
            push_word(&mut lines, &mut buffer, word, width);
            (lines, buffer)
        },
    );
    if !tail.is_empty() {
        lines.push(tail);
    }
    debug_assert!(
        lines
            .iter()
            .all(|line| char_len(line) <= width || !line.contains(' ')),
        "wrapped line exceeds width without being a single word"
    );
    lines
}

fn push_word(lines: &mut Vec<String>, buffer: &mut String, word: &str, width: usize) {
    if buffer.is_empty() {
        buffer.push_str(word);
    } else if char_len(buffer) + char_len(word) + 1 > width {
        lines.push(std::mem::replace(buffer, word.to_string()));
    } else {
        buffer.push(' ');
        buffer.push_str(word);
    }
}

/// Turn one chapter's plain text into wrapped lines.
///
/// Blank lines separate paragraphs. Each paragraph is wrapped on its own and
/// followed by a single empty line; runs of blank lines collapse into one gap
/// and leading blanks produce nothing. The last paragraph gets no trailing gap.
pub fn flatten(chapter_text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for raw in chapter_text.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if !paragraph.is_empty() {
                lines.extend(wrap(paragraph.drain(..), width));
                lines.push(String::new());
            }
            continue;
        }
        paragraph.extend(trimmed.split_whitespace());
    }

    lines.extend(wrap(paragraph, width));
    lines
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
