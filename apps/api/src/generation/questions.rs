//! Extracts discrete interview questions from free-form generated text.
//!
//! This is a tolerant filter, not a grammar: models are asked for one
//! bullet per line but drift into hyphens, numbering, or prose, so the
//! parser accepts all three list styles and falls back to plain lines when
//! no list shape is present at all.

/// Interviews get 5-7 questions; anything past 7 is discarded.
pub const MAX_QUESTIONS: usize = 7;

/// Parses generated text into at most [`MAX_QUESTIONS`] question strings.
///
/// Primary pass keeps lines that look like list items (bullet glyph,
/// hyphen, or a leading `N.` number) with their markers stripped. If that
/// yields nothing, every trimmed line longer than 10 characters is kept
/// verbatim.
pub fn extract_questions(raw: &str) -> Vec<String> {
    let mut questions: Vec<String> = raw.lines().filter_map(parse_list_item).collect();

    if questions.is_empty() {
        questions = raw
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > 10)
            .map(str::to_string)
            .collect();
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}

/// Recognizes one list-item line and returns its text without the marker.
/// Lines that carry a marker but no text yield `None`.
fn parse_list_item(line: &str) -> Option<String> {
    let line = line.trim();

    let text = if let Some(rest) = line.strip_prefix('•') {
        rest
    } else if let Some(rest) = line.strip_prefix('-') {
        rest
    } else if starts_with_number_dot(line) {
        &line[line.find('.')? + 1..]
    } else {
        return None;
    };

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Numbered-list heuristic: a leading digit with a period somewhere in the
/// first three characters, matching `1.` through `99.` style markers.
fn starts_with_number_dot(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
        && line.chars().take(3).any(|c| c == '.')
}
