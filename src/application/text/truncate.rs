//! Sentence-aligned truncation of lookup text to a chat-sized budget.

/// Appended when trailing sentences were dropped.
pub const TRUNCATION_MARKER: &str = " [...]";

/// Split text on `.` into trimmed, non-empty sentences.
///
/// Each sentence gets its period back unless it already ends in a
/// straight double quote. Curly quotes still get the period.
pub fn sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.ends_with('"') {
                segment.to_string()
            } else {
                format!("{}.", segment)
            }
        })
        .collect()
}

/// Keep the longest prefix of sentences whose cumulative length fits in
/// `max_chars`, appending [`TRUNCATION_MARKER`] when anything was cut.
///
/// Lengths are counted in characters, per sentence, without the joining
/// spaces. The first sentence is always kept whole, even when it alone is
/// over budget; only a later sentence crossing the budget marks the text
/// as truncated.
pub fn truncate(text: &str, max_chars: usize) -> String {
    let sentences = sentences(text);

    let mut truncated = true;
    let mut selected = 0;
    let mut cumulative = 0;
    for sentence in &sentences {
        cumulative += sentence.chars().count();
        if selected > 0 && cumulative > max_chars {
            break;
        }
        selected += 1;
    }
    if selected == sentences.len() {
        truncated = false;
    }

    let mut out = sentences[..selected].join(" ");
    if truncated {
        out.push_str(TRUNCATION_MARKER);
    }
    out
}
