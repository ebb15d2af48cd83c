//! Strips characters that are unsafe in a chat line or that carry
//! hyperlink markup in lookup text.

#[derive(Debug, Clone, Copy)]
enum Rule {
    Replace(char),
    Delete,
}

/// Applied in order; the first matching rule wins.
const RULES: [(char, Rule); 5] = [
    ('\r', Rule::Replace(' ')),
    ('\n', Rule::Replace(' ')),
    ('\t', Rule::Replace(' ')),
    ('[', Rule::Delete),
    (']', Rule::Delete),
];

/// Replace line breaks and tabs with spaces and drop `[`/`]` link brackets.
///
/// Every other character passes through untouched.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match RULES.iter().find(|(matched, _)| *matched == c) {
            Some((_, Rule::Replace(with))) => Some(*with),
            Some((_, Rule::Delete)) => None,
            None => Some(c),
        })
        .collect()
}
