//! Comma-joined summaries of ordered name lists.
//!
//! The `type` and `abilities` columns store a list as one string joined with
//! [`SEPARATOR`]. A `,` or `\` inside a component is escaped with a leading
//! `\`. [`split_summary`] trims components and drops empty ones, so it
//! recovers exactly those lists whose components are non-blank and carry no
//! surrounding whitespace.

/// Separator written between components.
pub const SEPARATOR: &str = ", ";

const ESCAPE: char = '\\';
const DELIMITER: char = ',';

/// Join `parts` into a single summary string.
pub fn join_summary<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| escape(part.as_ref()))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Split a summary back into its components.
///
/// Whitespace around each component is trimmed and empty components are
/// dropped, so both `"grass, poison"` and `"grass,poison"` split the same.
pub fn split_summary(summary: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = summary.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => current.push(ESCAPE),
            },
            DELIMITER => push_part(&mut parts, &mut current),
            other => current.push(other),
        }
    }
    push_part(&mut parts, &mut current);
    parts
}

fn push_part(parts: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
    current.clear();
}

fn escape(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    for c in part.chars() {
        if c == ESCAPE || c == DELIMITER {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}
