//! LaTeX escaping for field values.
//!
//! Source text may contain characters that LaTeX reserves (`%`, `&`, `@`)
//! or unicode characters with no direct LaTeX representation. This module
//! rewrites a value character by character into text safe to place in a
//! LaTeX body.
//!
//! `$` is deliberately left untouched so that inline math written in the
//! source sheet (e.g. `$x \leq 2$`) survives substitution.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use textab_model::FieldValue;

/// Characters reserved by LaTeX that are emitted with a backslash prefix.
const RESERVED: [char; 3] = ['%', '&', '@'];

/// Unicode characters rewritten to an inline math command.
///
/// Covers the Greek letters and the "less than or equal" sign that show up
/// in survey-style sheets. Fixed and process-wide; initialized once.
static CHARACTER_MAP: LazyLock<BTreeMap<char, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ('\u{03b1}', "\\(\\alpha\\)"),
        ('\u{03b2}', "\\(\\beta\\)"),
        ('\u{03b3}', "\\(\\gamma\\)"),
        ('\u{03b4}', "\\(\\delta\\)"),
        ('\u{03bc}', "\\(\\mu\\)"),
        ('\u{2264}', "\\(\\leq\\)"),
    ])
});

/// Escape a field value for LaTeX output.
///
/// Non-text values (`Number`, `Bool`, `Missing`) return the empty string:
/// typed cells are not stringified, they vanish from the output. Numeric
/// columns being silently omitted is a deliberate policy that templates
/// may rely on, not an unhandled case. Never fails.
pub fn escape(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => escape_text(text),
        FieldValue::Number(_) | FieldValue::Bool(_) | FieldValue::Missing => String::new(),
    }
}

/// Escape a string for LaTeX output, character by character.
///
/// Rules, checked in order per character:
/// 1. `%`, `&`, `@` are emitted with a backslash prefix
/// 2. characters in the unicode table are replaced by their math command
/// 3. everything else passes through unchanged, including `$`
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if RESERVED.contains(&ch) {
            out.push('\\');
            out.push(ch);
        } else if let Some(snippet) = CHARACTER_MAP.get(&ch) {
            out.push_str(snippet);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_text("Hello world"), "Hello world");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn reserved_characters_get_backslash() {
        assert_eq!(escape_text("100% effective!"), "100\\% effective!");
        assert_eq!(escape_text("Romeo & Juliet"), "Romeo \\& Juliet");
        assert_eq!(escape_text("user@host"), "user\\@host");
    }

    #[test]
    fn unicode_maps_to_math_commands() {
        assert_eq!(escape_text("\u{03bc}"), "\\(\\mu\\)");
        assert_eq!(escape_text("\u{03b1}\u{03b2}"), "\\(\\alpha\\)\\(\\beta\\)");
        assert_eq!(escape_text("p \u{2264} 0.05"), "p \\(\\leq\\) 0.05");
    }

    #[test]
    fn dollar_is_not_escaped() {
        assert_eq!(escape_text("$x$"), "$x$");
        assert_eq!(escape_text("cost: $5 & up"), "cost: $5 \\& up");
    }

    #[test]
    fn non_text_values_vanish() {
        assert_eq!(escape(&FieldValue::Number(42.0)), "");
        assert_eq!(escape(&FieldValue::Bool(true)), "");
        assert_eq!(escape(&FieldValue::Missing), "");
        assert_eq!(escape(&FieldValue::from("kept")), "kept");
    }

    #[test]
    fn escaping_safe_text_is_idempotent() {
        let safe = "nothing special here, just words.";
        assert_eq!(escape_text(safe), safe);
        assert_eq!(escape_text(&escape_text(safe)), escape_text(safe));
    }
}
