//! Placeholder substitution.
//!
//! A template is scanned left to right for `{{identifier}}` markers. Each
//! marker is replaced by the escaped value of the named field from the
//! supplied [`FieldSource`]; everything else is copied through, including
//! single braces that do not form a complete marker.
//!
//! The scanner is a single pass with one character of lookahead state
//! (`pending_open_brace`), so substitution cost is linear in template
//! length regardless of how many placeholders it contains.

use thiserror::Error;

use textab_model::{FieldSource, ProbeSource};

use crate::escape::escape;

/// Bytes of template shown around a failed lookup.
const FRAGMENT_WINDOW: usize = 24;

/// Errors from a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstituteError {
    /// A placeholder named a field the record does not have.
    #[error("missing field `{key}` at byte {position} of template, near `{fragment}`")]
    MissingField {
        key: String,
        position: usize,
        fragment: String,
    },
}

/// Substitute every `{{identifier}}` in `template` from `source`.
///
/// Returns the assembled output, or [`SubstituteError::MissingField`] if a
/// captured identifier does not resolve. On failure no partial output is
/// produced.
///
/// Brace handling:
/// - a single `{` followed by a non-`{` character is literal output
/// - a single `{` at end of input is dropped
/// - after an identifier's closing `}`, one further character is consumed
///   as the assumed second closing brace
pub fn substitute<S: FieldSource>(template: &str, source: &S) -> Result<String, SubstituteError> {
    scan(template, source).map(|(out, _)| out)
}

/// Like [`substitute`], also returning the identifiers encountered, in
/// template order. Intended for diagnostics.
pub fn substitute_tracked<S: FieldSource>(
    template: &str,
    source: &S,
) -> Result<(String, Vec<String>), SubstituteError> {
    scan(template, source)
}

/// List the placeholder identifiers a template would look up, in order.
///
/// Runs the real scanner against a probe source that resolves every name,
/// so discovery sees exactly the keys a substitution pass would, without
/// needing data.
pub fn discover_keys(template: &str) -> Vec<String> {
    // Probe lookups always resolve, so the scan cannot fail.
    scan(template, &ProbeSource)
        .map(|(_, keys)| keys)
        .unwrap_or_default()
}

fn scan<S: FieldSource>(
    template: &str,
    source: &S,
) -> Result<(String, Vec<String>), SubstituteError> {
    let mut out = String::with_capacity(template.len());
    let mut keys = Vec::new();
    let mut pending_open_brace = false;
    let mut chars = template.char_indices();

    while let Some((offset, ch)) = chars.next() {
        if ch == '{' {
            if pending_open_brace {
                // Second brace confirms a placeholder. Capture up to the
                // next `}`; a template ending mid-capture still records and
                // resolves the partial identifier.
                let mut key = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    key.push(inner);
                }
                if closed {
                    // The character after `}` is assumed to be the second
                    // closing brace and is consumed unconditionally.
                    chars.next();
                }
                keys.push(key.clone());
                // `{` is one byte, so the marker starts one byte back.
                let position = offset - 1;
                let value =
                    source
                        .field(&key)
                        .ok_or_else(|| SubstituteError::MissingField {
                            key: key.clone(),
                            position,
                            fragment: fragment_at(template, position),
                        })?;
                out.push_str(&escape(value));
                pending_open_brace = false;
            } else {
                pending_open_brace = true;
            }
        } else if pending_open_brace {
            // The prior `{` was not a placeholder start; both are literal.
            out.push('{');
            out.push(ch);
            pending_open_brace = false;
        } else {
            out.push(ch);
        }
    }
    // A `{` still pending at end of input is dropped, not emitted.

    Ok((out, keys))
}

fn fragment_at(template: &str, position: usize) -> String {
    let mut end = (position + FRAGMENT_WINDOW).min(template.len());
    while !template.is_char_boundary(end) {
        end += 1;
    }
    template[position..end].to_string()
}
