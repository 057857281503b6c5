//! Template substitution core for textab.
//!
//! Two pieces, composed in one direction: the [`escape`] module converts a
//! single field value into LaTeX-safe text, and the [`substitute`] module
//! scans a template for `{{identifier}}` placeholders, resolves each one
//! against a [`textab_model::FieldSource`], and splices in the escaped
//! value. Neither piece does any I/O; both are pure over their inputs.

pub mod escape;
pub mod substitute;

pub use escape::{escape, escape_text};
pub use substitute::{SubstituteError, discover_keys, substitute, substitute_tracked};
