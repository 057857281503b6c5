//! Scalar cell values as read from a tabular source.

/// A single cell value from one row of source data.
///
/// The variant is decided per column during ingestion, the way a dataframe
/// library assigns a dtype: a column whose non-empty cells all parse as
/// numbers becomes `Number`, all-boolean columns become `Bool`, everything
/// else stays `Text`. Empty cells are `Missing` regardless of column type.
///
/// Only `Text` values participate in substitution output; every other
/// variant renders as the empty string (see `textab_template::escape`).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl FieldValue {
    /// Returns the contained text, or `None` for non-text variants.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
