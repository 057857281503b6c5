//! Records and the field-lookup seam between data sources and the
//! substitution engine.

use std::collections::BTreeMap;

use crate::value::FieldValue;

/// Lookup capability the substitution engine depends on.
///
/// Implemented by [`Record`] for real data and by [`ProbeSource`] for key
/// discovery, where every lookup resolves so a scan can never fail.
pub trait FieldSource {
    /// Resolve a field by name. `None` means the field does not exist.
    fn field(&self, name: &str) -> Option<&FieldValue>;
}

/// One row of source data: a mapping from field name to value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Zero-based row number in the source sheet (header excluded).
    pub index: usize,
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            fields: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }
}

impl FieldSource for Record {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

/// An ordered set of records sharing one header row.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RecordSet {
    /// Column names in source order.
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if the header row contains `name` exactly.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }
}

/// A field source that resolves every name to `Missing`.
///
/// Substituting a template against this source walks the full scanner
/// without any lookup failure, which is how placeholder keys are discovered
/// without real data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeSource;

impl FieldSource for ProbeSource {
    fn field(&self, _name: &str) -> Option<&FieldValue> {
        static MISSING: FieldValue = FieldValue::Missing;
        Some(&MISSING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_lookup_by_name() {
        let mut record = Record::new(0);
        record.insert("name", FieldValue::from("World"));
        record.insert("count", FieldValue::from(3.0));

        assert_eq!(record.field("name"), Some(&FieldValue::from("World")));
        assert_eq!(record.field("count"), Some(&FieldValue::Number(3.0)));
        assert_eq!(record.field("absent"), None);
    }

    #[test]
    fn probe_source_resolves_everything() {
        let probe = ProbeSource;
        assert_eq!(probe.field("anything"), Some(&FieldValue::Missing));
        assert_eq!(probe.field(""), Some(&FieldValue::Missing));
    }
}
