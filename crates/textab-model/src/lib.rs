pub mod record;
pub mod value;

pub use record::{FieldSource, ProbeSource, Record, RecordSet};
pub use value::FieldValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_serializes_tagged() {
        let value = FieldValue::Text("100% effective".to_string());
        let json = serde_json::to_string(&value).expect("serialize value");
        assert_eq!(json, r#"{"kind":"Text","value":"100% effective"}"#);

        let round: FieldValue = serde_json::from_str(&json).expect("deserialize value");
        assert_eq!(round, value);
    }

    #[test]
    fn record_set_headers() {
        let set = RecordSet {
            headers: vec!["name".to_string(), "score".to_string()],
            records: vec![],
        };
        assert!(set.has_header("name"));
        assert!(!set.has_header("Name"));
        assert!(set.is_empty());
    }
}
