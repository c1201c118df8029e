//! Record type for normalized API responses.
//!
//! Every Eoxide query endpoint returns its results as a list of [`Record`]s.
//! A record is a field-name-to-value mapping mirroring one unit of API
//! response (one EoX entry, one coverage summary, one inventory row).
//! Field values may be nested; several Cisco endpoints wrap scalars in
//! `{"value": ..., "dateFormat": ...}` objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// One unit of API response, as a field-name-to-value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns the raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns a field as a string slice, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Returns the display value of a field.
    ///
    /// Plain string fields are returned as-is. Fields wrapped in a
    /// `{"value": "..."}` object (the EoX date milestone convention) are
    /// unwrapped to the inner string.
    pub fn display_value(&self, field: &str) -> Option<&str> {
        match self.0.get(field)? {
            Value::String(s) => Some(s),
            Value::Object(inner) => inner.get("value").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Returns a field as a string slice, or an error naming the field.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` if the field is absent or not
    /// representable as a string.
    pub fn require_str(&self, field: &str) -> Result<&str, CoreError> {
        self.display_value(field)
            .ok_or_else(|| CoreError::MissingField(field.to_string()))
    }

    /// Inserts a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn eox_record() -> Record {
        serde_json::from_value(json!({
            "EOLProductID": "WS-C3750X-48PF-S",
            "ProductIDDescription": "Catalyst 3750X 48 Port Full PoE IP Base",
            "LastDateOfSupport": {
                "value": "2021-10-31",
                "dateFormat": "YYYY-MM-DD"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_get_str() {
        let record = eox_record();
        assert_eq!(record.get_str("EOLProductID"), Some("WS-C3750X-48PF-S"));
        assert_eq!(record.get_str("LastDateOfSupport"), None);
        assert_eq!(record.get_str("NoSuchField"), None);
    }

    #[test]
    fn test_display_value_unwraps_date_objects() {
        let record = eox_record();
        assert_eq!(record.display_value("LastDateOfSupport"), Some("2021-10-31"));
        assert_eq!(
            record.display_value("EOLProductID"),
            Some("WS-C3750X-48PF-S")
        );
        assert_eq!(record.display_value("NoSuchField"), None);
    }

    #[test]
    fn test_require_str() {
        let record = eox_record();
        assert_eq!(record.require_str("EOLProductID").unwrap(), "WS-C3750X-48PF-S");

        let err = record.require_str("NoSuchField").unwrap_err();
        assert!(matches!(err, CoreError::MissingField(f) if f == "NoSuchField"));
    }

    #[test]
    fn test_transparent_serde_round_trip() {
        let record = eox_record();
        let serialized = serde_json::to_value(&record).unwrap();
        assert_eq!(serialized["EOLProductID"], "WS-C3750X-48PF-S");
        assert_eq!(serialized["LastDateOfSupport"]["value"], "2021-10-31");
    }

    #[test]
    fn test_empty_record() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }
}
