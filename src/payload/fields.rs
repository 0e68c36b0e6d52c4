// Field values supplied by the user for a QR record
// Keys are type-specific. Nothing is trimmed or validated here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const URL: &str = "url";
pub const TEXT: &str = "text";
pub const EMAIL: &str = "email";
pub const SUBJECT: &str = "subject";
pub const BODY: &str = "body";
pub const PHONE: &str = "phone";
pub const MESSAGE: &str = "message";
pub const SSID: &str = "ssid";
pub const PASSWORD: &str = "password";
pub const ENCRYPTION: &str = "encryption";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const ADDRESS: &str = "address";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const COMPANY: &str = "company";
pub const JOB_TITLE: &str = "jobTitle";
pub const WEBSITE: &str = "website";

/// Field name to value mapping (ordered, so serialization is deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: BTreeMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Absent fields read as the empty string
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Present and non-empty
    pub fn is_filled(&self, key: &str) -> bool {
        !self.get_or_empty(key).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_reads_empty() {
        let fields = FieldValues::new().with(EMAIL, "a@b.com");
        assert_eq!(fields.get_or_empty(EMAIL), "a@b.com");
        assert_eq!(fields.get_or_empty(SUBJECT), "");
        assert_eq!(fields.get(SUBJECT), None);
    }

    #[test]
    fn test_is_filled() {
        let fields = FieldValues::new().with(MESSAGE, "").with(PHONE, "+1");
        assert!(!fields.is_filled(MESSAGE));
        assert!(fields.is_filled(PHONE));
        assert!(!fields.is_filled(URL));
    }

    #[test]
    fn test_values_not_trimmed() {
        let fields = FieldValues::new().with(TEXT, "  padded  ");
        assert_eq!(fields.get_or_empty(TEXT), "  padded  ");
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let fields: FieldValues =
            serde_json::from_str(r#"{"ssid":"MyNetwork","password":"pw"}"#).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get(SSID), Some("MyNetwork"));
    }
}
