use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{FieldKey, FieldValue, Location, Tag};

/// Error type for typed value access.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("Missing value for field: {0}")]
    MissingKey(FieldKey),

    #[error("Type mismatch at field '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: FieldKey,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Current values of all fields in a form, keyed by `FieldKey`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<FieldKey, FieldValue>,
}

impl FormValues {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a value for the given field, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<FieldKey>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Get the value of a field.
    pub fn get(&self, key: &FieldKey) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Check if a value exists for the given field.
    pub fn contains(&self, key: &FieldKey) -> bool {
        self.values.contains_key(key)
    }

    /// Remove the value of a field.
    pub fn remove(&mut self, key: &FieldKey) -> Option<FieldValue> {
        self.values.remove(key)
    }

    /// Get an iterator over all key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &FieldValue)> {
        self.values.iter()
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the field holds a filled-in value. Missing fields are not filled.
    pub fn is_filled(&self, key: &FieldKey) -> bool {
        self.get(key).is_some_and(FieldValue::is_filled)
    }

    /// Whether the field holds exactly `Bool(true)`.
    pub fn is_true(&self, key: &FieldKey) -> bool {
        self.get(key).is_some_and(FieldValue::is_true)
    }

    /// Text shown in an input for the field, empty when missing.
    pub fn display_text(&self, key: &FieldKey) -> &str {
        self.get(key).map(FieldValue::display_text).unwrap_or("")
    }

    // === Convenience accessors ===

    /// Get a text value.
    pub fn get_text(&self, key: &FieldKey) -> Result<&str, ValueError> {
        match self.get(key) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(other) => Err(ValueError::TypeMismatch {
                key: key.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingKey(key.clone())),
        }
    }

    /// Get a boolean value.
    pub fn get_bool(&self, key: &FieldKey) -> Result<bool, ValueError> {
        match self.get(key) {
            Some(FieldValue::Bool(b)) => Ok(*b),
            Some(other) => Err(ValueError::TypeMismatch {
                key: key.clone(),
                expected: "Bool",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingKey(key.clone())),
        }
    }

    /// Get the tags picked in an interests field.
    pub fn get_tags(&self, key: &FieldKey) -> Result<&[Tag], ValueError> {
        match self.get(key) {
            Some(FieldValue::Tags(tags)) => Ok(tags),
            Some(other) => Err(ValueError::TypeMismatch {
                key: key.clone(),
                expected: "Tags",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingKey(key.clone())),
        }
    }

    /// Get a location value.
    pub fn get_location(&self, key: &FieldKey) -> Result<&Location, ValueError> {
        match self.get(key) {
            Some(FieldValue::Location(l)) => Ok(l),
            Some(other) => Err(ValueError::TypeMismatch {
                key: key.clone(),
                expected: "Location",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingKey(key.clone())),
        }
    }
}

impl IntoIterator for FormValues {
    type Item = (FieldKey, FieldValue);
    type IntoIter = std::collections::hash_map::IntoIter<FieldKey, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a FieldKey, &'a FieldValue);
    type IntoIter = std::collections::hash_map::Iter<'a, FieldKey, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut values = FormValues::new();
        values.insert("name", "Alice");
        values.insert("newsletter", true);

        assert_eq!(values.get_text(&FieldKey::new("name")).unwrap(), "Alice");
        assert!(values.get_bool(&FieldKey::new("newsletter")).unwrap());
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn type_mismatch_error() {
        let mut values = FormValues::new();
        values.insert("newsletter", true);

        let result = values.get_text(&FieldKey::new("newsletter"));
        assert!(matches!(result, Err(ValueError::TypeMismatch { .. })));
    }

    #[test]
    fn missing_key_error() {
        let values = FormValues::new();
        let result = values.get_location(&FieldKey::new("home"));
        assert!(matches!(result, Err(ValueError::MissingKey(_))));
    }

    #[test]
    fn filled_and_true_checks() {
        let mut values = FormValues::new();
        values.insert("empty", "");
        values.insert("flag", "true");
        values.insert("checked", true);

        assert!(!values.is_filled(&FieldKey::new("empty")));
        assert!(!values.is_filled(&FieldKey::new("missing")));
        assert!(values.is_filled(&FieldKey::new("flag")));
        assert!(!values.is_true(&FieldKey::new("flag")));
        assert!(values.is_true(&FieldKey::new("checked")));
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut values = FormValues::new();
        values.insert("name", "Alice");
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"name":"Alice"}"#);
    }
}
