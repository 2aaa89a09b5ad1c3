use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier of a form field, e.g. `"first_name"`.
///
/// Used as keys in `FormValues` and as the target of
/// `only_show_if_checked` dependencies. Keys must be unique within a form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey {
    key: String,
}

impl FieldKey {
    /// Create a new key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Check if the key is empty (or only whitespace).
    pub fn is_empty(&self) -> bool {
        self.key.trim().is_empty()
    }

    /// Id suitable for DOM elements and widget ids.
    pub fn dom_id(&self) -> String {
        self.key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
            .collect()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for FieldKey {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&FieldKey> for FieldKey {
    fn from(key: &FieldKey) -> Self {
        key.clone()
    }
}

impl PartialEq<str> for FieldKey {
    fn eq(&self, other: &str) -> bool {
        self.key == other
    }
}

impl PartialEq<&str> for FieldKey {
    fn eq(&self, other: &&str) -> bool {
        self.key == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let key = FieldKey::new("first_name");
        assert_eq!(key.as_str(), "first_name");
    }

    #[test]
    fn blank_key_is_empty() {
        assert!(FieldKey::new("").is_empty());
        assert!(FieldKey::new("  ").is_empty());
        assert!(!FieldKey::new("a").is_empty());
    }

    #[test]
    fn dom_id_replaces_separators() {
        assert_eq!(FieldKey::new("address.city").dom_id(), "address-city");
        assert_eq!(FieldKey::new("first_name").dom_id(), "first-name");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", FieldKey::new("email")), "email");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let key: FieldKey = serde_json::from_str("\"newsletter\"").unwrap();
        assert_eq!(key, "newsletter");
    }
}
