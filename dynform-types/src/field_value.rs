use serde::{Deserialize, Serialize};

use crate::{Location, Tag};

/// The current value of a single form field.
///
/// This is the value stored in `FormValues` for each field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Raw text (text inputs, selects, autocomplete).
    Text(String),

    /// Checked state (checkboxes and switches).
    Bool(bool),

    /// A resolved location search result.
    Location(Location),

    /// Tags picked in an interests field, in pick order.
    Tags(Vec<Tag>),
}

impl FieldValue {
    /// The empty value every non-boolean field starts from.
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Whether this value counts as filled in: non-empty text, `true`, any
    /// location, or at least one picked tag.
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Location(_) => true,
            Self::Tags(tags) => !tags.is_empty(),
        }
    }

    /// Strict check for `Bool(true)`. Text like `"true"` does not count.
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a location.
    pub fn as_location(&self) -> Option<&Location> {
        match self {
            Self::Location(l) => Some(l),
            _ => None,
        }
    }

    /// Picked tags. Empty for any other value.
    pub fn tags(&self) -> &[Tag] {
        match self {
            Self::Tags(tags) => tags,
            _ => &[],
        }
    }

    /// Text shown inside an input for this value.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Bool(_) | Self::Tags(_) => "",
            Self::Location(l) => &l.name,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Bool(_) => "Bool",
            Self::Location(_) => "Location",
            Self::Tags(_) => "Tags",
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Tag>> for FieldValue {
    fn from(tags: Vec<Tag>) -> Self {
        Self::Tags(tags)
    }
}

impl From<Location> for FieldValue {
    fn from(l: Location) -> Self {
        Self::Location(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!FieldValue::empty().is_filled());
        assert!(FieldValue::from("x").is_filled());
        assert!(!FieldValue::from(false).is_filled());
        assert!(FieldValue::from(true).is_filled());
        assert!(FieldValue::from(Location::new("Berlin")).is_filled());
        assert!(!FieldValue::Tags(Vec::new()).is_filled());
        assert!(FieldValue::from(vec![Tag::new("food", "Food")]).is_filled());
    }

    #[test]
    fn only_bool_true_is_true() {
        assert!(FieldValue::Bool(true).is_true());
        assert!(!FieldValue::from("true").is_true());
        assert!(!FieldValue::Bool(false).is_true());
    }

    #[test]
    fn untagged_json() {
        let text: FieldValue = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(text, FieldValue::from("hello"));

        let flag: FieldValue = serde_json::from_str("true").unwrap();
        assert_eq!(flag, FieldValue::Bool(true));

        let place: FieldValue =
            serde_json::from_str(r#"{"name": "Lyon", "country": "France"}"#).unwrap();
        assert_eq!(place.as_location().map(|l| l.name.as_str()), Some("Lyon"));

        let tags: FieldValue =
            serde_json::from_str(r#"[{"slug": "food", "name": "Food"}]"#).unwrap();
        assert_eq!(tags.tags(), &[Tag::new("food", "Food")]);
    }
}
