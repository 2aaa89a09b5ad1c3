use crate::FieldKey;

/// Error type for building a form definition.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A field was declared without a key.
    #[error("Field #{index} has an empty key")]
    EmptyKey { index: usize },

    /// Two fields share a key.
    #[error("Duplicate field key: {0}")]
    DuplicateKey(FieldKey),

    /// `only_show_if_checked` names a field that does not exist.
    #[error("Field '{field}' depends on unknown field '{dependency}'")]
    UnknownDependency { field: FieldKey, dependency: FieldKey },

    /// `only_show_if_checked` names a field that is not a checkbox or switch.
    #[error("Field '{field}' depends on '{dependency}', which is not a checkbox or switch")]
    DependencyNotBoolean { field: FieldKey, dependency: FieldKey },

    /// Following `only_show_if_checked` from this field leads back to it.
    #[error("Field '{0}' is only shown while itself or one of its dependents is checked")]
    DependencyCycle(FieldKey),

    /// Two keys map to the same DOM and widget id.
    #[error("Fields '{first}' and '{second}' share the element id '{id}'")]
    DomIdCollision {
        first: FieldKey,
        second: FieldKey,
        id: String,
    },

    /// The configuration could not be parsed.
    #[error("Invalid form configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Check if this error comes from malformed input rather than a broken field list.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
