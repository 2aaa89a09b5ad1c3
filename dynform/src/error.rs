use dynform_types::{ConfigError, FieldKey};

/// Error type for form operations.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A handler was called with a key that is not in the field list.
    #[error("Unknown field: {0}")]
    UnknownField(FieldKey),

    /// A kind-specific operation was called on a field of another kind.
    #[error("Field '{key}' is a {actual} field, expected {expected}")]
    WrongKind {
        key: FieldKey,
        expected: &'static str,
        actual: &'static str,
    },

    /// Skip was requested but the layout has no skip button.
    #[error("This form has no skip button")]
    SkipUnavailable,

    /// Go back was requested but no handler was supplied.
    #[error("This form has no go-back handler")]
    NoBackHandler,

    /// The definition violates a precondition.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FormError {
    /// Check if this error comes from the definition rather than from an event.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Error type for answer chip interactions.
#[derive(Debug, thiserror::Error)]
pub enum ChipError {
    #[error("No answer at index {index} (question has {len} answers)")]
    NoSuchAnswer { index: usize, len: usize },
}
