use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{ConfigError, FieldKey, FieldSpec, FormConfig, Link, Messages};

/// Where the rendered form posts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAction {
    pub action: String,

    #[serde(default = "FormAction::default_method")]
    pub method: String,
}

impl FormAction {
    pub fn new(action: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: method.into(),
        }
    }

    /// Post to `action`.
    pub fn post(action: impl Into<String>) -> Self {
        Self::new(action, Self::default_method())
    }

    fn default_method() -> String {
        "post".to_string()
    }
}

/// Everything needed to render one form: the fields and the static configuration around them.
///
/// A definition is presentation-agnostic. It can be driven interactively,
/// rendered to HTML, or outlined in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDefinition {
    /// All fields, in display order.
    pub fields: Vec<FieldSpec>,

    pub messages: Messages,

    /// Link shown below the form.
    pub bottom_link: Option<Link>,

    /// Progress before any field is filled in.
    pub base_percentage: u32,

    /// Show the progress bar.
    pub use_percentage: bool,

    /// Right-align the buttons. The skip button only exists in this layout.
    pub align_buttons_right: bool,

    /// Target of a native form submission.
    pub form_action: Option<FormAction>,

    /// Form-level browser autocomplete hint, e.g. `"off"`.
    pub autocomplete: Option<String>,
}

impl FormDefinition {
    /// Create a new definition with the given fields.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    /// Create a definition without fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse and validate a definition from its JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        let definition = Self::from(config);
        definition.validate()?;
        Ok(definition)
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_bottom_link(mut self, link: Link) -> Self {
        self.bottom_link = Some(link);
        self
    }

    /// Show the progress bar, starting at `base`.
    pub fn with_percentage(mut self, base: u32) -> Self {
        self.base_percentage = base;
        self.use_percentage = true;
        self
    }

    pub fn with_buttons_right(mut self) -> Self {
        self.align_buttons_right = true;
        self
    }

    pub fn with_form_action(mut self, action: FormAction) -> Self {
        self.form_action = Some(action);
        self
    }

    pub fn with_autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    /// Get the fields.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by key.
    pub fn field(&self, key: &FieldKey) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key() == key)
    }

    /// Fields that are only shown while `key` is checked.
    pub fn dependents<'a>(&'a self, key: &'a FieldKey) -> impl Iterator<Item = &'a FieldSpec> {
        self.fields
            .iter()
            .filter(move |f| f.dependency() == Some(key))
    }

    /// Whether the skip button is part of the layout.
    pub fn has_skip_button(&self) -> bool {
        self.messages.skip_message.is_some() && self.align_buttons_right
    }

    /// Check if the form has any fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check the preconditions the form relies on: non-empty unique keys
    /// with distinct element ids, and acyclic visibility dependencies that
    /// point at checkboxes or switches.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        let mut ids: HashMap<String, &FieldKey> = HashMap::with_capacity(self.fields.len());
        for (index, field) in self.fields.iter().enumerate() {
            if field.key().is_empty() {
                return Err(ConfigError::EmptyKey { index });
            }
            if !seen.insert(field.key()) {
                return Err(ConfigError::DuplicateKey(field.key().clone()));
            }
            let id = field.key().dom_id();
            if let Some(first) = ids.get(&id) {
                return Err(ConfigError::DomIdCollision {
                    first: (*first).clone(),
                    second: field.key().clone(),
                    id,
                });
            }
            ids.insert(id, field.key());
        }

        for field in &self.fields {
            let Some(dependency) = field.dependency() else {
                continue;
            };
            match self.field(dependency) {
                None => {
                    return Err(ConfigError::UnknownDependency {
                        field: field.key().clone(),
                        dependency: dependency.clone(),
                    });
                }
                Some(target) if !target.kind().is_boolean() => {
                    return Err(ConfigError::DependencyNotBoolean {
                        field: field.key().clone(),
                        dependency: dependency.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        for field in &self.fields {
            self.check_acyclic(field)?;
        }

        Ok(())
    }

    /// Walk the dependency chain from `field`. Every link was checked to exist.
    fn check_acyclic(&self, field: &FieldSpec) -> Result<(), ConfigError> {
        let mut current = field;
        for _ in 0..self.fields.len() {
            let Some(next) = current.dependency().and_then(|dep| self.field(dep)) else {
                return Ok(());
            };
            if next.key() == field.key() {
                return Err(ConfigError::DependencyCycle(field.key().clone()));
            }
            current = next;
        }
        Err(ConfigError::DependencyCycle(field.key().clone()))
    }
}
