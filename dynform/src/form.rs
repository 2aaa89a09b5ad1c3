//! The dynamic form state machine.

use std::fmt;

use dynform_types::{
    FieldKey, FieldKind, FieldSpec, FieldValue, FormDefinition, FormRenderer, FormValues, Tag,
    Theme,
};

use crate::FormError;
use crate::progress::compute_progress;

/// Called with the current values and whether the skip button was used.
pub type SubmitHandler = Box<dyn FnMut(&FormValues, bool)>;

/// Called with the current values when the user navigates back.
pub type GoBackHandler = Box<dyn FnMut(&FormValues)>;

/// Build the starting values: exactly one entry per field.
pub fn initialize(fields: &[FieldSpec]) -> FormValues {
    let mut values = FormValues::new();
    for field in fields {
        values.insert(field.key(), field.initial_value());
    }
    values
}

/// A mounted form: its definition, the values the user entered, and the
/// derived progress.
///
/// All state lives here and is dropped with the form. Handlers run to
/// completion one at a time.
pub struct DynamicForm {
    definition: FormDefinition,
    values: FormValues,
    progress: u32,
    error_message: Option<String>,
    theme: Theme,
    on_submit: Option<SubmitHandler>,
    on_go_back: Option<GoBackHandler>,
}

impl fmt::Debug for DynamicForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicForm")
            .field("definition", &self.definition)
            .field("values", &self.values)
            .field("progress", &self.progress)
            .field("error_message", &self.error_message)
            .field("has_submit_handler", &self.on_submit.is_some())
            .field("has_go_back_handler", &self.on_go_back.is_some())
            .finish()
    }
}

impl DynamicForm {
    /// Mount a form. Fails if the definition has empty or duplicate keys or
    /// broken visibility dependencies.
    pub fn new(definition: FormDefinition) -> Result<Self, FormError> {
        definition.validate()?;

        let values = initialize(definition.fields());

        tracing::debug!(fields = definition.len(), "form mounted");

        Ok(Self {
            progress: definition.base_percentage,
            definition,
            values,
            error_message: None,
            theme: Theme::default(),
            on_submit: None,
            on_go_back: None,
        })
    }

    /// Mount a form from its JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Self::new(FormDefinition::from_json(json)?)
    }

    /// Set the submit handler.
    pub fn on_submit(mut self, handler: impl FnMut(&FormValues, bool) + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    /// Set the go-back handler. The header shows a back control only when one is set.
    pub fn on_go_back(mut self, handler: impl FnMut(&FormValues) + 'static) -> Self {
        self.on_go_back = Some(Box::new(handler));
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.set_error_message(message);
        self
    }

    /// Show an error above the fields, verbatim.
    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error_message(&mut self) {
        self.error_message = None;
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Consume the form, keeping the values.
    pub fn into_values(self) -> FormValues {
        self.values
    }

    /// The displayed progress as of the last recomputation.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn has_back_handler(&self) -> bool {
        self.on_go_back.is_some()
    }

    /// Tags currently picked in an interests field. Empty for other fields.
    pub fn selected_tags(&self, key: &FieldKey) -> &[Tag] {
        self.values.get(key).map(FieldValue::tags).unwrap_or(&[])
    }

    /// Whether a field is rendered: fields without a dependency always are,
    /// the rest only while the referenced field is exactly `true`.
    pub fn is_visible(&self, field: &FieldSpec) -> bool {
        match field.dependency() {
            Some(dependency) => self.values.is_true(dependency),
            None => true,
        }
    }

    fn field(&self, key: &FieldKey) -> Result<&FieldSpec, FormError> {
        self.definition.field(key).ok_or_else(|| {
            tracing::warn!(field = %key, "change for unknown field");
            FormError::UnknownField(key.clone())
        })
    }

    /// Store a new value for a field.
    ///
    /// Checkboxes and switches store a boolean (text is coerced by
    /// truthiness), every other field stores the value as given. Fields that
    /// are only shown while `key` is checked are reset to empty text. With
    /// `update_instantly`, progress is recomputed from the new values right
    /// away; otherwise it waits for the next blur.
    pub fn handle_value_change(
        &mut self,
        key: impl Into<FieldKey>,
        value: impl Into<FieldValue>,
        update_instantly: bool,
    ) -> Result<(), FormError> {
        let key = key.into();
        let field = self.field(&key)?;
        let value = match (field.kind().is_boolean(), value.into()) {
            (true, FieldValue::Bool(checked)) => FieldValue::Bool(checked),
            (true, other) => FieldValue::Bool(other.is_filled()),
            (false, other) => other,
        };

        let dependents: Vec<FieldKey> = self
            .definition
            .dependents(&key)
            .map(|f| f.key().clone())
            .collect();

        tracing::debug!(field = %key, value = ?value, "value changed");
        self.values.insert(key, value);

        for dependent in dependents {
            tracing::debug!(field = %dependent, "dependent field reset");
            self.values.insert(dependent, FieldValue::empty());
        }

        if update_instantly {
            self.update_progress();
        }
        Ok(())
    }

    /// Store a new value, recomputing progress right away only for kinds
    /// that do so (select, checkbox, switch).
    pub fn set_value(
        &mut self,
        key: impl Into<FieldKey>,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let key = key.into();
        let instantly = self.field(&key)?.kind().updates_instantly();
        self.handle_value_change(key, value, instantly)
    }

    /// Store a location pick or the typed search text.
    ///
    /// Unlike `handle_value_change` this touches neither dependents nor progress.
    pub fn handle_location_change(
        &mut self,
        key: impl Into<FieldKey>,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let key = key.into();
        self.expect_kind(&key, "location", |kind| matches!(kind, FieldKind::Location))?;
        let value = value.into();
        tracing::debug!(field = %key, value = ?value, "location changed");
        self.values.insert(key, value);
        Ok(())
    }

    /// An input lost focus: recompute progress from the current values.
    pub fn handle_blur(&mut self) {
        self.update_progress();
    }

    /// Progress for an arbitrary snapshot of values, using this form's base and weights.
    pub fn compute_progress(&self, snapshot: &FormValues) -> u32 {
        compute_progress(
            self.definition.base_percentage,
            self.definition.fields(),
            snapshot,
        )
    }

    fn update_progress(&mut self) {
        let progress = self.compute_progress(&self.values);
        if progress != self.progress {
            tracing::debug!(from = self.progress, to = progress, "progress updated");
        }
        self.progress = progress;
    }

    fn expect_kind(
        &self,
        key: &FieldKey,
        expected: &'static str,
        is_expected: impl Fn(&FieldKind) -> bool,
    ) -> Result<(), FormError> {
        let kind = self.field(key)?.kind();
        if is_expected(kind) {
            return Ok(());
        }
        tracing::warn!(field = %key, expected, actual = kind.name(), "change for wrong field kind");
        Err(FormError::WrongKind {
            key: key.clone(),
            expected,
            actual: kind.name(),
        })
    }

    fn interests_field(&self, key: &FieldKey) -> Result<(), FormError> {
        self.expect_kind(key, "interests", |kind| matches!(kind, FieldKind::Interests(_)))
    }

    /// Pick a tag in an interests field. Returns `false` if it was already picked.
    ///
    /// Picks are stored as the field's value and recompute progress right away.
    pub fn add_tag(&mut self, key: impl Into<FieldKey>, tag: Tag) -> Result<bool, FormError> {
        let key = key.into();
        self.interests_field(&key)?;
        let mut selected = self.selected_tags(&key).to_vec();
        if selected.iter().any(|t| t.slug == tag.slug) {
            return Ok(false);
        }
        tracing::debug!(field = %key, tag = %tag.slug, "tag added");
        selected.push(tag);
        self.values.insert(key, selected);
        self.update_progress();
        Ok(true)
    }

    /// Unpick a tag by slug. Returns `false` if it was not picked.
    pub fn remove_tag(&mut self, key: impl Into<FieldKey>, slug: &str) -> Result<bool, FormError> {
        let key = key.into();
        self.interests_field(&key)?;
        let mut selected = self.selected_tags(&key).to_vec();
        let before = selected.len();
        selected.retain(|t| t.slug != slug);
        if selected.len() == before {
            return Ok(false);
        }
        tracing::debug!(field = %key, tag = slug, "tag removed");
        self.values.insert(key, selected);
        self.update_progress();
        Ok(true)
    }

    /// Submit through the primary button.
    pub fn submit(&mut self) {
        tracing::debug!("form submitted");
        if let Some(handler) = self.on_submit.as_mut() {
            handler(&self.values, false);
        }
    }

    /// Submit through the skip button, which only exists with a skip
    /// message and right-aligned buttons.
    pub fn skip(&mut self) -> Result<(), FormError> {
        if !self.definition.has_skip_button() {
            tracing::warn!("skip requested without a skip button");
            return Err(FormError::SkipUnavailable);
        }
        tracing::debug!("form skipped");
        if let Some(handler) = self.on_submit.as_mut() {
            handler(&self.values, true);
        }
        Ok(())
    }

    /// Hand the current values to the go-back handler.
    pub fn go_back(&mut self) -> Result<(), FormError> {
        let Some(handler) = self.on_go_back.as_mut() else {
            return Err(FormError::NoBackHandler);
        };
        tracing::debug!("form went back");
        handler(&self.values);
        Ok(())
    }

    /// Render the current view with the given renderer and this form's theme.
    pub fn render<R: FormRenderer>(&self, renderer: &R) -> Result<R::Output, R::Error> {
        renderer.render_form(&self.view(), &self.theme)
    }
}
