use serde::{Deserialize, Serialize};

use crate::{FieldKey, FieldValue};

/// A single input in a form.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Identifier of this field in `FormValues`.
    key: FieldKey,

    /// The label shown next to the input.
    label: String,

    /// Passed through to native input validation.
    required: bool,

    /// The kind of field (determines input widget and value type).
    kind: FieldKind,

    /// Percentage points added to the progress while this field is filled in.
    progress_on_fill: u32,

    /// Only render this field while the referenced boolean field is `true`.
    only_show_if_checked: Option<FieldKey>,

    /// Value the field starts with, when truthy.
    initial: Option<FieldValue>,

    /// Link rendered directly below the input.
    bottom_link: Option<Link>,
}

impl FieldSpec {
    /// Create a new field.
    pub fn new(key: impl Into<FieldKey>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: false,
            kind,
            progress_on_fill: 0,
            only_show_if_checked: None,
            initial: None,
            bottom_link: None,
        }
    }

    /// Create a plain text input.
    pub fn text(key: impl Into<FieldKey>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Input(InputField::default()))
    }

    /// Create a text input with a specific HTML input type (`email`, `password`, ...).
    pub fn input(
        key: impl Into<FieldKey>,
        label: impl Into<String>,
        input_type: impl Into<String>,
    ) -> Self {
        Self::new(key, label, FieldKind::Input(InputField::new(input_type)))
    }

    /// Create a checkbox.
    pub fn checkbox(key: impl Into<FieldKey>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Checkbox(CheckboxField::default()))
    }

    /// Mark this field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the progress weight.
    pub fn with_progress(mut self, points: u32) -> Self {
        self.progress_on_fill = points;
        self
    }

    /// Show this field only while `key` is checked.
    pub fn only_show_if_checked(mut self, key: impl Into<FieldKey>) -> Self {
        self.only_show_if_checked = Some(key.into());
        self
    }

    /// Set the initial value.
    pub fn with_initial(mut self, value: impl Into<FieldValue>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Set the link rendered below the input.
    pub fn with_bottom_link(mut self, link: Link) -> Self {
        self.bottom_link = Some(link);
        self
    }

    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn progress_on_fill(&self) -> u32 {
        self.progress_on_fill
    }

    pub fn dependency(&self) -> Option<&FieldKey> {
        self.only_show_if_checked.as_ref()
    }

    pub fn initial(&self) -> Option<&FieldValue> {
        self.initial.as_ref()
    }

    pub fn bottom_link(&self) -> Option<&Link> {
        self.bottom_link.as_ref()
    }

    /// The value this field holds when the form is created.
    ///
    /// Select fields use their default option, then a truthy initial value
    /// wins, then checkboxes and switches use their checked default and
    /// interests fields their preselected tags. Everything else starts empty.
    pub fn initial_value(&self) -> FieldValue {
        if let FieldKind::Select(select) = &self.kind {
            return FieldValue::Text(select.default_value.clone().unwrap_or_default());
        }
        if let Some(initial) = self.initial.as_ref().filter(|v| v.is_filled()) {
            return initial.clone();
        }
        match &self.kind {
            FieldKind::Checkbox(checkbox) => FieldValue::Bool(checkbox.checked),
            FieldKind::Switch(switch) => FieldValue::Bool(switch.checked),
            FieldKind::Interests(interests) => FieldValue::Tags(interests.selected.clone()),
            _ => FieldValue::empty(),
        }
    }
}

/// The kind of field, determining the widget and how changes are stored.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Plain labeled input of any HTML input type.
    Input(InputField),

    /// A single checkbox with its label.
    Checkbox(CheckboxField),

    /// A binary toggle with a label on each side.
    Switch(SwitchField),

    /// A dropdown of fixed options.
    Select(SelectField),

    /// Location search input.
    Location,

    /// Tag picker over a fixed set of tags.
    Interests(InterestsField),

    /// Async search input; everything about the search is caller-configured.
    Autocomplete(AutocompleteField),
}

impl FieldKind {
    /// Whether this field stores a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Checkbox(_) | Self::Switch(_))
    }

    /// Whether changes to this field recompute progress right away
    /// instead of waiting for the input to lose focus.
    pub fn updates_instantly(&self) -> bool {
        matches!(self, Self::Select(_) | Self::Checkbox(_) | Self::Switch(_))
    }

    /// Short name used in logs and outlines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Checkbox(_) => "checkbox",
            Self::Switch(_) => "switch",
            Self::Select(_) => "select",
            Self::Location => "location",
            Self::Interests(_) => "interests",
            Self::Autocomplete(_) => "autocomplete",
        }
    }
}

/// Configuration for a plain input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    /// HTML input type, e.g. `text`, `email`, `password`.
    pub input_type: String,
}

impl InputField {
    pub fn new(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new("text")
    }
}

/// Configuration for a checkbox.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckboxField {
    /// Whether the box starts checked.
    pub checked: bool,
}

/// Configuration for a switch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchField {
    /// Whether the switch starts on the `true` side.
    pub checked: bool,

    /// Label on the `true` side.
    pub true_label: String,

    /// Label on the `false` side.
    pub false_label: String,
}

impl SwitchField {
    pub fn new(false_label: impl Into<String>, true_label: impl Into<String>) -> Self {
        Self {
            checked: false,
            true_label: true_label.into(),
            false_label: false_label.into(),
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// One option of a select field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The blank option prepended when `add_empty_value` is set.
    pub fn empty() -> Self {
        Self::new("", "")
    }
}

/// Configuration for a select field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectField {
    pub options: Vec<SelectOption>,

    /// Value selected when the form is created.
    pub default_value: Option<String>,

    /// Prepend a blank option.
    pub add_empty_value: bool,
}

impl SelectField {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            default_value: None,
            add_empty_value: false,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_empty_value(mut self) -> Self {
        self.add_empty_value = true;
        self
    }

    /// Options in display order, including the blank option if requested.
    pub fn display_options(&self) -> Vec<SelectOption> {
        let mut options = Vec::with_capacity(self.options.len() + 1);
        if self.add_empty_value {
            options.push(SelectOption::empty());
        }
        options.extend(self.options.iter().cloned());
        options
    }
}

/// A tag that can be picked in an interests field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Identity of the tag.
    pub slug: String,
    pub name: String,
}

impl Tag {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// Configuration for an interests (tag picker) field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterestsField {
    /// Every tag that can be picked.
    pub available: Vec<Tag>,

    /// Tags picked when the form is created.
    pub selected: Vec<Tag>,

    /// Free-text explanation shown with the picker.
    pub info: Option<String>,
}

impl InterestsField {
    pub fn new(available: Vec<Tag>) -> Self {
        Self {
            available,
            selected: Vec::new(),
            info: None,
        }
    }

    pub fn with_selected(mut self, selected: Vec<Tag>) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

/// Configuration for an autocomplete search field.
///
/// Passed through untouched to the search widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutocompleteField {
    pub label: String,

    /// Endpoint the widget queries.
    pub base_url: String,

    /// Accept input that matches no suggestion.
    pub free_solo: bool,

    pub clear_on_select: bool,

    pub helper_text: Option<String>,

    /// Suggestions to hide, by label.
    pub filter_out: Vec<String>,
}

impl AutocompleteField {
    pub fn new(label: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// A hyperlink decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}
