//! Serde shapes of the JSON form configuration.
//!
//! Fields are declared with a string `type` tag and an optional `select`
//! block. Converting a `FieldConfig` into a `FieldSpec` resolves the tag into
//! a `FieldKind`, first match wins:
//!
//! 1. a `select` block makes a select field,
//! 2. `checkbox`, `switch`, `location`, `interests`, `autocomplete`,
//! 3. anything else (or no type at all) is a plain input of that type.

use serde::{Deserialize, Serialize};

use crate::{
    AutocompleteField, CheckboxField, FieldKind, FieldSpec, FieldValue, FormAction, FormDefinition,
    InputField, InterestsField, Link, Messages, SelectField, SelectOption, SwitchField, Tag,
};

/// Top-level form configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormConfig {
    pub fields: Vec<FieldConfig>,
    pub messages: Messages,
    pub bottom_link: Option<Link>,
    pub percentage: u32,
    pub use_percentage: bool,
    pub align_buttons_right: bool,
    pub form_action: Option<FormAction>,
    pub autocomplete: Option<String>,
}

/// One field as written in configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    pub key: String,
    pub label: String,
    pub required: bool,

    #[serde(rename = "type")]
    pub field_type: Option<String>,

    pub progress_on_fill: u32,
    pub select: Option<SelectConfig>,
    pub only_show_if_checked: Option<String>,
    pub value: Option<FieldValue>,
    pub checked: bool,
    pub true_label: String,
    pub false_label: String,
    pub all_tags: Vec<Tag>,
    pub selected_tags: Vec<Tag>,
    pub interests_info: Option<String>,
    pub auto_complete_props: Option<AutocompleteField>,
    pub bottom_link: Option<Link>,
}

/// The `select` block of a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectConfig {
    pub values: Vec<SelectOption>,
    pub default_value: Option<String>,
    pub add_empty_value: bool,
}

impl FieldConfig {
    /// Resolve the string type tag into a field kind.
    pub fn kind(&self) -> FieldKind {
        if let Some(select) = &self.select {
            return FieldKind::Select(SelectField {
                options: select.values.clone(),
                default_value: select.default_value.clone(),
                add_empty_value: select.add_empty_value,
            });
        }
        match self.field_type.as_deref() {
            Some("checkbox") => FieldKind::Checkbox(CheckboxField {
                checked: self.checked,
            }),
            Some("switch") => FieldKind::Switch(SwitchField {
                checked: self.checked,
                true_label: self.true_label.clone(),
                false_label: self.false_label.clone(),
            }),
            Some("location") => FieldKind::Location,
            Some("interests") => FieldKind::Interests(InterestsField {
                available: self.all_tags.clone(),
                selected: self.selected_tags.clone(),
                info: self.interests_info.clone(),
            }),
            Some("autocomplete") => {
                let mut props = self.auto_complete_props.clone().unwrap_or_default();
                if props.label.is_empty() {
                    props.label = self.label.clone();
                }
                FieldKind::Autocomplete(props)
            }
            Some(other) => FieldKind::Input(InputField::new(other)),
            None => FieldKind::Input(InputField::default()),
        }
    }
}

impl From<FieldConfig> for FieldSpec {
    fn from(config: FieldConfig) -> Self {
        let mut spec = FieldSpec::new(config.key.as_str(), config.label.as_str(), config.kind())
            .with_progress(config.progress_on_fill);
        if config.required {
            spec = spec.required();
        }
        if let Some(dependency) = config.only_show_if_checked {
            spec = spec.only_show_if_checked(dependency);
        }
        if let Some(value) = config.value {
            spec = spec.with_initial(value);
        }
        if let Some(link) = config.bottom_link {
            spec = spec.with_bottom_link(link);
        }
        spec
    }
}

impl From<FormConfig> for FormDefinition {
    fn from(config: FormConfig) -> Self {
        Self {
            fields: config.fields.into_iter().map(FieldSpec::from).collect(),
            messages: config.messages,
            bottom_link: config.bottom_link,
            base_percentage: config.percentage,
            use_percentage: config.use_percentage,
            align_buttons_right: config.align_buttons_right,
            form_action: config.form_action,
            autocomplete: config.autocomplete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    fn field(json: &str) -> FieldSpec {
        let config: FieldConfig = serde_json::from_str(json).unwrap();
        FieldSpec::from(config)
    }

    #[test]
    fn select_block_wins_over_type() {
        let spec = field(
            r#"{"key": "c", "type": "checkbox", "select": {"values": [{"label": "A", "value": "a"}]}}"#,
        );
        assert!(matches!(spec.kind(), FieldKind::Select(s) if s.options.len() == 1));
    }

    #[test]
    fn known_type_tags() {
        assert!(matches!(
            field(r#"{"key": "a", "type": "checkbox", "checked": true}"#).kind(),
            FieldKind::Checkbox(CheckboxField { checked: true })
        ));
        assert!(matches!(
            field(r#"{"key": "a", "type": "switch", "trueLabel": "Org", "falseLabel": "Person"}"#)
                .kind(),
            FieldKind::Switch(s) if s.true_label == "Org" && s.false_label == "Person"
        ));
        assert!(matches!(
            field(r#"{"key": "a", "type": "location"}"#).kind(),
            FieldKind::Location
        ));
        assert!(matches!(
            field(r#"{"key": "a", "type": "interests", "allTags": [{"slug": "x", "name": "X"}]}"#)
                .kind(),
            FieldKind::Interests(i) if i.available.len() == 1
        ));
    }

    #[test]
    fn unknown_type_is_plain_input() {
        let spec = field(r#"{"key": "age", "type": "number"}"#);
        assert!(matches!(spec.kind(), FieldKind::Input(i) if i.input_type == "number"));

        let spec = field(r#"{"key": "odd", "type": "hologram"}"#);
        assert!(matches!(spec.kind(), FieldKind::Input(i) if i.input_type == "hologram"));

        let spec = field(r#"{"key": "untyped"}"#);
        assert!(matches!(spec.kind(), FieldKind::Input(i) if i.input_type == "text"));
    }

    #[test]
    fn autocomplete_without_props_uses_field_label() {
        let spec = field(r#"{"key": "org", "label": "Organization", "type": "autocomplete"}"#);
        assert!(matches!(spec.kind(), FieldKind::Autocomplete(a) if a.label == "Organization"));
    }

    #[test]
    fn full_form_round_trip_through_definition() {
        let json = r#"{
            "fields": [
                {"key": "first_name", "label": "First name", "required": true, "progressOnFill": 20},
                {"key": "newsletter", "label": "Newsletter", "type": "checkbox"},
                {"key": "email", "label": "Email", "type": "email", "onlyShowIfChecked": "newsletter"}
            ],
            "messages": {"submitMessage": "Next", "skipMessage": "Skip"},
            "bottomLink": {"text": "Log in", "href": "/signin"},
            "percentage": 10,
            "usePercentage": true,
            "alignButtonsRight": true
        }"#;
        let definition = FormDefinition::from_json(json).unwrap();
        assert_eq!(definition.len(), 3);
        assert_eq!(definition.base_percentage, 10);
        assert!(definition.use_percentage);
        assert!(definition.has_skip_button());
        assert!(definition.fields[0].is_required());
        assert_eq!(definition.fields[0].progress_on_fill(), 20);
        assert_eq!(
            definition.fields[2].dependency().map(|k| k.as_str()),
            Some("newsletter")
        );
    }

    #[test]
    fn form_action_and_autocomplete() {
        let json = r#"{
            "fields": [],
            "formAction": {"action": "/signup/"},
            "autocomplete": "off"
        }"#;
        let definition = FormDefinition::from_json(json).unwrap();
        assert_eq!(definition.form_action, Some(FormAction::post("/signup/")));
        assert_eq!(definition.autocomplete.as_deref(), Some("off"));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = FormDefinition::from_json("{\"fields\": 3}").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn duplicate_keys_fail_on_load() {
        let json = r#"{"fields": [{"key": "a"}, {"key": "a"}]}"#;
        assert!(matches!(
            FormDefinition::from_json(json),
            Err(ConfigError::DuplicateKey(_))
        ));
    }
}
