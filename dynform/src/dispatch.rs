//! Render dispatch: turning form state into a `FormView`.

use dynform_types::{
    ButtonsView, DEFAULT_SUBMIT_LABEL, FieldKind, FieldSpec, FieldView, FormView, HeaderView, Tag,
    SwitchSide, Widget,
};

use crate::DynamicForm;

/// Tags that can still be picked: every available tag whose slug is not selected.
pub fn tag_candidates<'a>(available: &'a [Tag], selected: &[Tag]) -> Vec<&'a Tag> {
    available
        .iter()
        .filter(|tag| !selected.iter().any(|s| s.slug == tag.slug))
        .collect()
}

impl DynamicForm {
    /// Build the view for the current state.
    ///
    /// Fields keep their list order; hidden fields are left out.
    pub fn view(&self) -> FormView<'_> {
        let definition = self.definition();
        let messages = &definition.messages;

        let header = messages
            .header_message
            .as_deref()
            .map(|message| HeaderView {
                message,
                show_back: self.has_back_handler(),
            });

        let first = definition.fields().first().map(FieldSpec::key);
        let fields = definition
            .fields()
            .iter()
            .filter(|field| self.is_visible(field))
            .map(|field| self.field_view(field, first == Some(field.key())))
            .collect();

        let skip_label = if definition.has_skip_button() {
            messages.skip_message.as_deref()
        } else {
            None
        };

        FormView {
            header,
            heading: messages.heading_message.as_deref(),
            progress: definition.use_percentage.then_some(self.progress()),
            explanation: messages.explanation_message.as_deref(),
            error_message: self.error_message(),
            fields,
            buttons: ButtonsView {
                submit_label: messages
                    .submit_message
                    .as_deref()
                    .unwrap_or(DEFAULT_SUBMIT_LABEL),
                skip_label,
                align_right: definition.align_buttons_right,
            },
            bottom_message: messages.bottom_message.as_deref(),
            bottom_link: definition.bottom_link.as_ref(),
            form_action: definition.form_action.as_ref(),
            autocomplete: definition.autocomplete.as_deref(),
        }
    }

    fn field_view<'a>(&'a self, spec: &'a FieldSpec, is_first: bool) -> FieldView<'a> {
        let key = spec.key();
        let values = self.values();
        let text = values.display_text(key);

        let (widget, autofocus) = match spec.kind() {
            FieldKind::Select(select) => (
                Widget::Select {
                    options: select.display_options(),
                    selected: text,
                },
                false,
            ),
            FieldKind::Checkbox(_) => (
                Widget::Checkbox {
                    checked: values.is_true(key),
                },
                false,
            ),
            FieldKind::Switch(switch) => (
                Widget::Switch {
                    switch,
                    active: SwitchSide::from_checked(values.is_true(key)),
                },
                false,
            ),
            FieldKind::Location => (
                Widget::Location {
                    seed: spec.initial(),
                    text,
                },
                false,
            ),
            FieldKind::Interests(interests) => {
                let selected = self.selected_tags(key);
                (
                    Widget::Interests {
                        candidates: tag_candidates(&interests.available, selected),
                        selected,
                        info: interests.info.as_deref(),
                    },
                    false,
                )
            }
            FieldKind::Autocomplete(props) => (Widget::Autocomplete { props }, is_first),
            FieldKind::Input(input) => (
                Widget::Input {
                    input_type: &input.input_type,
                    value: text,
                },
                is_first,
            ),
        };

        FieldView {
            spec,
            autofocus,
            widget,
        }
    }
}

#[cfg(test)]
mod tests {
    use dynform_types::{
        AutocompleteField, FieldKey, FormDefinition, InterestsField, Link, Messages, SelectField,
        SelectOption, SwitchField,
    };

    use super::*;

    fn kinds<'a>(view: &'a FormView<'a>) -> Vec<(&'a str, &'static str)> {
        view.fields
            .iter()
            .map(|f| (f.spec.key().as_str(), f.spec.kind().name()))
            .collect()
    }

    #[test]
    fn empty_form_has_no_fields() {
        let form = DynamicForm::new(FormDefinition::empty()).unwrap();
        let view = form.view();
        assert!(view.fields.is_empty());
        assert_eq!(view.buttons.submit_label, DEFAULT_SUBMIT_LABEL);
        assert_eq!(view.progress, None);
    }

    #[test]
    fn every_kind_gets_its_widget() {
        let form = DynamicForm::new(FormDefinition::new(vec![
            FieldSpec::new(
                "role",
                "Role",
                FieldKind::Select(
                    SelectField::new(vec![SelectOption::new("Dev", "dev")])
                        .with_default("dev")
                        .with_empty_value(),
                ),
            ),
            FieldSpec::checkbox("terms", "Terms"),
            FieldSpec::new(
                "kind",
                "Kind",
                FieldKind::Switch(SwitchField::new("Person", "Organization")),
            ),
            FieldSpec::new("home", "Home", FieldKind::Location),
            FieldSpec::new(
                "topics",
                "Topics",
                FieldKind::Interests(
                    InterestsField::new(vec![Tag::new("a", "A"), Tag::new("b", "B")])
                        .with_selected(vec![Tag::new("b", "B")]),
                ),
            ),
            FieldSpec::new(
                "org",
                "Organization",
                FieldKind::Autocomplete(AutocompleteField::new("Organization", "/api/orgs")),
            ),
            FieldSpec::input("age", "Age", "number"),
        ]))
        .unwrap();
        let view = form.view();

        assert_eq!(
            kinds(&view),
            vec![
                ("role", "select"),
                ("terms", "checkbox"),
                ("kind", "switch"),
                ("home", "location"),
                ("topics", "interests"),
                ("org", "autocomplete"),
                ("age", "input"),
            ]
        );

        match &view.fields[0].widget {
            Widget::Select { options, selected } => {
                assert_eq!(options.len(), 2);
                assert_eq!(options[0].value, "");
                assert_eq!(*selected, "dev");
            }
            other => panic!("expected select, got {other:?}"),
        }
        assert!(matches!(
            view.fields[2].widget,
            Widget::Switch { active: SwitchSide::False, .. }
        ));
        match &view.fields[4].widget {
            Widget::Interests { candidates, selected, .. } => {
                assert_eq!(candidates, &vec![&Tag::new("a", "A")]);
                assert_eq!(selected.len(), 1);
            }
            other => panic!("expected interests, got {other:?}"),
        }
        assert!(matches!(
            view.fields[6].widget,
            Widget::Input { input_type: "number", value: "" }
        ));
    }

    #[test]
    fn only_the_first_field_autofocuses() {
        let form = DynamicForm::new(FormDefinition::new(vec![
            FieldSpec::text("first", "First"),
            FieldSpec::text("second", "Second"),
        ]))
        .unwrap();
        let view = form.view();
        assert!(view.fields[0].autofocus);
        assert!(!view.fields[1].autofocus);
    }

    #[test]
    fn dependents_follow_their_checkbox() {
        let mut form = DynamicForm::new(FormDefinition::new(vec![
            FieldSpec::checkbox("newsletter", "Newsletter"),
            FieldSpec::text("email", "Email").only_show_if_checked("newsletter"),
            FieldSpec::new(
                "topics",
                "Topics",
                FieldKind::Interests(InterestsField::default()),
            )
            .only_show_if_checked("newsletter"),
        ]))
        .unwrap();
        assert_eq!(kinds(&form.view()), vec![("newsletter", "checkbox")]);

        form.set_value("newsletter", true).unwrap();
        assert_eq!(
            kinds(&form.view()),
            vec![
                ("newsletter", "checkbox"),
                ("email", "input"),
                ("topics", "interests")
            ]
        );

        form.set_value("newsletter", false).unwrap();
        assert_eq!(kinds(&form.view()), vec![("newsletter", "checkbox")]);
    }

    #[test]
    fn switch_marks_the_active_side() {
        let mut form = DynamicForm::new(FormDefinition::new(vec![FieldSpec::new(
            "kind",
            "Kind",
            FieldKind::Switch(SwitchField::new("Person", "Organization")),
        )]))
        .unwrap();
        form.set_value("kind", true).unwrap();
        assert!(matches!(
            form.view().fields[0].widget,
            Widget::Switch { active: SwitchSide::True, .. }
        ));
    }

    #[test]
    fn header_back_control_needs_message_and_handler() {
        let definition =
            FormDefinition::empty().with_messages(Messages::new().with_header("Step 1"));

        let without = DynamicForm::new(definition.clone()).unwrap();
        assert_eq!(
            without.view().header,
            Some(HeaderView { message: "Step 1", show_back: false })
        );

        let with = DynamicForm::new(definition).unwrap().on_go_back(|_| {});
        assert_eq!(
            with.view().header,
            Some(HeaderView { message: "Step 1", show_back: true })
        );

        let no_header = DynamicForm::new(FormDefinition::empty())
            .unwrap()
            .on_go_back(|_| {});
        assert_eq!(no_header.view().header, None);
    }

    #[test]
    fn buttons_and_decorations() {
        let form = DynamicForm::new(
            FormDefinition::new(vec![
                FieldSpec::text("name", "Name").with_bottom_link(Link::new("Why?", "/faq")),
            ])
            .with_messages(
                Messages::new()
                    .with_submit("Next")
                    .with_skip("Later")
                    .with_bottom("Almost done"),
            )
            .with_bottom_link(Link::new("Log in", "/signin"))
            .with_buttons_right()
            .with_percentage(25),
        )
        .unwrap()
        .with_error_message("Something went wrong");
        let view = form.view();

        assert_eq!(
            view.buttons,
            ButtonsView {
                submit_label: "Next",
                skip_label: Some("Later"),
                align_right: true
            }
        );
        assert_eq!(view.progress, Some(25));
        assert_eq!(view.error_message, Some("Something went wrong"));
        assert_eq!(view.bottom_message, Some("Almost done"));
        assert_eq!(view.bottom_link.map(|l| l.href.as_str()), Some("/signin"));
        assert_eq!(
            view.fields[0].bottom_link().map(|l| l.text.as_str()),
            Some("Why?")
        );
        assert_eq!(
            form.values().display_text(&FieldKey::new("name")),
            ""
        );
    }

    #[test]
    fn skip_label_hidden_when_left_aligned() {
        let form = DynamicForm::new(
            FormDefinition::empty().with_messages(Messages::new().with_skip("Later")),
        )
        .unwrap();
        assert_eq!(form.view().buttons.skip_label, None);
    }

    #[test]
    fn candidates_exclude_selected_slugs() {
        let available = vec![Tag::new("a", "A"), Tag::new("b", "B"), Tag::new("c", "C")];
        let selected = vec![Tag::new("b", "Renamed B")];
        let names: Vec<_> = tag_candidates(&available, &selected)
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
