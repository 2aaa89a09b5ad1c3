//! A renderer that turns views into a plain-text outline.
//!
//! `TestRenderer` writes one line per element, which makes it easy to assert
//! on what a form or question would show without a UI.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynform::{DynamicForm, FieldSpec, FormDefinition, TestRenderer};
//!
//! let form = DynamicForm::new(FormDefinition::new(vec![
//!     FieldSpec::text("name", "Name").required(),
//! ]))
//! .unwrap();
//!
//! let lines = form.render(&TestRenderer::new()).unwrap();
//! assert_eq!(lines, vec!["input[text] name* \"Name\" = \"\" autofocus", "[Submit]"]);
//! ```

use std::convert::Infallible;

use dynform_types::{
    FieldView, FormRenderer, FormView, QuestionView, SwitchSide, Theme, Widget,
};

/// Renders views as outline lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestRenderer;

impl TestRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn field_line(field: &FieldView<'_>) -> String {
    let spec = field.spec;
    let required = if spec.is_required() { "*" } else { "" };
    let head = format!("{}{} {:?}", spec.key(), required, spec.label());

    let mut line = match &field.widget {
        Widget::Select { options, selected } => {
            let options: Vec<String> = options
                .iter()
                .map(|o| {
                    if o.value == *selected {
                        format!("({})", o.value)
                    } else {
                        o.value.clone()
                    }
                })
                .collect();
            format!("select {head} [{}]", options.join(", "))
        }
        Widget::Checkbox { checked } => {
            let mark = if *checked { "x" } else { " " };
            format!("checkbox {head} [{mark}]")
        }
        Widget::Switch { switch, active } => {
            let (off, on) = match active {
                SwitchSide::False => (format!("<{}>", switch.false_label), switch.true_label.clone()),
                SwitchSide::True => (switch.false_label.clone(), format!("<{}>", switch.true_label)),
            };
            format!("switch {head} {off} | {on}")
        }
        Widget::Location { text, .. } => format!("location {head} = {text:?}"),
        Widget::Interests {
            candidates,
            selected,
            ..
        } => {
            let selected: Vec<&str> = selected.iter().map(|t| t.slug.as_str()).collect();
            let candidates: Vec<&str> = candidates.iter().map(|t| t.slug.as_str()).collect();
            format!(
                "interests {head} selected=[{}] candidates=[{}]",
                selected.join(", "),
                candidates.join(", ")
            )
        }
        Widget::Autocomplete { props } => format!("autocomplete {head} {}", props.base_url),
        Widget::Input { input_type, value } => format!("input[{input_type}] {head} = {value:?}"),
    };

    if field.autofocus {
        line.push_str(" autofocus");
    }
    line
}

impl FormRenderer for TestRenderer {
    type Output = Vec<String>;
    type Error = Infallible;

    fn render_form(&self, form: &FormView<'_>, _theme: &Theme) -> Result<Vec<String>, Infallible> {
        let mut lines = Vec::new();

        if let Some(header) = &form.header {
            let back = if header.show_back { "< " } else { "" };
            lines.push(format!("header: {back}{}", header.message));
        }
        if let Some(heading) = form.heading {
            lines.push(format!("heading: {heading}"));
        }
        if let Some(progress) = form.progress {
            lines.push(format!("progress: {progress}"));
        }
        if let Some(explanation) = form.explanation {
            lines.push(format!("explanation: {explanation}"));
        }
        if let Some(error) = form.error_message {
            lines.push(format!("error: {error}"));
        }

        for field in &form.fields {
            lines.push(field_line(field));
            if let Some(link) = field.bottom_link() {
                lines.push(format!("  link: {} -> {}", link.text, link.href));
            }
        }

        let buttons = &form.buttons;
        let mut row = format!("[{}]", buttons.submit_label);
        if let Some(skip) = buttons.skip_label {
            row.push_str(&format!(" [{skip}]"));
        }
        if buttons.align_right {
            row = format!(">> {row}");
        }
        lines.push(row);

        if let Some(bottom) = form.bottom_message {
            lines.push(format!("bottom: {bottom}"));
        }
        if let Some(link) = form.bottom_link {
            lines.push(format!("link: {} -> {}", link.text, link.href));
        }

        Ok(lines)
    }

    fn render_question(
        &self,
        question: &QuestionView<'_>,
        _theme: &Theme,
    ) -> Result<Vec<String>, Infallible> {
        let mut lines = vec![format!("question: {}", question.headline)];
        lines.extend(
            question
                .chips
                .iter()
                .map(|chip| format!("chip {}: {}", chip.index, chip.label)),
        );
        lines.push("nav: < >".to_string());
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use dynform_types::{
        FieldKind, FieldSpec, FormDefinition, Link, Messages, Question, SelectField, SelectOption,
        SwitchField,
    };

    use super::*;
    use crate::{AnswerChipDisplay, DynamicForm};

    #[test]
    fn outlines_a_form() {
        let form = DynamicForm::new(
            FormDefinition::new(vec![
                FieldSpec::text("name", "Name").required(),
                FieldSpec::new(
                    "role",
                    "Role",
                    FieldKind::Select(
                        SelectField::new(vec![
                            SelectOption::new("Dev", "dev"),
                            SelectOption::new("Ops", "ops"),
                        ])
                        .with_default("ops"),
                    ),
                ),
                FieldSpec::new(
                    "kind",
                    "Kind",
                    FieldKind::Switch(SwitchField::new("Person", "Org").checked(true)),
                ),
            ])
            .with_messages(
                Messages::new()
                    .with_header("Step 2")
                    .with_heading("About you")
                    .with_skip("Later"),
            )
            .with_bottom_link(Link::new("Help", "/help"))
            .with_buttons_right()
            .with_percentage(40),
        )
        .unwrap()
        .on_go_back(|_| {});

        let lines = form.render(&TestRenderer::new()).unwrap();
        assert_eq!(
            lines,
            vec![
                "header: < Step 2",
                "heading: About you",
                "progress: 40",
                "input[text] name* \"Name\" = \"\" autofocus",
                "select role \"Role\" [dev, (ops)]",
                "switch kind \"Kind\" Person | <Org>",
                ">> [Submit] [Later]",
                "link: Help -> /help",
            ]
        );
    }

    #[test]
    fn outlines_a_question() {
        let display = AnswerChipDisplay::new(
            Question::new("Favourite?").with_answer("Wind").with_answer("Sun"),
            |_| {},
            || {},
        );
        let lines = display.render(&TestRenderer, &Theme::default()).unwrap();
        assert_eq!(
            lines,
            vec!["question: Favourite?", "chip 0: Wind", "chip 1: Sun", "nav: < >"]
        );
    }
}
