//! HTML form generator implementation.

use std::convert::Infallible;

use dynform::{
    AnswerChipDisplay, DynamicForm, FieldView, FormRenderer, FormView, Link, QuestionView,
    SwitchSide, Theme, Widget,
};

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include CSS styling derived from the theme.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOptions {
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "dynform".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Renders views as HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl FormRenderer for HtmlRenderer {
    type Output = String;
    type Error = Infallible;

    fn render_form(&self, form: &FormView<'_>, theme: &Theme) -> Result<String, Infallible> {
        tracing::debug!(fields = form.fields.len(), "rendering form as HTML");
        let body = generate_form(form, &self.options.class_prefix);
        Ok(wrap_document(body, theme, &self.options))
    }

    fn render_question(
        &self,
        question: &QuestionView<'_>,
        theme: &Theme,
    ) -> Result<String, Infallible> {
        tracing::debug!(chips = question.chips.len(), "rendering question as HTML");
        let body = generate_question(question, &self.options.class_prefix);
        Ok(wrap_document(body, theme, &self.options))
    }
}

/// Render a form in its current state, using the form's theme.
pub fn to_html(form: &DynamicForm, options: HtmlOptions) -> String {
    let renderer = HtmlRenderer::new(options);
    match form.render(&renderer) {
        Ok(html) => html,
        Err(never) => match never {},
    }
}

/// Render a question with its answer chips.
pub fn question_to_html(display: &AnswerChipDisplay, theme: &Theme, options: HtmlOptions) -> String {
    let renderer = HtmlRenderer::new(options);
    match display.render(&renderer, theme) {
        Ok(html) => html,
        Err(never) => match never {},
    }
}

fn wrap_document(body: String, theme: &Theme, options: &HtmlOptions) -> String {
    if !options.full_document {
        return body;
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");

    if let Some(title) = &options.title {
        html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
    }

    if options.include_styles {
        html.push_str(&generate_styles(&options.class_prefix, theme));
    }

    html.push_str("</head>\n<body>\n");
    html.push_str(&body);
    html.push_str("</body>\n</html>\n");
    html
}

fn generate_form(form: &FormView<'_>, prefix: &str) -> String {
    let mut html = format!("<form class=\"{prefix}-form\"");
    match form.form_action {
        Some(target) => html.push_str(&format!(
            " action=\"{}\" method=\"{}\"",
            escape_html(&target.action),
            escape_html(&target.method)
        )),
        None => html.push_str(" method=\"post\""),
    }
    if let Some(autocomplete) = form.autocomplete {
        html.push_str(&format!(" autocomplete=\"{}\"", escape_html(autocomplete)));
    }
    html.push_str(">\n");

    if let Some(header) = &form.header {
        html.push_str(&format!("  <div class=\"{prefix}-header\">\n"));
        if header.show_back {
            html.push_str(&format!(
                "    <button type=\"submit\" name=\"action\" value=\"back\" class=\"{prefix}-back\" formnovalidate aria-label=\"Go back\">&larr;</button>\n"
            ));
        }
        html.push_str(&format!(
            "    <span class=\"{prefix}-header-message\">{}</span>\n",
            escape_html(header.message)
        ));
        html.push_str("  </div>\n");
    }

    if let Some(heading) = form.heading {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-heading\">{}</h1>\n",
            escape_html(heading)
        ));
    }

    if let Some(progress) = form.progress {
        let shown = progress.min(100);
        html.push_str(&format!(
            "  <progress class=\"{prefix}-progress\" max=\"100\" value=\"{shown}\">{shown}%</progress>\n"
        ));
    }

    if let Some(explanation) = form.explanation {
        html.push_str(&format!(
            "  <p class=\"{prefix}-explanation\">{}</p>\n",
            escape_html(explanation)
        ));
    }

    if let Some(error) = form.error_message {
        html.push_str(&format!(
            "  <div class=\"{prefix}-error\" role=\"alert\">{}</div>\n",
            escape_html(error)
        ));
    }

    html.push_str(&format!("  <div class=\"{prefix}-fields\">\n"));
    for field in &form.fields {
        html.push_str(&generate_field(field, prefix, 2));
    }
    html.push_str("  </div>\n");

    let buttons = &form.buttons;
    let align = if buttons.align_right {
        format!(" {prefix}-buttons-right")
    } else {
        String::new()
    };
    html.push_str(&format!("  <div class=\"{prefix}-buttons{align}\">\n"));
    if let Some(skip) = buttons.skip_label {
        html.push_str(&format!(
            "    <button type=\"submit\" name=\"action\" value=\"skip\" class=\"{prefix}-skip\" formnovalidate>{}</button>\n",
            escape_html(skip)
        ));
    }
    html.push_str(&format!(
        "    <button type=\"submit\" name=\"action\" value=\"submit\" class=\"{prefix}-submit\">{}</button>\n",
        escape_html(buttons.submit_label)
    ));
    html.push_str("  </div>\n");

    if let Some(bottom) = form.bottom_message {
        html.push_str(&format!(
            "  <p class=\"{prefix}-bottom-message\">{}</p>\n",
            escape_html(bottom)
        ));
    }
    if let Some(link) = form.bottom_link {
        html.push_str(&format!("  {}\n", link_html(link, &format!("{prefix}-bottom-link"))));
    }

    html.push_str("</form>\n");
    html
}

/// Generate HTML for a single field.
fn generate_field(field: &FieldView<'_>, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let spec = field.spec;
    let id = spec.key().dom_id();
    let name = escape_html(spec.key().as_str());
    let label = format_label(spec.label(), spec.is_required());

    let mut attrs = String::new();
    if spec.is_required() {
        attrs.push_str(" required");
    }
    if field.autofocus {
        attrs.push_str(" autofocus");
    }

    let mut html = String::new();

    match &field.widget {
        Widget::Select { options, selected } => {
            html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));
            html.push_str(&format!(
                "{ind}  <label for=\"{id}\">{}</label>\n",
                escape_html(&label)
            ));
            html.push_str(&format!(
                "{ind}  <select id=\"{id}\" name=\"{name}\" class=\"{prefix}-select\"{attrs}>\n"
            ));
            for option in options {
                let selected_attr = if option.value == *selected {
                    " selected"
                } else {
                    ""
                };
                html.push_str(&format!(
                    "{ind}    <option value=\"{}\"{selected_attr}>{}</option>\n",
                    escape_html(&option.value),
                    escape_html(&option.label)
                ));
            }
            html.push_str(&format!("{ind}  </select>\n"));
            html.push_str(&format!("{ind}</div>\n"));
        }

        Widget::Checkbox { checked } => {
            let checked_attr = if *checked { " checked" } else { "" };
            html.push_str(&format!("{ind}<div class=\"{prefix}-checkbox\">\n"));
            html.push_str(&format!(
                "{ind}  <input type=\"checkbox\" id=\"{id}\" name=\"{name}\" value=\"true\"{checked_attr}{attrs}>\n"
            ));
            html.push_str(&format!(
                "{ind}  <label for=\"{id}\">{}</label>\n",
                escape_html(&label)
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }

        Widget::Switch { switch, active } => {
            let class = |side: SwitchSide| {
                if *active == side {
                    format!("{prefix}-switch-label active")
                } else {
                    format!("{prefix}-switch-label")
                }
            };
            let checked_attr = if active.is_true() { " checked" } else { "" };
            html.push_str(&format!(
                "{ind}<div class=\"{prefix}-switch\" aria-label=\"{}\">\n",
                escape_html(spec.label())
            ));
            html.push_str(&format!(
                "{ind}  <span class=\"{}\">{}</span>\n",
                class(SwitchSide::False),
                escape_html(&switch.false_label)
            ));
            html.push_str(&format!(
                "{ind}  <input type=\"checkbox\" role=\"switch\" id=\"{id}\" name=\"{name}\" value=\"true\"{checked_attr}{attrs}>\n"
            ));
            html.push_str(&format!(
                "{ind}  <span class=\"{}\">{}</span>\n",
                class(SwitchSide::True),
                escape_html(&switch.true_label)
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }

        Widget::Location { text, .. } => {
            html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));
            html.push_str(&format!(
                "{ind}  <label for=\"{id}\">{}</label>\n",
                escape_html(&label)
            ));
            html.push_str(&format!(
                "{ind}  <input type=\"search\" id=\"{id}\" name=\"{name}\" class=\"{prefix}-location\" value=\"{}\" autocomplete=\"off\"{attrs}>\n",
                escape_html(text)
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }

        Widget::Interests {
            candidates,
            selected,
            info,
        } => {
            html.push_str(&format!("{ind}<fieldset class=\"{prefix}-interests\">\n"));
            html.push_str(&format!(
                "{ind}  <legend>{}</legend>\n",
                escape_html(&label)
            ));
            if let Some(info) = info {
                html.push_str(&format!(
                    "{ind}  <p class=\"{prefix}-interests-info\">{}</p>\n",
                    escape_html(info)
                ));
            }
            for tag in selected.iter() {
                html.push_str(&format!(
                    "{ind}  <label class=\"{prefix}-tag selected\"><input type=\"checkbox\" name=\"{name}\" value=\"{}\" checked> {}</label>\n",
                    escape_html(&tag.slug),
                    escape_html(&tag.name)
                ));
            }
            for tag in candidates {
                html.push_str(&format!(
                    "{ind}  <label class=\"{prefix}-tag\"><input type=\"checkbox\" name=\"{name}\" value=\"{}\"> {}</label>\n",
                    escape_html(&tag.slug),
                    escape_html(&tag.name)
                ));
            }
            html.push_str(&format!("{ind}</fieldset>\n"));
        }

        Widget::Autocomplete { props } => {
            html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));
            html.push_str(&format!(
                "{ind}  <label for=\"{id}\">{}</label>\n",
                escape_html(&format_label(&props.label, spec.is_required()))
            ));
            html.push_str(&format!(
                "{ind}  <input type=\"search\" id=\"{id}\" name=\"{name}\" class=\"{prefix}-autocomplete\" data-base-url=\"{}\" autocomplete=\"off\"{attrs}>\n",
                escape_html(&props.base_url)
            ));
            if let Some(helper) = &props.helper_text {
                html.push_str(&format!(
                    "{ind}  <small class=\"{prefix}-helper\">{}</small>\n",
                    escape_html(helper)
                ));
            }
            html.push_str(&format!("{ind}</div>\n"));
        }

        Widget::Input { input_type, value } => {
            html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));
            html.push_str(&format!(
                "{ind}  <label for=\"{id}\">{}</label>\n",
                escape_html(&label)
            ));
            html.push_str(&format!(
                "{ind}  <input type=\"{}\" id=\"{id}\" name=\"{name}\" class=\"{prefix}-input\" value=\"{}\"{attrs}>\n",
                escape_html(input_type),
                escape_html(value)
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }
    }

    if let Some(link) = field.bottom_link() {
        html.push_str(&format!(
            "{ind}{}\n",
            link_html(link, &format!("{prefix}-field-link"))
        ));
    }

    html
}

fn generate_question(question: &QuestionView<'_>, prefix: &str) -> String {
    let mut html = format!("<div class=\"{prefix}-question\">\n");
    html.push_str(&format!(
        "  <h2 class=\"{prefix}-headline\">{}</h2>\n",
        escape_html(question.headline)
    ));

    html.push_str(&format!("  <div class=\"{prefix}-chips\">\n"));
    for chip in &question.chips {
        html.push_str(&format!(
            "    <button type=\"button\" class=\"{prefix}-chip\" data-index=\"{}\">{}</button>\n",
            chip.index,
            escape_html(chip.label)
        ));
    }
    html.push_str("  </div>\n");

    html.push_str(&format!("  <nav class=\"{prefix}-nav\">\n"));
    html.push_str(&format!(
        "    <button type=\"button\" class=\"{prefix}-nav-back\" aria-label=\"Back\">&larr;</button>\n"
    ));
    html.push_str(&format!(
        "    <button type=\"button\" class=\"{prefix}-nav-forward\" aria-label=\"Forward\">&rarr;</button>\n"
    ));
    html.push_str("  </nav>\n");
    html.push_str("</div>\n");
    html
}

fn link_html(link: &Link, class: &str) -> String {
    format!(
        "<a class=\"{class}\" href=\"{}\">{}</a>",
        escape_html(&link.href),
        escape_html(&link.text)
    )
}

/// Required fields get a trailing asterisk.
fn format_label(label: &str, required: bool) -> String {
    if required {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// CSS for the generated markup, coloured by the theme.
fn generate_styles(prefix: &str, theme: &Theme) -> String {
    let primary = theme.primary;
    let secondary = theme.secondary;
    let error = theme.error;
    let chip_bg = theme.chip_background;
    let chip_text = theme.chip_text;
    let max_width = theme.max_width;
    let gap = theme.spacing(1.0);
    let pad = theme.spacing(2.0);
    format!(
        r#"  <style>
    .{prefix}-form, .{prefix}-question {{
      max-width: {max_width}px;
      margin: {pad}px auto;
      padding: {pad}px;
      font-family: sans-serif;
      color: {secondary};
    }}
    .{prefix}-header {{
      display: flex;
      align-items: center;
      gap: {gap}px;
    }}
    .{prefix}-back, .{prefix}-nav button {{
      border: none;
      background: none;
      color: {primary};
      font-size: 1.5rem;
      cursor: pointer;
    }}
    .{prefix}-heading, .{prefix}-headline {{
      color: {primary};
    }}
    .{prefix}-progress {{
      width: 100%;
      accent-color: {primary};
    }}
    .{prefix}-error {{
      color: {error};
      margin: {gap}px 0;
    }}
    .{prefix}-field {{
      margin: {gap}px 0;
    }}
    .{prefix}-field label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-input, .{prefix}-select, .{prefix}-location, .{prefix}-autocomplete {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-checkbox, .{prefix}-switch {{
      display: flex;
      align-items: center;
      gap: {gap}px;
      margin: {gap}px 0;
    }}
    .{prefix}-switch-label.active {{
      font-weight: bold;
      color: {primary};
    }}
    .{prefix}-interests {{
      margin: {gap}px 0;
      border: none;
      padding: 0;
    }}
    .{prefix}-tag, .{prefix}-chip {{
      display: inline-block;
      margin: 0.25rem;
      padding: 0.25rem 0.75rem;
      border-radius: 1rem;
      border: none;
      background: {chip_bg};
      color: {chip_text};
    }}
    .{prefix}-tag.selected {{
      background: {primary};
    }}
    .{prefix}-buttons {{
      display: flex;
      gap: {gap}px;
      margin-top: {pad}px;
    }}
    .{prefix}-buttons-right {{
      justify-content: flex-end;
    }}
    .{prefix}-submit {{
      background: {primary};
      color: #ffffff;
      border: none;
      padding: 0.5rem 1rem;
    }}
    .{prefix}-skip {{
      background: none;
      border: 1px solid {secondary};
      padding: 0.5rem 1rem;
    }}
    .{prefix}-nav {{
      display: flex;
      justify-content: space-between;
      margin-top: {pad}px;
    }}
  </style>
"#
    )
}
