//! Drawing views with egui.
//!
//! Drawing never touches the form: every interaction is recorded as an
//! [`Event`] and applied after the frame's view has been dropped.

use dynform::{
    Color, FieldKey, FieldView, FormValues, FormView, QuestionView, SwitchSide, Tag, Theme,
    Widget,
};

/// A user interaction collected while drawing.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Change {
        key: FieldKey,
        value: ChangedValue,
        instantly: bool,
    },
    LocationText {
        key: FieldKey,
        text: String,
    },
    Blur,
    AddTag {
        key: FieldKey,
        tag: Tag,
    },
    RemoveTag {
        key: FieldKey,
        slug: String,
    },
    Submit,
    Skip,
    Back,
    Chip(usize),
    Forward,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChangedValue {
    Text(String),
    Bool(bool),
}

pub(crate) fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Label text for a field: a trailing colon unless the label already ends
/// with punctuation, and an asterisk for required fields.
pub(crate) fn format_label(label: &str, required: bool) -> String {
    let trimmed = label.trim();
    let mut text = match trimmed.chars().last() {
        None => String::new(),
        Some(':' | '?' | '!' | '.') => trimmed.to_string(),
        Some(_) => format!("{trimmed}:"),
    };
    if required {
        text.push_str(" *");
    }
    text
}

/// Apply the theme's colours and spacing to egui's style.
pub(crate) fn apply_theme(ctx: &egui::Context, theme: &Theme) {
    let primary = color32(theme.primary);
    ctx.style_mut(|style| {
        style.visuals.selection.bg_fill = primary;
        style.visuals.hyperlink_color = primary;
        style.spacing.item_spacing = egui::vec2(theme.spacing, theme.spacing);
    });
}

fn track_text(
    response: &egui::Response,
    key: &FieldKey,
    text: String,
    location: bool,
    events: &mut Vec<Event>,
) {
    if response.changed() {
        let key = key.clone();
        events.push(if location {
            Event::LocationText { key, text }
        } else {
            Event::Change {
                key,
                value: ChangedValue::Text(text),
                instantly: false,
            }
        });
    }
    if response.lost_focus() {
        events.push(Event::Blur);
    }
}

fn draw_field(
    ui: &mut egui::Ui,
    field: &FieldView<'_>,
    values: &FormValues,
    theme: &Theme,
    focus: bool,
    events: &mut Vec<Event>,
) {
    let spec = field.spec;
    let key = spec.key();
    let label = format_label(spec.label(), spec.is_required());
    let id = egui::Id::new(("dynform-field", key.as_str()));

    match &field.widget {
        Widget::Select { options, selected } => {
            ui.label(label);
            let current = options
                .iter()
                .find(|o| o.value == *selected)
                .map(|o| o.label.as_str())
                .unwrap_or_default();
            egui::ComboBox::from_id_salt(id)
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for option in options {
                        let chosen = option.value == *selected;
                        if ui.selectable_label(chosen, &option.label).clicked() && !chosen {
                            events.push(Event::Change {
                                key: key.clone(),
                                value: ChangedValue::Text(option.value.clone()),
                                instantly: true,
                            });
                        }
                    }
                });
        }

        Widget::Checkbox { checked } => {
            let mut checked = *checked;
            if ui.checkbox(&mut checked, label).changed() {
                events.push(Event::Change {
                    key: key.clone(),
                    value: ChangedValue::Bool(checked),
                    instantly: true,
                });
            }
        }

        Widget::Switch { switch, active } => {
            ui.horizontal(|ui| {
                let sides = [
                    (SwitchSide::False, &switch.false_label),
                    (SwitchSide::True, &switch.true_label),
                ];
                for (side, text) in sides {
                    let on = *active == side;
                    let mut rich = egui::RichText::new(text.as_str());
                    if on {
                        rich = rich.strong().color(color32(theme.primary));
                    }
                    if ui.selectable_label(on, rich).clicked() && !on {
                        events.push(Event::Change {
                            key: key.clone(),
                            value: ChangedValue::Bool(side.is_true()),
                            instantly: true,
                        });
                    }
                }
            });
        }

        Widget::Location { text, .. } => {
            ui.label(label);
            let mut text = text.to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .id(id)
                    .hint_text("Search for a place")
                    .desired_width(f32::INFINITY),
            );
            track_text(&response, key, text, true, events);
        }

        Widget::Interests {
            candidates,
            selected,
            info,
        } => {
            ui.label(label);
            if let Some(info) = info {
                ui.small(*info);
            }
            ui.horizontal_wrapped(|ui| {
                for tag in selected.iter() {
                    let chip = egui::Button::new(
                        egui::RichText::new(format!("{} ✕", tag.name)).color(color32(theme.chip_text)),
                    )
                    .fill(color32(theme.chip_background));
                    if ui.add(chip).clicked() {
                        events.push(Event::RemoveTag {
                            key: key.clone(),
                            slug: tag.slug.clone(),
                        });
                    }
                }
                for tag in candidates {
                    if ui.button(format!("+ {}", tag.name)).clicked() {
                        events.push(Event::AddTag {
                            key: key.clone(),
                            tag: (*tag).clone(),
                        });
                    }
                }
            });
        }

        Widget::Autocomplete { props } => {
            ui.label(format_label(&props.label, spec.is_required()));
            let mut text = values.display_text(key).to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .id(id)
                    .hint_text("Start typing to search")
                    .desired_width(f32::INFINITY),
            );
            if focus {
                response.request_focus();
            }
            if let Some(helper) = &props.helper_text {
                ui.small(helper);
            }
            track_text(&response, key, text, false, events);
        }

        Widget::Input { input_type, value } => {
            ui.label(label);
            let mut text = value.to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .id(id)
                    .password(*input_type == "password")
                    .desired_width(f32::INFINITY),
            );
            if focus {
                response.request_focus();
            }
            track_text(&response, key, text, false, events);
        }
    }

    if let Some(link) = field.bottom_link() {
        ui.hyperlink_to(&link.text, &link.href);
    }
    ui.add_space(theme.spacing);
}

/// Draw a form view. `first_frame` gives autofocus fields the keyboard.
pub(crate) fn draw_form(
    ui: &mut egui::Ui,
    view: &FormView<'_>,
    values: &FormValues,
    theme: &Theme,
    first_frame: bool,
) -> Vec<Event> {
    let mut events = Vec::new();

    if let Some(header) = &view.header {
        ui.horizontal(|ui| {
            if header.show_back && ui.button("⬅").on_hover_text("Go back").clicked() {
                events.push(Event::Back);
            }
            ui.label(header.message);
        });
    }

    if let Some(heading) = view.heading {
        ui.heading(egui::RichText::new(heading).color(color32(theme.primary)));
    }

    if let Some(fraction) = view.progress_fraction() {
        let shown = view.progress.unwrap_or_default().min(100);
        ui.add(egui::ProgressBar::new(fraction).text(format!("{shown}%")));
    }

    if let Some(explanation) = view.explanation {
        ui.label(explanation);
    }

    if let Some(error) = view.error_message {
        ui.colored_label(color32(theme.error), format!("⚠ {error}"));
    }

    ui.separator();

    for field in &view.fields {
        draw_field(
            ui,
            field,
            values,
            theme,
            first_frame && field.autofocus,
            &mut events,
        );
    }

    ui.separator();

    let buttons = view.buttons;
    let layout = if buttons.align_right {
        egui::Layout::right_to_left(egui::Align::Center)
    } else {
        egui::Layout::left_to_right(egui::Align::Center)
    };
    ui.with_layout(layout, |ui| {
        let submit = egui::Button::new(
            egui::RichText::new(buttons.submit_label).color(egui::Color32::WHITE),
        )
        .fill(color32(theme.primary));
        if ui.add(submit).clicked() {
            events.push(Event::Submit);
        }
        if buttons.skip_label.is_some_and(|skip| ui.button(skip).clicked()) {
            events.push(Event::Skip);
        }
    });

    if let Some(bottom) = view.bottom_message {
        ui.add_space(theme.spacing);
        ui.label(bottom);
    }
    if let Some(link) = view.bottom_link {
        ui.hyperlink_to(&link.text, &link.href);
    }

    events
}

/// Draw a question with its chips and navigation bar.
pub(crate) fn draw_question(ui: &mut egui::Ui, view: &QuestionView<'_>, theme: &Theme) -> Vec<Event> {
    let mut events = Vec::new();

    ui.heading(egui::RichText::new(view.headline).color(color32(theme.primary)));
    ui.add_space(theme.spacing(2.0));

    ui.horizontal_wrapped(|ui| {
        for chip in &view.chips {
            let button = egui::Button::new(
                egui::RichText::new(chip.label).color(color32(theme.chip_text)),
            )
            .fill(color32(theme.chip_background));
            if ui.add(button).clicked() {
                events.push(Event::Chip(chip.index));
            }
        }
    });

    ui.add_space(theme.spacing(2.0));
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("⬅").on_hover_text("Back").clicked() {
            events.push(Event::Back);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➡").on_hover_text("Forward").clicked() {
                events.push(Event::Forward);
            }
        });
    });

    events
}
