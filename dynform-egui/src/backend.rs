//! Native windows for forms and answer-chip questions.

use std::sync::{Arc, Mutex};

use dynform::{
    AnswerChipDisplay, AnswerOption, DynamicForm, FieldValue, FormValues, Location, Theme,
};
use eframe::egui;
use thiserror::Error;

use crate::widgets::{self, ChangedValue, Event};

/// Error type for the egui renderer.
#[derive(Debug, Error)]
pub enum EguiError {
    /// The user closed the window without submitting, skipping or going back.
    #[error("Form cancelled by user")]
    Cancelled,

    /// The shared window state was poisoned by a panic.
    #[error("Window state poisoned")]
    Poisoned,

    /// An error occurred in eframe.
    #[error("Egui error: {0}")]
    Eframe(String),
}

/// How a form window was left.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Submit or skip was clicked.
    Submitted { values: FormValues, skipped: bool },

    /// The back control in the header was clicked.
    WentBack { values: FormValues },
}

/// How a question window was left.
#[derive(Debug, Clone, PartialEq)]
pub enum ChipOutcome {
    /// An answer chip was clicked.
    Chip { index: usize, answer: AnswerOption },

    /// The forward arrow was clicked.
    Forward,

    /// The back arrow was clicked.
    Back,
}

fn native_options(title: &str, size: [f32; 2]) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size),
        ..Default::default()
    }
}

/// Builder/configuration for a form window.
#[derive(Debug, Clone)]
pub struct EguiForm {
    title: String,
    window_size: [f32; 2],
}

impl Default for EguiForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiForm {
    pub fn new() -> Self {
        Self {
            title: "Form".to_string(),
            window_size: [520.0, 680.0],
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Window size as `[width, height]`.
    pub fn with_window_size(mut self, size: [f32; 2]) -> Self {
        self.window_size = size;
        self
    }

    /// Show the form and block until the window closes.
    ///
    /// The form's own handlers run as usual; the outcome is returned as well.
    pub fn run(&self, form: DynamicForm) -> Result<FormOutcome, EguiError> {
        tracing::debug!(title = %self.title, "opening form window");
        let state = Arc::new(Mutex::new(FormState {
            form,
            outcome: None,
            first_frame: true,
        }));
        let app_state = Arc::clone(&state);

        eframe::run_native(
            &self.title,
            native_options(&self.title, self.window_size),
            Box::new(move |cc| {
                if let Ok(state) = app_state.lock() {
                    widgets::apply_theme(&cc.egui_ctx, state.form.theme());
                }
                Ok(Box::new(FormApp { state: app_state }) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| EguiError::Eframe(e.to_string()))?;

        let mut state = state.lock().map_err(|_| EguiError::Poisoned)?;
        state.outcome.take().ok_or(EguiError::Cancelled)
    }
}

struct FormState {
    form: DynamicForm,
    outcome: Option<FormOutcome>,
    first_frame: bool,
}

impl FormState {
    fn apply(&mut self, event: Event) -> Result<(), dynform::FormError> {
        let form = &mut self.form;
        match event {
            Event::Change {
                key,
                value,
                instantly,
            } => {
                let value = match value {
                    ChangedValue::Text(text) => FieldValue::Text(text),
                    ChangedValue::Bool(checked) => FieldValue::Bool(checked),
                };
                form.handle_value_change(key, value, instantly)?;
            }
            Event::LocationText { key, text } => {
                // Without a geocoder the typed text is the place name.
                let value = if text.is_empty() {
                    FieldValue::empty()
                } else {
                    FieldValue::Location(Location::new(text))
                };
                form.handle_location_change(key, value)?;
            }
            Event::Blur => form.handle_blur(),
            Event::AddTag { key, tag } => {
                form.add_tag(key, tag)?;
            }
            Event::RemoveTag { key, slug } => {
                form.remove_tag(key, &slug)?;
            }
            Event::Submit => {
                form.submit();
                self.outcome = Some(FormOutcome::Submitted {
                    values: form.values().clone(),
                    skipped: false,
                });
            }
            Event::Skip => {
                form.skip()?;
                self.outcome = Some(FormOutcome::Submitted {
                    values: form.values().clone(),
                    skipped: true,
                });
            }
            Event::Back => {
                form.go_back()?;
                self.outcome = Some(FormOutcome::WentBack {
                    values: form.values().clone(),
                });
            }
            Event::Chip(_) | Event::Forward => {}
        }
        Ok(())
    }
}

struct FormApp {
    state: Arc<Mutex<FormState>>,
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Ok(mut state) = self.state.lock() else {
            tracing::warn!("form state poisoned, closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        };

        let first_frame = std::mem::replace(&mut state.first_frame, false);
        let theme = state.form.theme().clone();

        let events = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| {
                        ui.set_max_width(theme.max_width);
                        let view = state.form.view();
                        widgets::draw_form(ui, &view, state.form.values(), &theme, first_frame)
                    })
                    .inner
            })
            .inner;

        for event in events {
            if let Err(err) = state.apply(event) {
                tracing::warn!(error = %err, "form event rejected");
            }
        }

        if state.outcome.is_some() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Builder/configuration for a question window.
#[derive(Debug, Clone)]
pub struct EguiQuestion {
    title: String,
    window_size: [f32; 2],
    theme: Theme,
}

impl Default for EguiQuestion {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiQuestion {
    pub fn new() -> Self {
        Self {
            title: "Question".to_string(),
            window_size: [480.0, 320.0],
            theme: Theme::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_window_size(mut self, size: [f32; 2]) -> Self {
        self.window_size = size;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Show the question and block until a chip or arrow is clicked or the
    /// window closes.
    pub fn run(&self, display: AnswerChipDisplay) -> Result<ChipOutcome, EguiError> {
        tracing::debug!(title = %self.title, "opening question window");
        let state = Arc::new(Mutex::new(QuestionState {
            display,
            outcome: None,
        }));
        let app_state = Arc::clone(&state);
        let theme = self.theme.clone();

        eframe::run_native(
            &self.title,
            native_options(&self.title, self.window_size),
            Box::new(move |cc| {
                widgets::apply_theme(&cc.egui_ctx, &theme);
                Ok(Box::new(QuestionApp {
                    state: app_state,
                    theme,
                }) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| EguiError::Eframe(e.to_string()))?;

        let mut state = state.lock().map_err(|_| EguiError::Poisoned)?;
        state.outcome.take().ok_or(EguiError::Cancelled)
    }
}

struct QuestionState {
    display: AnswerChipDisplay,
    outcome: Option<ChipOutcome>,
}

impl QuestionState {
    fn apply(&mut self, event: Event) -> Result<(), dynform::ChipError> {
        match event {
            Event::Chip(index) => {
                self.display.click_chip(index)?;
                if let Some(answer) = self.display.question().answers.get(index) {
                    self.outcome = Some(ChipOutcome::Chip {
                        index,
                        answer: answer.clone(),
                    });
                }
            }
            Event::Forward => {
                self.display.click_forward();
                self.outcome = Some(ChipOutcome::Forward);
            }
            Event::Back => {
                self.display.click_back();
                self.outcome = Some(ChipOutcome::Back);
            }
            _ => {}
        }
        Ok(())
    }
}

struct QuestionApp {
    state: Arc<Mutex<QuestionState>>,
    theme: Theme,
}

impl eframe::App for QuestionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Ok(mut state) = self.state.lock() else {
            tracing::warn!("question state poisoned, closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        };

        let events = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.set_max_width(self.theme.max_width);
                widgets::draw_question(ui, &state.display.view(), &self.theme)
            })
            .inner;

        for event in events {
            if let Err(err) = state.apply(event) {
                tracing::warn!(error = %err, "chip event rejected");
            }
        }

        if state.outcome.is_some() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

#[cfg(test)]
mod tests {
    use dynform::{FieldSpec, FormDefinition, InterestsField, Messages, Question, Tag};

    use super::*;

    fn form_state() -> FormState {
        let form = DynamicForm::new(
            FormDefinition::new(vec![
                FieldSpec::text("name", "Name").with_progress(50),
                FieldSpec::new("home", "Home", dynform::FieldKind::Location),
                FieldSpec::new(
                    "topics",
                    "Topics",
                    dynform::FieldKind::Interests(InterestsField::new(vec![Tag::new(
                        "energy", "Energy",
                    )])),
                ),
            ])
            .with_messages(Messages::new().with_skip("Later"))
            .with_buttons_right(),
        )
        .unwrap();
        FormState {
            form,
            outcome: None,
            first_frame: true,
        }
    }

    #[test]
    fn builders() {
        let form = EguiForm::new()
            .with_title("Sign up")
            .with_window_size([800.0, 600.0]);
        assert_eq!(form.title, "Sign up");
        assert_eq!(form.window_size, [800.0, 600.0]);

        let question = EguiQuestion::default().with_title("Quiz");
        assert_eq!(question.title, "Quiz");
    }

    #[test]
    fn error_messages() {
        assert_eq!(EguiError::Cancelled.to_string(), "Form cancelled by user");
        assert_eq!(
            EguiError::Eframe("no display".to_string()).to_string(),
            "Egui error: no display"
        );
    }

    #[test]
    fn text_events_wait_for_blur() {
        let mut state = form_state();
        state
            .apply(Event::Change {
                key: "name".into(),
                value: ChangedValue::Text("Ada".to_string()),
                instantly: false,
            })
            .unwrap();
        assert_eq!(state.form.progress(), 0);
        state.apply(Event::Blur).unwrap();
        assert_eq!(state.form.progress(), 50);
    }

    #[test]
    fn typed_location_becomes_a_place() {
        let mut state = form_state();
        state
            .apply(Event::LocationText {
                key: "home".into(),
                text: "Oslo".to_string(),
            })
            .unwrap();
        let home = state.form.values().get_location(&"home".into()).unwrap();
        assert_eq!(home.name, "Oslo");
    }

    #[test]
    fn skip_records_the_outcome() {
        let mut state = form_state();
        state.apply(Event::Skip).unwrap();
        assert!(matches!(
            state.outcome,
            Some(FormOutcome::Submitted { skipped: true, .. })
        ));
    }

    #[test]
    fn picked_tags_are_in_the_outcome() {
        let mut state = form_state();
        state
            .apply(Event::AddTag {
                key: "topics".into(),
                tag: Tag::new("energy", "Energy"),
            })
            .unwrap();
        state.apply(Event::Submit).unwrap();

        let Some(FormOutcome::Submitted { values, .. }) = &state.outcome else {
            panic!("expected a submitted outcome");
        };
        assert_eq!(
            values.get_tags(&"topics".into()).unwrap(),
            &[Tag::new("energy", "Energy")]
        );
    }

    #[test]
    fn back_without_handler_is_rejected() {
        let mut state = form_state();
        assert!(state.apply(Event::Back).is_err());
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn chip_records_the_answer() {
        let mut state = QuestionState {
            display: AnswerChipDisplay::new(
                Question::new("Pick").with_answer("A").with_answer("B"),
                |_| {},
                || {},
            ),
            outcome: None,
        };
        state.apply(Event::Chip(1)).unwrap();
        assert_eq!(
            state.outcome,
            Some(ChipOutcome::Chip {
                index: 1,
                answer: AnswerOption::new("B"),
            })
        );
        assert!(state.apply(Event::Chip(5)).is_err());
    }
}
