//! # dynform
//!
//! Configuration-driven forms and answer chips. Renderer-agnostic.
//!
//! A form is described by a list of fields (programmatically or as JSON).
//! `DynamicForm` owns the entered values and a fill-progress percentage,
//! hides fields that depend on an unchecked checkbox, and hands its values to
//! the caller on submit, skip or back. `AnswerChipDisplay` shows a question
//! with one clickable chip per answer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dynform::{DynamicForm, FieldSpec, FormDefinition, Messages};
//!
//! let definition = FormDefinition::new(vec![
//!     FieldSpec::text("name", "Your name").required().with_progress(20),
//!     FieldSpec::checkbox("newsletter", "Send me the newsletter"),
//!     FieldSpec::input("email", "Email", "email").only_show_if_checked("newsletter"),
//! ])
//! .with_messages(Messages::new().with_submit("Continue"))
//! .with_percentage(10);
//!
//! let mut form = DynamicForm::new(definition)?
//!     .on_submit(|values, is_skip| println!("{values:?} skipped={is_skip}"));
//!
//! form.handle_value_change("name", "Ada", false)?;
//! form.handle_blur();
//! assert_eq!(form.progress(), 30);
//! form.submit();
//! ```
//!
//! ## Renderers
//!
//! Renderers implement `FormRenderer` and live in separate crates:
//! - `dynform-html` - static HTML documents
//! - `dynform-egui` - native window via egui
//!
//! `TestRenderer` in this crate produces a text outline for tests.

pub use dynform_types::*;

mod error;
pub use error::{ChipError, FormError};

mod progress;
pub use progress::compute_progress;

mod form;
pub use form::{DynamicForm, GoBackHandler, SubmitHandler, initialize};

mod dispatch;
pub use dispatch::tag_candidates;

mod answer_chips;
pub use answer_chips::{AnswerChipDisplay, ForwardTrigger};

mod test_renderer;
pub use test_renderer::TestRenderer;
