//! # dynform-egui
//!
//! Run dynform forms and answer-chip questions in a native egui window.
//!
//! All visible fields are shown at once. Text edits are stored as you type
//! and progress is recomputed when an input loses focus; selects, checkboxes
//! and switches update progress immediately.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dynform::DynamicForm;
//! use dynform_egui::{EguiForm, FormOutcome};
//!
//! fn main() -> anyhow::Result<()> {
//!     let form = DynamicForm::from_json(include_str!("signup.json"))?;
//!     let outcome = EguiForm::new()
//!         .with_title("Sign up")
//!         .with_window_size([450.0, 600.0])
//!         .run(form)?;
//!
//!     if let FormOutcome::Submitted { values, skipped } = outcome {
//!         println!("{values:#?} (skipped: {skipped})");
//!     }
//!     Ok(())
//! }
//! ```

mod backend;
mod widgets;

pub use backend::{ChipOutcome, EguiError, EguiForm, EguiQuestion, FormOutcome};

