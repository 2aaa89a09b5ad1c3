//! # dynform-html
//!
//! Render dynform forms and answer-chip questions as HTML.
//!
//! ```rust,ignore
//! use dynform::DynamicForm;
//! use dynform_html::{HtmlOptions, to_html};
//!
//! let form = DynamicForm::from_json(config)?;
//! let page = to_html(&form, HtmlOptions::new().with_title("Sign up"));
//! std::fs::write("signup.html", page)?;
//! ```
//!
//! The output reflects the form's current state: hidden fields are left
//! out and entered values are filled in.

mod generator;

pub use generator::{HtmlOptions, HtmlRenderer, escape_html, question_to_html, to_html};
