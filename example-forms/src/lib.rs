//! Sample forms and questions shared by tests and demos.

pub mod climate_match;
pub mod profile;
pub mod signup;

pub use climate_match::{climate_match_question, climate_match_question_json};
pub use profile::{PROFILE_JSON, profile_form, profile_form_json};
pub use signup::signup_form;

/// A dark-accent theme, as JSON.
pub const NIGHT_THEME_JSON: &str = include_str!("../data/theme.json");
