//! Core types for dynform.
//!
//! This crate provides the foundational types for defining forms:
//! - `FormDefinition` - The fields and static configuration of a form
//! - `FieldSpec` and `FieldKind` - Individual fields and their widgets
//! - `FormValues` and `FieldKey` - Current values and their keys
//! - `FormView` and `QuestionView` - Render trees handed to renderers
//! - `FormRenderer` - The trait renderers implement

mod field_key;
pub use field_key::FieldKey;

mod location;
pub use location::Location;

mod field_value;
pub use field_value::FieldValue;

mod form_values;
pub use form_values::{FormValues, ValueError};

mod field;
pub use field::{
    AutocompleteField, CheckboxField, FieldKind, FieldSpec, InputField, InterestsField, Link,
    SelectField, SelectOption, SwitchField, Tag,
};

mod messages;
pub use messages::Messages;

mod config;
pub use config::{FieldConfig, FormConfig, SelectConfig};

mod definition;
pub use definition::{FormAction, FormDefinition};

mod question;
pub use question::{AnswerOption, Question};

mod theme;
pub use theme::{Color, Theme};

mod view;
pub use view::{
    ButtonsView, ChipView, DEFAULT_SUBMIT_LABEL, FieldView, FormView, HeaderView, QuestionView,
    SwitchSide, Widget,
};

mod error;
pub use error::ConfigError;

mod renderer;
pub use renderer::FormRenderer;
