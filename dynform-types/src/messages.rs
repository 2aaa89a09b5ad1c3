use serde::{Deserialize, Serialize};

/// Static display strings of a form. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    /// Small title in the header row, next to the back control.
    pub header_message: Option<String>,

    /// Large heading below the header.
    pub heading_message: Option<String>,

    /// Explanation shown above the fields.
    pub explanation_message: Option<String>,

    /// Label of the primary submit button.
    pub submit_message: Option<String>,

    /// Label of the skip button.
    pub skip_message: Option<String>,

    /// Message shown below the form.
    pub bottom_message: Option<String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header_message = Some(text.into());
        self
    }

    pub fn with_heading(mut self, text: impl Into<String>) -> Self {
        self.heading_message = Some(text.into());
        self
    }

    pub fn with_explanation(mut self, text: impl Into<String>) -> Self {
        self.explanation_message = Some(text.into());
        self
    }

    pub fn with_submit(mut self, text: impl Into<String>) -> Self {
        self.submit_message = Some(text.into());
        self
    }

    pub fn with_skip(mut self, text: impl Into<String>) -> Self {
        self.skip_message = Some(text.into());
        self
    }

    pub fn with_bottom(mut self, text: impl Into<String>) -> Self {
        self.bottom_message = Some(text.into());
        self
    }
}
