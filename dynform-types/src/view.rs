//! Render trees produced by the form and the chip display.
//!
//! A view borrows from the component that produced it and is rebuilt on
//! every render. Hidden fields are simply not part of the tree.

use crate::{
    AutocompleteField, FieldSpec, FieldValue, FormAction, Link, SelectOption, SwitchField, Tag,
};

/// Label of the primary button when no submit message is configured.
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";

/// Everything a renderer needs to draw a form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView<'a> {
    pub header: Option<HeaderView<'a>>,
    pub heading: Option<&'a str>,

    /// Current progress, present when the progress bar is enabled. Not clamped.
    pub progress: Option<u32>,

    pub explanation: Option<&'a str>,

    /// Caller-supplied error, shown verbatim above the fields.
    pub error_message: Option<&'a str>,

    /// Visible fields in display order.
    pub fields: Vec<FieldView<'a>>,

    pub buttons: ButtonsView<'a>,
    pub bottom_message: Option<&'a str>,
    pub bottom_link: Option<&'a Link>,

    pub form_action: Option<&'a FormAction>,
    pub autocomplete: Option<&'a str>,
}

impl FormView<'_> {
    /// Progress as a fraction in `0.0..=1.0`, for progress bars.
    pub fn progress_fraction(&self) -> Option<f32> {
        self.progress.map(|p| p.min(100) as f32 / 100.0)
    }
}

/// The header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderView<'a> {
    pub message: &'a str,

    /// Render the back control in front of the message.
    pub show_back: bool,
}

/// The button row at the bottom of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonsView<'a> {
    pub submit_label: &'a str,

    /// Present only in the right-aligned layout with a skip message.
    pub skip_label: Option<&'a str>,

    pub align_right: bool,
}

/// One visible field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView<'a> {
    pub spec: &'a FieldSpec,

    /// Focus this input on mount.
    pub autofocus: bool,

    pub widget: Widget<'a>,
}

impl FieldView<'_> {
    pub fn bottom_link(&self) -> Option<&Link> {
        self.spec.bottom_link()
    }
}

/// Which side of a switch is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchSide {
    False,
    True,
}

impl SwitchSide {
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::True } else { Self::False }
    }

    pub fn is_true(self) -> bool {
        self == Self::True
    }
}

/// The widget chosen for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget<'a> {
    /// Dropdown with the currently selected value.
    Select {
        options: Vec<SelectOption>,
        selected: &'a str,
    },

    /// Checkbox row.
    Checkbox { checked: bool },

    /// Toggle between two labels; the active label is emphasized.
    Switch {
        switch: &'a SwitchField,
        active: SwitchSide,
    },

    /// Location search, seeded with the field's initial value.
    Location {
        seed: Option<&'a FieldValue>,
        text: &'a str,
    },

    /// Tag picker. `candidates` are the available tags not yet selected.
    Interests {
        candidates: Vec<&'a Tag>,
        selected: &'a [Tag],
        info: Option<&'a str>,
    },

    /// Async search input configured by the caller.
    Autocomplete { props: &'a AutocompleteField },

    /// Plain labeled input.
    Input { input_type: &'a str, value: &'a str },
}

/// Everything a renderer needs to draw a question with answer chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub headline: &'a str,

    /// One chip per answer, in order.
    pub chips: Vec<ChipView<'a>>,
}

/// A clickable answer chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipView<'a> {
    pub index: usize,
    pub label: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_progress(progress: Option<u32>) -> FormView<'static> {
        FormView {
            header: None,
            heading: None,
            progress,
            explanation: None,
            error_message: None,
            fields: Vec::new(),
            buttons: ButtonsView {
                submit_label: DEFAULT_SUBMIT_LABEL,
                skip_label: None,
                align_right: false,
            },
            bottom_message: None,
            bottom_link: None,
            form_action: None,
            autocomplete: None,
        }
    }

    #[test]
    fn progress_fraction_clamps_for_display() {
        assert_eq!(form_with_progress(None).progress_fraction(), None);
        assert_eq!(form_with_progress(Some(50)).progress_fraction(), Some(0.5));
        assert_eq!(form_with_progress(Some(140)).progress_fraction(), Some(1.0));
    }

    #[test]
    fn switch_side() {
        assert!(SwitchSide::from_checked(true).is_true());
        assert_eq!(SwitchSide::from_checked(false), SwitchSide::False);
    }
}
