use crate::{FormView, QuestionView, Theme};

/// Trait for renderers that turn view trees into output.
///
/// Renderers receive a view produced by a form or chip display and decide
/// how to present it (markup, outline, ...). They never mutate form state;
/// interactive frontends drive the component directly and use the view only
/// to decide what to draw.
pub trait FormRenderer {
    /// What a render produces.
    type Output;

    /// The error type for this renderer.
    type Error: Into<anyhow::Error>;

    /// Render a form.
    fn render_form(&self, form: &FormView<'_>, theme: &Theme) -> Result<Self::Output, Self::Error>;

    /// Render a question with its answer chips and navigation bar.
    fn render_question(
        &self,
        question: &QuestionView<'_>,
        theme: &Theme,
    ) -> Result<Self::Output, Self::Error>;
}
