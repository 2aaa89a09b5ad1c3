//! A question shown as a headline with one clickable chip per answer.

use std::fmt;

use dynform_types::{AnswerOption, ChipView, FormRenderer, Question, QuestionView, Theme};

use crate::ChipError;

/// What moved the user forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForwardTrigger<'a> {
    /// An answer chip was clicked.
    Chip {
        index: usize,
        answer: &'a AnswerOption,
    },

    /// The forward arrow of the navigation bar was clicked.
    NavigationBar,
}

impl ForwardTrigger<'_> {
    /// The chosen answer, if a chip was clicked.
    pub fn answer(&self) -> Option<&AnswerOption> {
        match self {
            Self::Chip { answer, .. } => Some(answer),
            Self::NavigationBar => None,
        }
    }
}

type ForwardHandler = Box<dyn FnMut(ForwardTrigger<'_>)>;
type BackHandler = Box<dyn FnMut()>;

/// Headline, answer chips and a back/forward navigation bar.
///
/// Every chip and the forward arrow call the same forward handler; the
/// display itself keeps no state between clicks.
pub struct AnswerChipDisplay {
    question: Question,
    on_forward: ForwardHandler,
    on_back: BackHandler,
}

impl fmt::Debug for AnswerChipDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnswerChipDisplay")
            .field("question", &self.question)
            .finish_non_exhaustive()
    }
}

impl AnswerChipDisplay {
    pub fn new(
        question: Question,
        on_forward: impl FnMut(ForwardTrigger<'_>) + 'static,
        on_back: impl FnMut() + 'static,
    ) -> Self {
        Self {
            question,
            on_forward: Box::new(on_forward),
            on_back: Box::new(on_back),
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn view(&self) -> QuestionView<'_> {
        QuestionView {
            headline: &self.question.text,
            chips: self
                .question
                .answers
                .iter()
                .enumerate()
                .map(|(index, answer)| ChipView {
                    index,
                    label: &answer.text,
                })
                .collect(),
        }
    }

    /// Click the chip at `index`.
    pub fn click_chip(&mut self, index: usize) -> Result<(), ChipError> {
        let answer = self.question.answers.get(index).ok_or_else(|| {
            tracing::warn!(index, "click on missing answer chip");
            ChipError::NoSuchAnswer {
                index,
                len: self.question.answers.len(),
            }
        })?;
        tracing::debug!(index, answer = %answer.text, "answer chip clicked");
        (self.on_forward)(ForwardTrigger::Chip { index, answer });
        Ok(())
    }

    /// Click the forward arrow of the navigation bar.
    pub fn click_forward(&mut self) {
        tracing::debug!("navigation forward");
        (self.on_forward)(ForwardTrigger::NavigationBar);
    }

    /// Click the back arrow of the navigation bar.
    pub fn click_back(&mut self) {
        tracing::debug!("navigation back");
        (self.on_back)();
    }

    pub fn render<R: FormRenderer>(
        &self,
        renderer: &R,
        theme: &Theme,
    ) -> Result<R::Output, R::Error> {
        renderer.render_question(&self.view(), theme)
    }
}
