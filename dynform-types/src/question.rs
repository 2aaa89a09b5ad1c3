use serde::{Deserialize, Serialize};

/// A clickable answer to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A question with its answers, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,

    #[serde(default)]
    pub answers: Vec<AnswerOption>,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answers: Vec::new(),
        }
    }

    /// Append an answer.
    pub fn with_answer(mut self, text: impl Into<String>) -> Self {
        self.answers.push(AnswerOption::new(text));
        self
    }

    /// Parse a question from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_answers_are_empty() {
        let question = Question::from_json(r#"{"text": "Why?"}"#).unwrap();
        assert!(question.answers.is_empty());
    }

    #[test]
    fn answers_keep_order() {
        let question =
            Question::from_json(r#"{"text": "Pick", "answers": [{"text": "B"}, {"text": "A"}]}"#)
                .unwrap();
        let texts: Vec<_> = question.answers.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "A"]);
    }
}
