use dynform_types::Question;

const CLIMATE_MATCH_JSON: &str = include_str!("../data/climate_match.json");

/// A climate-match question with three answers.
pub fn climate_match_question() -> Question {
    Question::new("Which of these would you most like to work on?")
        .with_answer("Renewable energy")
        .with_answer("Sustainable food")
        .with_answer("Low-carbon transport")
}

/// The same question, as JSON.
pub fn climate_match_question_json() -> &'static str {
    CLIMATE_MATCH_JSON
}
