//! Write the profile form and the climate-match question as HTML files.
//!
//! Run with: cargo run -p dynform-html --example html_profile

use dynform::{AnswerChipDisplay, DynamicForm, Theme};
use dynform_html::{HtmlOptions, question_to_html, to_html};
use example_forms::{climate_match_question, profile_form};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut form = DynamicForm::new(profile_form())?;
    form.set_value("newsletter", true)?;
    let html = to_html(&form, HtmlOptions::new().with_title("Your profile"));
    std::fs::write("profile.html", &html)?;
    tracing::info!(bytes = html.len(), "wrote profile.html");

    let display = AnswerChipDisplay::new(climate_match_question(), |_| {}, || {});
    let html = question_to_html(
        &display,
        &Theme::default(),
        HtmlOptions::new().with_title("Climate match"),
    );
    std::fs::write("climate_match.html", &html)?;
    tracing::info!(bytes = html.len(), "wrote climate_match.html");

    Ok(())
}
