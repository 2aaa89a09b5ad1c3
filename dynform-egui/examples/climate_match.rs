//! A question with answer chips.
//!
//! Run with: cargo run -p dynform-egui --example climate_match

use dynform::{AnswerChipDisplay, ForwardTrigger};
use dynform_egui::{ChipOutcome, EguiQuestion};
use example_forms::climate_match_question;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let display = AnswerChipDisplay::new(
        climate_match_question(),
        |trigger| match trigger {
            ForwardTrigger::Chip { answer, .. } => tracing::info!(answer = %answer.text, "picked"),
            ForwardTrigger::NavigationBar => tracing::info!("skipped ahead"),
        },
        || tracing::info!("back"),
    );

    match EguiQuestion::new()
        .with_title("Climate match")
        .run(display)?
    {
        ChipOutcome::Chip { answer, .. } => println!("You picked: {}", answer.text),
        ChipOutcome::Forward => println!("No answer"),
        ChipOutcome::Back => println!("Back"),
    }
    Ok(())
}
