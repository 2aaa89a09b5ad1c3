//! A form configured from JSON, with an error message and a back handler.
//!
//! Run with: cargo run -p dynform-egui --example profile_json

use dynform::{DynamicForm, Theme};
use dynform_egui::{EguiError, EguiForm, FormOutcome};
use example_forms::{NIGHT_THEME_JSON, PROFILE_JSON};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let form = DynamicForm::from_json(PROFILE_JSON)?
        .with_theme(Theme::from_json(NIGHT_THEME_JSON)?)
        .with_error_message("This organization is already registered.")
        .on_submit(|values, is_skip| {
            tracing::info!(fields = values.len(), is_skip, "submitted");
        })
        .on_go_back(|_| tracing::info!("back"));

    match EguiForm::new().with_title("Sign up").run(form) {
        Ok(FormOutcome::Submitted { skipped, .. }) => println!("done (skipped: {skipped})"),
        Ok(FormOutcome::WentBack { .. }) => println!("back to step 1"),
        Err(EguiError::Cancelled) => println!("closed without submitting"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
