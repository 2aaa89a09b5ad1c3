//! The profile form in a native window.
//!
//! Run with: cargo run -p dynform-egui --example profile

use dynform::DynamicForm;
use dynform_egui::{EguiForm, FormOutcome};
use example_forms::profile_form;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let form = DynamicForm::new(profile_form())?
        .on_go_back(|values| tracing::info!(fields = values.len(), "user went back"));

    match EguiForm::new()
        .with_title("Your profile")
        .with_window_size([520.0, 760.0])
        .run(form)?
    {
        FormOutcome::Submitted { values, skipped } => {
            println!("skipped: {skipped}");
            println!("{}", sorted_lines(&values));
        }
        FormOutcome::WentBack { .. } => println!("went back"),
    }
    Ok(())
}

fn sorted_lines(values: &dynform::FormValues) -> String {
    let mut entries: Vec<_> = values.iter().collect();
    entries.sort_by_key(|(key, _)| *key);
    entries
        .into_iter()
        .map(|(key, value)| format!("{key}: {}", value.display_text()))
        .collect::<Vec<_>>()
        .join("\n")
}
