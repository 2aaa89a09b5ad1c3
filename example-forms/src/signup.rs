use dynform_types::{FieldSpec, FormDefinition, Link, Messages};

/// A short account signup form.
///
/// The email field is required; the newsletter checkbox reveals a second
/// email field for the newsletter.
pub fn signup_form() -> FormDefinition {
    FormDefinition::new(vec![
        FieldSpec::input("email", "Email", "email")
            .required()
            .with_progress(20),
        FieldSpec::input("password", "Password", "password")
            .required()
            .with_progress(20),
        FieldSpec::input("repeat_password", "Repeat password", "password").required(),
        FieldSpec::checkbox("newsletter", "Send me the monthly newsletter"),
        FieldSpec::input("newsletter_email", "Newsletter email", "email")
            .only_show_if_checked("newsletter")
            .with_bottom_link(Link::new("Privacy policy", "/privacy")),
    ])
    .with_messages(
        Messages::new()
            .with_heading("Create an account")
            .with_submit("Next step"),
    )
    .with_bottom_link(Link::new("Already have an account? Log in", "/signin"))
    .with_percentage(0)
}
