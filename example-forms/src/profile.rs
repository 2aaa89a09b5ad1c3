use dynform_types::{
    AutocompleteField, ConfigError, FieldKind, FieldSpec, FormDefinition, InterestsField, Link,
    Location, Messages, SelectField, SelectOption, SwitchField, Tag,
};

/// The profile form as JSON configuration.
pub const PROFILE_JSON: &str = include_str!("../data/profile.json");

/// Parse [`PROFILE_JSON`].
pub fn profile_form_json() -> Result<FormDefinition, ConfigError> {
    FormDefinition::from_json(PROFILE_JSON)
}

/// A profile form using every field kind.
pub fn profile_form() -> FormDefinition {
    FormDefinition::new(vec![
        FieldSpec::new(
            "is_organization",
            "Are you signing up as",
            FieldKind::Switch(SwitchField::new("Person", "Organization")),
        ),
        FieldSpec::text("first_name", "First name")
            .required()
            .with_progress(15),
        FieldSpec::new("location", "Where do you live?", FieldKind::Location)
            .with_initial(Location::new("Berlin").with_place("Berlin", "Germany"))
            .with_progress(15),
        FieldSpec::new(
            "sector",
            "Sector",
            FieldKind::Select(
                SelectField::new(vec![
                    SelectOption::new("Energy", "energy"),
                    SelectOption::new("Mobility", "mobility"),
                    SelectOption::new("Food", "food"),
                ])
                .with_empty_value(),
            ),
        )
        .required()
        .with_progress(10),
        FieldSpec::new(
            "topics",
            "What are you interested in?",
            FieldKind::Interests(
                InterestsField::new(vec![
                    Tag::new("renewables", "Renewables"),
                    Tag::new("cycling", "Cycling"),
                    Tag::new("gardening", "Gardening"),
                ])
                .with_selected(vec![Tag::new("cycling", "Cycling")])
                .with_info("Pick as many as you like."),
            ),
        ),
        FieldSpec::new(
            "organization",
            "Your organization",
            FieldKind::Autocomplete(AutocompleteField::new(
                "Your organization",
                "/api/organizations/?search=",
            )),
        ),
        FieldSpec::checkbox("newsletter", "Send me the monthly newsletter").with_progress(10),
        FieldSpec::input("newsletter_email", "Newsletter email", "email")
            .only_show_if_checked("newsletter")
            .with_progress(20),
    ])
    .with_messages(
        Messages::new()
            .with_header("Step 2 of 3")
            .with_heading("Tell us about yourself")
            .with_submit("Continue")
            .with_skip("Skip for now"),
    )
    .with_bottom_link(Link::new("Already have an account? Log in", "/signin"))
    .with_buttons_right()
    .with_percentage(30)
}
