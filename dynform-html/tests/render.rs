//! Rendering tests for dynform-html

use dynform::{
    AnswerChipDisplay, DynamicForm, FieldKind, FieldSpec, FormAction, FormDefinition, Messages,
    SwitchField, Theme,
};
use dynform_html::{HtmlOptions, question_to_html, to_html};
use example_forms::{climate_match_question, profile_form, signup_form};

fn fragment() -> HtmlOptions {
    HtmlOptions::new().full_document(false)
}

#[test]
fn test_full_document() {
    let form = DynamicForm::new(signup_form()).unwrap();
    let html = to_html(&form, HtmlOptions::new().with_title("Sign <up>"));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Sign &lt;up&gt;</title>"));
    assert!(html.contains("<style>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_fragment_without_styles() {
    let form = DynamicForm::new(signup_form()).unwrap();
    let html = to_html(&form, fragment().with_class_prefix("signup"));

    assert!(html.starts_with("<form class=\"signup-form\""));
    assert!(!html.contains("<style>"));
}

#[test]
fn test_form_action_and_autocomplete() {
    let form = DynamicForm::new(
        FormDefinition::new(vec![FieldSpec::text("name", "Name")])
            .with_form_action(FormAction::new("/signup/", "get"))
            .with_autocomplete("off"),
    )
    .unwrap();
    let html = to_html(&form, fragment());
    assert!(html.starts_with(
        "<form class=\"dynform-form\" action=\"/signup/\" method=\"get\" autocomplete=\"off\">"
    ));

    let plain = DynamicForm::new(signup_form()).unwrap();
    assert!(to_html(&plain, fragment()).starts_with("<form class=\"dynform-form\" method=\"post\">"));
}

#[test]
fn test_required_switch() {
    let form = DynamicForm::new(FormDefinition::new(vec![
        FieldSpec::new(
            "kind",
            "Kind",
            FieldKind::Switch(SwitchField::new("Person", "Organization")),
        )
        .required(),
    ]))
    .unwrap();
    let html = to_html(&form, fragment());
    assert!(html.contains(
        "<input type=\"checkbox\" role=\"switch\" id=\"kind\" name=\"kind\" value=\"true\" required>"
    ));
}

#[test]
fn test_required_and_autofocus() {
    let form = DynamicForm::new(signup_form()).unwrap();
    let html = to_html(&form, fragment());

    assert!(html.contains(
        "<input type=\"email\" id=\"email\" name=\"email\" class=\"dynform-input\" value=\"\" required autofocus>"
    ));
    assert!(html.contains(
        "<input type=\"password\" id=\"password\" name=\"password\" class=\"dynform-input\" value=\"\" required>"
    ));
    assert!(html.contains("<label for=\"email\">Email *</label>"));
}

#[test]
fn test_hidden_fields_are_absent() {
    let mut form = DynamicForm::new(signup_form()).unwrap();
    assert!(!to_html(&form, fragment()).contains("newsletter_email"));

    form.set_value("newsletter", true).unwrap();
    let html = to_html(&form, fragment());
    assert!(html.contains("id=\"newsletter-email\" name=\"newsletter_email\""));
    assert!(html.contains("<a class=\"dynform-field-link\" href=\"/privacy\">Privacy policy</a>"));
    assert!(html.contains("value=\"true\" checked>"));
}

#[test]
fn test_profile_widgets() {
    let mut form = DynamicForm::new(profile_form()).unwrap();
    form.set_value("sector", "mobility").unwrap();
    let html = to_html(&form, fragment());

    assert!(html.contains("<option value=\"\"></option>"));
    assert!(html.contains("<option value=\"mobility\" selected>Mobility</option>"));
    assert!(html.contains("<span class=\"dynform-switch-label active\">Person</span>"));
    assert!(html.contains("<span class=\"dynform-switch-label\">Organization</span>"));
    assert!(html.contains("value=\"Berlin\""));
    assert!(html.contains("value=\"cycling\" checked> Cycling"));
    assert!(html.contains("value=\"renewables\"> Renewables"));
    assert!(html.contains("data-base-url=\"/api/organizations/?search=\""));
    assert!(html.contains("<progress class=\"dynform-progress\" max=\"100\" value=\"55\">"));
    assert!(html.contains("class=\"dynform-buttons dynform-buttons-right\""));
    assert!(html.contains("value=\"skip\""));
}

#[test]
fn test_progress_is_clamped_for_display() {
    let form = DynamicForm::new(FormDefinition::empty().with_percentage(150)).unwrap();
    assert_eq!(form.progress(), 150);
    let html = to_html(&form, fragment());
    assert!(html.contains("max=\"100\" value=\"100\""));
}

#[test]
fn test_back_control_needs_handler() {
    let definition = FormDefinition::new(vec![FieldSpec::text("name", "Name")])
        .with_messages(Messages::new().with_header("Step 1"));

    let without = DynamicForm::new(definition.clone()).unwrap();
    assert!(!to_html(&without, fragment()).contains("value=\"back\""));

    let with = DynamicForm::new(definition).unwrap().on_go_back(|_| {});
    assert!(to_html(&with, fragment()).contains("value=\"back\""));
}

#[test]
fn test_error_message_is_escaped() {
    let form = DynamicForm::new(signup_form())
        .unwrap()
        .with_error_message("Email <taken>");
    let html = to_html(&form, fragment());
    assert!(html.contains("role=\"alert\">Email &lt;taken&gt;</div>"));
}

#[test]
fn test_question_chips() {
    let display = AnswerChipDisplay::new(climate_match_question(), |_| {}, || {});
    let html = question_to_html(&display, &Theme::default(), fragment());

    assert!(html.contains("Which of these would you most like to work on?"));
    assert!(html.contains("data-index=\"0\">Renewable energy</button>"));
    assert!(html.contains("data-index=\"2\">Low-carbon transport</button>"));
    assert!(html.contains("dynform-nav-back"));
    assert!(html.contains("dynform-nav-forward"));
}
