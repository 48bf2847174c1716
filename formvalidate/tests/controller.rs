use formdom::{ButtonType, Element, Event, Form};
use formvalidate::{
    Config, Error, FieldState, FieldValue, FormValidate, Outcome, ValidationResult,
};

const REQUIRED: &str = "data-required";

/// A signup form: six required units, one optional field.
fn full_form() -> Form {
    Form::new(
        Element::form()
            .id("form")
            .child(
                Element::div()
                    .id("g-name")
                    .class("form-group")
                    .child(Element::label("Name"))
                    .child(Element::text_input("name").id("name").attr(REQUIRED, "")),
            )
            .child(
                Element::div()
                    .id("g-optional")
                    .class("form-group")
                    .child(Element::label("Optional"))
                    .child(Element::text_input("optional").id("optional")),
            )
            .child(
                Element::div()
                    .id("g-email")
                    .class("form-group")
                    .child(Element::label("E-mail"))
                    .child(Element::text_input("email").id("email").attr(REQUIRED, "")),
            )
            .child(
                Element::div()
                    .id("g-options")
                    .class("form-group")
                    .child(Element::label("Options"))
                    .child(
                        Element::select("options")
                            .id("options")
                            .attr(REQUIRED, "")
                            .child(Element::option("", "Select an option"))
                            .child(Element::option("option1", "Option 1"))
                            .child(Element::option("option2", "Option 2")),
                    ),
            )
            .child(
                Element::div()
                    .id("g-terms")
                    .class("form-group")
                    .child(Element::label("Accept terms"))
                    .child(Element::checkbox("terms", "true").id("terms").attr(REQUIRED, "")),
            )
            .child(
                Element::div()
                    .id("g-gender")
                    .class("form-group")
                    .child(Element::div().class("label").text("Gender"))
                    .child(
                        Element::label("")
                            .child(Element::radio("gender", "male").id("male").attr(REQUIRED, "")),
                    )
                    .child(
                        Element::label("")
                            .child(Element::radio("gender", "female").id("female").attr(REQUIRED, "")),
                    ),
            )
            .child(
                Element::div()
                    .id("g-comments")
                    .class("form-group")
                    .child(Element::label("Comments"))
                    .child(Element::textarea("comments").id("comments").attr(REQUIRED, "")),
            )
            .child(Element::button(ButtonType::Submit).id("submit"))
            .child(Element::button(ButtonType::Reset).id("reset")),
    )
}

fn controller(form: Form) -> FormValidate {
    let mut validate = FormValidate::new(form, Config::default()).unwrap();
    validate.init();
    validate
}

fn messages(validate: &FormValidate, within: &str) -> Vec<String> {
    let class = validate.config().msg_class.clone();
    validate
        .form()
        .query_within(within, |e| e.has_class(&class))
        .iter()
        .filter_map(|e| e.text_content().map(str::to_string))
        .collect()
}

fn fill(validate: &mut FormValidate) {
    let form = validate.form_mut();
    form.set_value("name", "Ana").unwrap();
    form.set_value("email", "ana@site.com").unwrap();
    form.set_value("options", "option1").unwrap();
    form.set_checked("terms", true).unwrap();
    form.set_checked("female", true).unwrap();
    form.set_value("comments", "hello").unwrap();
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_rejects_non_form_root() {
    let err = FormValidate::new(Form::new(Element::div()), Config::default()).unwrap_err();
    assert_eq!(err, Error::InvalidForm);
    assert_eq!(err.to_string(), "formSelector should a valid selector");
}

#[test]
fn test_new_rejects_unusable_config() {
    let result = FormValidate::new(full_form(), Config::default().valid_class(""));
    assert!(matches!(result, Err(Error::InvalidConfig { .. })));
}

#[test]
fn test_init_disables_native_validation() {
    let validate = controller(full_form());
    assert!(validate.is_initialized());
    assert!(validate.form().get("form").unwrap().has_attr("novalidate"));
}

#[test]
fn test_init_twice_binds_once() {
    let mut validate = controller(full_form());
    validate.init();
    assert!(validate.is_bound("name"));
    assert!(!validate.is_bound("optional"));
}

#[test]
fn test_events_before_init_are_ignored() {
    let mut validate = FormValidate::new(full_form(), Config::default()).unwrap();
    assert_eq!(validate.dispatch(&mut Event::keyup("name")), Outcome::Ignored);
    assert_eq!(validate.field_state("g-name"), FieldState::Untouched);
}

// ============================================================================
// Field events
// ============================================================================

#[test]
fn test_keyup_on_empty_field_marks_group_invalid() {
    let mut validate = controller(full_form());

    let outcome = validate.dispatch(&mut Event::keyup("name"));

    assert_eq!(
        outcome,
        Outcome::Validated {
            control: "name".to_string(),
            unit: "g-name".to_string(),
            valid: false,
        }
    );
    assert_eq!(validate.field_state("g-name"), FieldState::Invalid);
    assert_eq!(messages(&validate, "g-name"), vec!["Required field".to_string()]);
}

#[test]
fn test_typing_toggles_between_states() {
    let mut validate = controller(full_form());

    validate.dispatch(&mut Event::keyup("name"));
    validate.form_mut().set_value("name", "Ana").unwrap();
    validate.dispatch(&mut Event::input("name"));

    assert_eq!(validate.field_state("g-name"), FieldState::Valid);
    assert!(messages(&validate, "g-name").is_empty());

    validate.form_mut().set_value("name", "").unwrap();
    validate.dispatch(&mut Event::blur("name"));

    assert_eq!(validate.field_state("g-name"), FieldState::Invalid);
    assert_eq!(messages(&validate, "g-name").len(), 1);
}

#[test]
fn test_repeated_events_keep_one_message() {
    let mut validate = controller(full_form());
    for _ in 0..3 {
        validate.dispatch(&mut Event::keyup("name"));
    }
    let group = validate.form().get("g-name").unwrap();
    assert_eq!(group.classes.iter().filter(|c| *c == "invalid-field").count(), 1);
    assert_eq!(messages(&validate, "g-name").len(), 1);
}

#[test]
fn test_optional_field_is_not_bound() {
    let mut validate = controller(full_form());
    assert_eq!(validate.dispatch(&mut Event::keyup("optional")), Outcome::Ignored);
    assert_eq!(validate.field_state("g-optional"), FieldState::Untouched);
}

#[test]
fn test_focus_event_is_ignored() {
    let mut validate = controller(full_form());
    assert_eq!(validate.dispatch(&mut Event::focus("name")), Outcome::Ignored);
}

#[test]
fn test_leading_whitespace_is_invalid() {
    let mut validate = controller(full_form());
    validate.form_mut().set_value("name", " Ana").unwrap();
    assert!(!validate.validation("name"));
    validate.form_mut().set_value("name", "Ana").unwrap();
    assert!(validate.validation("name"));
}

#[test]
fn test_validation_of_unknown_id_changes_nothing() {
    let mut validate = controller(full_form());
    assert!(!validate.validation("missing"));
    assert!(!validate.validation("g-name"));
    assert_eq!(validate.field_state("g-name"), FieldState::Untouched);
}

#[test]
fn test_radio_change_validates_cluster() {
    let mut validate = controller(full_form());

    validate.form_mut().set_checked("male", true).unwrap();
    let outcome = validate.dispatch(&mut Event::change("male"));

    assert_eq!(
        outcome,
        Outcome::Validated {
            control: "male".to_string(),
            unit: "g-gender".to_string(),
            valid: true,
        }
    );
    assert_eq!(validate.field_state("g-gender"), FieldState::Valid);
}

#[test]
fn test_unchecking_checkbox_invalidates() {
    let mut validate = controller(full_form());

    validate.form_mut().set_checked("terms", true).unwrap();
    validate.dispatch(&mut Event::change("terms"));
    assert_eq!(validate.field_state("g-terms"), FieldState::Valid);

    validate.form_mut().set_checked("terms", false).unwrap();
    validate.dispatch(&mut Event::change("terms"));
    assert_eq!(validate.field_state("g-terms"), FieldState::Invalid);
}

#[test]
fn test_any_checked_control_in_container_counts() {
    let form = Form::new(
        Element::form().id("form").child(
            Element::div()
                .id("group")
                .class("form-group")
                .child(Element::radio("plan", "basic").id("basic").attr(REQUIRED, ""))
                .child(Element::checkbox("newsletter", "yes").id("newsletter").checked(true)),
        ),
    );
    let mut validate = controller(form);

    assert!(validate.validation("basic"));
    assert_eq!(validate.field_state("group"), FieldState::Valid);
}

#[test]
fn test_optional_checkbox_is_not_validated() {
    let form = Form::new(
        Element::form()
            .id("form")
            .child(
                Element::div()
                    .id("g-name")
                    .class("form-group")
                    .child(Element::text_input("name").id("name").attr(REQUIRED, "")),
            )
            .child(
                Element::div()
                    .id("g-news")
                    .class("form-group")
                    .child(Element::checkbox("news", "yes").id("news")),
            ),
    );
    let mut validate = controller(form);

    validate.form_mut().set_checked("news", true).unwrap();
    assert_eq!(validate.dispatch(&mut Event::change("news")), Outcome::Ignored);
    validate.form_mut().set_checked("news", false).unwrap();
    assert_eq!(validate.dispatch(&mut Event::change("news")), Outcome::Ignored);

    assert_eq!(validate.field_state("g-news"), FieldState::Untouched);
    assert!(messages(&validate, "g-news").is_empty());
}

#[test]
fn test_unmarked_radio_of_required_cluster_is_bound() {
    let form = Form::new(
        Element::form().id("form").child(
            Element::div()
                .id("g-plan")
                .class("form-group")
                .child(Element::label("").child(Element::radio("plan", "basic").id("basic").attr(REQUIRED, "")))
                .child(Element::label("").child(Element::radio("plan", "pro").id("pro"))),
        ),
    );
    let mut validate = controller(form);
    assert!(validate.is_bound("pro"));

    validate.form_mut().set_checked("pro", true).unwrap();
    assert!(matches!(
        validate.dispatch(&mut Event::change("pro")),
        Outcome::Validated { valid: true, .. }
    ));
    assert_eq!(validate.field_state("g-plan"), FieldState::Valid);
}

// ============================================================================
// Rules and messages
// ============================================================================

fn single_field(input: Element) -> Form {
    Form::new(
        Element::form().id("form").child(
            Element::div()
                .id("group")
                .class("form-group")
                .child(input.id("field").attr(REQUIRED, "")),
        ),
    )
}

#[test]
fn test_named_rule_decides_validity() {
    let mut validate = controller(single_field(
        Element::text_input("email").attr("data-validate-rule", "email"),
    ));

    validate.form_mut().set_value("field", "ana@").unwrap();
    assert!(!validate.validation("field"));
    validate.form_mut().set_value("field", "ana@site.com").unwrap();
    assert!(validate.validation("field"));
}

#[test]
fn test_cpf_rule_sets_maxlength() {
    let mut validate = controller(single_field(
        Element::text_input("cpf").attr("data-validate-rule", "cpf"),
    ));

    validate.form_mut().set_value("field", "834.613.480-08").unwrap();
    assert!(!validate.validation("field"));
    assert_eq!(validate.form().get("field").unwrap().get_attr("maxlength"), Some("14"));

    validate.form_mut().set_value("field", "834.613.480-07").unwrap();
    assert!(validate.validation("field"));
}

#[test]
fn test_custom_regex_is_a_search() {
    let mut validate = controller(single_field(
        Element::text_input("code").attr("data-validate-regex", "[0-9]+"),
    ));

    validate.form_mut().set_value("field", "abc").unwrap();
    assert!(!validate.validation("field"));
    validate.form_mut().set_value("field", "abc123").unwrap();
    assert!(validate.validation("field"));
}

#[test]
fn test_named_rule_beats_custom_regex() {
    let mut validate = controller(single_field(
        Element::text_input("zip")
            .attr("data-validate-rule", "cep")
            .attr("data-validate-regex", "^x$"),
    ));

    validate.form_mut().set_value("field", "12345-678").unwrap();
    assert!(validate.validation("field"));
}

#[test]
fn test_broken_regex_never_matches() {
    let mut validate = controller(single_field(
        Element::text_input("code").attr("data-validate-regex", "(unclosed"),
    ));
    validate.form_mut().set_value("field", "(unclosed").unwrap();
    assert!(!validate.validation("field"));
}

#[test]
fn test_unknown_rule_falls_back_to_required() {
    let mut validate = controller(single_field(
        Element::text_input("x").attr("data-validate-rule", "EMAIL"),
    ));
    validate.form_mut().set_value("field", "not an email").unwrap();
    assert!(validate.validation("field"));
}

#[test]
fn test_custom_message_on_control() {
    let mut validate = controller(single_field(
        Element::text_input("name").attr("data-validate-msg", "Tell us your name"),
    ));
    validate.dispatch(&mut Event::keyup("field"));
    assert_eq!(messages(&validate, "group"), vec!["Tell us your name".to_string()]);
}

#[test]
fn test_custom_message_on_group() {
    let form = Form::new(
        Element::form().id("form").child(
            Element::div()
                .id("group")
                .class("form-group")
                .attr("data-validate-msg", "Pick one")
                .child(Element::label("").child(Element::radio("size", "s").id("s").attr(REQUIRED, "")))
                .child(Element::label("").child(Element::radio("size", "m").id("m"))),
        ),
    );
    let mut validate = controller(form);

    validate.dispatch(&mut Event::change("s"));
    assert_eq!(messages(&validate, "group"), vec!["Pick one".to_string()]);
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn test_submit_empty_form_marks_every_required_unit() {
    let mut validate = controller(full_form());
    let mut event = Event::submit("form");

    let outcome = validate.dispatch(&mut event);

    assert!(event.default_prevented());
    let Outcome::Rejected(result) = outcome else {
        panic!("expected a rejected submit, got {outcome:?}");
    };
    let targets: Vec<&str> = result.errors().iter().map(|e| e.target.as_str()).collect();
    assert_eq!(
        targets,
        vec!["g-name", "g-email", "g-options", "g-terms", "g-gender", "g-comments"]
    );
    assert_eq!(result.errors()[4].field_name, "gender");
    assert!(result.errors().iter().all(|e| e.message == "Required field"));

    assert_eq!(messages(&validate, "form").len(), 6);
    assert_eq!(validate.field_state("g-optional"), FieldState::Untouched);
    assert_eq!(validate.form().focused(), Some("name"));
    assert!(!validate.has_valid_fields());
}

#[test]
fn test_submit_focuses_first_invalid_unit() {
    let mut validate = controller(full_form());
    validate.form_mut().set_value("name", "Ana").unwrap();
    validate.dispatch(&mut Event::keyup("name"));

    let result = validate.submit(&mut Event::submit("form"));

    assert_eq!(result.first_invalid_target(), Some("g-email"));
    assert_eq!(validate.form().focused(), Some("email"));
}

#[test]
fn test_submit_twice_keeps_one_message_per_unit() {
    let mut validate = controller(full_form());
    validate.dispatch(&mut Event::submit("form"));
    validate.dispatch(&mut Event::submit("form"));
    assert_eq!(messages(&validate, "form").len(), 6);
}

#[test]
fn test_ungrouped_fields_keep_separate_messages() {
    let mut validate = controller(Form::new(
        Element::form()
            .id("form")
            .child(
                Element::text_input("first")
                    .id("first")
                    .attr(REQUIRED, "")
                    .attr("data-validate-msg", "First please"),
            )
            .child(
                Element::text_input("last")
                    .id("last")
                    .attr(REQUIRED, "")
                    .attr("data-validate-msg", "Last please"),
            ),
    ));

    validate.dispatch(&mut Event::blur("first"));
    validate.dispatch(&mut Event::blur("last"));
    assert_eq!(
        messages(&validate, "form"),
        vec!["First please".to_string(), "Last please".to_string()]
    );

    validate.form_mut().set_value("last", "Silva").unwrap();
    validate.dispatch(&mut Event::blur("last"));

    assert_eq!(validate.field_state("first"), FieldState::Invalid);
    assert_eq!(validate.field_state("last"), FieldState::Valid);
    assert_eq!(messages(&validate, "form"), vec!["First please".to_string()]);
}

#[test]
fn test_submit_valid_form_yields_values() {
    let mut validate = controller(full_form());
    fill(&mut validate);
    for id in ["name", "email", "comments"] {
        validate.dispatch(&mut Event::keyup(id));
    }
    for id in ["options", "terms", "female"] {
        validate.dispatch(&mut Event::change(id));
    }
    assert!(validate.has_valid_fields());
    assert!(validate.check_valid_fields());

    let mut event = Event::submit("form");
    let Outcome::Submitted(values) = validate.dispatch(&mut event) else {
        panic!("expected a successful submit");
    };

    assert!(event.default_prevented());
    assert_eq!(values.len(), 7);
    assert_eq!(values.get("name"), Some(&FieldValue::from("Ana")));
    assert_eq!(values.get("optional"), Some(&FieldValue::from("")));
    assert_eq!(values.get("options"), Some(&FieldValue::from("option1")));
    assert_eq!(values.get("terms"), Some(&FieldValue::Bool(true)));
    assert_eq!(values.get("gender"), Some(&FieldValue::from("female")));
    assert!(values.get("submit").is_none());
}

#[test]
fn test_form_without_required_fields_is_valid() {
    let form = Form::new(
        Element::form()
            .id("form")
            .child(Element::div().class("form-group").child(Element::text_input("name"))),
    );
    let mut validate = controller(form);

    assert!(validate.has_valid_fields());
    assert_eq!(validate.submit(&mut Event::submit("form")), ValidationResult::Valid);
}

#[test]
fn test_submit_with_nothing_focusable() {
    let form = Form::new(
        Element::form().id("form").child(
            Element::div()
                .id("group")
                .class("form-group")
                .child(Element::div().id("wrapper").attr(REQUIRED, "")),
        ),
    );
    let mut validate = controller(form);

    let result = validate.submit(&mut Event::submit("form"));

    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].field_name, "group");
    assert_eq!(validate.form().focused(), None);
}

#[test]
fn test_submit_on_other_target_is_ignored() {
    let mut validate = controller(full_form());
    let mut event = Event::submit("name");
    assert_eq!(validate.dispatch(&mut event), Outcome::Ignored);
    assert!(!event.default_prevented());
}

// ============================================================================
// Revalidation, prescan and reset
// ============================================================================

#[test]
fn test_trigger_revalidates_prefilled_form() {
    let mut validate = controller(full_form());
    fill(&mut validate);

    assert!(!validate.has_valid_fields());
    assert!(validate.trigger());
    assert_eq!(validate.field_state("g-gender"), FieldState::Valid);
    assert_eq!(validate.field_state("g-optional"), FieldState::Untouched);
}

#[test]
fn test_revalidate_all_reports_remaining_invalid() {
    let mut validate = controller(full_form());
    validate.form_mut().set_value("name", "Ana").unwrap();

    assert!(!validate.revalidate_all());
    assert_eq!(validate.field_state("g-name"), FieldState::Valid);
    assert_eq!(validate.field_state("g-email"), FieldState::Invalid);
}

#[test]
fn test_prescan_classifies_prefilled_fields() {
    let prefilled = || {
        Form::new(
            Element::form()
                .id("form")
                .child(
                    Element::div()
                        .id("g-name")
                        .class("form-group")
                        .child(Element::text_input("name").id("name").value("Ana").attr(REQUIRED, "")),
                )
                .child(
                    Element::div()
                        .id("g-email")
                        .class("form-group")
                        .child(Element::text_input("email").id("email").attr(REQUIRED, "")),
                ),
        )
    };

    let mut plain = controller(prefilled());
    plain.init();
    assert_eq!(plain.field_state("g-name"), FieldState::Untouched);

    let mut scanned = FormValidate::new(prefilled(), Config::default().prescan(true)).unwrap();
    scanned.init();
    assert_eq!(scanned.field_state("g-name"), FieldState::Valid);
    assert_eq!(scanned.field_state("g-email"), FieldState::Untouched);
}

#[test]
fn test_reset_round_trip() {
    let mut validate = controller(full_form());
    fill(&mut validate);
    validate.trigger();
    validate.form_mut().set_value("name", "").unwrap();
    validate.dispatch(&mut Event::keyup("name"));

    assert_eq!(validate.dispatch(&mut Event::reset("form")), Outcome::Reset);

    for unit in ["g-name", "g-email", "g-options", "g-terms", "g-gender", "g-comments"] {
        assert_eq!(validate.field_state(unit), FieldState::Untouched, "{unit}");
    }
    assert!(messages(&validate, "form").is_empty());

    let values = validate.values();
    assert_eq!(values.get("name"), Some(&FieldValue::from("")));
    assert_eq!(values.get("terms"), Some(&FieldValue::Null));
    assert_eq!(values.get("gender"), Some(&FieldValue::Null));
}

#[test]
fn test_rejected_result_serializes_with_status() {
    let mut validate = controller(full_form());
    let result = validate.submit(&mut Event::submit("form"));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["status"], "invalid");
    assert_eq!(json["errors"][0]["field_name"], "name");
    assert_eq!(json["errors"][0]["target"], "g-name");
}
