use charity_form::form::{
    validate, Donation, FieldName, FieldValues, FormController, FormPhase, SubmitOutcome,
    SubmitSink,
};

#[derive(Default)]
struct RecordingSink {
    donations: Vec<Donation>,
}

impl SubmitSink for RecordingSink {
    fn submitted(&mut self, donation: Donation) {
        self.donations.push(donation);
    }
}

#[test]
fn untouched_form_blocks_submission_and_reveals_errors() {
    let mut controller = FormController::new();
    let mut sink = RecordingSink::default();

    let outcome = controller.submit(&mut sink);

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(controller.phase(), FormPhase::Editing);
    assert!(sink.donations.is_empty());

    for name in FieldName::ALL {
        assert!(controller.state().is_touched(name));
    }
    assert_eq!(
        controller.state().display_error(FieldName::Name),
        Some("Required field")
    );
    assert_eq!(
        controller.state().display_error(FieldName::Email),
        Some("Required field")
    );
    assert_eq!(
        controller.state().display_error(FieldName::Amount),
        Some("No less than 5")
    );
    assert_eq!(
        controller.state().display_error(FieldName::Currency),
        Some("Choose currency")
    );
    assert_eq!(
        controller.state().display_error(FieldName::Terms),
        Some("Agreement is needed")
    );
    assert_eq!(controller.state().display_error(FieldName::Text), None);
}

#[test]
fn successful_submission_hands_over_exactly_the_entered_values() {
    let mut controller = FormController::new();
    controller.set_value(FieldName::Name, "Ann");
    controller.set_value(FieldName::Email, "ann@x.com");
    controller.set_value(FieldName::Amount, "10");
    controller.set_value(FieldName::Currency, "USD");
    controller.set_value(FieldName::Terms, "true");

    let mut sink = RecordingSink::default();
    let outcome = controller.submit(&mut sink);

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(controller.phase(), FormPhase::Submitted);
    assert_eq!(
        sink.donations,
        vec![Donation {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            amount: 10.0,
            currency: "USD".into(),
            text: String::new(),
            terms: true,
        }]
    );
}

#[test]
fn non_finite_amount_blocks_submission() {
    let mut controller = FormController::new();
    controller.set_value(FieldName::Name, "Ann");
    controller.set_value(FieldName::Email, "ann@x.com");
    controller.set_value(FieldName::Amount, "nan");
    controller.set_value(FieldName::Currency, "USD");
    controller.set_value(FieldName::Terms, "true");

    let mut sink = RecordingSink::default();
    assert_eq!(controller.submit(&mut sink), SubmitOutcome::Rejected);
    assert!(sink.donations.is_empty());
    assert_eq!(
        controller.state().display_error(FieldName::Amount),
        Some("Required field")
    );

    controller.set_value(FieldName::Amount, "10");
    assert_eq!(controller.submit(&mut sink), SubmitOutcome::Accepted);
}

#[test]
fn blur_gates_error_visibility_until_touched() {
    let mut controller = FormController::new();
    controller.set_value(FieldName::Email, "not-an-email");
    assert_eq!(controller.state().display_error(FieldName::Email), None);

    controller.mark_touched(FieldName::Email);
    assert_eq!(
        controller.state().display_error(FieldName::Email),
        Some("Wrong email adress")
    );

    controller.set_value(FieldName::Email, "ann@x.com");
    assert_eq!(controller.state().display_error(FieldName::Email), None);
}

#[test]
fn validation_is_a_pure_function_of_the_value_set() {
    let mut values = FieldValues::new();
    values.set(FieldName::Name, "Ann");
    values.set(FieldName::Email, "ann@x.com");
    values.set(FieldName::Amount, "10");
    values.set(FieldName::Currency, "USD");
    values.set(FieldName::Terms, "true");

    assert!(validate(&values).is_empty());
    // Same input, same output; no hidden state in the schema.
    assert_eq!(validate(&values), validate(&values.clone()));

    values.set(FieldName::Amount, "4.9");
    assert_eq!(
        validate(&values).get(&FieldName::Amount),
        Some(&"No less than 5")
    );
}

#[test]
fn donation_serializes_with_the_six_field_identifiers() {
    let donation = Donation {
        name: "Ann".into(),
        email: "ann@x.com".into(),
        amount: 10.0,
        currency: "USD".into(),
        text: String::new(),
        terms: true,
    };
    let json = serde_json::to_value(&donation).unwrap();
    let object = json.as_object().unwrap();
    let keys: Vec<_> = object.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 6);
    for name in FieldName::ALL {
        assert!(keys.contains(&name.as_str()));
    }
}
