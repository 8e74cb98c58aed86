//! Submit orchestration: a two-state machine over the field state store.

use crate::form::fields::{Donation, FieldName};
use crate::form::state::FormState;

/// Lifecycle phase of the form. `Submitted` is terminal for this component;
/// whatever happens afterwards (reset, navigation) belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

impl Default for FormPhase {
    fn default() -> Self {
        FormPhase::Editing
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

/// Externally supplied result handler, invoked exactly once with the final
/// value set when a submit attempt passes validation.
pub trait SubmitSink {
    fn submitted(&mut self, donation: Donation);
}

/// Reference sink: renders the donation as pretty-printed JSON for
/// diagnostic output, the way the original handler logged its values.
#[derive(Debug, Default)]
pub struct JsonSink {
    pub rendered: Option<String>,
}

impl JsonSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmitSink for JsonSink {
    fn submitted(&mut self, donation: Donation) {
        match serde_json::to_string_pretty(&donation) {
            Ok(json) => {
                tracing::info!(amount = donation.amount, currency = %donation.currency, "donation submitted");
                self.rendered = Some(json);
            }
            Err(err) => {
                tracing::error!(%err, "failed to render submitted donation");
            }
        }
    }
}

/// Orchestrates edits and submit attempts over a [`FormState`].
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
    phase: FormPhase,
}

impl FormController {
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Change event: overwrite and revalidate. Ignored after submission.
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        if self.phase == FormPhase::Editing {
            self.state.set_value(name, value);
        }
    }

    /// Blur event. Ignored after submission.
    pub fn mark_touched(&mut self, name: FieldName) {
        if self.phase == FormPhase::Editing {
            self.state.mark_touched(name);
        }
    }

    /// Attempts to submit: every field becomes touched so previously hidden
    /// errors surface; the sink is invoked only when the error set is empty.
    pub fn submit<S: SubmitSink>(&mut self, sink: &mut S) -> SubmitOutcome {
        if self.phase == FormPhase::Submitted {
            return SubmitOutcome::Rejected;
        }

        self.state.touch_all();
        if !self.state.is_valid() {
            tracing::debug!(errors = self.state.errors().len(), "submit blocked by validation");
            return SubmitOutcome::Rejected;
        }

        let donation = Donation::from_values(self.state.values());
        sink.submitted(donation);
        self.phase = FormPhase::Submitted;
        SubmitOutcome::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        donations: Vec<Donation>,
    }

    impl SubmitSink for RecordingSink {
        fn submitted(&mut self, donation: Donation) {
            self.donations.push(donation);
        }
    }

    fn fill_valid(controller: &mut FormController) {
        controller.set_value(FieldName::Name, "Ann");
        controller.set_value(FieldName::Email, "ann@x.com");
        controller.set_value(FieldName::Amount, "10");
        controller.set_value(FieldName::Currency, "USD");
        controller.set_value(FieldName::Terms, "true");
    }

    #[test]
    fn default_submit_is_blocked_and_touches_everything() {
        let mut controller = FormController::new();
        let mut sink = RecordingSink::default();

        let outcome = controller.submit(&mut sink);
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(controller.phase(), FormPhase::Editing);
        assert!(sink.donations.is_empty());

        for name in FieldName::ALL {
            assert!(controller.state().is_touched(name));
        }
        // Five fields show errors; the optional message shows none.
        let shown: Vec<_> = FieldName::ALL
            .iter()
            .filter(|name| controller.state().display_error(**name).is_some())
            .collect();
        assert_eq!(shown.len(), 5);
        assert!(controller.state().display_error(FieldName::Text).is_none());
    }

    #[test]
    fn valid_submit_invokes_sink_with_final_values() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);

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
    fn rejected_submit_recovers_after_corrections() {
        let mut controller = FormController::new();
        let mut sink = RecordingSink::default();
        assert_eq!(controller.submit(&mut sink), SubmitOutcome::Rejected);

        fill_valid(&mut controller);
        assert_eq!(controller.submit(&mut sink), SubmitOutcome::Accepted);
        assert_eq!(sink.donations.len(), 1);
    }

    #[test]
    fn submitted_phase_is_terminal() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);
        let mut sink = RecordingSink::default();
        assert_eq!(controller.submit(&mut sink), SubmitOutcome::Accepted);

        controller.set_value(FieldName::Name, "changed");
        assert_eq!(controller.state().value(FieldName::Name), "Ann");
        assert_eq!(controller.submit(&mut sink), SubmitOutcome::Rejected);
        assert_eq!(sink.donations.len(), 1);
    }

    #[test]
    fn json_sink_renders_pretty_output() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);
        let mut sink = JsonSink::new();
        assert_eq!(controller.submit(&mut sink), SubmitOutcome::Accepted);

        let rendered = sink.rendered.expect("rendered donation");
        assert!(rendered.contains("\"name\": \"Ann\""));
        assert!(rendered.contains("\"currency\": \"USD\""));
        assert!(rendered.contains("\"terms\": true"));
    }
}
