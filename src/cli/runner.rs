use crate::cli::interaction::{FieldPrompt, FormInteraction, PromptReply, ReviewReply};
use crate::cli::output;
use crate::form::controller::{FormController, SubmitOutcome, SubmitSink};
use crate::form::fields::{descriptor, descriptors, Donation, FieldName};
use crate::form::state::FormState;

/// High-level lifecycle states of a form run.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// Drives the donation form: one pass over the six fields (each completed
/// prompt is a change event followed by a blur), then a review step offering
/// submit, another editing pass, or cancellation. Rejected submits surface
/// every field error and drop back to editing.
pub fn run_form<I, S>(interaction: &mut I, sink: &mut S) -> FormResult<Donation>
where
    I: FormInteraction,
    S: SubmitSink,
{
    let mut controller = FormController::new();
    output::section("Send charity");

    loop {
        let total = FieldName::ALL.len();
        for (index, field) in descriptors().iter().enumerate() {
            let prompt = FieldPrompt {
                descriptor: field,
                current: controller.state().value(field.name).to_string(),
                error: controller.state().display_error(field.name),
                index,
                total,
            };
            match interaction.prompt_field(&prompt) {
                PromptReply::Value(value) => {
                    controller.set_value(field.name, value);
                    controller.mark_touched(field.name);
                }
                PromptReply::Keep => controller.mark_touched(field.name),
                PromptReply::Cancel => return FormResult::Cancelled,
            }
            if let Some(message) = controller.state().display_error(field.name) {
                output::warning(format!("{}: {}", field.label, message));
            }
        }

        let summary = summary_lines(controller.state());
        let problems = problem_lines(controller.state());
        match interaction.review(&summary, &problems) {
            ReviewReply::Cancel => return FormResult::Cancelled,
            ReviewReply::Edit => continue,
            ReviewReply::Submit => {
                match controller.submit(sink) {
                    SubmitOutcome::Accepted => {
                        let donation = Donation::from_values(controller.state().values());
                        output::success("Donation sent. Thank you!");
                        return FormResult::Completed(donation);
                    }
                    SubmitOutcome::Rejected => {
                        output::warning("Please fix the highlighted fields before sending.");
                        for (name, message) in controller.state().errors() {
                            output::warning(format!("{}: {}", descriptor(*name).label, message));
                        }
                    }
                }
            }
        }
    }
}

fn summary_lines(state: &FormState) -> Vec<String> {
    descriptors()
        .iter()
        .map(|field| {
            let value = state.value(field.name);
            if value.is_empty() {
                format!("{}: [empty]", field.label)
            } else {
                format!("{}: {}", field.label, value)
            }
        })
        .collect()
}

fn problem_lines(state: &FormState) -> Vec<String> {
    state
        .errors()
        .iter()
        .filter(|(name, _)| state.is_touched(**name))
        .map(|(name, message)| format!("{}: {}", descriptor(*name).label, message))
        .collect()
}
