//! The seam between the form loop and the terminal.
//!
//! `FormInteraction` is what the runner drives; the interactive
//! implementation renders each binding with dialoguer, and tests substitute
//! a mock or the scripted queue in [`crate::cli::test_mode`].

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::output;
use crate::cli::test_mode::{self, ScriptedInput};
use crate::config::Config;
use crate::form::fields::{FieldDescriptor, FieldKind};

/// Everything a binding needs to render one field: the descriptor, the
/// current value, the currently visible error, and the step position.
pub struct FieldPrompt<'a> {
    pub descriptor: &'a FieldDescriptor,
    pub current: String,
    pub error: Option<&'static str>,
    pub index: usize,
    pub total: usize,
}

/// How a field prompt was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    /// User supplied a value (possibly empty).
    Value(String),
    /// Keep the current value untouched.
    Keep,
    /// Abort the whole form.
    Cancel,
}

/// Answer to the review step shown after a full field pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewReply {
    Submit,
    Edit,
    Cancel,
}

pub trait FormInteraction {
    fn prompt_field(&mut self, prompt: &FieldPrompt<'_>) -> PromptReply;

    fn review(&mut self, summary: &[String], problems: &[String]) -> ReviewReply;
}

/// Interactive implementation over dialoguer prompts.
pub struct TerminalInteraction {
    theme: ColorfulTheme,
    preferred_currency: Option<String>,
}

impl TerminalInteraction {
    pub fn new(config: &Config) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            preferred_currency: config.preferred_currency.clone(),
        }
    }

    fn prompt_text(&self, prompt: &FieldPrompt<'_>) -> PromptReply {
        let entered = Input::<String>::with_theme(&self.theme)
            .with_prompt(self.step_title(prompt))
            .with_initial_text(prompt.current.clone())
            .allow_empty(true)
            .interact_text();
        match entered {
            Ok(value) if value == prompt.current => PromptReply::Keep,
            Ok(value) => PromptReply::Value(value),
            Err(_) => PromptReply::Cancel,
        }
    }

    fn prompt_choice(&self, prompt: &FieldPrompt<'_>, options: &[&str]) -> PromptReply {
        let mut items = vec!["Choose currency".to_string()];
        items.extend(options.iter().map(|option| option.to_string()));

        let preselect = options
            .iter()
            .position(|option| *option == prompt.current)
            .or_else(|| {
                let preferred = self.preferred_currency.as_deref()?;
                options.iter().position(|option| *option == preferred)
            })
            .map(|index| index + 1)
            .unwrap_or(0);

        let selection = Select::with_theme(&self.theme)
            .with_prompt(self.step_title(prompt))
            .items(&items)
            .default(preselect)
            .interact_opt();
        match selection {
            Ok(Some(0)) => PromptReply::Value(String::new()),
            Ok(Some(index)) => PromptReply::Value(items[index].clone()),
            Ok(None) | Err(_) => PromptReply::Cancel,
        }
    }

    fn prompt_checkbox(&self, prompt: &FieldPrompt<'_>) -> PromptReply {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(self.step_title(prompt))
            .default(prompt.current == "true")
            .interact_opt();
        match answer {
            Ok(Some(agreed)) => PromptReply::Value(if agreed { "true" } else { "false" }.into()),
            Ok(None) | Err(_) => PromptReply::Cancel,
        }
    }

    fn step_title(&self, prompt: &FieldPrompt<'_>) -> String {
        format!(
            "[{}/{}] {}",
            prompt.index + 1,
            prompt.total,
            prompt.descriptor.label
        )
    }
}

impl FormInteraction for TerminalInteraction {
    fn prompt_field(&mut self, prompt: &FieldPrompt<'_>) -> PromptReply {
        if let Some(scripted) = test_mode::next_input(prompt.descriptor.name.as_str()) {
            return match scripted {
                ScriptedInput::Value(value) => PromptReply::Value(value),
                ScriptedInput::Keep => PromptReply::Keep,
                _ => PromptReply::Cancel,
            };
        }

        if let Some(message) = prompt.error {
            output::warning(message);
        }

        match &prompt.descriptor.kind {
            FieldKind::Choice(options) => self.prompt_choice(prompt, options),
            FieldKind::Checkbox => self.prompt_checkbox(prompt),
            _ => self.prompt_text(prompt),
        }
    }

    fn review(&mut self, summary: &[String], problems: &[String]) -> ReviewReply {
        if let Some(scripted) = test_mode::next_input("review") {
            return match scripted {
                ScriptedInput::Submit => ReviewReply::Submit,
                ScriptedInput::Edit => ReviewReply::Edit,
                _ => ReviewReply::Cancel,
            };
        }

        output::section("Review your donation");
        for line in summary {
            output::info(line);
        }
        for problem in problems {
            output::warning(problem);
        }

        let items = ["Send", "Edit fields", "Cancel"];
        let selection = Select::with_theme(&self.theme)
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact_opt();
        match selection {
            Ok(Some(0)) => ReviewReply::Submit,
            Ok(Some(1)) => ReviewReply::Edit,
            _ => ReviewReply::Cancel,
        }
    }
}
