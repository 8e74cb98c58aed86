//! Scripted prompt input for deterministic tests.
//!
//! Interactive prompts cannot run under a test harness, so the binary (and
//! in-process tests) can pre-load answers through `CHARITY_FORM_TEST_INPUTS`:
//! tokens separated by `|`, consumed in prompt order. `<KEEP>` keeps the
//! current value, `<BLANK>` submits an empty value, `<CANCEL>` aborts, and
//! `<SUBMIT>` / `<EDIT>` answer the review menu.

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

pub const INPUTS_ENV: &str = "CHARITY_FORM_TEST_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    Value(String),
    Keep,
    Cancel,
    Submit,
    Edit,
}

struct InputQueue {
    enabled: bool,
    inputs: VecDeque<ScriptedInput>,
}

impl InputQueue {
    fn from_env() -> Self {
        if let Ok(raw) = env::var(INPUTS_ENV) {
            Self {
                enabled: true,
                inputs: parse_inputs(&raw),
            }
        } else {
            Self {
                enabled: false,
                inputs: VecDeque::new(),
            }
        }
    }
}

static INPUTS: Lazy<Mutex<InputQueue>> = Lazy::new(|| Mutex::new(InputQueue::from_env()));

pub fn is_enabled() -> bool {
    INPUTS.lock().expect("input queue poisoned").enabled
}

/// Next scripted answer, or `None` when scripting is off. Exhausting the
/// queue while scripting is a test-script bug and panics with the prompt
/// label.
pub fn next_input(label: &str) -> Option<ScriptedInput> {
    let mut guard = INPUTS.lock().expect("input queue poisoned");
    if !guard.enabled {
        return None;
    }
    Some(
        guard
            .inputs
            .pop_front()
            .unwrap_or_else(|| panic!("Scripted inputs exhausted before prompt `{label}`")),
    )
}

pub fn install_inputs(inputs: Vec<ScriptedInput>) {
    let mut guard = INPUTS.lock().expect("input queue poisoned");
    guard.enabled = true;
    guard.inputs = inputs.into();
}

pub fn reset_inputs() {
    let mut guard = INPUTS.lock().expect("input queue poisoned");
    guard.enabled = false;
    guard.inputs.clear();
}

fn parse_input(token: &str) -> ScriptedInput {
    match token.to_ascii_uppercase().as_str() {
        "<KEEP>" | "KEEP" => ScriptedInput::Keep,
        "<CANCEL>" | "CANCEL" => ScriptedInput::Cancel,
        "<SUBMIT>" | "SUBMIT" => ScriptedInput::Submit,
        "<EDIT>" | "EDIT" => ScriptedInput::Edit,
        "<BLANK>" | "<EMPTY>" => ScriptedInput::Value(String::new()),
        _ => ScriptedInput::Value(token.to_string()),
    }
}

fn parse_inputs(raw: &str) -> VecDeque<ScriptedInput> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(parse_input(trimmed))
            }
        })
        .collect()
}
