//! Pure validation schema: whole value set in, whole error set out.
//!
//! Validation is recomputed from scratch on every change rather than patched
//! per field; the rule set has no cross-field dependencies that would justify
//! incremental bookkeeping.

use std::collections::BTreeMap;

use crate::form::fields::{descriptors, FieldName, FieldValues};

/// Per-field validation failure messages for a value set. Absence of a key
/// means the field currently passes; keys are a subset of the six field
/// names by construction.
pub type ErrorSet = BTreeMap<FieldName, &'static str>;

/// A single declarative check with its fixed failure message. Rules are
/// evaluated in declaration order and the first failing rule's message wins
/// for the field.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Trimmed value must be non-empty.
    Required(&'static str),
    /// Minimum character count; empty values are skipped so optional fields
    /// stay valid when absent.
    MinLength(usize, &'static str),
    /// Structural email check; empty values are skipped.
    Email(&'static str),
    /// Value must parse as a finite number.
    Number(&'static str),
    /// Parsed number must be at least the bound; unparseable values are
    /// skipped (already caught by [`Rule::Number`]).
    MinNumber(f64, &'static str),
    /// Value must match one of the listed options exactly.
    OneOf(&'static [&'static str], &'static str),
    /// Boolean field must hold "true".
    Accepted(&'static str),
}

impl Rule {
    /// Checks one raw value, returning the failure message if the rule does
    /// not pass.
    fn check(&self, raw: &str) -> Option<&'static str> {
        let trimmed = raw.trim();
        match self {
            Rule::Required(message) => trimmed.is_empty().then_some(*message),
            Rule::MinLength(min, message) => {
                (!trimmed.is_empty() && trimmed.chars().count() < *min).then_some(*message)
            }
            Rule::Email(message) => {
                (!trimmed.is_empty() && !is_valid_email(trimmed)).then_some(*message)
            }
            Rule::Number(message) => {
                let numeric = trimmed.parse::<f64>().map_or(false, f64::is_finite);
                (!numeric).then_some(*message)
            }
            Rule::MinNumber(min, message) => match trimmed.parse::<f64>() {
                Ok(value) if value < *min => Some(*message),
                _ => None,
            },
            Rule::OneOf(options, message) => {
                let matched = options.iter().any(|option| *option == trimmed);
                (!matched).then_some(*message)
            }
            Rule::Accepted(message) => (trimmed != "true").then_some(*message),
        }
    }
}

/// Validates the full value set against the declared rules.
pub fn validate(values: &FieldValues) -> ErrorSet {
    let mut errors = ErrorSet::new();
    for field in descriptors() {
        let raw = values.get(field.name);
        if let Some(message) = field.rules.iter().find_map(|rule| rule.check(raw)) {
            errors.insert(field.name, message);
        }
    }
    errors
}

/// Structural email check: exactly one `@`, non-empty local and domain
/// parts, and a domain with an interior dot.
fn is_valid_email(candidate: &str) -> bool {
    let mut parts = candidate.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !candidate.chars().any(char::is_whitespace)
}
