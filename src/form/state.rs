//! The field state store: current values, per-field touched flags, and the
//! latest error set, revalidated on every change.

use std::collections::BTreeSet;

use crate::form::fields::{FieldName, FieldValues};
use crate::form::schema::{validate, ErrorSet};

/// In-memory state of the donation form. A change event carrying
/// `(field, value)` is the only mutation path into the store, which keeps it
/// testable in isolation from any rendering layer.
#[derive(Debug, Clone)]
pub struct FormState {
    values: FieldValues,
    touched: BTreeSet<FieldName>,
    errors: ErrorSet,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Creates the store with declared defaults. A fresh form already fails
    /// validation on five fields (the default amount of 0 is below the
    /// minimum) but shows nothing until fields are touched.
    pub fn new() -> Self {
        let values = FieldValues::new();
        let errors = validate(&values);
        Self {
            values,
            touched: BTreeSet::new(),
            errors,
        }
    }

    /// Overwrites a field value and revalidates the whole set.
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.values.set(name, value);
        self.errors = validate(&self.values);
        tracing::debug!(field = %name, errors = self.errors.len(), "form state revalidated");
    }

    /// Marks a field as interacted with. Idempotent.
    pub fn mark_touched(&mut self, name: FieldName) {
        self.touched.insert(name);
    }

    /// Marks every field touched, used on submit attempts so nothing stays
    /// silently invalid.
    pub fn touch_all(&mut self) {
        self.touched.extend(FieldName::ALL);
    }

    pub fn is_touched(&self, name: FieldName) -> bool {
        self.touched.contains(&name)
    }

    /// The error for a field, visible only once the field has been touched.
    pub fn display_error(&self, name: FieldName) -> Option<&'static str> {
        if self.touched.contains(&name) {
            self.errors.get(&name).copied()
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.values.get(name)
    }
}
