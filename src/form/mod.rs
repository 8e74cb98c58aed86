//! Donation form core: field declarations, validation schema, field state
//! store, and the submit controller. Everything here is synchronous and
//! rendering-agnostic; the terminal front-end lives in [`crate::cli`].

pub mod controller;
pub mod fields;
pub mod schema;
pub mod state;

pub use controller::{FormController, FormPhase, JsonSink, SubmitOutcome, SubmitSink};
pub use fields::{
    descriptor, descriptors, Donation, FieldDescriptor, FieldKind, FieldName, FieldValues,
    CURRENCIES,
};
pub use schema::{validate, ErrorSet, Rule};
pub use state::FormState;
