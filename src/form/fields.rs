//! Static declaration of the donation form: which fields exist, how they are
//! rendered, which rules apply, and what the typed submit output looks like.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::schema::Rule;

/// Currency codes offered by the form, in display order.
pub const CURRENCIES: &[&str] = &["USD", "UAH", "RUB"];

/// Closed set of field names. The value set, the touched set, and the error
/// set are all keyed by this enum, so an out-of-range field name is a compile
/// error rather than a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Amount,
    Currency,
    Text,
    Terms,
}

impl FieldName {
    /// All fields in form order.
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Amount,
        FieldName::Currency,
        FieldName::Text,
        FieldName::Terms,
    ];

    /// Stable identifier used for label association and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Amount => "amount",
            FieldName::Currency => "currency",
            FieldName::Text => "text",
            FieldName::Terms => "terms",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field is rendered. `Text`, `Email`, `Number`, `Choice`, and
/// `Multiline` all use the text-like binding; `Checkbox` uses the boolean
/// binding with the label as its child content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Choice(&'static [&'static str]),
    Multiline,
    Checkbox,
}

/// Declarative description of a single form field.
pub struct FieldDescriptor {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
    pub default: &'static str,
}

static DESCRIPTORS: [FieldDescriptor; 6] = [
    FieldDescriptor {
        name: FieldName::Name,
        label: "Your name",
        kind: FieldKind::Text,
        rules: &[
            Rule::Required("Required field"),
            Rule::MinLength(2, "2 symbols minimum"),
        ],
        default: "",
    },
    FieldDescriptor {
        name: FieldName::Email,
        label: "Your email",
        kind: FieldKind::Email,
        rules: &[
            Rule::Required("Required field"),
            Rule::Email("Wrong email adress"),
        ],
        default: "",
    },
    FieldDescriptor {
        name: FieldName::Amount,
        label: "Amount",
        kind: FieldKind::Number,
        rules: &[
            Rule::Number("Required field"),
            Rule::MinNumber(5.0, "No less than 5"),
        ],
        default: "0",
    },
    FieldDescriptor {
        name: FieldName::Currency,
        label: "Currency",
        kind: FieldKind::Choice(CURRENCIES),
        rules: &[Rule::OneOf(CURRENCIES, "Choose currency")],
        default: "",
    },
    FieldDescriptor {
        name: FieldName::Text,
        label: "Your message",
        kind: FieldKind::Multiline,
        rules: &[Rule::MinLength(10, "No less than 10 characters")],
        default: "",
    },
    FieldDescriptor {
        name: FieldName::Terms,
        label: "Do you agree with policy?",
        kind: FieldKind::Checkbox,
        rules: &[Rule::Accepted("Agreement is needed")],
        default: "false",
    },
];

/// The full field declaration in form order.
pub fn descriptors() -> &'static [FieldDescriptor; 6] {
    &DESCRIPTORS
}

/// Descriptor for a single field.
pub fn descriptor(name: FieldName) -> &'static FieldDescriptor {
    let index = match name {
        FieldName::Name => 0,
        FieldName::Email => 1,
        FieldName::Amount => 2,
        FieldName::Currency => 3,
        FieldName::Text => 4,
        FieldName::Terms => 5,
    };
    &DESCRIPTORS[index]
}

/// The Field Value Set: current raw values of all six fields.
///
/// Values stay strings until commit; the schema parses them. The map always
/// holds exactly the six declared keys — `set` overwrites, nothing inserts or
/// removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<FieldName, String>,
}

impl Default for FieldValues {
    fn default() -> Self {
        let values = DESCRIPTORS
            .iter()
            .map(|field| (field.name, field.default.to_string()))
            .collect();
        Self { values }
    }
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: FieldName) -> &str {
        self.values
            .get(&name)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }
}

/// Typed donation produced once every validation passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub currency: String,
    pub text: String,
    pub terms: bool,
}

impl Donation {
    /// Builds the typed output from a validated value set. Callers are
    /// expected to have run the schema first; unparseable leftovers fall back
    /// to defaults rather than failing.
    pub fn from_values(values: &FieldValues) -> Self {
        Self {
            name: values.get(FieldName::Name).trim().to_string(),
            email: values.get(FieldName::Email).trim().to_string(),
            amount: values
                .get(FieldName::Amount)
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0),
            currency: values.get(FieldName::Currency).trim().to_string(),
            text: values.get(FieldName::Text).trim().to_string(),
            terms: values.get(FieldName::Terms).trim() == "true",
        }
    }
}
