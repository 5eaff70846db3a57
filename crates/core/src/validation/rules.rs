//! Validation rule and result types.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::DbId;

/// A single declarative rule applied to one request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field must be present and non-null. The only rule reported for an
    /// absent value.
    Required,
    /// Remaining rules only run when the field is present in the request.
    Sometimes,
    /// An explicit `null` is accepted and passed through to the output.
    Nullable,
    /// String length limit, in characters.
    Max(usize),
    /// Accepts `true`, `false`, `0`, `1`, `"0"`, `"1"`; coerces to a JSON bool.
    Boolean,
    /// Accepts integral numbers or integral strings; coerces to a JSON number.
    Integer,
    /// Value (as string) must be one of the listed options; coerces to string.
    In(&'static [&'static str]),
    /// Four-digit year (`Y` format); coerces to a JSON number.
    DateFormatYear,
    /// Value must be a JSON array.
    Array,
    /// Every element must be the id of a live (non-deleted) row in `table`.
    Exists { table: &'static str },
}

/// The rules for one field, evaluated in declared order.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

impl FieldRules {
    pub fn has(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }
}

/// A complete rule set for one entity and action. Pure configuration.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub entity: &'static str,
    pub fields: &'static [FieldRules],
}

/// Field name -> list of human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: String) {
        self.0.entry(field.to_string()).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// A pending foreign-key existence check produced by an `exists` rule.
///
/// The evaluator is database-free; the caller resolves these against the
/// live rows of `table` and reports misses as `exists` violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyCheck {
    pub field: &'static str,
    pub table: &'static str,
    pub ids: Vec<DbId>,
}

/// Input that passed every rule: only rule-set fields, coerced to their
/// declared types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedFields(Map<String, Value>);

impl ValidatedFields {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Ids of a validated `exists` field, or `None` when the field was not
    /// supplied (the relation must then be left untouched).
    pub fn ids(&self, field: &str) -> Option<Vec<DbId>> {
        let items = self.0.get(field)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|v| v.as_str().and_then(|s| s.parse().ok()))
                .collect(),
        )
    }

    /// Deserialize the validated fields into a typed DTO.
    pub fn to_dto<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }
}
