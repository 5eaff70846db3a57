//! Rule evaluator. Pure logic, no database access.
//!
//! `exists` rules cannot be decided here; they are returned as
//! [`ForeignKeyCheck`]s for the caller to resolve against live rows.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::rules::{
    FieldRules, ForeignKeyCheck, Rule, RuleSet, ValidatedFields, ValidationErrors,
};
use crate::types::DbId;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

/// Outcome of evaluating a rule set against one request body.
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    fields: Map<String, Value>,
    errors: ValidationErrors,
    foreign_keys: Vec<ForeignKeyCheck>,
}

impl Evaluation {
    /// Existence checks still to be resolved by the caller.
    pub fn foreign_keys(&self) -> &[ForeignKeyCheck] {
        &self.foreign_keys
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Record that some ids of an `exists` field were not found among live rows.
    pub fn reject_foreign_keys(&mut self, field: &str) {
        self.fields.remove(field);
        self.errors
            .add(field, message(&Rule::Exists { table: "" }, field));
    }

    pub fn into_result(self) -> Result<ValidatedFields, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(ValidatedFields::new(self.fields))
        } else {
            Err(self.errors)
        }
    }
}

/// Trim strings and turn empty strings into `null`, recursively.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else if trimmed.len() == s.len() {
                Value::String(s)
            } else {
                Value::String(trimmed.to_string())
            }
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, normalize(v))).collect())
        }
        other => other,
    }
}

/// Evaluate every field of `rules` against `input` (already normalized).
///
/// Fields not named by the rule set are dropped. Each field reports at most
/// one violation: the first failing rule in declared order.
pub fn evaluate(rules: &RuleSet, input: &Map<String, Value>) -> Evaluation {
    let mut evaluation = Evaluation::default();
    for field_rules in rules.fields {
        evaluate_field(field_rules, input, &mut evaluation);
    }
    evaluation
}

fn evaluate_field(field_rules: &FieldRules, input: &Map<String, Value>, out: &mut Evaluation) {
    let field = field_rules.field;
    let present = input.get(field).filter(|v| !v.is_null());

    if field_rules.has(Rule::Required) && present.map_or(true, is_empty_value) {
        out.errors.add(field, message(&Rule::Required, field));
        return;
    }

    let Some(value) = present else {
        if field_rules.has(Rule::Nullable) && input.contains_key(field) {
            out.fields.insert(field.to_string(), Value::Null);
        }
        return;
    };

    let mut current = value.clone();
    for rule in field_rules.rules {
        let outcome = match rule {
            Rule::Required | Rule::Sometimes | Rule::Nullable => Ok(None),
            Rule::Max(max) => check_max(&current, *max),
            Rule::Boolean => coerce_bool(&current).map(|b| Some(Value::Bool(b))),
            Rule::Integer => coerce_int(&current).map(|n| Some(Value::from(n))),
            Rule::In(options) => coerce_in(&current, options).map(|s| Some(Value::String(s))),
            Rule::DateFormatYear => coerce_year(&current).map(|y| Some(Value::from(y))),
            Rule::Array => {
                if current.is_array() {
                    Ok(None)
                } else {
                    Err(())
                }
            }
            Rule::Exists { table } => match parse_ids(&current) {
                Some(ids) => {
                    let normalized = ids.iter().map(|id| Value::String(id.to_string())).collect();
                    if !ids.is_empty() {
                        out.foreign_keys.push(ForeignKeyCheck {
                            field,
                            table: *table,
                            ids,
                        });
                    }
                    Ok(Some(Value::Array(normalized)))
                }
                None => Err(()),
            },
        };

        match outcome {
            Ok(Some(coerced)) => current = coerced,
            Ok(None) => {}
            Err(()) => {
                out.errors.add(field, message(rule, field));
                return;
            }
        }
    }

    out.fields.insert(field.to_string(), current);
}

/// An empty array does not satisfy `required`.
fn is_empty_value(value: &Value) -> bool {
    matches!(value, Value::Array(items) if items.is_empty())
}

fn check_max(value: &Value, max: usize) -> Result<Option<Value>, ()> {
    match value {
        Value::String(s) if s.chars().count() > max => Err(()),
        _ => Ok(None),
    }
}

fn coerce_bool(value: &Value) -> Result<bool, ()> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(()),
        },
        Value::String(s) => match s.as_str() {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(()),
        },
        _ => Err(()),
    }
}

/// Integers are stored as Postgres `INTEGER`, so the range is `i32`.
fn coerce_int(value: &Value) -> Result<i32, ()> {
    let wide = match value {
        Value::Number(n) => n.as_i64().ok_or(())?,
        Value::String(s) => s.parse::<i64>().map_err(|_| ())?,
        _ => return Err(()),
    };
    i32::try_from(wide).map_err(|_| ())
}

fn coerce_in(value: &Value, options: &[&str]) -> Result<String, ()> {
    let candidate = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return Err(()),
    };
    if options.contains(&candidate.as_str()) {
        Ok(candidate)
    } else {
        Err(())
    }
}

fn coerce_year(value: &Value) -> Result<i64, ()> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_i64() => n.to_string(),
        _ => return Err(()),
    };
    if YEAR_RE.is_match(&text) {
        text.parse().map_err(|_| ())
    } else {
        Err(())
    }
}

/// Parse an array of id strings, de-duplicated in first-seen order.
/// `None` if the value is not an array or any element is not a UUID.
fn parse_ids(value: &Value) -> Option<Vec<DbId>> {
    let mut ids: Vec<DbId> = Vec::new();
    for item in value.as_array()? {
        let id: DbId = item.as_str()?.parse().ok()?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Some(ids)
}

/// Human-readable message for a failed rule on `field`.
pub fn message(rule: &Rule, field: &str) -> String {
    let attribute = field.replace('_', " ");
    match rule {
        Rule::Required => format!("The {attribute} field is required."),
        Rule::Max(max) => format!("The {attribute} may not be greater than {max} characters."),
        Rule::Boolean => format!("The {attribute} field must be true or false."),
        Rule::Integer => format!("The {attribute} must be an integer."),
        Rule::In(_) | Rule::Exists { .. } => format!("The selected {attribute} is invalid."),
        Rule::DateFormatYear => format!("The {attribute} does not match the format Y."),
        Rule::Array => format!("The {attribute} must be an array."),
        Rule::Sometimes | Rule::Nullable => format!("The {attribute} is invalid."),
    }
}
