//! Request validation engine.
//!
//! Provides declarative rule types and a pure-logic evaluator. Foreign-key
//! existence is deferred to the caller, which owns database access.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate, normalize, Evaluation};
pub use rules::{FieldRules, ForeignKeyCheck, Rule, RuleSet, ValidatedFields, ValidationErrors};
