//! Request validation against a rule set, including `exists` lookups.

use catalog_core::error::CoreError;
use catalog_core::validation::{evaluate, normalize, RuleSet, ValidatedFields};
use catalog_db::repositories::ExistenceRepo;
use catalog_db::DbPool;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Normalize and validate a request body.
///
/// Runs the pure rule evaluation, then resolves each pending `exists` check
/// against live rows. Any failure yields `CoreError::Validation` carrying
/// every field's message.
pub async fn validate(pool: &DbPool, rules: &RuleSet, body: Value) -> AppResult<ValidatedFields> {
    let input = match normalize(body) {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let mut evaluation = evaluate(rules, &input);
    let checks = evaluation.foreign_keys().to_vec();
    for check in checks {
        let missing = ExistenceRepo::missing_active_ids(pool, check.table, &check.ids).await?;
        if !missing.is_empty() {
            tracing::debug!(
                entity = rules.entity,
                field = check.field,
                missing = missing.len(),
                "Referenced ids not found"
            );
            evaluation.reject_foreign_keys(check.field);
        }
    }

    evaluation
        .into_result()
        .map_err(|errors| AppError::Core(CoreError::Validation(errors)))
}

/// Convert validated fields into a repository DTO.
pub fn into_dto<T: DeserializeOwned>(fields: &ValidatedFields) -> AppResult<T> {
    fields
        .to_dto()
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}
