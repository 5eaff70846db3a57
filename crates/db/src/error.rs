use catalog_core::types::DbId;

/// Error returned by repositories and the transactional writer.
///
/// `Database` carries the original sqlx error untouched so callers can
/// classify it (constraint violations, missing rows, connectivity).
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
