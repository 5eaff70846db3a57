//! Transactional entity writer.
//!
//! Persists an entity row and synchronizes any number of its relation sets
//! inside one transaction. Either everything commits or nothing does: on
//! any error the transaction is rolled back and the original error is
//! returned unchanged.

use catalog_core::types::{new_id, DbId};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::error::DbError;
use crate::relation::{RelationSpec, RelationSync};
use crate::repositories::EntityRepo;

/// Orchestrates atomic entity-plus-relations writes.
pub struct EntityWriter;

impl EntityWriter {
    /// Insert a new entity and link its relations.
    ///
    /// The id is assigned before the transaction begins. The returned row
    /// is re-read after commit so database defaults are reflected.
    pub async fn create<R: EntityRepo>(
        pool: &PgPool,
        input: &R::Create,
        relations: &[RelationSpec],
    ) -> Result<R::Entity, DbError> {
        let id = new_id();
        let mut tx = pool.begin().await?;
        let outcome = Self::apply_create::<R>(&mut tx, id, input, relations).await;
        Self::finish(tx, outcome, R::ENTITY, id).await?;

        tracing::debug!(entity = R::ENTITY, %id, "Create committed");
        R::find_active_by_id(pool, id).await
    }

    /// Update a live entity and re-synchronize the supplied relations.
    ///
    /// Relations absent from `relations` keep their current links. Fails
    /// with [`DbError::NotFound`] if the row is missing or soft-deleted.
    pub async fn update<R: EntityRepo>(
        pool: &PgPool,
        id: DbId,
        input: &R::Update,
        relations: &[RelationSpec],
    ) -> Result<R::Entity, DbError> {
        let mut tx = pool.begin().await?;
        let outcome = Self::apply_update::<R>(&mut tx, id, input, relations).await;
        let entity = Self::finish(tx, outcome, R::ENTITY, id).await?;

        tracing::debug!(entity = R::ENTITY, %id, "Update committed");
        Ok(entity)
    }

    async fn apply_create<R: EntityRepo>(
        conn: &mut PgConnection,
        id: DbId,
        input: &R::Create,
        relations: &[RelationSpec],
    ) -> Result<(), DbError> {
        R::insert(&mut *conn, id, input).await?;
        Self::sync_all(conn, id, relations).await
    }

    async fn apply_update<R: EntityRepo>(
        conn: &mut PgConnection,
        id: DbId,
        input: &R::Update,
        relations: &[RelationSpec],
    ) -> Result<R::Entity, DbError> {
        let entity = R::update_fields(&mut *conn, id, input)
            .await?
            .ok_or(DbError::NotFound {
                entity: R::ENTITY,
                id,
            })?;
        Self::sync_all(conn, id, relations).await?;
        Ok(entity)
    }

    async fn sync_all(
        conn: &mut PgConnection,
        owner_id: DbId,
        relations: &[RelationSpec],
    ) -> Result<(), DbError> {
        for spec in relations {
            RelationSync::sync(&mut *conn, &spec.relation, owner_id, &spec.ids).await?;
        }
        Ok(())
    }

    /// Commit on success; roll back and hand back the original error otherwise.
    async fn finish<T>(
        tx: Transaction<'_, Postgres>,
        outcome: Result<T, DbError>,
        entity: &'static str,
        id: DbId,
    ) -> Result<T, DbError> {
        match outcome {
            Ok(value) => {
                tx.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(entity, %id, error = %rollback_err, "Rollback failed");
                }
                tracing::warn!(entity, %id, error = %err, "Write rolled back");
                Err(err)
            }
        }
    }
}
