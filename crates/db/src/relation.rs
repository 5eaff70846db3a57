//! Many-to-many relation links and the relation synchronizer.
//!
//! A [`Relation`] names a junction table and its two id columns. Callers pass
//! relation constants to one generic [`RelationSync`] rather than going
//! through per-entity accessors.

use catalog_core::types::DbId;
use sqlx::{PgConnection, PgExecutor};

use crate::repositories::EntityRepo;

/// A junction table linking an owning entity to related rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    /// Relation name as exposed in responses and logs.
    pub name: &'static str,
    /// Junction table.
    pub table: &'static str,
    /// Column holding the owner's id.
    pub owner_column: &'static str,
    /// Column holding the related row's id.
    pub related_column: &'static str,
}

/// Genre -> categories via `category_genre`.
pub const GENRE_CATEGORIES: Relation = Relation {
    name: "categories",
    table: "category_genre",
    owner_column: "genre_id",
    related_column: "category_id",
};

/// Video -> categories via `category_video`.
pub const VIDEO_CATEGORIES: Relation = Relation {
    name: "categories",
    table: "category_video",
    owner_column: "video_id",
    related_column: "category_id",
};

/// Video -> genres via `genre_video`.
pub const VIDEO_GENRES: Relation = Relation {
    name: "genres",
    table: "genre_video",
    owner_column: "video_id",
    related_column: "genre_id",
};

/// Target state for one relation in a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSpec {
    pub relation: Relation,
    pub ids: Vec<DbId>,
}

impl RelationSpec {
    pub fn new(relation: Relation, ids: Vec<DbId>) -> Self {
        Self { relation, ids }
    }

    /// Build a spec only when the request supplied the relation's field.
    pub fn when_present(relation: Relation, ids: Option<Vec<DbId>>) -> Option<Self> {
        ids.map(|ids| Self::new(relation, ids))
    }
}

/// Links added and removed by one synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncChanges {
    pub attached: Vec<DbId>,
    pub detached: Vec<DbId>,
}

impl SyncChanges {
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty() && self.detached.is_empty()
    }
}

/// Compute the inserts and deletes that turn `current` into `target`.
///
/// Duplicates in `target` collapse to a single link.
pub fn diff(current: &[DbId], target: &[DbId]) -> SyncChanges {
    let mut attached: Vec<DbId> = Vec::new();
    for id in target {
        if !current.contains(id) && !attached.contains(id) {
            attached.push(*id);
        }
    }
    let detached = current
        .iter()
        .filter(|id| !target.contains(id))
        .copied()
        .collect();
    SyncChanges { attached, detached }
}

/// Reconciles relation sets inside a caller-owned transaction.
pub struct RelationSync;

impl RelationSync {
    /// Ids currently linked to `owner_id` through `relation`.
    pub async fn related_ids<'e, E: PgExecutor<'e>>(
        executor: E,
        relation: &Relation,
        owner_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let query = format!(
            "SELECT {related} FROM {table} WHERE {owner} = $1 ORDER BY {related}",
            related = relation.related_column,
            table = relation.table,
            owner = relation.owner_column,
        );
        sqlx::query_scalar(&query)
            .bind(owner_id)
            .fetch_all(executor)
            .await
    }

    /// Make the links of `owner_id` through `relation` exactly equal `target`.
    ///
    /// Runs on the caller's connection (normally an open transaction) and
    /// never commits or rolls back. Idempotent for a given `target`.
    pub async fn sync(
        conn: &mut PgConnection,
        relation: &Relation,
        owner_id: DbId,
        target: &[DbId],
    ) -> Result<SyncChanges, sqlx::Error> {
        let current = Self::related_ids(&mut *conn, relation, owner_id).await?;
        let changes = diff(&current, target);
        if changes.is_empty() {
            return Ok(changes);
        }

        if !changes.detached.is_empty() {
            let query = format!(
                "DELETE FROM {table} WHERE {owner} = $1 AND {related} = ANY($2)",
                table = relation.table,
                owner = relation.owner_column,
                related = relation.related_column,
            );
            sqlx::query(&query)
                .bind(owner_id)
                .bind(&changes.detached)
                .execute(&mut *conn)
                .await?;
        }

        if !changes.attached.is_empty() {
            let query = format!(
                "INSERT INTO {table} ({owner}, {related}) SELECT $1, UNNEST($2::uuid[])",
                table = relation.table,
                owner = relation.owner_column,
                related = relation.related_column,
            );
            sqlx::query(&query)
                .bind(owner_id)
                .bind(&changes.attached)
                .execute(&mut *conn)
                .await?;
        }

        tracing::debug!(
            relation = relation.table,
            %owner_id,
            attached = changes.attached.len(),
            detached = changes.detached.len(),
            "Relation synchronized"
        );
        Ok(changes)
    }

    /// Load the related rows linked to `owner_id`, soft-deleted ones included.
    pub async fn load_related<'e, R: EntityRepo, E: PgExecutor<'e>>(
        executor: E,
        relation: &Relation,
        owner_id: DbId,
    ) -> Result<Vec<R::Entity>, sqlx::Error> {
        let query = format!(
            "SELECT {columns} FROM {related_table} \
             WHERE id IN (SELECT {related} FROM {table} WHERE {owner} = $1) \
             ORDER BY {order}",
            columns = R::COLUMNS,
            related_table = R::TABLE,
            related = relation.related_column,
            table = relation.table,
            owner = relation.owner_column,
            order = R::ORDER_BY,
        );
        sqlx::query_as::<_, R::Entity>(&query)
            .bind(owner_id)
            .fetch_all(executor)
            .await
    }
}
