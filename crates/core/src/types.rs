/// All primary keys are application-generated UUIDs, serialized as strings.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate the identifier for a new entity.
///
/// Called before any persistence so the id never depends on whether the
/// surrounding transaction commits.
pub fn new_id() -> DbId {
    uuid::Uuid::new_v4()
}
