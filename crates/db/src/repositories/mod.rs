//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Entity repositories implement [`EntityRepo`]; write primitives take a
//! `&mut PgConnection` so they can join a caller-owned transaction.

pub mod cast_member_repo;
pub mod category_repo;
pub mod entity;
pub mod existence_repo;
pub mod genre_repo;
pub mod video_repo;

pub use cast_member_repo::CastMemberRepo;
pub use category_repo::CategoryRepo;
pub use entity::EntityRepo;
pub use existence_repo::ExistenceRepo;
pub use genre_repo::GenreRepo;
pub use video_repo::VideoRepo;
