//! Domain types, errors and pure validation logic for the catalog API.
//!
//! Nothing in this crate touches the database; persistence lives in
//! `catalog-db` and HTTP concerns in `catalog-api`.

pub mod catalog;
pub mod error;
pub mod rule_sets;
pub mod types;
pub mod validation;
