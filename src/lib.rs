//! # Lanyard
//!
//! Convention-driven relationship resolver for SQL entities.
//!
//! Given a source entity and relation parameters that may be partially
//! omitted, lanyard produces a [`RelationDef`] describing how a downstream
//! query layer should join and filter the related entity's query: six
//! topologies (`belongs_to`, `belongs_to_many`, `has_one`, `has_many`,
//! `has_one_through`, `has_many_through`), with relation names, key columns,
//! and join-table names inferred by convention when not supplied explicitly.
//!
//! Resolution is pure computation — no rows are read or written here. Query
//! execution, hydration, and result caching belong to the surrounding
//! framework; lanyard hands it a descriptor with a fresh [`SelectQuery`]
//! scoped to the related table and steps aside.

pub mod entity;
pub mod error;
mod macros;
pub mod naming;
pub mod query;
pub mod relation;

#[cfg(test)]
pub(crate) mod tests_cfg;

pub use entity::{EntityName, EntityTrait};
pub use error::RelationError;
pub use query::SelectQuery;
pub use relation::{RelationDef, RelationKeys, RelationKind, RelationResolver};
