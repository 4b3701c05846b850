//! Query scoping for relation descriptors.
//!
//! Relation resolution hands each descriptor a fresh query scoped to the
//! related entity's table. Constraint application, execution, and hydration
//! are the downstream query layer's responsibility; this module only builds.

pub mod select;
#[doc(inline)]
pub use select::SelectQuery;
