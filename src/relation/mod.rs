//! Relation module: descriptor types and the resolution capability.
//!
//! Six topologies are supported:
//! - belongs_to: many-to-one (source holds the foreign key)
//! - belongs_to_many: many-to-many (via a join table)
//! - has_one / has_many: one-to-one / one-to-many (related holds the key)
//! - has_one_through / has_many_through: traversal via an intermediate entity
//!
//! # Architecture
//!
//! - **Def**: descriptor types (`RelationDef`, `RelationKind`, `RelationKeys`)
//! - **Resolver**: the `RelationResolver` capability with the key/name
//!   inference rules, blanket-implemented for every `EntityTrait`

pub mod def;
#[doc(inline)]
pub use def::{RelationDef, RelationKeys, RelationKind};

pub mod resolver;
#[doc(inline)]
pub use resolver::RelationResolver;
