//! `RelationDef` struct for storing relationship metadata.
//!
//! A `RelationDef` is the value handed to the downstream query layer: it
//! carries the relation kind, a fresh query scoped to the related entity's
//! table, a back-reference to the source entity, the resolved relation name
//! (where one exists), and the key columns the join/filter must use.

use crate::entity::EntityTrait;
use crate::query::SelectQuery;
use std::fmt;

/// Topology of a relationship between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Inverse single-owner relation: the source table holds the foreign key
    BelongsTo,
    /// Many-to-many via an intermediate join table
    BelongsToMany,
    /// One-to-many: the foreign key lives on the related table
    HasMany,
    /// One-to-many traversing an intermediate entity
    HasManyThrough,
    /// One-to-one analogue of `HasMany`
    HasOne,
    /// Single-row analogue of `HasManyThrough`
    HasOneThrough,
}

/// Key columns for a relation, shaped by its topology.
///
/// Keeping the keys in an enum means a descriptor can never carry key fields
/// that make no sense for its kind (e.g. a join table on a `HasOne`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationKeys {
    /// `BelongsTo`: foreign key on the source table, referenced key on the
    /// related table (usually its primary key).
    BelongsTo {
        foreign_key: String,
        other_key: String,
    },
    /// `BelongsToMany`: join table holding a foreign key per side.
    BelongsToMany {
        join_table: String,
        foreign_key: String,
        other_key: String,
    },
    /// `HasOne`/`HasMany`: foreign key on the related table (table-qualified
    /// when inferred), local key on the source table.
    Has {
        foreign_key: String,
        local_key: String,
    },
    /// `HasOneThrough`/`HasManyThrough`: keys for both hops of the traversal.
    Through {
        through_table: String,
        first_key: String,
        second_key: String,
        local_key: String,
    },
}

/// Describes how to reach entity `R` from entity `S`.
///
/// Created fresh on every relation-accessor invocation and immediately handed
/// to the query layer; this crate never pools or reuses descriptors. The
/// query layer applies the join/where constraints implied by `kind` and
/// `keys`, executes, hydrates, and caches results keyed by `relation_name`.
pub struct RelationDef<S, R>
where
    S: EntityTrait,
    R: EntityTrait,
{
    /// Topology of the relationship
    pub kind: RelationKind,
    /// Fresh, unconstrained query scoped to `R`'s table
    pub query: SelectQuery<R>,
    /// The source entity the relation was resolved from
    pub owner: S,
    /// Eager-load/cache key; `Some` (and non-empty) for the belongs-to
    /// topologies, `None` where the external layer keys by its own accessor
    pub relation_name: Option<String>,
    /// Key columns for the join/filter
    pub keys: RelationKeys,
}

impl<S, R> RelationDef<S, R>
where
    S: EntityTrait,
    R: EntityTrait,
{
    /// Resolved relation name, if this topology carries one.
    pub fn relation_name(&self) -> Option<&str> {
        self.relation_name.as_deref()
    }

    /// Foreign key column, for every kind except the through traversals.
    pub fn foreign_key(&self) -> Option<&str> {
        match &self.keys {
            RelationKeys::BelongsTo { foreign_key, .. }
            | RelationKeys::BelongsToMany { foreign_key, .. }
            | RelationKeys::Has { foreign_key, .. } => Some(foreign_key),
            RelationKeys::Through { .. } => None,
        }
    }

    /// Referenced key on the other side of a belongs-to relation.
    pub fn other_key(&self) -> Option<&str> {
        match &self.keys {
            RelationKeys::BelongsTo { other_key, .. }
            | RelationKeys::BelongsToMany { other_key, .. } => Some(other_key),
            _ => None,
        }
    }

    /// Local key on the source table, for the has-side topologies.
    pub fn local_key(&self) -> Option<&str> {
        match &self.keys {
            RelationKeys::Has { local_key, .. } | RelationKeys::Through { local_key, .. } => {
                Some(local_key)
            }
            _ => None,
        }
    }

    /// Join table of a many-to-many relation.
    pub fn join_table(&self) -> Option<&str> {
        match &self.keys {
            RelationKeys::BelongsToMany { join_table, .. } => Some(join_table),
            _ => None,
        }
    }

    /// Intermediate table of a through relation.
    pub fn through_table(&self) -> Option<&str> {
        match &self.keys {
            RelationKeys::Through { through_table, .. } => Some(through_table),
            _ => None,
        }
    }

    /// First-hop key of a through relation (column on the through table
    /// pointing at the source).
    pub fn first_key(&self) -> Option<&str> {
        match &self.keys {
            RelationKeys::Through { first_key, .. } => Some(first_key),
            _ => None,
        }
    }

    /// Second-hop key of a through relation.
    pub fn second_key(&self) -> Option<&str> {
        match &self.keys {
            RelationKeys::Through { second_key, .. } => Some(second_key),
            _ => None,
        }
    }

    /// Consume the descriptor, yielding the query for the execution layer.
    pub fn into_query(self) -> SelectQuery<R> {
        self.query
    }
}

impl<S, R> fmt::Debug for RelationDef<S, R>
where
    S: EntityTrait,
    R: EntityTrait,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationDef")
            .field("kind", &self.kind)
            .field("owner", &self.owner.table_name())
            .field("related", &R::default().table_name())
            .field("relation_name", &self.relation_name)
            .field("keys", &self.keys)
            .finish()
    }
}
