//! Shared entity definitions for unit tests.
//!
//! A small blog-shaped schema: users write posts, users hold roles via a
//! join table, and countries sit between users and posts for the through
//! traversals. `AbstractEntity` exists only to exercise the instantiation
//! failure path.

use crate::entity::{EntityName, EntityTrait};
use crate::error::RelationError;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct UserEntity;

impl EntityName for UserEntity {
    fn entity_name(&self) -> &'static str {
        "User"
    }
    fn table_name(&self) -> &'static str {
        "users"
    }
}

impl EntityTrait for UserEntity {}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PostEntity;

impl EntityName for PostEntity {
    fn entity_name(&self) -> &'static str {
        "Post"
    }
    fn table_name(&self) -> &'static str {
        "posts"
    }
}

impl EntityTrait for PostEntity {}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CountryEntity;

impl EntityName for CountryEntity {
    fn entity_name(&self) -> &'static str {
        "Country"
    }
    fn table_name(&self) -> &'static str {
        "countries"
    }
}

impl EntityTrait for CountryEntity {}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RoleEntity;

impl EntityName for RoleEntity {
    fn entity_name(&self) -> &'static str {
        "Role"
    }
    fn table_name(&self) -> &'static str {
        "roles"
    }
}

impl EntityTrait for RoleEntity {}

/// Stand-in for an entity type that cannot be constructed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AbstractEntity;

impl EntityName for AbstractEntity {
    fn entity_name(&self) -> &'static str {
        "Abstract"
    }
    fn table_name(&self) -> &'static str {
        "abstracts"
    }
}

impl EntityTrait for AbstractEntity {
    fn instantiate() -> Result<Self, RelationError> {
        Err(RelationError::Instantiation {
            entity: "AbstractEntity".to_string(),
            reason: "declared abstract".to_string(),
        })
    }
}
