//! Entity traits consumed by the relation resolver.
//!
//! Entities are lightweight, stateless values that describe a database table:
//! its name, primary key, and the conventional foreign-key column other
//! tables use to point at it. Row models, hydration, and persistence live in
//! the surrounding framework, not here.

use crate::error::RelationError;
use crate::naming;
use crate::query::SelectQuery;

/// Naming contract for an entity type.
///
/// # Example
///
/// ```
/// use lanyard::EntityName;
///
/// #[derive(Default, Copy, Clone)]
/// struct UserEntity;
///
/// impl EntityName for UserEntity {
///     fn entity_name(&self) -> &'static str {
///         "User"
///     }
///     fn table_name(&self) -> &'static str {
///         "users"
///     }
/// }
///
/// let user = UserEntity;
/// assert_eq!(user.primary_key_name(), "id");
/// assert_eq!(user.foreign_key_name(), "user_id");
/// ```
pub trait EntityName {
    /// Type-level name of the entity (e.g. `"User"`), used for
    /// convention-derived key names.
    fn entity_name(&self) -> &'static str;

    /// Name of the entity's table in the database.
    fn table_name(&self) -> &'static str;

    /// Name of the primary key column.
    fn primary_key_name(&self) -> &'static str {
        "id"
    }

    /// Conventional foreign-key column name other tables use to reference
    /// this entity: `snake_case(entity_name()) + "_id"`.
    fn foreign_key_name(&self) -> String {
        naming::foreign_key(self.entity_name())
    }
}

/// Capability bound for entities that can take part in relation resolution.
///
/// Relation operations receive related and through entities as type
/// parameters and construct them internally, so every participating entity
/// must be default-constructible. Types standing in for entities that cannot
/// be constructed (abstract bases, not-yet-generated entities) may override
/// [`EntityTrait::instantiate`] to fail instead.
pub trait EntityTrait: EntityName + Default + Clone {
    /// Construct a fresh instance of this entity.
    ///
    /// The default implementation never fails.
    fn instantiate() -> Result<Self, RelationError> {
        Ok(Self::default())
    }

    /// A fresh, unconstrained query scoped to this entity's table.
    fn new_query(&self) -> SelectQuery<Self> {
        SelectQuery::new()
    }
}
