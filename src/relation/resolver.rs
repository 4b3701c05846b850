//! Relation resolution: the six relation topologies and their key/name
//! inference rules.
//!
//! `RelationResolver` is blanket-implemented for every [`EntityTrait`], so
//! declaring a relation is a method call on the source entity. Every
//! parameter except the related/through types may be omitted (`None`), in
//! which case the convention rules in [`crate::naming`] fill it in; explicit
//! values always win over inference.
//!
//! Resolution is pure computation: no rows are read or written, and the only
//! side effect is constructing a fresh query scoped to the related table.
//! Identical inputs from an identical call site always produce descriptors
//! with identical name and key fields.

use crate::entity::EntityTrait;
use crate::error::RelationError;
use crate::naming;
use crate::relation::def::{RelationDef, RelationKeys, RelationKind};

/// Relation accessor capability for entity types.
///
/// # Example
///
/// ```
/// use lanyard::{belongs_to, EntityName, EntityTrait, RelationDef, RelationError, RelationResolver};
///
/// #[derive(Default, Copy, Clone)]
/// struct UserEntity;
/// impl EntityName for UserEntity {
///     fn entity_name(&self) -> &'static str { "User" }
///     fn table_name(&self) -> &'static str { "users" }
/// }
/// impl EntityTrait for UserEntity {}
///
/// #[derive(Default, Copy, Clone)]
/// struct PostEntity;
/// impl EntityName for PostEntity {
///     fn entity_name(&self) -> &'static str { "Post" }
///     fn table_name(&self) -> &'static str { "posts" }
/// }
/// impl EntityTrait for PostEntity {}
///
/// impl PostEntity {
///     /// The accessor's own name becomes the relation name.
///     fn author(&self) -> Result<RelationDef<Self, UserEntity>, RelationError> {
///         belongs_to!(self, UserEntity)
///     }
/// }
///
/// let def = PostEntity.author().unwrap();
/// assert_eq!(def.relation_name(), Some("author"));
/// assert_eq!(def.foreign_key(), Some("author_id"));
/// ```
pub trait RelationResolver: EntityTrait {
    /// Inverse single-owner relation: this entity holds the foreign key
    /// pointing at `R`'s primary key.
    ///
    /// `relation_name` drives foreign-key inference, so it must be supplied —
    /// either explicitly or by declaring the accessor with the
    /// [`belongs_to!`](crate::belongs_to) macro, which injects the accessor's
    /// own name. Omitting it is a [`RelationError::NamingInference`].
    fn belongs_to<R>(
        &self,
        foreign_key: Option<&str>,
        other_key: Option<&str>,
        relation_name: Option<&str>,
    ) -> Result<RelationDef<Self, R>, RelationError>
    where
        R: EntityTrait,
    {
        let relation_name = resolve_relation_name(relation_name, "belongs_to")?;
        let related = R::instantiate()?;
        let foreign_key = match foreign_key {
            Some(key) => key.to_string(),
            None => naming::foreign_key(&relation_name),
        };
        let other_key = match other_key {
            Some(key) => key.to_string(),
            None => related.primary_key_name().to_string(),
        };
        log::debug!(
            "belongs_to `{relation_name}`: {}.{foreign_key} -> {}.{other_key}",
            self.table_name(),
            related.table_name(),
        );
        Ok(RelationDef {
            kind: RelationKind::BelongsTo,
            query: related.new_query(),
            owner: self.clone(),
            relation_name: Some(relation_name),
            keys: RelationKeys::BelongsTo {
                foreign_key,
                other_key,
            },
        })
    }

    /// Many-to-many relation via an intermediate join table holding a
    /// foreign key per side.
    ///
    /// The inferred join table name is the two table basenames
    /// singular-snake-cased, sorted lexicographically, and joined with an
    /// underscore — identical regardless of which side declares the relation.
    fn belongs_to_many<R>(
        &self,
        join_table: Option<&str>,
        foreign_key: Option<&str>,
        other_key: Option<&str>,
        relation_name: Option<&str>,
    ) -> Result<RelationDef<Self, R>, RelationError>
    where
        R: EntityTrait,
    {
        let relation_name = resolve_relation_name(relation_name, "belongs_to_many")?;
        let related = R::instantiate()?;
        let foreign_key = match foreign_key {
            Some(key) => key.to_string(),
            None => naming::ensure_ident(&self.foreign_key_name(), "source foreign key")?,
        };
        let other_key = match other_key {
            Some(key) => key.to_string(),
            None => naming::ensure_ident(&related.foreign_key_name(), "related foreign key")?,
        };
        let join_table = match join_table {
            Some(table) => table.to_string(),
            None => naming::join_table(self.table_name(), related.table_name())?,
        };
        log::debug!(
            "belongs_to_many `{relation_name}`: {} <-[{join_table}]-> {}",
            self.table_name(),
            related.table_name(),
        );
        Ok(RelationDef {
            kind: RelationKind::BelongsToMany,
            query: related.new_query(),
            owner: self.clone(),
            relation_name: Some(relation_name),
            keys: RelationKeys::BelongsToMany {
                join_table,
                foreign_key,
                other_key,
            },
        })
    }

    /// One-to-many relation: the foreign key lives on `R`'s table.
    ///
    /// When inferred, the foreign key is qualified with the related table
    /// name (`posts.user_id`) so it stays unambiguous in joined queries; an
    /// explicit `foreign_key` is used verbatim.
    fn has_many<R>(
        &self,
        foreign_key: Option<&str>,
        local_key: Option<&str>,
    ) -> Result<RelationDef<Self, R>, RelationError>
    where
        R: EntityTrait,
    {
        resolve_has(self, RelationKind::HasMany, foreign_key, local_key)
    }

    /// One-to-one analogue of [`has_many`](RelationResolver::has_many);
    /// same key inference, same qualification.
    fn has_one<R>(
        &self,
        foreign_key: Option<&str>,
        local_key: Option<&str>,
    ) -> Result<RelationDef<Self, R>, RelationError>
    where
        R: EntityTrait,
    {
        resolve_has(self, RelationKind::HasOne, foreign_key, local_key)
    }

    /// One-to-many traversal source -> `T` -> `R`.
    ///
    /// `first_key` defaults to this entity's conventional foreign key (a
    /// column on `T`'s table), `second_key` to `T`'s conventional foreign key
    /// (a column on `R`'s table). `T` is instantiated only so its conventions
    /// can be consulted; the traversal SQL itself belongs to the query layer.
    fn has_many_through<R, T>(
        &self,
        first_key: Option<&str>,
        second_key: Option<&str>,
        local_key: Option<&str>,
    ) -> Result<RelationDef<Self, R>, RelationError>
    where
        R: EntityTrait,
        T: EntityTrait,
    {
        let through = T::instantiate()?;
        let second_key = match second_key {
            Some(key) => key.to_string(),
            None => naming::ensure_ident(&through.foreign_key_name(), "through foreign key")?,
        };
        resolve_through::<Self, R>(
            self,
            RelationKind::HasManyThrough,
            through.table_name(),
            first_key,
            second_key,
            local_key,
        )
    }

    /// Single-row analogue of
    /// [`has_many_through`](RelationResolver::has_many_through).
    ///
    /// The inferred `second_key` comes from `R`'s conventions rather than
    /// `T`'s. That asymmetry is carried over from the behavior this resolver
    /// reproduces; see DESIGN.md before "fixing" it.
    fn has_one_through<R, T>(
        &self,
        first_key: Option<&str>,
        second_key: Option<&str>,
        local_key: Option<&str>,
    ) -> Result<RelationDef<Self, R>, RelationError>
    where
        R: EntityTrait,
        T: EntityTrait,
    {
        let through = T::instantiate()?;
        let second_key = match second_key {
            Some(key) => key.to_string(),
            None => {
                let related = R::instantiate()?;
                naming::ensure_ident(&related.foreign_key_name(), "related foreign key")?
            }
        };
        resolve_through::<Self, R>(
            self,
            RelationKind::HasOneThrough,
            through.table_name(),
            first_key,
            second_key,
            local_key,
        )
    }
}

impl<E: EntityTrait> RelationResolver for E {}

/// Resolve the relation name for the belongs-to topologies.
fn resolve_relation_name(
    relation_name: Option<&str>,
    operation: &str,
) -> Result<String, RelationError> {
    match relation_name {
        Some(name) => naming::ensure_ident(name, "relation name"),
        None => Err(RelationError::naming(format!(
            "{operation} requires a relation name; pass one explicitly or \
             declare the accessor with the {operation}! macro"
        ))),
    }
}

/// Shared assembly for `has_one`/`has_many`.
fn resolve_has<S, R>(
    source: &S,
    kind: RelationKind,
    foreign_key: Option<&str>,
    local_key: Option<&str>,
) -> Result<RelationDef<S, R>, RelationError>
where
    S: EntityTrait,
    R: EntityTrait,
{
    let related = R::instantiate()?;
    let foreign_key = match foreign_key {
        Some(key) => key.to_string(),
        None => {
            let key = naming::ensure_ident(&source.foreign_key_name(), "source foreign key")?;
            format!("{}.{key}", related.table_name())
        }
    };
    let local_key = match local_key {
        Some(key) => key.to_string(),
        None => source.primary_key_name().to_string(),
    };
    log::debug!(
        "{kind:?}: {}.{local_key} <- {foreign_key}",
        source.table_name(),
    );
    Ok(RelationDef {
        kind,
        query: related.new_query(),
        owner: source.clone(),
        relation_name: None,
        keys: RelationKeys::Has {
            foreign_key,
            local_key,
        },
    })
}

/// Shared assembly for the through traversals. `second_key` is resolved by
/// the caller because the two variants infer it from different entities.
fn resolve_through<S, R>(
    source: &S,
    kind: RelationKind,
    through_table: &str,
    first_key: Option<&str>,
    second_key: String,
    local_key: Option<&str>,
) -> Result<RelationDef<S, R>, RelationError>
where
    S: EntityTrait,
    R: EntityTrait,
{
    let related = R::instantiate()?;
    let first_key = match first_key {
        Some(key) => key.to_string(),
        None => naming::ensure_ident(&source.foreign_key_name(), "source foreign key")?,
    };
    let local_key = match local_key {
        Some(key) => key.to_string(),
        None => source.primary_key_name().to_string(),
    };
    log::debug!(
        "{kind:?}: {} -[{through_table}.{first_key}]-> {}.{second_key}",
        source.table_name(),
        related.table_name(),
    );
    Ok(RelationDef {
        kind,
        query: related.new_query(),
        owner: source.clone(),
        relation_name: None,
        keys: RelationKeys::Through {
            through_table: through_table.to_string(),
            first_key,
            second_key,
            local_key,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_cfg::{
        AbstractEntity, CountryEntity, PostEntity, RoleEntity, UserEntity,
    };

    #[test]
    fn test_belongs_to_explicit_name() {
        let def = PostEntity
            .belongs_to::<UserEntity>(None, None, Some("author"))
            .unwrap();
        assert_eq!(def.kind, RelationKind::BelongsTo);
        assert_eq!(def.relation_name(), Some("author"));
        assert_eq!(def.foreign_key(), Some("author_id"));
        assert_eq!(def.other_key(), Some("id"));
    }

    #[test]
    fn test_belongs_to_overrides_win() {
        let def = PostEntity
            .belongs_to::<UserEntity>(Some("custom_id"), Some("uuid"), Some("author"))
            .unwrap();
        assert_eq!(def.foreign_key(), Some("custom_id"));
        assert_eq!(def.other_key(), Some("uuid"));
    }

    #[test]
    fn test_belongs_to_without_name_fails() {
        let err = PostEntity
            .belongs_to::<UserEntity>(None, None, None)
            .unwrap_err();
        assert!(matches!(err, RelationError::NamingInference { .. }));
    }

    #[test]
    fn test_belongs_to_empty_name_fails() {
        let err = PostEntity
            .belongs_to::<UserEntity>(None, None, Some(""))
            .unwrap_err();
        assert!(matches!(err, RelationError::NamingInference { .. }));
    }

    #[test]
    fn test_belongs_to_non_constructible_related() {
        let err = PostEntity
            .belongs_to::<AbstractEntity>(None, None, Some("parent"))
            .unwrap_err();
        assert!(matches!(err, RelationError::Instantiation { .. }));
    }

    #[test]
    fn test_belongs_to_many_defaults() {
        let def = UserEntity
            .belongs_to_many::<RoleEntity>(None, None, None, Some("roles"))
            .unwrap();
        assert_eq!(def.kind, RelationKind::BelongsToMany);
        assert_eq!(def.join_table(), Some("role_user"));
        assert_eq!(def.foreign_key(), Some("user_id"));
        assert_eq!(def.other_key(), Some("role_id"));
    }

    #[test]
    fn test_belongs_to_many_join_table_symmetry() {
        let from_user = UserEntity
            .belongs_to_many::<RoleEntity>(None, None, None, Some("roles"))
            .unwrap();
        let from_role = RoleEntity
            .belongs_to_many::<UserEntity>(None, None, None, Some("users"))
            .unwrap();
        assert_eq!(from_user.join_table(), from_role.join_table());
    }

    #[test]
    fn test_belongs_to_many_explicit_join_table() {
        let def = UserEntity
            .belongs_to_many::<RoleEntity>(Some("memberships"), None, None, Some("roles"))
            .unwrap();
        assert_eq!(def.join_table(), Some("memberships"));
    }

    #[test]
    fn test_has_many_qualified_foreign_key() {
        let def = UserEntity.has_many::<PostEntity>(None, None).unwrap();
        assert_eq!(def.kind, RelationKind::HasMany);
        assert_eq!(def.foreign_key(), Some("posts.user_id"));
        assert_eq!(def.local_key(), Some("id"));
        assert_eq!(def.relation_name(), None);
    }

    #[test]
    fn test_has_many_explicit_foreign_key_verbatim() {
        let def = UserEntity
            .has_many::<PostEntity>(Some("writer_id"), None)
            .unwrap();
        assert_eq!(def.foreign_key(), Some("writer_id"));
    }

    #[test]
    fn test_has_one_same_inference_as_has_many() {
        let def = UserEntity.has_one::<PostEntity>(None, None).unwrap();
        assert_eq!(def.kind, RelationKind::HasOne);
        assert_eq!(def.foreign_key(), Some("posts.user_id"));
        assert_eq!(def.local_key(), Some("id"));
    }

    #[test]
    fn test_has_many_through_defaults() {
        let def = UserEntity
            .has_many_through::<PostEntity, CountryEntity>(None, None, None)
            .unwrap();
        assert_eq!(def.kind, RelationKind::HasManyThrough);
        assert_eq!(def.through_table(), Some("countries"));
        assert_eq!(def.first_key(), Some("user_id"));
        assert_eq!(def.second_key(), Some("country_id"));
        assert_eq!(def.local_key(), Some("id"));
    }

    #[test]
    fn test_has_one_through_second_key_from_related() {
        // Deliberate asymmetry with has_many_through: related, not through.
        let def = UserEntity
            .has_one_through::<PostEntity, CountryEntity>(None, None, None)
            .unwrap();
        assert_eq!(def.kind, RelationKind::HasOneThrough);
        assert_eq!(def.through_table(), Some("countries"));
        assert_eq!(def.first_key(), Some("user_id"));
        assert_eq!(def.second_key(), Some("post_id"));
    }

    #[test]
    fn test_through_overrides_win() {
        let def = UserEntity
            .has_many_through::<PostEntity, CountryEntity>(
                Some("owner_id"),
                Some("region_id"),
                Some("uuid"),
            )
            .unwrap();
        assert_eq!(def.first_key(), Some("owner_id"));
        assert_eq!(def.second_key(), Some("region_id"));
        assert_eq!(def.local_key(), Some("uuid"));
    }

    #[test]
    fn test_through_non_constructible_through() {
        let err = UserEntity
            .has_many_through::<PostEntity, AbstractEntity>(None, None, None)
            .unwrap_err();
        assert!(matches!(err, RelationError::Instantiation { .. }));
    }

    #[test]
    fn test_descriptor_query_is_fresh() {
        let def = UserEntity.has_many::<PostEntity>(None, None).unwrap();
        assert_eq!(def.into_query().build_sql(), r#"SELECT * FROM "posts""#);
    }

    #[test]
    fn test_idempotence() {
        let a = PostEntity
            .belongs_to::<UserEntity>(None, None, Some("author"))
            .unwrap();
        let b = PostEntity
            .belongs_to::<UserEntity>(None, None, Some("author"))
            .unwrap();
        assert_eq!(a.relation_name, b.relation_name);
        assert_eq!(a.keys, b.keys);
        assert_eq!(a.kind, b.kind);
    }
}
