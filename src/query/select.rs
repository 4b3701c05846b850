//! Select query builder scoped to an entity's table.
//!
//! `SelectQuery<E>` wraps a SeaQuery `SelectStatement` that starts out as
//! `SELECT * FROM entity_table` with no constraints. The downstream query
//! layer adds joins and filters according to the relation kind, renders SQL,
//! and hydrates rows; none of that happens here.

use crate::entity::EntityTrait;
use sea_query::{Expr, Iden, IntoColumnRef, Order, PostgresQueryBuilder, SelectStatement};
use std::marker::PhantomData;

/// Query builder for selecting records of entity `E`.
///
/// The Entity (not a row model) is the type parameter, so the query stays
/// tied to the table it was scoped to at creation time.
///
/// # Example
///
/// ```
/// use lanyard::{EntityName, EntityTrait, SelectQuery};
///
/// #[derive(Default, Copy, Clone)]
/// struct UserEntity;
/// impl EntityName for UserEntity {
///     fn entity_name(&self) -> &'static str { "User" }
///     fn table_name(&self) -> &'static str { "users" }
/// }
/// impl EntityTrait for UserEntity {}
///
/// let sql = SelectQuery::<UserEntity>::new().build_sql();
/// assert_eq!(sql, r#"SELECT * FROM "users""#);
/// ```
#[derive(Clone)]
pub struct SelectQuery<E>
where
    E: EntityTrait,
{
    pub(crate) query: SelectStatement,
    _phantom: PhantomData<E>,
}

impl<E> SelectQuery<E>
where
    E: EntityTrait,
{
    /// Create a new select query scoped to `E`'s table.
    ///
    /// Uses `E::default().table_name()` to locate the table, so the entity
    /// type alone determines the scope.
    pub fn new() -> Self {
        let entity = E::default();
        let table_name = entity.table_name();

        struct TableName(&'static str);
        impl Iden for TableName {
            fn unquoted(&self) -> &str {
                self.0
            }
        }

        let mut query = SelectStatement::default();
        query
            .column(sea_query::Asterisk)
            .from(TableName(table_name));
        Self {
            query,
            _phantom: PhantomData,
        }
    }

    /// Add a filter condition.
    ///
    /// Accepts anything implementing `IntoCondition`, including `Expr` and
    /// `Condition` trees.
    pub fn filter<F>(mut self, condition: F) -> Self
    where
        F: sea_query::IntoCondition,
    {
        self.query.cond_where(condition.into_condition());
        self
    }

    /// Add an ORDER BY clause.
    pub fn order_by<C: IntoColumnRef>(mut self, column: C, order: Order) -> Self {
        self.query.order_by(column, order);
        self
    }

    /// Add a LIMIT clause.
    pub fn limit(mut self, limit: u64) -> Self {
        self.query.limit(limit);
        self
    }

    /// Add an OFFSET clause.
    pub fn offset(mut self, offset: u64) -> Self {
        self.query.offset(offset);
        self
    }

    /// Add a LEFT JOIN clause.
    pub fn left_join<T: Iden>(mut self, table: T, on: Expr) -> Self {
        self.query.join(sea_query::JoinType::LeftJoin, table, on);
        self
    }

    /// Add an INNER JOIN clause.
    pub fn inner_join<T: Iden>(mut self, table: T, on: Expr) -> Self {
        self.query.join(sea_query::JoinType::InnerJoin, table, on);
        self
    }

    /// Render the query as PostgreSQL SQL. Bound values, if any, become
    /// positional parameters; the relation layer itself never binds values.
    pub fn build_sql(&self) -> String {
        let (sql, _values) = self.query.build(PostgresQueryBuilder);
        sql
    }

    /// The underlying SeaQuery statement, for the query layer to extend.
    pub fn statement(&mut self) -> &mut SelectStatement {
        &mut self.query
    }
}

impl<E> Default for SelectQuery<E>
where
    E: EntityTrait,
{
    fn default() -> Self {
        Self::new()
    }
}
