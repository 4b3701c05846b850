//! Call-site macros for relation-name capture.
//!
//! `belongs_to` and `belongs_to_many` derive their foreign keys from the
//! relation name, which by convention is the name of the accessor method
//! declaring the relation. These macros capture that name at the call site,
//! so accessors keep the "defaults to my own name" ergonomics without any
//! runtime stack inspection.

/// Expands to the name of the enclosing function as a `&'static str`.
///
/// Plants a probe function and reads its type name; `{{closure}}` frames
/// between the probe and the enclosing function are skipped, so the macro
/// resolves to the user-facing accessor even when expanded inside a closure.
/// Expands to `""` when no enclosing function can be identified — the
/// resolver rejects that with a `NamingInference` error rather than letting
/// an invalid relation name through.
#[macro_export]
macro_rules! accessor_name {
    () => {{
        fn probe() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::naming::accessor_basename(name_of(probe))
    }};
}

/// Declare a `belongs_to` relation named after the enclosing accessor.
///
/// Expands to a [`RelationResolver::belongs_to`](crate::RelationResolver::belongs_to)
/// call with the accessor's own name as the relation name. Optional third and
/// fourth arguments override the foreign key and the referenced key.
///
/// ```ignore
/// impl PostEntity {
///     fn author(&self) -> Result<RelationDef<Self, UserEntity>, RelationError> {
///         belongs_to!(self, UserEntity)  // relation "author", fk "author_id"
///     }
/// }
/// ```
#[macro_export]
macro_rules! belongs_to {
    ($owner:expr, $related:ty) => {
        $owner.belongs_to::<$related>(None, None, Some($crate::accessor_name!()))
    };
    ($owner:expr, $related:ty, $foreign_key:expr) => {
        $owner.belongs_to::<$related>(Some($foreign_key), None, Some($crate::accessor_name!()))
    };
    ($owner:expr, $related:ty, $foreign_key:expr, $other_key:expr) => {
        $owner.belongs_to::<$related>(
            Some($foreign_key),
            Some($other_key),
            Some($crate::accessor_name!()),
        )
    };
}

/// Declare a `belongs_to_many` relation named after the enclosing accessor.
///
/// Expands to a
/// [`RelationResolver::belongs_to_many`](crate::RelationResolver::belongs_to_many)
/// call with the accessor's own name as the relation name. An optional third
/// argument overrides the join table.
#[macro_export]
macro_rules! belongs_to_many {
    ($owner:expr, $related:ty) => {
        $owner.belongs_to_many::<$related>(None, None, None, Some($crate::accessor_name!()))
    };
    ($owner:expr, $related:ty, $join_table:expr) => {
        $owner.belongs_to_many::<$related>(
            Some($join_table),
            None,
            None,
            Some($crate::accessor_name!()),
        )
    };
}
