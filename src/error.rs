//! Error types for relation resolution.
//!
//! All failures in this crate are synchronous and deterministic: a call that
//! fails once will fail identically on retry unless its inputs change, so no
//! retry machinery exists. Errors propagate to the caller of the relation
//! accessor and are expected to surface as query-construction failures.

use std::fmt;

/// Error produced while resolving a relation definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// A related or through entity type could not be constructed
    /// (e.g. a marker type standing in for an abstract entity).
    Instantiation {
        /// Type name of the entity that failed to construct
        entity: String,
        /// Why construction failed
        reason: String,
    },
    /// A relation name or key column name could not be derived from
    /// convention (empty accessor name, un-snake-caseable table basename).
    NamingInference {
        /// What could not be inferred
        detail: String,
    },
}

impl fmt::Display for RelationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationError::Instantiation { entity, reason } => {
                write!(f, "cannot instantiate entity `{entity}`: {reason}")
            }
            RelationError::NamingInference { detail } => {
                write!(f, "naming inference failed: {detail}")
            }
        }
    }
}

impl std::error::Error for RelationError {}

impl RelationError {
    /// Shorthand for a `NamingInference` error.
    pub(crate) fn naming(detail: impl Into<String>) -> Self {
        RelationError::NamingInference {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiation_display() {
        let err = RelationError::Instantiation {
            entity: "AbstractEntity".to_string(),
            reason: "marked abstract".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot instantiate entity `AbstractEntity`: marked abstract"
        );
    }

    #[test]
    fn test_naming_inference_display() {
        let err = RelationError::naming("relation name is empty");
        assert_eq!(
            err.to_string(),
            "naming inference failed: relation name is empty"
        );
    }
}
