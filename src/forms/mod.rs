//! Query-string validation backing the wizard routes.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::domain::wizard::UnknownVariant;

pub mod wizard;

/// A query parameter failed validation.
///
/// Carries the offending field name and the violated constraint so the route
/// layer can surface both without re-parsing anything.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid query parameter `{field}`: {kind}")]
pub struct ValidationError {
    /// Name of the query parameter that failed.
    pub field: &'static str,
    /// The constraint that was violated.
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
/// Constraints a query parameter can violate.
pub enum ValidationErrorKind {
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    #[error(transparent)]
    Constraint(#[from] TypeConstraintError),

    /// The query string itself could not be decoded; attributed to the
    /// pseudo-field `query`.
    #[error("malformed query string: {0}")]
    Malformed(String),
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, kind: impl Into<ValidationErrorKind>) -> Self {
        Self {
            field,
            kind: kind.into(),
        }
    }
}
