//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., normalized template
//! identifiers) so that once a value reaches the domain layer it can be
//! treated as trusted.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided identifier contained characters outside its allowed alphabet.
    #[error("`{0}` is not a valid identifier (lowercase letters, digits and `-` only)")]
    InvalidIdentifier(String),
}

/// Normalized identifier of a prompt template.
///
/// Slugs are trimmed, non-empty, and restricted to lowercase ASCII letters,
/// digits and hyphens, matching the identifiers stored on the data platform.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateSlug(String);

impl TemplateSlug {
    /// Validates and wraps a raw slug string.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(TypeConstraintError::InvalidIdentifier(trimmed));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the slug as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for TemplateSlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TemplateSlug {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TemplateSlug {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TemplateSlug {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TemplateSlug> for String {
    fn from(value: TemplateSlug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_valid_slugs() {
        let slug = TemplateSlug::new("  launch-brief-2 ").unwrap();
        assert_eq!(slug.as_str(), "launch-brief-2");
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(
            TemplateSlug::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            TemplateSlug::new("Launch Brief"),
            Err(TypeConstraintError::InvalidIdentifier(
                "Launch Brief".to_string()
            ))
        );
    }
}
