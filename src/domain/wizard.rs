//! Wizard vocabulary: the enumerated query values and the prompt template
//! entity served by the data platform.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::TemplateSlug;

/// A raw value did not match any variant of an enumerated query parameter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown value `{value}`, expected one of: {}", .allowed.join(", "))]
pub struct UnknownVariant {
    /// The rejected raw value.
    pub value: String,
    /// Every accepted wire value for the parameter.
    pub allowed: &'static [&'static str],
}

/// Declares an enumerated query value with its wire forms.
macro_rules! query_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $literal:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every accepted wire value, in declaration order.
            pub const ALLOWED: &'static [&'static str] = &[$($literal),+];

            /// The wire form of this variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok(Self::$variant),)+
                    other => Err(UnknownVariant {
                        value: other.to_string(),
                        allowed: Self::ALLOWED,
                    }),
                }
            }
        }
    };
}

query_enum! {
    /// Current step of the prompt wizard.
    WizardStep {
        Start => "start",
        Compose => "compose",
        Review => "review",
    }
}

query_enum! {
    /// Ordering applied to the template gallery.
    SortOrder {
        Asc => "asc",
        Desc => "desc",
    }
}

query_enum! {
    /// Writing tone carried across wizard steps.
    Tone {
        Neutral => "neutral",
        Formal => "formal",
        Playful => "playful",
    }
}

/// A prompt template as stored on the data platform.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptTemplate {
    pub slug: TemplateSlug,
    pub title: String,
    /// Short description shown in the gallery.
    pub summary: String,
    /// The prompt text with placeholder markers.
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_forms_round_trip() {
        for step in [WizardStep::Start, WizardStep::Compose, WizardStep::Review] {
            assert_eq!(step.as_str().parse::<WizardStep>().unwrap(), step);
        }
        for sort in [SortOrder::Asc, SortOrder::Desc] {
            assert_eq!(sort.as_str().parse::<SortOrder>().unwrap(), sort);
        }
    }

    #[test]
    fn unknown_variant_carries_the_allowed_set() {
        let err = "upwards".parse::<SortOrder>().unwrap_err();
        assert_eq!(err.value, "upwards");
        assert_eq!(err.allowed, &["asc", "desc"][..]);
        assert_eq!(
            err.to_string(),
            "unknown value `upwards`, expected one of: asc, desc"
        );
    }

    #[test]
    fn serde_uses_the_wire_form() {
        let json = serde_json::to_string(&Tone::Playful).unwrap();
        assert_eq!(json, "\"playful\"");
        let tone: Tone = serde_json::from_str("\"formal\"").unwrap();
        assert_eq!(tone, Tone::Formal);
    }
}
