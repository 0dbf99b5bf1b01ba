//! Validated search parameters for the wizard page.
//!
//! Every navigation to the wizard carries its state in the URL query string.
//! [`WizardSearchParams`] is the typed, defaulted form of that state: a pure
//! one-shot transform from raw key/value pairs. Unrecognized keys are ignored
//! so extra parameters (analytics tags and the like) never break navigation.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::types::TemplateSlug;
use crate::domain::wizard::{SortOrder, Tone, UnknownVariant, WizardStep};
use crate::forms::{ValidationError, ValidationErrorKind};

/// Parses an enumerated parameter, attributing failures to `field`.
fn parse_variant<T>(field: &'static str, raw: &str) -> Result<T, ValidationError>
where
    T: FromStr<Err = UnknownVariant>,
{
    raw.parse()
        .map_err(|err: UnknownVariant| ValidationError::new(field, err))
}

/// Normalized, validated query state of the wizard page.
///
/// Never partially populated: construction either succeeds with every field
/// coerced and defaulted, or fails with a [`ValidationError`].
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WizardSearchParams {
    /// Current wizard step.
    pub step: WizardStep,
    /// Ordering of the template gallery.
    pub sort: SortOrder,
    /// Template selected in an earlier step, if any.
    pub template: Option<TemplateSlug>,
    /// Writing tone selected in an earlier step, if any.
    pub tone: Option<Tone>,
}

impl Default for WizardSearchParams {
    fn default() -> Self {
        Self {
            step: WizardStep::Start,
            sort: SortOrder::Asc,
            template: None,
            tone: None,
        }
    }
}

impl WizardSearchParams {
    /// Validates raw key/value pairs as produced by query-string parsing.
    ///
    /// Blank values count as absent, later duplicates win, unknown keys are
    /// ignored. Absent fields take their declared defaults.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key {
                "step" => params.step = parse_variant("step", value)?,
                "sort" => params.sort = parse_variant("sort", value)?,
                "tone" => params.tone = Some(parse_variant("tone", value)?),
                "template" => {
                    params.template = Some(
                        TemplateSlug::new(value)
                            .map_err(|err| ValidationError::new("template", err))?,
                    );
                }
                _ => {}
            }
        }
        Ok(params)
    }

    /// Validates an already-parsed query map.
    pub fn from_query_map(query: &HashMap<String, String>) -> Result<Self, ValidationError> {
        Self::from_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Validates a raw query string (without the leading `?`).
    pub fn from_query_str(query: &str) -> Result<Self, ValidationError> {
        let pairs: Vec<(String, String)> = serde_html_form::from_str(query).map_err(|err| {
            ValidationError::new("query", ValidationErrorKind::Malformed(err.to_string()))
        })?;
        Self::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Serializes back to a query string.
    ///
    /// Feeding the result through [`Self::from_query_str`] yields an
    /// identical structure.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = vec![
            ("step", self.step.as_str().to_string()),
            ("sort", self.sort.as_str().to_string()),
        ];
        if let Some(template) = &self.template {
            pairs.push(("template", template.as_str().to_string()));
        }
        if let Some(tone) = self.tone {
            pairs.push(("tone", tone.as_str().to_string()));
        }
        serde_html_form::to_string(&pairs).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_valid_input_coerces_without_defaults() {
        let params = WizardSearchParams::from_query_str(
            "step=review&sort=desc&template=launch-brief&tone=formal",
        )
        .unwrap();
        assert_eq!(
            params,
            WizardSearchParams {
                step: WizardStep::Review,
                sort: SortOrder::Desc,
                template: Some(TemplateSlug::new("launch-brief").unwrap()),
                tone: Some(Tone::Formal),
            }
        );
    }

    #[test]
    fn empty_input_yields_all_defaults() {
        let params = WizardSearchParams::from_query_str("").unwrap();
        assert_eq!(params, WizardSearchParams::default());
        assert_eq!(params.step, WizardStep::Start);
        assert_eq!(params.sort, SortOrder::Asc);
    }

    #[test]
    fn out_of_enum_value_names_the_field() {
        let err = WizardSearchParams::from_query_str("sort=upwards").unwrap_err();
        assert_eq!(err.field, "sort");
        assert!(matches!(
            err.kind,
            ValidationErrorKind::UnknownVariant(ref unknown) if unknown.value == "upwards"
        ));
    }

    #[test]
    fn invalid_step_names_the_field() {
        let err = WizardSearchParams::from_query_str("step=finish").unwrap_err();
        assert_eq!(err.field, "step");
    }

    #[test]
    fn invalid_template_slug_names_the_field() {
        let err = WizardSearchParams::from_query_str("template=Launch%20Brief").unwrap_err();
        assert_eq!(err.field, "template");
        assert!(matches!(err.kind, ValidationErrorKind::Constraint(_)));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params =
            WizardSearchParams::from_query_str("step=compose&utm_source=newsletter&ref=abc")
                .unwrap();
        assert_eq!(params.step, WizardStep::Compose);
        assert_eq!(params.template, None);
    }

    #[test]
    fn blank_values_count_as_absent() {
        let params = WizardSearchParams::from_query_str("step=&template=++&sort=desc").unwrap();
        assert_eq!(params.step, WizardStep::Start);
        assert_eq!(params.template, None);
        assert_eq!(params.sort, SortOrder::Desc);
    }

    #[test]
    fn later_duplicates_win() {
        let params = WizardSearchParams::from_query_str("sort=asc&sort=desc").unwrap();
        assert_eq!(params.sort, SortOrder::Desc);
    }

    #[test]
    fn round_trip_is_idempotent() {
        let original = WizardSearchParams::from_query_str(
            "step=compose&sort=desc&template=cold-email&tone=playful",
        )
        .unwrap();
        let reparsed = WizardSearchParams::from_query_str(&original.to_query_string()).unwrap();
        assert_eq!(reparsed, original);

        let defaults = WizardSearchParams::default();
        let reparsed = WizardSearchParams::from_query_str(&defaults.to_query_string()).unwrap();
        assert_eq!(reparsed, defaults);
    }

    #[test]
    fn from_query_map_matches_from_pairs() {
        let mut map = HashMap::new();
        map.insert("step".to_string(), "review".to_string());
        map.insert("tone".to_string(), "neutral".to_string());
        let params = WizardSearchParams::from_query_map(&map).unwrap();
        assert_eq!(params.step, WizardStep::Review);
        assert_eq!(params.tone, Some(Tone::Neutral));
    }
}
