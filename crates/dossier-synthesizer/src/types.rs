//! Draft profile produced by the model

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// The model's draft of a company profile
///
/// Deserialization is deliberately lenient: every field defaults when
/// absent, unknown fields are ignored, and scalar fields accept numbers as
/// well as strings (models routinely emit `"employees": 164000`). Strict
/// schema enforcement would throw away otherwise usable drafts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileDraft {
    /// Official legal name
    #[serde(default, deserialize_with = "lenient_string")]
    pub legal_name: Option<String>,

    /// Registration / commission file number
    #[serde(default, deserialize_with = "lenient_string")]
    pub registration_number: Option<String>,

    /// Incorporation date
    #[serde(default, deserialize_with = "lenient_string")]
    pub incorporation_date: Option<String>,

    /// Country of incorporation
    #[serde(default, deserialize_with = "lenient_string")]
    pub incorporation_country: Option<String>,

    /// Incorporation jurisdiction
    #[serde(default, deserialize_with = "lenient_string")]
    pub jurisdiction: Option<String>,

    /// Entity form
    #[serde(default, deserialize_with = "lenient_string")]
    pub business_type: Option<String>,

    /// Primary industry sector
    #[serde(default, deserialize_with = "lenient_string")]
    pub industry: Option<String>,

    /// Headquarters address
    #[serde(default, deserialize_with = "lenient_string")]
    pub headquarters: Option<String>,

    /// Official website URL
    #[serde(default, deserialize_with = "lenient_string")]
    pub website: Option<String>,

    /// Business description
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,

    /// Main products and services
    #[serde(default, deserialize_with = "lenient_string")]
    pub products_services: Option<String>,

    /// Former names, abbreviations, trade names
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub alternate_names: Vec<String>,

    /// Identifier-kind name to value, as the model read them
    #[serde(default, deserialize_with = "lenient_string_map")]
    pub identifiers: BTreeMap<String, String>,

    /// "Name - Title" entries
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub key_executives: Vec<String>,

    /// Major subsidiaries
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub subsidiaries: Vec<String>,

    /// Parent company
    #[serde(default, deserialize_with = "lenient_string")]
    pub parent_company: Option<String>,

    /// Exchange ticker symbol
    #[serde(default, deserialize_with = "lenient_string")]
    pub stock_symbol: Option<String>,

    /// Market capitalization
    #[serde(default, deserialize_with = "lenient_string")]
    pub market_cap: Option<String>,

    /// Latest annual revenue
    #[serde(default, deserialize_with = "lenient_string")]
    pub annual_revenue: Option<String>,

    /// Employee count
    #[serde(default, deserialize_with = "lenient_string")]
    pub employees: Option<String>,

    /// Founding year
    #[serde(default, deserialize_with = "lenient_string")]
    pub founded_year: Option<String>,

    /// Regulatory filing URLs
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub regulatory_filings: Vec<String>,

    /// Model's overall confidence self-assessment (low/medium/high)
    #[serde(default, deserialize_with = "lenient_string")]
    pub confidence_level: Option<String>,
}

/// A scalar as `Some(text)`: strings pass through, numbers are rendered,
/// empty strings and everything else become `None`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_string(&value))
}

/// A list of scalars; non-scalar items are dropped, a lone scalar becomes a
/// one-element list
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(value_as_string).collect(),
        other => value_as_string(&other).into_iter().collect(),
    })
}

/// An object of scalar values; non-scalar values are dropped
fn lenient_string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(k, v)| value_as_string(v).map(|v| (k.clone(), v)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let draft: ProfileDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft, ProfileDraft::default());
    }

    #[test]
    fn test_numbers_coerce_to_strings() {
        let draft: ProfileDraft =
            serde_json::from_str(r#"{"employees": 164000, "founded_year": 1976}"#).unwrap();
        assert_eq!(draft.employees.as_deref(), Some("164000"));
        assert_eq!(draft.founded_year.as_deref(), Some("1976"));
    }

    #[test]
    fn test_empty_and_null_become_none() {
        let draft: ProfileDraft =
            serde_json::from_str(r#"{"legal_name": "", "website": null, "industry": "  "}"#)
                .unwrap();
        assert!(draft.legal_name.is_none());
        assert!(draft.website.is_none());
        assert!(draft.industry.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let draft: ProfileDraft =
            serde_json::from_str(r#"{"legal_name": "Apple Inc.", "mood": "optimistic"}"#).unwrap();
        assert_eq!(draft.legal_name.as_deref(), Some("Apple Inc."));
    }

    #[test]
    fn test_lone_scalar_becomes_single_element_list() {
        let draft: ProfileDraft =
            serde_json::from_str(r#"{"subsidiaries": "Apple Retail"}"#).unwrap();
        assert_eq!(draft.subsidiaries, vec!["Apple Retail"]);
    }

    #[test]
    fn test_non_scalar_list_items_dropped() {
        let draft: ProfileDraft = serde_json::from_str(
            r#"{"key_executives": ["Tim Cook - CEO", {"name": "odd"}, 42]}"#,
        )
        .unwrap();
        assert_eq!(draft.key_executives, vec!["Tim Cook - CEO", "42"]);
    }

    #[test]
    fn test_identifier_map_values_coerced() {
        let draft: ProfileDraft =
            serde_json::from_str(r#"{"identifiers": {"CIK": 320193, "EIN": "942404170"}}"#)
                .unwrap();
        assert_eq!(draft.identifiers.get("CIK").map(String::as_str), Some("320193"));
        assert_eq!(
            draft.identifiers.get("EIN").map(String::as_str),
            Some("942404170")
        );
    }
}
