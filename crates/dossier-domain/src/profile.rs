//! The final structured company record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The structured corporate profile handed back to the caller
///
/// Every populated field is traceable to an evidence entry or an extracted
/// identifier; unresolved fields stay `None`/empty rather than carrying
/// fabricated placeholders. `identifiers` is keyed by identifier-kind name
/// (`"LEI"`, `"EIN"`, ...) and kept sorted for stable serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// The name the research run was asked about
    pub company_name: String,

    /// Official legal name
    pub legal_name: Option<String>,

    /// Registration / commission file number
    pub registration_number: Option<String>,

    /// Incorporation date (YYYY-MM-DD when known)
    pub incorporation_date: Option<String>,

    /// Country of incorporation
    pub incorporation_country: Option<String>,

    /// Incorporation jurisdiction (state/province and country)
    pub jurisdiction: Option<String>,

    /// Entity form (Corporation, LLC, ...)
    pub business_type: Option<String>,

    /// Primary industry sector
    pub industry: Option<String>,

    /// Headquarters address
    pub headquarters: Option<String>,

    /// Official website URL
    pub website: Option<String>,

    /// Business description
    pub description: Option<String>,

    /// Main products and services
    pub products_services: Option<String>,

    /// Former names, abbreviations, trade names
    #[serde(default)]
    pub alternate_names: Vec<String>,

    /// Identifier-kind name to normalized value
    #[serde(default)]
    pub identifiers: BTreeMap<String, String>,

    /// "Name - Title" entries, ordered as discovered
    #[serde(default)]
    pub key_executives: Vec<String>,

    /// Major subsidiaries
    #[serde(default)]
    pub subsidiaries: Vec<String>,

    /// Parent company, if any
    pub parent_company: Option<String>,

    /// Exchange ticker symbol
    pub stock_symbol: Option<String>,

    /// Market capitalization, as reported
    pub market_cap: Option<String>,

    /// Latest annual revenue, as reported
    pub annual_revenue: Option<String>,

    /// Employee count, as reported
    pub employees: Option<String>,

    /// Founding year
    pub founded_year: Option<String>,

    /// Regulatory filing URLs, ordered
    #[serde(default)]
    pub regulatory_filings: Vec<String>,

    /// URLs backing the populated fields, ordered
    #[serde(default)]
    pub sources: Vec<String>,

    /// Overall confidence assessment from synthesis
    pub confidence_level: Option<String>,

    /// Completion time of the research run
    pub last_updated: Option<DateTime<Utc>>,
}

impl CompanyProfile {
    /// Create an empty profile for a company name
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_empty() {
        let profile = CompanyProfile::new("Apple");
        assert_eq!(profile.company_name, "Apple");
        assert!(profile.legal_name.is_none());
        assert!(profile.identifiers.is_empty());
        assert!(profile.sources.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut profile = CompanyProfile::new("Apple");
        profile.legal_name = Some("Apple Inc.".to_string());
        profile
            .identifiers
            .insert("EIN".to_string(), "942404170".to_string());

        let json = serde_json::to_string(&profile).unwrap();
        let back: CompanyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }

    #[test]
    fn test_identifier_map_is_sorted() {
        let mut profile = CompanyProfile::new("x");
        profile.identifiers.insert("LEI".to_string(), "a".to_string());
        profile.identifiers.insert("CIK".to_string(), "b".to_string());
        profile.identifiers.insert("EIN".to_string(), "c".to_string());

        let keys: Vec<_> = profile.identifiers.keys().cloned().collect();
        assert_eq!(keys, vec!["CIK", "EIN", "LEI"]);
    }
}
