//! Trust tier module - static per-domain source ranking

/// Trust tier of an evidence source
///
/// Tiers influence tie-breaking and prompt ordering only, never filtering:
/// - Registry: government and corporate-registry domains
/// - Financial: major financial-data and encyclopedia domains
/// - General: everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrustTier {
    /// Government / registry sources (SEC EDGAR, state registries, GLEIF)
    Registry,

    /// Major financial-data domains (Bloomberg, Reuters, exchanges)
    Financial,

    /// General web
    General,
}

/// Registry-tier domain suffixes
const REGISTRY_DOMAINS: &[&str] = &[
    "sec.gov",
    "opencorporates.com",
    "gleif.org",
];

/// Financial-tier domain suffixes
const FINANCIAL_DOMAINS: &[&str] = &[
    "bloomberg.com",
    "reuters.com",
    "yahoo.com",
    "nasdaq.com",
    "nyse.com",
    "wikipedia.org",
    "ft.com",
    "marketwatch.com",
];

impl TrustTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustTier::Registry => "registry",
            TrustTier::Financial => "financial",
            TrustTier::General => "general",
        }
    }

    /// Numeric rank, 1 is most trusted
    pub fn rank(&self) -> u8 {
        match self {
            TrustTier::Registry => 1,
            TrustTier::Financial => 2,
            TrustTier::General => 3,
        }
    }

    /// Classify a URL by its host against the static domain table
    ///
    /// Any `.gov` host counts as a registry source (state registries,
    /// EDGAR mirrors). Unknown hosts fall through to `General`.
    pub fn for_url(url: &str) -> Self {
        let host = host_of(url);

        if host.ends_with(".gov") || matches_any(&host, REGISTRY_DOMAINS) {
            TrustTier::Registry
        } else if matches_any(&host, FINANCIAL_DOMAINS) {
            TrustTier::Financial
        } else {
            TrustTier::General
        }
    }
}

fn matches_any(host: &str, domains: &[&str]) -> bool {
    domains.iter().any(|d| {
        host == *d || host.ends_with(&format!(".{}", d))
    })
}

/// Extract the lowercased host portion of a URL
fn host_of(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    rest.split(['/', '?', '#'])
        .next()
        .unwrap_or("")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_domains() {
        assert_eq!(
            TrustTier::for_url("https://www.sec.gov/cgi-bin/browse-edgar"),
            TrustTier::Registry
        );
        assert_eq!(
            TrustTier::for_url("https://opencorporates.com/companies/us_de/123"),
            TrustTier::Registry
        );
        assert_eq!(
            TrustTier::for_url("https://icis.corp.delaware.gov/ecorp/"),
            TrustTier::Registry
        );
    }

    #[test]
    fn test_financial_domains() {
        assert_eq!(
            TrustTier::for_url("https://www.bloomberg.com/profile/company/AAPL"),
            TrustTier::Financial
        );
        assert_eq!(
            TrustTier::for_url("https://en.wikipedia.org/wiki/Apple_Inc."),
            TrustTier::Financial
        );
        assert_eq!(
            TrustTier::for_url("https://finance.yahoo.com/quote/AAPL"),
            TrustTier::Financial
        );
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(
            TrustTier::for_url("https://example.com/about"),
            TrustTier::General
        );
    }

    #[test]
    fn test_no_substring_false_positives() {
        // "notsec.gov.example.com" must not match sec.gov
        assert_eq!(
            TrustTier::for_url("https://sec.gov.phishing.example.com/x"),
            TrustTier::General
        );
    }

    #[test]
    fn test_rank_ordering() {
        assert!(TrustTier::Registry.rank() < TrustTier::Financial.rank());
        assert!(TrustTier::Financial.rank() < TrustTier::General.rank());
    }
}
