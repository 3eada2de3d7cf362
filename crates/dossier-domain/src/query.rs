//! Search query and hit types

/// Category of a planned search query
///
/// Categories follow the planner's template sets and double as the
/// category-affinity tag on evidence entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryCategory {
    /// General-purpose company lookup
    General,

    /// Registration-number and incorporation targeted
    Registration,

    /// Regulatory filing targeted (10-K, 20-F, 8-K, DEF 14A)
    Filing,

    /// Executive and leadership targeted
    Executive,

    /// Financial metrics targeted
    Financial,

    /// Identifier targeted (LEI, EIN, CIK, ticker)
    Identifier,
}

impl QueryCategory {
    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCategory::General => "general",
            QueryCategory::Registration => "registration",
            QueryCategory::Filing => "filing",
            QueryCategory::Executive => "executive",
            QueryCategory::Financial => "financial",
            QueryCategory::Identifier => "identifier",
        }
    }

    /// Parse a category from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "general" => Some(QueryCategory::General),
            "registration" => Some(QueryCategory::Registration),
            "filing" => Some(QueryCategory::Filing),
            "executive" => Some(QueryCategory::Executive),
            "financial" => Some(QueryCategory::Financial),
            "identifier" => Some(QueryCategory::Identifier),
            _ => None,
        }
    }
}

impl std::str::FromStr for QueryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid query category: {}", s))
    }
}

/// One planned search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// The query string handed to the search backend
    pub text: String,

    /// Template category this query came from
    pub category: QueryCategory,
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(text: impl Into<String>, category: QueryCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Normalization key used for within-run deduplication
    ///
    /// Case-folded with whitespace collapsed, so cosmetic template
    /// differences don't produce duplicate searches.
    pub fn normalized_key(&self) -> String {
        self.text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// One raw search result attributed to its originating query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Source URL
    pub url: String,

    /// Result title
    pub title: String,

    /// Result snippet text
    pub snippet: String,

    /// Category of the query that produced this hit
    pub category: QueryCategory,

    /// Retrieval rank within that query's result list (0-based)
    pub rank: usize,
}

impl SearchHit {
    /// Title and snippet joined for pattern matching
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.snippet)
    }
}

/// A company name plus its derived search variants
///
/// Immutable once built for a research run. Variants cover the legal-suffix
/// stripped form and, when the input carries no suffix, the common
/// suffixed forms used by registries and filings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyQuery {
    name: String,
    variants: Vec<String>,
}

/// Legal suffixes recognized when deriving name variants
const LEGAL_SUFFIXES: &[&str] = &[
    "incorporated",
    "corporation",
    "inc.",
    "inc",
    "corp.",
    "corp",
    "llc",
    "l.l.c.",
    "ltd.",
    "ltd",
    "limited",
    "plc",
    "co.",
];

impl CompanyQuery {
    /// Build a company query from a raw name
    ///
    /// Returns `None` when the name is empty or whitespace-only.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut variants = Vec::new();
        let stripped = strip_legal_suffix(name);

        if let Some(base) = &stripped {
            if !base.eq_ignore_ascii_case(name) {
                variants.push(base.clone());
            }
        }

        // Bare names get the suffixed forms registries actually file under
        if stripped.is_none() {
            for suffix in ["Inc", "Corporation", "Corp", "LLC", "Ltd"] {
                variants.push(format!("{} {}", name, suffix));
            }
        }

        Some(Self {
            name: name.to_string(),
            variants,
        })
    }

    /// The name as given (trimmed)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derived name variants, input name excluded
    pub fn variants(&self) -> &[String] {
        &self.variants
    }
}

/// Strip a trailing legal suffix, returning the base name if one was found
fn strip_legal_suffix(name: &str) -> Option<String> {
    let lower = name.to_lowercase();
    for suffix in LEGAL_SUFFIXES {
        if let Some(prefix) = lower.strip_suffix(suffix) {
            // Suffix must be its own trailing word, optionally after a comma
            if !prefix.ends_with([' ', '\t', ',']) {
                continue;
            }
            let base = name[..prefix.len()].trim_end().trim_end_matches(',').trim_end();
            if !base.is_empty() {
                return Some(base.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for c in [
            QueryCategory::General,
            QueryCategory::Registration,
            QueryCategory::Filing,
            QueryCategory::Executive,
            QueryCategory::Financial,
            QueryCategory::Identifier,
        ] {
            assert_eq!(QueryCategory::parse(c.as_str()), Some(c));
        }
    }

    #[test]
    fn test_normalized_key_collapses_whitespace() {
        let a = SearchQuery::new("\"Apple\"  SEC   filing", QueryCategory::General);
        let b = SearchQuery::new("\"apple\" sec filing", QueryCategory::Filing);
        assert_eq!(a.normalized_key(), b.normalized_key());
    }

    #[test]
    fn test_company_query_rejects_blank() {
        assert!(CompanyQuery::new("").is_none());
        assert!(CompanyQuery::new("   ").is_none());
    }

    #[test]
    fn test_suffix_stripped_variant() {
        let q = CompanyQuery::new("Apple Inc.").unwrap();
        assert_eq!(q.name(), "Apple Inc.");
        assert!(q.variants().contains(&"Apple".to_string()));
    }

    #[test]
    fn test_comma_suffix_stripped() {
        let q = CompanyQuery::new("Walmart, Inc.").unwrap();
        assert!(q.variants().contains(&"Walmart".to_string()));
    }

    #[test]
    fn test_bare_name_gets_suffixed_variants() {
        let q = CompanyQuery::new("Tesla").unwrap();
        assert!(q.variants().contains(&"Tesla Inc".to_string()));
        assert!(q.variants().contains(&"Tesla Corporation".to_string()));
    }

    #[test]
    fn test_hit_text_concatenates() {
        let hit = SearchHit {
            url: "https://example.com".to_string(),
            title: "Title".to_string(),
            snippet: "Snippet".to_string(),
            category: QueryCategory::General,
            rank: 0,
        };
        assert_eq!(hit.text(), "Title Snippet");
    }
}
