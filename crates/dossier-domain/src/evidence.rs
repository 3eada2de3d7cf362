//! Evidence pool - deduplicated, ordered search results for one run

use crate::query::{QueryCategory, SearchHit};
use crate::tier::TrustTier;
use std::collections::HashMap;

/// One surviving evidence entry
///
/// The first hit for a normalized URL wins; later duplicates only extend
/// the category-affinity list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    /// The kept hit
    pub hit: SearchHit,

    /// Trust tier of the hit's source domain
    pub tier: TrustTier,

    /// Every query category that surfaced this URL, first-seen order
    pub categories: Vec<QueryCategory>,
}

/// The deduplicated, ordered evidence for a research run
///
/// Insertion order is significant: it is the planner's query order, used as
/// tie-break downstream and as the base ordering of LLM context.
#[derive(Debug, Clone, Default)]
pub struct EvidencePool {
    entries: Vec<Evidence>,
    by_url: HashMap<String, usize>,
}

impl EvidencePool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a hit, deduplicating by normalized URL
    ///
    /// Returns `true` if the hit created a new entry. A duplicate URL only
    /// records the new hit's category affinity on the kept entry.
    pub fn insert(&mut self, hit: SearchHit) -> bool {
        let key = normalize_url(&hit.url);

        if let Some(&idx) = self.by_url.get(&key) {
            let entry = &mut self.entries[idx];
            if !entry.categories.contains(&hit.category) {
                entry.categories.push(hit.category);
            }
            return false;
        }

        let tier = TrustTier::for_url(&hit.url);
        let categories = vec![hit.category];
        self.by_url.insert(key, self.entries.len());
        self.entries.push(Evidence {
            hit,
            tier,
            categories,
        });
        true
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Evidence] {
        &self.entries
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Evidence> {
        self.entries.iter()
    }
}

/// Normalize a URL to its deduplication key
///
/// Scheme, query string, and fragment are dropped; the host is lowercased;
/// a trailing slash on the path is stripped. The path keeps its case (many
/// registry URLs embed case-sensitive document names).
pub fn normalize_url(url: &str) -> String {
    let rest = url
        .trim()
        .strip_prefix("https://")
        .or_else(|| url.trim().strip_prefix("http://"))
        .unwrap_or_else(|| url.trim());

    let rest = rest.split(['?', '#']).next().unwrap_or("");

    let (host, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };

    let path = path.trim_end_matches('/');
    format!("{}{}", host.to_lowercase(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(url: &str, category: QueryCategory) -> SearchHit {
        SearchHit {
            url: url.to_string(),
            title: "t".to_string(),
            snippet: "s".to_string(),
            category,
            rank: 0,
        }
    }

    #[test]
    fn test_normalize_url_strips_scheme_and_query() {
        assert_eq!(
            normalize_url("https://WWW.Example.com/About?utm=x#frag"),
            "www.example.com/About"
        );
        assert_eq!(
            normalize_url("http://example.com/path/"),
            "example.com/path"
        );
    }

    #[test]
    fn test_insert_dedups_by_normalized_url() {
        let mut pool = EvidencePool::new();
        assert!(pool.insert(hit("https://example.com/a", QueryCategory::General)));
        assert!(!pool.insert(hit("http://EXAMPLE.com/a?ref=1", QueryCategory::General)));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_duplicate_upgrades_category_affinity() {
        let mut pool = EvidencePool::new();
        pool.insert(hit("https://example.com/a", QueryCategory::General));
        pool.insert(hit("https://example.com/a", QueryCategory::Registration));

        let entry = &pool.entries()[0];
        assert_eq!(
            entry.categories,
            vec![QueryCategory::General, QueryCategory::Registration]
        );
        // The kept hit is still the first occurrence
        assert_eq!(entry.hit.category, QueryCategory::General);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut pool = EvidencePool::new();
        pool.insert(hit("https://b.com/1", QueryCategory::General));
        pool.insert(hit("https://a.com/1", QueryCategory::General));
        pool.insert(hit("https://c.com/1", QueryCategory::General));

        let urls: Vec<_> = pool.iter().map(|e| e.hit.url.as_str()).collect();
        assert_eq!(urls, vec!["https://b.com/1", "https://a.com/1", "https://c.com/1"]);
    }

    #[test]
    fn test_tier_assigned_on_insert() {
        let mut pool = EvidencePool::new();
        pool.insert(hit("https://www.sec.gov/edgar", QueryCategory::Filing));
        assert_eq!(pool.entries()[0].tier, TrustTier::Registry);
    }
}
