//! Dossier Identifier Extractor
//!
//! Deterministic identifier extraction from aggregated evidence. One
//! strict-format matcher per identifier kind runs over every entry's
//! title+snippet text; matches are normalized, checksum-validated where a
//! checksum exists, and tagged with a confidence derived from label
//! proximity and pattern strictness.
//!
//! Extraction is a pure function and never fails: an evidence pool that
//! yields zero identifiers of some kind (registration numbers are sparse
//! in open search results) is a normal outcome, not an error.

#![warn(missing_docs)]

pub mod checksum;
pub mod patterns;

use dossier_domain::{Confidence, EvidencePool, ExtractedIdentifier, IdentifierKind};
use std::collections::HashMap;
use tracing::debug;

/// Extract identifiers of the requested kinds from the evidence pool
///
/// Multiple occurrences of one (kind, normalized-value) pair collapse to
/// the best occurrence: higher confidence wins, ties go to the more
/// trusted source tier, then to first-seen order. Output order is
/// first-seen order.
pub fn extract(pool: &EvidencePool, kinds: &[IdentifierKind]) -> Vec<ExtractedIdentifier> {
    let mut ordered: Vec<ExtractedIdentifier> = Vec::new();
    let mut index: HashMap<(IdentifierKind, String), usize> = HashMap::new();

    for entry in pool.iter() {
        let text = entry.hit.text();

        for &kind in kinds {
            for found in patterns::scan(kind, &text, &entry.hit.url) {
                let candidate = ExtractedIdentifier {
                    kind,
                    raw: found.raw,
                    normalized: found.normalized,
                    source_url: entry.hit.url.clone(),
                    confidence: found.confidence,
                    tier: entry.tier,
                };

                let key = (kind, candidate.normalized.clone());
                match index.get(&key) {
                    Some(&idx) => {
                        if candidate.beats(&ordered[idx]) {
                            ordered[idx] = candidate;
                        }
                    }
                    None => {
                        index.insert(key, ordered.len());
                        ordered.push(candidate);
                    }
                }
            }
        }
    }

    debug!(count = ordered.len(), "identifier extraction complete");
    ordered
}

/// The best identifier of a kind, if any was extracted
///
/// Selection mirrors the dedup rule: highest confidence, then most
/// trusted tier, then first-seen.
pub fn best_of_kind(
    identifiers: &[ExtractedIdentifier],
    kind: IdentifierKind,
) -> Option<&ExtractedIdentifier> {
    let mut best: Option<&ExtractedIdentifier> = None;
    for candidate in identifiers.iter().filter(|i| i.kind == kind) {
        match best {
            None => best = Some(candidate),
            Some(current) if candidate.beats(current) => best = Some(candidate),
            Some(_) => {}
        }
    }
    best
}

/// Whether any identifier of the kind reaches the given confidence
pub fn has_confidence_at_least(
    identifiers: &[ExtractedIdentifier],
    kind: IdentifierKind,
    floor: Confidence,
) -> bool {
    identifiers
        .iter()
        .any(|i| i.kind == kind && i.confidence >= floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_domain::{QueryCategory, SearchHit};

    fn pool_with(snippets: &[(&str, &str)]) -> EvidencePool {
        let mut pool = EvidencePool::new();
        for (url, snippet) in snippets {
            pool.insert(SearchHit {
                url: url.to_string(),
                title: String::new(),
                snippet: snippet.to_string(),
                category: QueryCategory::General,
                rank: 0,
            });
        }
        pool
    }

    #[test]
    fn test_extract_ein_with_label() {
        let pool = pool_with(&[(
            "https://example.com/about",
            "Apple Inc. EIN: 94-2404170 registered in California",
        )]);

        let ids = extract(&pool, &IdentifierKind::all());
        let ein = best_of_kind(&ids, IdentifierKind::Ein).unwrap();
        assert_eq!(ein.normalized, "942404170");
        assert_eq!(ein.raw, "94-2404170");
        assert_eq!(ein.confidence, Confidence::High);
    }

    #[test]
    fn test_extract_respects_kind_filter() {
        let pool = pool_with(&[(
            "https://example.com",
            "EIN: 94-2404170 and CIK: 0000320193",
        )]);

        let ids = extract(&pool, &[IdentifierKind::Cik]);
        assert!(ids.iter().all(|i| i.kind == IdentifierKind::Cik));
        assert!(!ids.is_empty());
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let pool = EvidencePool::new();
        assert!(extract(&pool, &IdentifierKind::all()).is_empty());
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let pool = pool_with(&[(
            "https://example.com",
            "A company that makes things, founded long ago.",
        )]);
        let ids = extract(&pool, &[IdentifierKind::DelawareFile]);
        assert!(ids.is_empty());
    }

    #[test]
    fn test_same_value_collapses_to_best_source() {
        let pool = pool_with(&[
            ("https://blog.example.com/post", "the EIN 94-2404170 appears"),
            ("https://www.sec.gov/filing", "EIN: 94-2404170"),
        ]);

        let ids = extract(&pool, &[IdentifierKind::Ein]);
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].source_url, "https://www.sec.gov/filing");
    }

    #[test]
    fn test_distinct_values_of_one_kind_coexist() {
        let pool = pool_with(&[
            ("https://a.com", "EIN: 94-2404170"),
            ("https://b.com", "EIN: 91-1144442"),
        ]);

        let ids = extract(&pool, &[IdentifierKind::Ein]);
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_best_of_kind_prefers_confidence_then_tier() {
        let pool = pool_with(&[
            ("https://blog.example.com", "numbers 001-34756 in passing"),
            ("https://www.sec.gov/x", "Commission File Number: 001-06991"),
        ]);

        let ids = extract(&pool, &[IdentifierKind::StateFile]);
        let best = best_of_kind(&ids, IdentifierKind::StateFile).unwrap();
        assert_eq!(best.normalized, "001-06991");
        assert_eq!(best.confidence, Confidence::High);
    }
}
