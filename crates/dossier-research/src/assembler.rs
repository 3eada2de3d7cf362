//! Result assembly
//!
//! Merges the deterministic identifiers, the model's draft, and the
//! evidence pool into the final [`CompanyProfile`]. Deterministic values
//! always win on overlap; a missing draft degrades to an
//! identifier-plus-metadata profile instead of failing.

use chrono::Utc;
use dossier_domain::{
    CompanyProfile, Evidence, EvidencePool, ExtractedIdentifier, IdentifierKind, RunMetadata,
};
use dossier_extractor::best_of_kind;
use dossier_synthesizer::ProfileDraft;
use tracing::info;

/// Evidence URLs carried into the profile's source list
const MAX_EVIDENCE_SOURCES: usize = 10;

/// Assemble the final profile for a run
pub fn assemble(
    company_name: &str,
    draft: Option<ProfileDraft>,
    identifiers: &[ExtractedIdentifier],
    pool: &EvidencePool,
    metadata: &RunMetadata,
) -> CompanyProfile {
    let mut profile = CompanyProfile::new(company_name);
    let had_draft = draft.is_some();

    // 1. Draft fills the free-text fields
    if let Some(draft) = draft {
        apply_draft(&mut profile, draft);
    } else {
        // Without a draft the best honest self-assessment is low
        profile.confidence_level = Some("low".to_string());
    }

    // 2. Deterministic identifiers overwrite whatever the draft said
    let mut identifier_sources = Vec::new();
    for kind in IdentifierKind::all() {
        let Some(best) = best_of_kind(identifiers, kind) else {
            continue;
        };
        match kind {
            IdentifierKind::StateFile => {
                profile.registration_number = Some(best.normalized.clone());
            }
            IdentifierKind::Ticker => {
                profile.stock_symbol = Some(best.normalized.clone());
            }
            IdentifierKind::Lei
            | IdentifierKind::Ein
            | IdentifierKind::Cik
            | IdentifierKind::DelawareFile => {
                profile
                    .identifiers
                    .insert(kind.as_str().to_string(), best.normalized.clone());
            }
        }
        identifier_sources.push(best.source_url.clone());
    }

    // 3. Sources: identifier provenance first, then the top trusted
    //    evidence entries
    profile.sources = build_sources(identifier_sources, pool);

    // 4. Completion timestamp
    profile.last_updated = Some(Utc::now());

    info!(
        run_id = %metadata.run_id,
        identifiers = identifiers.len(),
        sources = profile.sources.len(),
        degraded = metadata.degraded || !had_draft,
        "profile assembled"
    );

    profile
}

/// Copy draft fields into the profile
///
/// Draft identifier keys are canonicalized through [`IdentifierKind::parse`]
/// so a model writing `"ein"` still lands on the key the deterministic
/// pass overwrites.
fn apply_draft(profile: &mut CompanyProfile, draft: ProfileDraft) {
    profile.legal_name = draft.legal_name;
    profile.registration_number = draft.registration_number;
    profile.incorporation_date = draft.incorporation_date;
    profile.incorporation_country = draft.incorporation_country;
    profile.jurisdiction = draft.jurisdiction;
    profile.business_type = draft.business_type;
    profile.industry = draft.industry;
    profile.headquarters = draft.headquarters;
    profile.website = draft.website;
    profile.description = draft.description;
    profile.products_services = draft.products_services;
    profile.alternate_names = draft.alternate_names;
    profile.key_executives = draft.key_executives;
    profile.subsidiaries = draft.subsidiaries;
    profile.parent_company = draft.parent_company;
    profile.stock_symbol = draft.stock_symbol;
    profile.market_cap = draft.market_cap;
    profile.annual_revenue = draft.annual_revenue;
    profile.employees = draft.employees;
    profile.founded_year = draft.founded_year;
    profile.regulatory_filings = draft.regulatory_filings;
    profile.confidence_level = draft.confidence_level;

    for (key, value) in draft.identifiers {
        let canonical = IdentifierKind::parse(&key)
            .map(|k| k.as_str().to_string())
            .unwrap_or(key);
        profile.identifiers.insert(canonical, value);
    }
}

fn build_sources(identifier_sources: Vec<String>, pool: &EvidencePool) -> Vec<String> {
    let mut sources = Vec::new();
    for url in identifier_sources {
        if !sources.contains(&url) {
            sources.push(url);
        }
    }

    let mut entries: Vec<&Evidence> = pool.iter().collect();
    entries.sort_by_key(|e| (e.tier.rank(), e.hit.rank));

    for entry in entries.into_iter().take(MAX_EVIDENCE_SOURCES) {
        if !sources.contains(&entry.hit.url) {
            sources.push(entry.hit.url.clone());
        }
    }
    sources
}
