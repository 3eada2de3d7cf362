//! Query planning
//!
//! Turns one company name into the full set of search queries for a run.
//! Templates are grouped by category; general templates run first, then
//! registration (the best identifier yield per query), then the rest.
//! Planning is a pure function: same name in, same queries out.

use crate::error::ResearchError;
use dossier_domain::{CompanyQuery, QueryCategory, SearchQuery};
use std::collections::HashSet;

/// Plan the search queries for a company name
///
/// The plan is deduplicated on the normalized query key and preserves
/// first-seen order. Fails only on an empty or whitespace-only name.
pub fn plan(company_name: &str) -> Result<Vec<SearchQuery>, ResearchError> {
    let company = CompanyQuery::new(company_name).ok_or_else(|| {
        ResearchError::InvalidInput("company name is empty".to_string())
    })?;
    let name = company.name();

    let mut queries = Vec::new();
    let mut seen = HashSet::new();

    let general = [
        format!("\"{}\" company corporation Wikipedia", name),
        format!("site:wikipedia.org \"{}\" company corporation", name),
        format!("\"{}\" business entity company profile", name),
        format!("\"{}\" corporation headquarters address", name),
        // Exclusion filters keep people and products out of the pool
        format!("\"{}\" company business -person -individual -biography", name),
        format!("\"{}\" corporation entity -product -service -location", name),
    ];

    let registration = [
        format!("\"{}\" corporation \"Commission File Number\" SEC", name),
        format!("site:sec.gov \"{}\" corporation \"Commission File Number\"", name),
        format!("\"{}\" company EDGAR \"File Number\" incorporation", name),
        format!("\"{}\" company SEC 10-K \"state of incorporation\"", name),
        format!("\"{}\" corporation annual report incorporation details", name),
        format!("site:opencorporates.com \"{}\" corporation", name),
    ];

    let filing = [
        format!("site:sec.gov \"{}\" corporation \"FORM 10-K\"", name),
        format!("\"{}\" \"FORM 20-F\" SEC filing", name),
        format!("site:sec.gov \"{}\" \"FORM 8-K\"", name),
        format!("\"{}\" \"DEF 14A\" SEC filing", name),
        format!("\"{}\" company SEC 10-K EDGAR", name),
    ];

    let identifier = [
        format!("\"{}\" LEI legal entity identifier", name),
        format!("\"{}\" EIN tax ID", name),
        format!("\"{}\" CIK SEC number", name),
        format!("\"{}\" stock ticker symbol exchange", name),
    ];

    let executive = [
        format!("\"{}\" company CEO CFO executives", name),
        format!("site:sec.gov \"{}\" corporation executive officers", name),
        format!("\"{}\" \"Proxy Statement\" executives", name),
        // LinkedIn carries the freshest leadership data
        format!("site:linkedin.com/company \"{}\"", name),
        format!("site:linkedin.com \"{}\" company CEO", name),
        format!("site:linkedin.com \"{}\" corporation leadership team", name),
    ];

    let financial = [
        format!("\"{}\" company annual revenue", name),
        format!("\"{}\" corporation market cap employees", name),
        format!("\"{}\" corporation subsidiaries companies", name),
    ];

    push_all(&mut queries, &mut seen, general, QueryCategory::General);
    push_all(&mut queries, &mut seen, registration, QueryCategory::Registration);
    push_all(&mut queries, &mut seen, filing, QueryCategory::Filing);
    push_all(&mut queries, &mut seen, identifier, QueryCategory::Identifier);
    push_all(&mut queries, &mut seen, executive, QueryCategory::Executive);
    push_all(&mut queries, &mut seen, financial, QueryCategory::Financial);

    // Registries file under suffixed/stripped forms of the input name
    for variant in company.variants() {
        push_all(
            &mut queries,
            &mut seen,
            [
                format!("\"{}\" company Wikipedia", variant),
                format!("\"{}\" company SEC filings", variant),
            ],
            QueryCategory::Registration,
        );
    }

    Ok(queries)
}

fn push_all(
    queries: &mut Vec<SearchQuery>,
    seen: &mut HashSet<String>,
    texts: impl IntoIterator<Item = String>,
    category: QueryCategory,
) {
    for text in texts {
        let query = SearchQuery::new(text, category);
        if seen.insert(query.normalized_key()) {
            queries.push(query);
        }
    }
}
