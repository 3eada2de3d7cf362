//! LLM prompt engineering for profile synthesis

use dossier_domain::{Evidence, EvidencePool, ExtractedIdentifier};

/// Default character budget for the evidence excerpt section
pub const DEFAULT_EXCERPT_BUDGET: usize = 24_000;

/// Builds prompts asking the LLM to synthesize a company profile
pub struct PromptBuilder<'a> {
    company_name: &'a str,
    pool: Option<&'a EvidencePool>,
    identifiers: &'a [ExtractedIdentifier],
    excerpt_budget: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder for a company
    pub fn new(company_name: &'a str) -> Self {
        Self {
            company_name,
            pool: None,
            identifiers: &[],
            excerpt_budget: DEFAULT_EXCERPT_BUDGET,
        }
    }

    /// Add the evidence pool to excerpt from
    pub fn with_evidence(mut self, pool: &'a EvidencePool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Add deterministically extracted identifiers
    pub fn with_identifiers(mut self, identifiers: &'a [ExtractedIdentifier]) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Cap the evidence excerpt at a character budget
    ///
    /// Trusted-tier entries survive trimming; the budget cuts from the
    /// general-web end of the ordering.
    pub fn with_excerpt_budget(mut self, budget: usize) -> Self {
        self.excerpt_budget = budget;
        self
    }

    /// Build the complete synthesis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and rules
        prompt.push_str(SYNTHESIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Research target
        prompt.push_str(&format!("Company under research: {}\n\n", self.company_name));

        // 3. Verified identifiers (if any)
        if !self.identifiers.is_empty() {
            prompt.push_str(
                "Verified identifiers extracted from registry and filing sources. \
                 Copy these into the profile exactly as written; they override \
                 anything the excerpts below may imply:\n",
            );
            for id in self.identifiers {
                prompt.push_str(&format!(
                    "- {}: {} (source: {})\n",
                    id.kind.as_str(),
                    id.normalized,
                    id.source_url
                ));
            }
            prompt.push('\n');
        }

        // 4. Evidence excerpts, most trusted sources first
        prompt.push_str("Search result excerpts:\n---\n");
        prompt.push_str(&self.excerpt());
        prompt.push_str("---\n\n");

        // 5. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }

    /// Render evidence entries into the excerpt section, within budget
    fn excerpt(&self) -> String {
        let Some(pool) = self.pool else {
            return String::new();
        };

        // Stable sort keeps planner order within a tier and rank
        let mut entries: Vec<&Evidence> = pool.iter().collect();
        entries.sort_by_key(|e| (e.tier.rank(), e.hit.rank));

        let mut excerpt = String::new();
        for entry in entries {
            let block = format!(
                "[{}] {}\n{}\n{}\n\n",
                entry.tier.as_str(),
                entry.hit.title,
                entry.hit.url,
                entry.hit.snippet
            );
            if excerpt.len() + block.len() > self.excerpt_budget {
                break;
            }
            excerpt.push_str(&block);
        }
        excerpt
    }
}

const SYNTHESIS_INSTRUCTIONS: &str = r#"You are compiling a corporate profile from web search results.
Read the excerpts below and fill in the profile fields for the named company.

Rules:
- Use ONLY information present in the excerpts; never invent or guess
- Leave a field null (or an empty list) when the excerpts do not support it
- Prefer excerpts marked [registry] over [financial], and [financial] over [general]
- Dates use YYYY-MM-DD where the source gives a full date, otherwise as written
- key_executives entries use the form "Name - Title"
- confidence_level is your overall assessment: "low", "medium", or "high""#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (a single JSON object only, no additional text):
{
  "legal_name": "string or null",
  "registration_number": "string or null",
  "incorporation_date": "string or null",
  "incorporation_country": "string or null",
  "jurisdiction": "string or null",
  "business_type": "string or null",
  "industry": "string or null",
  "headquarters": "string or null",
  "website": "string or null",
  "description": "string or null",
  "products_services": "string or null",
  "alternate_names": ["string"],
  "identifiers": {"KIND": "value"},
  "key_executives": ["Name - Title"],
  "subsidiaries": ["string"],
  "parent_company": "string or null",
  "stock_symbol": "string or null",
  "market_cap": "string or null",
  "annual_revenue": "string or null",
  "employees": "string or null",
  "founded_year": "string or null",
  "regulatory_filings": ["url"],
  "confidence_level": "low|medium|high"
}

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;
