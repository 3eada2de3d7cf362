//! Human-readable run summary

use dossier_domain::CompanyProfile;

/// Print a short summary of the assembled profile to stderr
///
/// The profile JSON itself goes to stdout (or a file); the summary is
/// operator feedback and stays out of the data stream.
pub fn print_summary(profile: &CompanyProfile) {
    eprintln!("Company:             {}", profile.company_name);
    eprintln!("Legal name:          {}", field(&profile.legal_name));
    eprintln!("Registration number: {}", field(&profile.registration_number));
    eprintln!("Jurisdiction:        {}", field(&profile.jurisdiction));
    eprintln!("Industry:            {}", field(&profile.industry));
    eprintln!("Headquarters:        {}", field(&profile.headquarters));
    eprintln!("Stock symbol:        {}", field(&profile.stock_symbol));

    if !profile.identifiers.is_empty() {
        eprintln!("Identifiers:");
        for (kind, value) in &profile.identifiers {
            eprintln!("  {}: {}", kind, value);
        }
    }

    eprintln!("Sources:             {}", profile.sources.len());
    eprintln!(
        "Confidence:          {}",
        field(&profile.confidence_level)
    );
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("not found")
}
