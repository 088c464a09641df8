//! Company slug generation
//!
//! Mirrors the slug scheme used by the publishing endpoint so that tracking
//! URLs built locally resolve to the same report path the endpoint assigns.

/// Derive a URL slug from a company name.
///
/// Lowercases, drops characters outside `[a-z0-9_ -]`, collapses whitespace
/// and hyphen runs into single hyphens, and strips leading/trailing hyphens.
pub fn generate_slug(company_name: &str) -> String {
    let mut slug = String::with_capacity(company_name.len());
    let mut pending_hyphen = false;

    for ch in company_name.trim().to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = !slug.is_empty();
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(ch);
        }
        // Anything else (punctuation, symbols) is dropped entirely
    }

    slug
}
