//! Tracking URL construction
//!
//! Builds attribution URLs for cold-email campaigns. Construction is
//! deterministic: the same inputs always produce the same query-string
//! ordering and percent-encoding. No I/O.

use urlencoding::encode;

/// Campaign name used when the caller does not supply one
pub const DEFAULT_CAMPAIGN: &str = "strategic-report";

/// utm_source stamped on every tracking URL
pub const UTM_SOURCE: &str = "salesbot";

/// utm_medium stamped on every tracking URL
pub const UTM_MEDIUM: &str = "email";

/// Build a tracking URL for a published report.
///
/// `base` is the site root (no trailing slash needed); the result is
/// `{base}/reports/{slug}?utm_source=salesbot&utm_medium=email&utm_campaign={campaign}&contact_id={id}`
/// with all parameter values percent-encoded.
pub fn build_url(base: &str, company_slug: &str, contact_id: &str, campaign: &str) -> String {
    let base = base.trim_end_matches('/');
    format!(
        "{}/reports/{}?utm_source={}&utm_medium={}&utm_campaign={}&contact_id={}",
        base,
        encode(company_slug),
        UTM_SOURCE,
        UTM_MEDIUM,
        encode(campaign),
        encode(contact_id),
    )
}

/// [`build_url`] with the default campaign name.
pub fn build_campaign_url(base: &str, company_slug: &str, contact_id: &str) -> String {
    build_url(base, company_slug, contact_id, DEFAULT_CAMPAIGN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn parse_query(url: &str) -> HashMap<String, String> {
        let (_, query) = url.split_once('?').expect("url has a query string");
        query
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').expect("pair has a value");
                (
                    urlencoding::decode(k).unwrap().into_owned(),
                    urlencoding::decode(v).unwrap().into_owned(),
                )
            })
            .collect()
    }

    #[test]
    fn test_query_parameters_reparse() {
        let url = build_campaign_url("https://x", "acme", "c1");
        let params = parse_query(&url);

        assert_eq!(params["utm_source"], "salesbot");
        assert_eq!(params["utm_medium"], "email");
        assert_eq!(params["utm_campaign"], "strategic-report");
        assert_eq!(params["contact_id"], "c1");
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_deterministic_output() {
        let a = build_url("https://possibleminds.in", "acme", "c1", "q1-outreach");
        let b = build_url("https://possibleminds.in", "acme", "c1", "q1-outreach");
        assert_eq!(a, b);
        assert_eq!(
            a,
            "https://possibleminds.in/reports/acme?utm_source=salesbot&utm_medium=email&utm_campaign=q1-outreach&contact_id=c1"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let url = build_url("https://x", "acme co", "c 1/&=", "summer launch");
        let params = parse_query(&url);

        assert_eq!(params["contact_id"], "c 1/&=");
        assert_eq!(params["utm_campaign"], "summer launch");
        assert!(url.contains("/reports/acme%20co?"));
        assert!(!url[url.find('?').unwrap()..].contains(' '));
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let url = build_campaign_url("https://x/", "acme", "c1");
        assert!(url.starts_with("https://x/reports/acme?"));
    }
}
