// src/engine/scanner/content.rs

//! Checks that look at the raw URL text rather than its parsed parts.

use tracing::debug;

use crate::engine::models::Finding;
use crate::engine::rules::{MALICIOUS_KEYWORDS, PHISHING_PATTERNS};

/// Tests the full URL against the phishing signatures, stopping at the first match.
pub fn check_phishing(raw: &str) -> Option<Finding> {
    let matched = PHISHING_PATTERNS.iter().find(|re| re.is_match(raw))?;
    debug!(pattern = matched.as_str(), "Phishing signature matched.");
    Some(Finding::PhishingPattern)
}

/// Case-insensitive substring search for malware vocabulary, stopping at the first hit.
pub fn check_keywords(raw: &str) -> Option<Finding> {
    let lowered = raw.to_lowercase();
    let keyword = MALICIOUS_KEYWORDS.iter().find(|k| lowered.contains(*k))?;
    debug!(keyword, "Malicious keyword matched.");
    Some(Finding::MaliciousKeyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phishing_spans_url_parts() {
        // Signatures may straddle host and path.
        assert_eq!(
            check_phishing("https://secure-paypal.example/account/verify"),
            Some(Finding::PhishingPattern)
        );
        assert_eq!(check_phishing("https://example.com/docs"), None);
    }

    #[test]
    fn keywords_match_in_any_case() {
        assert_eq!(check_keywords("https://example.com/Free-KEYGEN"), Some(Finding::MaliciousKeyword));
        assert_eq!(check_keywords("https://example.com/antivirus"), Some(Finding::MaliciousKeyword));
        assert_eq!(check_keywords("https://example.com/recipes"), None);
    }
}
