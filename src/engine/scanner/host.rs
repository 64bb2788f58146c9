// src/engine/scanner/host.rs

//! Checks against the parsed hostname.

use tracing::debug;

use crate::engine::models::Finding;
use crate::engine::rules::{IPV4_LITERAL, PUNYCODE_PREFIX, SUSPICIOUS_DOMAINS};

/// Flags hosts containing a known shortener domain. Informational.
pub fn check_suspicious_domain(host: &str) -> Option<Finding> {
    let host = host.to_lowercase();
    let domain = SUSPICIOUS_DOMAINS.iter().find(|d| host.contains(*d))?;
    debug!(domain, "Shortener domain matched.");
    Some(Finding::SuspiciousDomain)
}

/// Flags hosts that were not plain ASCII as typed.
///
/// The parser converts internationalized labels to punycode, so an `xn--`
/// label is treated the same as a raw non-ASCII character.
pub fn check_non_ascii(host: &str) -> Option<Finding> {
    let raw_non_ascii = !host.is_ascii();
    let punycode = host
        .split('.')
        .any(|label| label.to_ascii_lowercase().starts_with(PUNYCODE_PREFIX));
    if !raw_non_ascii && !punycode {
        return None;
    }
    debug!(host, raw_non_ascii, punycode, "Non-ASCII hostname.");
    Some(Finding::NonAsciiHost)
}

/// Flags a bare dotted-quad IPv4 host. Informational.
pub fn check_ip_literal(host: &str) -> Option<Finding> {
    if !IPV4_LITERAL.is_match(host) {
        return None;
    }
    debug!(host, "Host is an IPv4 literal.");
    Some(Finding::IpLiteralHost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortener_is_substring_match() {
        assert_eq!(check_suspicious_domain("bit.ly"), Some(Finding::SuspiciousDomain));
        assert_eq!(check_suspicious_domain("WWW.TINYURL.COM"), Some(Finding::SuspiciousDomain));
        assert_eq!(check_suspicious_domain("example.org"), None);
    }

    #[test]
    fn punycode_and_unicode_hosts_are_flagged() {
        assert_eq!(check_non_ascii("xn--pple-43d.com"), Some(Finding::NonAsciiHost));
        assert_eq!(check_non_ascii("аpple.com"), Some(Finding::NonAsciiHost));
        assert_eq!(check_non_ascii("apple.com"), None);
    }

    #[test]
    fn only_dotted_quads_count_as_ip_literals() {
        assert_eq!(check_ip_literal("10.0.0.1"), Some(Finding::IpLiteralHost));
        assert_eq!(check_ip_literal("[::1]"), None);
        assert_eq!(check_ip_literal("example.com"), None);
    }
}
