// src/engine/scanner/transport.rs

use tracing::debug;
use url::Url;

use crate::engine::models::Finding;

/// Flags any scheme other than exactly `https`.
pub fn check_transport(url: &Url) -> Option<Finding> {
    if url.scheme() == "https" {
        return None;
    }
    debug!(scheme = url.scheme(), "Scheme is not https.");
    Some(Finding::InsecureTransport)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn https_passes() {
        assert_eq!(check_transport(&parse("https://example.com")), None);
        // The parser lower-cases schemes.
        assert_eq!(check_transport(&parse("HTTPS://example.com")), None);
    }

    #[test]
    fn other_schemes_are_flagged() {
        for input in ["http://example.com", "ftp://example.com/file", "mailto:someone@example.com"] {
            assert_eq!(check_transport(&parse(input)), Some(Finding::InsecureTransport), "{input}");
        }
    }
}
